use console::Style;

use crate::arch::Resolution;

#[derive(Clone, Debug)]
pub struct StyleConfig {
    pub arch: Style,
    pub number: Style,
    pub syscall: Style,
    pub unassigned: Style,
    pub out_of_range: Style,
    pub use_colors: bool,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            arch: Style::new().bold().blue(),
            number: Style::new().yellow(),
            syscall: Style::new().green().bold(),
            unassigned: Style::new().yellow().bold(),
            out_of_range: Style::new().red().bold(),
            use_colors: true,
        }
    }
}

impl StyleConfig {
    pub fn from_resolution(&self, resolution: Resolution<'_>) -> Style {
        match resolution {
            Resolution::Found(_) => self.syscall.clone(),
            Resolution::Unassigned => self.unassigned.clone(),
            Resolution::OutOfRange => self.out_of_range.clone(),
        }
    }
}
