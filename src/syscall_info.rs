use crate::arch::{Arch, Resolution};
use crate::style::StyleConfig;
use serde::ser::SerializeMap;
use serde::Serialize;
use std::io::Write;

/// One resolved syscall number, ready to be printed.
#[derive(Debug)]
pub struct SyscallInfo {
    pub typ: &'static str,
    pub arch: Arch,
    pub number: i64,
    pub resolution: Resolution<'static>,
}

impl SyscallInfo {
    pub fn new(arch: Arch, number: i64) -> Self {
        Self {
            typ: "SYSCALL",
            arch,
            number,
            resolution: arch.table().resolve(number),
        }
    }

    pub fn write_syscall(
        &self,
        style: &StyleConfig,
        show_number: bool,
        output: &mut dyn Write,
    ) -> anyhow::Result<()> {
        if style.use_colors {
            write!(output, "[{}] ", style.arch.apply_to(self.arch.name()))?;
        } else {
            write!(output, "[{}] ", self.arch)?;
        }
        // Misses always carry the raw number, it is all the caller has left.
        if show_number || !self.resolution.is_found() {
            if style.use_colors {
                write!(output, "{} ", style.number.apply_to(format!("{:>3}", self.number)))?;
            } else {
                write!(output, "{:>3} ", self.number)?;
            }
        }
        let text = match self.resolution {
            Resolution::Found(name) => name.to_string(),
            Resolution::Unassigned => "? (unassigned)".to_string(),
            Resolution::OutOfRange => "? (out of range)".to_string(),
        };
        if style.use_colors {
            let styled = style.from_resolution(self.resolution).apply_to(text);
            write!(output, "{styled}")
        } else {
            write!(output, "{text}")
        }?;
        Ok(writeln!(output)?)
    }
}

impl Serialize for SyscallInfo {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(5))?;
        map.serialize_entry("type", &self.typ)?;
        map.serialize_entry("arch", &self.arch)?;
        map.serialize_entry("num", &self.number)?;
        map.serialize_entry("syscall", &self.resolution.name())?;
        map.serialize_entry("status", self.resolution.status())?;
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> StyleConfig {
        StyleConfig {
            use_colors: false,
            ..StyleConfig::default()
        }
    }

    fn render(info: &SyscallInfo, show_number: bool) -> String {
        let mut out = Vec::new();
        info.write_syscall(&plain(), show_number, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_write_found() {
        let info = SyscallInfo::new(Arch::Aarch64, 63);
        assert_eq!(render(&info, true), "[aarch64]  63 sys_read\n");
        assert_eq!(render(&info, false), "[aarch64] sys_read\n");
    }

    #[test]
    fn test_write_missing_keeps_number() {
        let info = SyscallInfo::new(Arch::Aarch64, 250);
        assert_eq!(render(&info, false), "[aarch64] 250 ? (unassigned)\n");
        let info = SyscallInfo::new(Arch::Aarch64, -1);
        assert_eq!(render(&info, true), "[aarch64]  -1 ? (out of range)\n");
    }

    #[test]
    fn test_json() {
        let info = SyscallInfo::new(Arch::Aarch64, 64);
        assert_eq!(
            serde_json::to_string(&info).unwrap(),
            r#"{"type":"SYSCALL","arch":"aarch64","num":64,"syscall":"sys_write","status":"found"}"#
        );
        let info = SyscallInfo::new(Arch::Aarch64, 294);
        assert_eq!(
            serde_json::to_string(&info).unwrap(),
            r#"{"type":"SYSCALL","arch":"aarch64","num":294,"syscall":null,"status":"out_of_range"}"#
        );
    }
}
