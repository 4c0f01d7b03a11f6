//! sysname resolves raw syscall numbers, as recorded in kernel and userspace
//! traces, into their symbolic names.
//!
//! ## Usage
//!
//! Every supported [`Arch`] owns one immutable [`SyscallTable`], built on first
//! use and shared by the whole process. Look numbers up with
//! [`SyscallTable::lookup`]; a miss is a normal answer, never an error, so
//! traces from other kernels can't break the caller.
//!
//! ```rust
//! use sysname_cli::arch::{table_for, Arch, Resolution};
//!
//! let table = table_for(Arch::Aarch64);
//! assert_eq!(table.lookup(63), Some("sys_read"));
//! assert_eq!(table.lookup(250), None);
//! assert_eq!(table.resolve(-1), Resolution::OutOfRange);
//! ```
//!
//! The [`Resolver`] drives the `sysname` command line tool and can be reused to
//! annotate a stream of numbers:
//!
//! ```rust
//! use sysname_cli::{arch::Arch, args::Args, style::StyleConfig, Resolver};
//!
//! let style = StyleConfig {
//!     use_colors: false,
//!     ..StyleConfig::default()
//! };
//! let mut resolver = Resolver::new(Arch::Aarch64, Args::default(), Vec::new(), style).unwrap();
//! resolver.run(&b"64\n"[..]).unwrap();
//! assert_eq!(resolver.into_output(), b"[aarch64]  64 sys_write\n");
//! ```
//!
//! [`Arch`]: crate::arch::Arch
//! [`SyscallTable`]: crate::arch::SyscallTable
//! [`SyscallTable::lookup`]: crate::arch::SyscallTable::lookup
//! [`Resolver`]: crate::Resolver

#[deny(clippy::all, clippy::pedantic, clippy::format_push_string)]
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub mod arch;
pub mod args;
pub mod style;
pub mod syscall_info;

use anyhow::{bail, Context, Result};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::CellAlignment::Right;
use comfy_table::{Cell, ContentArrangement, Row, Table};
use std::collections::BTreeMap;
use std::io::{BufRead, Write};
use style::StyleConfig;

use crate::arch::{Arch, Resolution, SyscallTable};
use crate::args::{parse_number, Args, Filter, Query};
use crate::syscall_info::SyscallInfo;

pub struct Resolver<W: Write> {
    args: Args,
    table: &'static SyscallTable,
    filter: Filter,
    hits: BTreeMap<usize, u64>,
    unassigned: u64,
    out_of_range: u64,
    style_config: StyleConfig,
    output: W,
}

impl<W: Write> Resolver<W> {
    pub fn new(arch: Arch, args: Args, output: W, style_config: StyleConfig) -> Result<Self> {
        let table = arch.table();
        Ok(Self {
            filter: args.create_filter(table)?,
            table,
            args,
            hits: BTreeMap::new(),
            unassigned: 0,
            out_of_range: 0,
            style_config,
            output,
        })
    }

    pub fn set_output(&mut self, output: W) {
        self.output = output;
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Resolves the positional queries, the whole table with `--list`, or
    /// otherwise one number per line of `input`.
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<()> {
        if self.args.list {
            self.list()?;
        } else if self.args.queries.is_empty() {
            self.resolve_lines(input)?;
        } else {
            self.resolve_queries()?;
        }

        if !self.args.json && (self.args.summary_only || self.args.summary) {
            if !self.args.summary_only {
                // Make a gap between the last syscall and the summary
                writeln!(&mut self.output)?;
            }
            self.report_summary()?;
        }

        Ok(())
    }

    fn list(&mut self) -> Result<()> {
        let table = self.table;
        let numbers: Vec<usize> = if self.args.unassigned {
            table.slots().map(|(number, _)| number).collect()
        } else {
            table.iter().map(|(number, _)| number).collect()
        };
        for number in numbers {
            self.resolve_number(number as i64)?;
        }
        Ok(())
    }

    fn resolve_queries(&mut self) -> Result<()> {
        let queries = std::mem::take(&mut self.args.queries);
        for query in &queries {
            match Query::parse(query) {
                Query::Number(number) => self.resolve_number(number)?,
                Query::Name(name) => {
                    // The optional '?' prefix will ignore unknown syscalls
                    let (name, ignore_unknown) = match name.strip_prefix('?') {
                        Some(name) => (name, true),
                        None => (name, false),
                    };
                    match self.table.number_of(name) {
                        Some(number) => self.resolve_number(number as i64)?,
                        None if ignore_unknown => {
                            log::debug!("ignoring unknown syscall '{name}'");
                        }
                        None => {
                            bail!("System call '{name}' is not valid on {}!", self.table.arch())
                        }
                    }
                }
            }
        }
        self.args.queries = queries;
        Ok(())
    }

    fn resolve_lines<R: BufRead>(&mut self, input: R) -> Result<()> {
        for (idx, line) in input.split(b'\n').enumerate() {
            let line = line.context("Unable to read syscall numbers from input")?;
            // Corrupt trace input is skipped like any other unparsable line
            let Ok(line) = std::str::from_utf8(&line) else {
                log::warn!("skipping line {}: not valid UTF-8", idx + 1);
                continue;
            };
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match parse_number(line) {
                Some(number) => self.resolve_number(number)?,
                None => log::warn!("skipping line {}: '{line}' is not a syscall number", idx + 1),
            }
        }
        Ok(())
    }

    fn resolve_number(&mut self, number: i64) -> Result<()> {
        let info = SyscallInfo::new(self.table.arch(), number);
        if !self.filter.matches(number, info.resolution) {
            return Ok(());
        }

        match info.resolution {
            Resolution::Found(_) => {
                if let Ok(number) = usize::try_from(number) {
                    *self.hits.entry(number).or_default() += 1;
                }
            }
            Resolution::Unassigned => self.unassigned += 1,
            Resolution::OutOfRange => self.out_of_range += 1,
        }

        if !self.args.summary_only {
            self.write_syscall_info(&info)?;
        }
        Ok(())
    }

    fn write_syscall_info(&mut self, info: &SyscallInfo) -> Result<()> {
        if self.args.json {
            let json = serde_json::to_string(&info)?;
            Ok(writeln!(&mut self.output, "{json}")?)
        } else {
            info.write_syscall(&self.style_config, !self.args.no_number, &mut self.output)
        }
    }

    pub fn report_summary(&mut self) -> Result<()> {
        let headers = vec!["% calls", "calls", "number", "syscall"];
        let mut table = Table::new();
        table
            .load_preset(UTF8_BORDERS_ONLY)
            .apply_modifier(UTF8_ROUND_CORNERS)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(&headers);

        for i in 0..headers.len() {
            if let Some(column) = table.column_mut(i) {
                column.set_cell_alignment(Right);
            }
        }

        let calls: u64 = self.hits.values().sum::<u64>() + self.unassigned + self.out_of_range;
        let percent = |count: u64| {
            if calls == 0 {
                0f32
            } else {
                count as f32 / calls as f32 * 100f32
            }
        };

        for (&number, &count) in &self.hits {
            let name = self.table.lookup(number as i64).unwrap_or_default();
            table.add_row(vec![
                Cell::new(format!("{:.1}%", percent(count))),
                Cell::new(count),
                Cell::new(number),
                Cell::new(name),
            ]);
        }
        let misses = [
            ("(unassigned)", self.unassigned),
            ("(out of range)", self.out_of_range),
        ];
        for (label, count) in misses {
            if count > 0 {
                table.add_row(vec![
                    Cell::new(format!("{:.1}%", percent(count))),
                    Cell::new(count),
                    Cell::new("-"),
                    Cell::new(label),
                ]);
            }
        }

        // Create the totals row, but don't add it to the table yet
        let totals: Row = vec![
            Cell::new(format!("{:.1}%", percent(calls))),
            Cell::new(calls),
            Cell::new(""),
            Cell::new("total"),
        ]
        .into();

        // comfy-table has no footer, so draw a divider as wide as the widest
        // cell of each column, the totals row included
        let divider_row: Vec<String> = table
            .column_max_content_widths()
            .iter()
            .copied()
            .enumerate()
            .map(|(idx, val)| {
                let totals_width = totals
                    .cell_iter()
                    .nth(idx)
                    .map_or(0, |cell| cell.content().len());
                (val as usize).max(totals_width)
            })
            .map(|v| str::repeat("-", v))
            .collect();
        table.add_row(divider_row);
        table.add_row(totals);

        writeln!(&mut self.output, "{table}")?;
        writeln!(
            &mut self.output,
            "{}: {} slots, {} assigned, {} unassigned",
            self.table.arch(),
            self.table.len(),
            self.table.assigned(),
            self.table.len() - self.table.assigned(),
        )?;

        Ok(())
    }
}
