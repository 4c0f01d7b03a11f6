use crate::arch::{Arch, Resolution, SyscallTable};
use anyhow::bail;
use clap::Parser;
use regex::Regex;
use std::collections::BTreeSet;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(name = "sysname", about, version)]
pub struct Args {
    /// Syscall numbers or names to resolve. Numbers are read from stdin when none are given.
    #[arg(allow_negative_numbers = true)]
    pub queries: Vec<String>,
    /// Architecture whose syscall numbering to use (defaults to the host's)
    #[arg(short, long, env = "SYSNAME_ARCH", value_enum, ignore_case = true)]
    pub arch: Option<Arch>,
    /// List every assigned syscall of the table
    #[arg(short, long)]
    pub list: bool,
    /// Include unassigned slots when listing
    #[arg(short, long, requires = "list")]
    pub unassigned: bool,
    /// Hide syscall numbers for resolved names
    #[arg(short = 'n', long)]
    pub no_number: bool,
    /// Name of the file to print output to
    #[arg(short = 'o', long)]
    pub file: Option<PathBuf>,
    /// Report a summary instead of the regular output
    #[arg(short = 'c', long, conflicts_with = "json")]
    pub summary_only: bool,
    /// Report a summary in addition to the regular output
    #[arg(short = 'C', long, conflicts_with_all = ["summary_only", "json"])]
    pub summary: bool,
    /// Print only numbers that resolved to a name
    #[arg(short = 'z', long)]
    pub found_only: bool,
    /// Print only numbers that did not resolve
    #[arg(short = 'Z', long, conflicts_with = "found_only")]
    pub missing_only: bool,
    /// A qualifying expression which selects the syscalls to print, e.g. trace=read,/^sys_io_
    #[arg(short, long)]
    pub expr: Vec<String>,
    /// Display output in JSON format
    #[arg(short, long)]
    pub json: bool,
}

/// A single positional query.
#[derive(Debug, PartialEq, Eq)]
pub enum Query<'a> {
    Number(i64),
    Name(&'a str),
}

impl<'a> Query<'a> {
    pub fn parse(token: &'a str) -> Self {
        parse_number(token).map_or(Self::Name(token), Self::Number)
    }
}

/// Decimal or `0x` hexadecimal, optionally negative. A single leading `-` is
/// the only sign accepted.
pub fn parse_number(token: &str) -> Option<i64> {
    let token = token.trim();
    let (sign, unsigned) = match token.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", token),
    };
    if !unsigned.starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }
    match unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
    {
        Some(hex) if hex.starts_with(|c: char| c.is_ascii_hexdigit()) => {
            i64::from_str_radix(&format!("{sign}{hex}"), 16).ok()
        }
        Some(_) => None,
        None => token.parse().ok(),
    }
}

impl Args {
    pub fn create_filter(&self, table: &SyscallTable) -> anyhow::Result<Filter> {
        let mut expr_negation = false;
        let mut system_calls = BTreeSet::new();

        for token in &self.expr {
            let mut tokens = token.splitn(2, '=');
            match (tokens.next(), tokens.next()) {
                (Some(token_key), Some(mut token_value))
                    if token_key == "t" || token_key == "trace" =>
                {
                    if let Some(v) = token_value.strip_prefix('!') {
                        token_value = v;
                        expr_negation = true;
                    }

                    for part in token_value.split(',') {
                        if let Some(part) = part.strip_prefix('/') {
                            // The '/' prefix followed by a regex pattern to match syscall names
                            let Ok(pattern) = Regex::new(part) else {
                                bail!("Invalid regex pattern: {part}");
                            };
                            system_calls.extend(
                                table
                                    .iter()
                                    .filter(|(_, name)| pattern.is_match(name))
                                    .map(|(number, _)| number),
                            );
                        } else {
                            // The optional '?' prefix will ignore unknown syscalls
                            let (part, ignore_unknown) = match part.strip_prefix('?') {
                                Some(v) => (v, true),
                                None => (part, false),
                            };
                            let number = match Query::parse(part) {
                                Query::Number(number) => usize::try_from(number)
                                    .ok()
                                    .filter(|_| table.lookup(number).is_some()),
                                Query::Name(name) => table.number_of(name),
                            };
                            match number {
                                Some(number) => {
                                    system_calls.insert(number);
                                }
                                None if ignore_unknown => {
                                    log::debug!("ignoring unknown syscall '{part}'");
                                }
                                None => {
                                    bail!("System call '{part}' is not valid on {}!", table.arch())
                                }
                            }
                        }
                    }
                }
                _ => bail!("expr {token} is not supported. Please have a look at the syntax."),
            }
        }
        Ok(Filter {
            resolution_filter: if self.found_only {
                FilterResolution::Found
            } else if self.missing_only {
                FilterResolution::Missing
            } else {
                FilterResolution::All
            },
            sysno_filter: if system_calls.is_empty() {
                FilterSysno::All
            } else if expr_negation {
                FilterSysno::Except(system_calls)
            } else {
                FilterSysno::Only(system_calls)
            },
        })
    }
}

#[derive(Debug)]
enum FilterResolution {
    All,
    Found,
    Missing,
}

#[derive(Debug)]
enum FilterSysno {
    All,
    Only(BTreeSet<usize>),
    Except(BTreeSet<usize>),
}

#[derive(Debug)]
pub struct Filter {
    resolution_filter: FilterResolution,
    sysno_filter: FilterSysno,
}

impl Filter {
    pub fn matches(&self, number: i64, resolution: Resolution<'_>) -> bool {
        (
            // Should this outcome be printed?
            match self.resolution_filter {
                FilterResolution::All => true,
                FilterResolution::Found => resolution.is_found(),
                FilterResolution::Missing => !resolution.is_found(),
            }
        ) && (
            // Should this number be printed?
            match &self.sysno_filter {
                FilterSysno::All => true,
                FilterSysno::Only(set) => {
                    usize::try_from(number).is_ok_and(|number| set.contains(&number))
                }
                FilterSysno::Except(set) => {
                    !usize::try_from(number).is_ok_and(|number| set.contains(&number))
                }
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arch::table_for;

    fn aarch64() -> &'static SyscallTable {
        table_for(Arch::Aarch64)
    }

    fn args_with_expr(expr: &str) -> Args {
        Args {
            expr: vec![expr.to_string()],
            ..Args::default()
        }
    }

    #[test]
    fn test_args_simple() {
        let args = Args::parse_from(["sysname", "-a", "arm64", "63", "-1", "0x40"]);
        assert_eq!(args.arch, Some(Arch::Aarch64));
        assert_eq!(args.queries, vec!["63", "-1", "0x40"]);
    }

    #[test]
    fn test_args_conflicts() {
        assert!(Args::try_parse_from(["sysname", "-z", "-Z"]).is_err());
        assert!(Args::try_parse_from(["sysname", "--unassigned"]).is_err());
        assert!(Args::try_parse_from(["sysname", "-a", "sparc"]).is_err());
        assert!(Args::try_parse_from(["sysname", "-c", "-j"]).is_err());
        assert!(Args::try_parse_from(["sysname", "-C", "--json"]).is_err());
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("63"), Some(63));
        assert_eq!(parse_number(" 0x3f "), Some(63));
        assert_eq!(parse_number("-1"), Some(-1));
        assert_eq!(parse_number("read"), None);
        assert_eq!(parse_number("--5"), None);
        assert_eq!(parse_number("+5"), None);
        assert_eq!(parse_number("+-1"), None);
        assert_eq!(parse_number("0x-3f"), None);
        assert_eq!(parse_number("-0x-3f"), None);
        assert_eq!(parse_number("0x"), None);
        assert_eq!(parse_number("-"), None);
        assert_eq!(parse_number("-0x3f"), Some(-63));
        assert_eq!(parse_number("-9223372036854775808"), Some(i64::MIN));
        assert_eq!(parse_number("-0x8000000000000000"), Some(i64::MIN));
        assert_eq!(parse_number("9223372036854775808"), None);
        assert_eq!(Query::parse("sys_read"), Query::Name("sys_read"));
    }

    #[test]
    fn test_filter_names_and_regex() {
        let filter = args_with_expr("trace=read,/^sys_io_").create_filter(aarch64()).unwrap();
        assert!(filter.matches(63, Resolution::Found("sys_read")));
        assert!(filter.matches(0, Resolution::Found("sys_io_setup")));
        assert!(!filter.matches(64, Resolution::Found("sys_write")));
        assert!(!filter.matches(-1, Resolution::OutOfRange));
    }

    #[test]
    fn test_filter_negation() {
        let filter = args_with_expr("trace=!sys_write").create_filter(aarch64()).unwrap();
        assert!(filter.matches(63, Resolution::Found("sys_read")));
        assert!(!filter.matches(64, Resolution::Found("sys_write")));
        assert!(filter.matches(-1, Resolution::OutOfRange));
    }

    #[test]
    fn test_filter_unknown() {
        assert!(args_with_expr("trace=open").create_filter(aarch64()).is_err());
        assert!(args_with_expr("trace=?open").create_filter(aarch64()).is_ok());
        assert!(args_with_expr("trace=250").create_filter(aarch64()).is_err());
        assert!(args_with_expr("trace=/(").create_filter(aarch64()).is_err());
        assert!(args_with_expr("signal=all").create_filter(aarch64()).is_err());
    }

    #[test]
    fn test_filter_resolution() {
        let args = Args {
            missing_only: true,
            ..Args::default()
        };
        let filter = args.create_filter(aarch64()).unwrap();
        assert!(filter.matches(250, Resolution::Unassigned));
        assert!(!filter.matches(63, Resolution::Found("sys_read")));
    }
}
