use anyhow::{anyhow, Context, Result};
use clap::ValueEnum;
use nix::sys::utsname::uname;
use serde::Serialize;
use std::borrow::Cow;
use std::fmt::{self, Display};
use std::str::FromStr;
use std::sync::OnceLock;

pub mod aarch64;
pub mod x86_64;

/// CPU architecture whose syscall numbering a trace was recorded with.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Arch {
    #[value(alias = "arm64")]
    Aarch64,
    #[value(name = "x86_64", alias = "amd64")]
    X86_64,
}

impl Arch {
    /// Maps the `machine` field of `uname(2)`, as recorded in trace system info.
    #[must_use]
    pub fn from_machine(machine: &str) -> Option<Self> {
        match machine {
            "aarch64" | "aarch64_be" | "arm64" => Some(Self::Aarch64),
            "x86_64" | "amd64" => Some(Self::X86_64),
            _ => None,
        }
    }

    pub fn host() -> Result<Self> {
        let uts = uname().context("uname() failed")?;
        let machine = uts.machine().to_string_lossy();
        Self::from_machine(&machine)
            .ok_or_else(|| anyhow!("No syscall table for host architecture '{machine}'"))
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Aarch64 => "aarch64",
            Self::X86_64 => "x86_64",
        }
    }

    #[must_use]
    pub fn table(self) -> &'static SyscallTable {
        table_for(self)
    }
}

impl Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Arch {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_machine(&s.to_ascii_lowercase())
            .ok_or_else(|| anyhow!("Architecture '{s}' is not supported"))
    }
}

/// Outcome of resolving a syscall number against one architecture's table.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Resolution<'a> {
    Found(&'a str),
    /// Inside the table, but no syscall is assigned to the number.
    Unassigned,
    OutOfRange,
}

impl<'a> Resolution<'a> {
    #[must_use]
    pub fn name(self) -> Option<&'a str> {
        match self {
            Self::Found(name) => Some(name),
            Self::Unassigned | Self::OutOfRange => None,
        }
    }

    #[must_use]
    pub fn is_found(self) -> bool {
        matches!(self, Self::Found(_))
    }

    #[must_use]
    pub fn status(self) -> &'static str {
        match self {
            Self::Found(_) => "found",
            Self::Unassigned => "unassigned",
            Self::OutOfRange => "out_of_range",
        }
    }
}

/// Dense, 0-indexed syscall names of one architecture.
///
/// Slot `n` is the name of syscall `n`; an empty slot means the number is not
/// assigned on this architecture. Tables have no write API once built.
#[derive(Debug)]
pub struct SyscallTable {
    arch: Arch,
    names: Box<[Cow<'static, str>]>,
}

impl SyscallTable {
    pub fn new<I, S>(arch: Arch, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Cow<'static, str>>,
    {
        Self {
            arch,
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn arch(&self) -> Arch {
        self.arch
    }

    /// Number of slots, assigned or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    #[must_use]
    pub fn assigned(&self) -> usize {
        self.names.iter().filter(|name| !name.is_empty()).count()
    }

    /// Name of syscall `number`, or `None` when the number is out of range or
    /// unassigned. Any integer is accepted.
    #[must_use]
    pub fn lookup(&self, number: i64) -> Option<&str> {
        self.resolve(number).name()
    }

    #[must_use]
    pub fn resolve(&self, number: i64) -> Resolution<'_> {
        let Some(name) = usize::try_from(number)
            .ok()
            .and_then(|idx| self.names.get(idx))
        else {
            return Resolution::OutOfRange;
        };
        if name.is_empty() {
            Resolution::Unassigned
        } else {
            Resolution::Found(name)
        }
    }

    /// Reverse lookup; `name` may omit the `sys_` prefix.
    #[must_use]
    pub fn number_of(&self, name: &str) -> Option<usize> {
        if name.is_empty() {
            return None;
        }
        let bare = name.strip_prefix("sys_").unwrap_or(name);
        if bare.is_empty() {
            return None;
        }
        self.names.iter().position(|entry| {
            let entry: &str = entry;
            !entry.is_empty() && entry.strip_prefix("sys_").unwrap_or(entry) == bare
        })
    }

    /// Assigned slots as `(number, name)`, in number order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.names
            .iter()
            .enumerate()
            .filter(|(_, name)| !name.is_empty())
            .map(|(idx, name)| (idx, name.as_ref()))
    }

    /// Every slot including the empty ones.
    pub fn slots(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.names
            .iter()
            .enumerate()
            .map(|(idx, name)| (idx, name.as_ref()))
    }
}

static AARCH64_TABLE: OnceLock<SyscallTable> = OnceLock::new();
static X86_64_TABLE: OnceLock<SyscallTable> = OnceLock::new();

/// Process-wide table for `arch`, built on first use.
#[must_use]
pub fn table_for(arch: Arch) -> &'static SyscallTable {
    match arch {
        Arch::Aarch64 => AARCH64_TABLE.get_or_init(|| {
            SyscallTable::new(Arch::Aarch64, aarch64::SYSCALLS.iter().copied())
        }),
        Arch::X86_64 => {
            X86_64_TABLE.get_or_init(|| SyscallTable::new(Arch::X86_64, x86_64::names()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aarch64_known_numbers() {
        let table = table_for(Arch::Aarch64);
        assert_eq!(table.lookup(0), Some("sys_io_setup"));
        assert_eq!(table.lookup(63), Some("sys_read"));
        assert_eq!(table.lookup(64), Some("sys_write"));
        assert_eq!(table.lookup(221), Some("sys_execve"));
        assert_eq!(table.lookup(293), Some("sys_rseq"));
    }

    #[test]
    fn test_aarch64_gaps_and_bounds() {
        let table = table_for(Arch::Aarch64);
        assert_eq!(table.len(), 294);
        for number in 245..=259 {
            assert_eq!(table.lookup(number), None);
            assert_eq!(table.resolve(number), Resolution::Unassigned);
        }
        assert_eq!(table.resolve(244), Resolution::Found("sys_arch_specific_syscall"));
        assert_eq!(table.resolve(294), Resolution::OutOfRange);
        assert_eq!(table.resolve(-1), Resolution::OutOfRange);
        assert_eq!(table.resolve(i64::MIN), Resolution::OutOfRange);
        assert_eq!(table.resolve(i64::MAX), Resolution::OutOfRange);
        assert_eq!(table.assigned(), 294 - 15);
    }

    #[test]
    fn test_lookup_agrees_with_resolve() {
        let table = table_for(Arch::Aarch64);
        for number in -5..300 {
            assert_eq!(table.lookup(number), table.resolve(number).name());
            assert_eq!(table.lookup(number), table.lookup(number));
        }
    }

    #[test]
    fn test_tables_are_shared() {
        assert!(std::ptr::eq(table_for(Arch::Aarch64), Arch::Aarch64.table()));
        assert_eq!(Arch::X86_64.table().arch(), Arch::X86_64);
    }

    #[test]
    fn test_number_of() {
        let table = table_for(Arch::Aarch64);
        assert_eq!(table.number_of("sys_read"), Some(63));
        assert_eq!(table.number_of("read"), Some(63));
        assert_eq!(table.number_of("rseq"), Some(293));
        assert_eq!(table.number_of(""), None);
        assert_eq!(table.number_of("sys_"), None);
        assert_eq!(table.number_of("open"), None);
        assert_eq!(table_for(Arch::X86_64).number_of("sys_"), None);
    }

    #[test]
    fn test_iter_skips_unassigned() {
        let table = table_for(Arch::Aarch64);
        assert_eq!(table.iter().count(), table.assigned());
        assert!(table.iter().all(|(number, _)| !(245..=259).contains(&number)));
        assert_eq!(table.slots().count(), table.len());
    }

    #[test]
    fn test_from_machine() {
        assert_eq!(Arch::from_machine("aarch64"), Some(Arch::Aarch64));
        assert_eq!(Arch::from_machine("arm64"), Some(Arch::Aarch64));
        assert_eq!(Arch::from_machine("x86_64"), Some(Arch::X86_64));
        assert_eq!(Arch::from_machine("armv7l"), None);
        assert_eq!("AMD64".parse::<Arch>().unwrap(), Arch::X86_64);
        assert!("riscv64".parse::<Arch>().is_err());
        assert_eq!(Arch::Aarch64.to_string(), "aarch64");
    }

    #[test]
    fn test_concurrent_readers() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| table_for(Arch::Aarch64).lookup(63)))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), Some("sys_read"));
        }
    }
}
