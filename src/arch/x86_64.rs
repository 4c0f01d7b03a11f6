//! Syscall names for Linux on x86_64.
//!
//! Unlike the AArch64 table this one is not checked in: it is derived from the
//! `syscalls` crate's numbering when first requested, keeping the same dense
//! layout with empty slots for the unassigned range (335..=423).

use std::borrow::Cow;
use syscalls::x86_64::Sysno;

pub(crate) fn names() -> Vec<Cow<'static, str>> {
    #[allow(clippy::cast_sign_loss)]
    let last = Sysno::last().id() as usize;
    (0..=last)
        .map(|id| match Sysno::new(id) {
            Some(sysno) => Cow::Owned(format!("sys_{}", sysno.name())),
            None => Cow::Borrowed(""),
        })
        .collect()
}
