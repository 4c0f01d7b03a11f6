use sysname_cli::arch::{table_for, Arch, Resolution};

#[test]
fn test_aarch64_contract() {
    let table = table_for(Arch::Aarch64);
    assert_eq!(table.arch(), Arch::Aarch64);
    assert_eq!(table.len(), 294);

    assert_eq!(table.lookup(0), Some("sys_io_setup"));
    assert_eq!(table.lookup(63), Some("sys_read"));
    assert_eq!(table.lookup(64), Some("sys_write"));
    assert_eq!(table.lookup(245), None);
    assert_eq!(table.lookup(293), Some("sys_rseq"));
    assert_eq!(table.lookup(294), None);
    assert_eq!(table.lookup(-1), None);
}

#[test]
fn test_every_slot_is_consistent() {
    let table = table_for(Arch::Aarch64);
    for (number, name) in table.slots() {
        let number = number as i64;
        if name.is_empty() {
            assert_eq!(table.resolve(number), Resolution::Unassigned);
        } else {
            assert!(name.starts_with("sys_"), "{number}: {name}");
            assert_eq!(table.lookup(number), Some(name));
        }
    }
}

#[test]
fn test_names_are_unique() {
    for arch in [Arch::Aarch64, Arch::X86_64] {
        let table = table_for(arch);
        for (number, name) in table.iter() {
            assert_eq!(table.number_of(name), Some(number), "{arch}: {name}");
        }
    }
}
