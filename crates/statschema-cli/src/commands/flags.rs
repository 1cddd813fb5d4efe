//! Flags command: explain a permission value.

use anyhow::Result;
use statschema::{StatFlags, Subject};

pub fn run(permission: i32, increment_only: bool, subject: Subject) -> Result<()> {
    let flags = StatFlags::compute(permission, increment_only, subject);

    println!("Subject:    {:?}", subject);
    println!("Permission: {} ({:#x})", permission, permission);
    println!("Mask:       {:#x}", subject.protection_mask());
    println!("Flags:      {}", flags.describe());
    println!("Bits:       {:#x}", flags.bits());

    Ok(())
}
