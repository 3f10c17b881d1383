//! Page-granular scripted accesses, mostly for driving exact fault
//! sequences.

use crate::{
    common::PAGE_SIZE,
    error::VmResult,
    mmu::{FaultHandler, PageTable},
    workload::expect_byte,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Touch {
    /// Read the first byte of the page.
    Read(usize),
    /// Write [`stamp`] of the page into its first byte.
    Write(usize),
}

/// Byte a `Touch::Write` leaves in a page. Never zero, so it is told apart
/// from a page that was never written.
pub fn stamp(page: usize) -> u8 {
    (page % 255) as u8 + 1
}

/// Replays `trace` in order. Reads of pages written earlier in the same
/// trace are checked against their stamp. Returns the sum of bytes read.
pub fn replay<H: FaultHandler>(vm: &mut PageTable<H>, trace: &[Touch]) -> VmResult<u64> {
    let mut written = vec![false; vm.npages()];
    let mut sum = 0u64;

    for touch in trace {
        match *touch {
            Touch::Read(page) => {
                let addr = page.saturating_mul(PAGE_SIZE);
                let byte = vm.read(addr)?;
                if written.get(page).copied().unwrap_or(false) {
                    expect_byte(addr, stamp(page), byte)?;
                }
                sum += u64::from(byte);
            }
            Touch::Write(page) => {
                vm.write(page.saturating_mul(PAGE_SIZE), stamp(page))?;
                if let Some(flag) = written.get_mut(page) {
                    *flag = true;
                }
            }
        }
    }

    Ok(sum)
}
