use crate::{
    error::VmResult,
    mmu::{FaultHandler, PageTable},
    workload::expect_byte,
};

const SCAN_PASSES: usize = 3;

// 251 is prime, so neighbouring pages never carry the same bytes.
fn pattern(addr: usize) -> u8 {
    (addr % 251) as u8
}

pub fn run<H: FaultHandler>(vm: &mut PageTable<H>) -> VmResult<u64> {
    let len = vm.len();

    for addr in 0..len {
        vm.write(addr, pattern(addr))?;
    }

    let mut sum = 0u64;
    for _ in 0..SCAN_PASSES {
        for addr in 0..len {
            let byte = vm.read(addr)?;
            expect_byte(addr, pattern(addr), byte)?;
            sum += u64::from(byte);
        }
    }

    Ok(sum)
}
