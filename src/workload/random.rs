use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    common::PAGE_SIZE,
    error::VmResult,
    mmu::{FaultHandler, PageTable},
    workload::{expect_byte, shadow_of},
};

const OPS_PER_PAGE: usize = PAGE_SIZE / 16;

pub fn run<H: FaultHandler>(vm: &mut PageTable<H>, seed: u64) -> VmResult<u64> {
    let len = vm.len();
    let mut rng = StdRng::seed_from_u64(seed);
    // the backing store starts zeroed
    let mut shadow = shadow_of(len)?;
    let mut sum = 0u64;

    for _ in 0..vm.npages() * OPS_PER_PAGE {
        let addr = rng.random_range(0..len);

        if rng.random_bool(0.5) {
            let value: u8 = rng.random();
            vm.write(addr, value)?;
            shadow[addr] = value;
        } else {
            let byte = vm.read(addr)?;
            expect_byte(addr, shadow[addr], byte)?;
            sum += u64::from(byte);
        }
    }

    Ok(sum)
}
