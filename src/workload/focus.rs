use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    common::PAGE_SIZE,
    error::VmResult,
    mmu::{FaultHandler, PageTable},
    workload::{expect_byte, shadow_of},
};

const WINDOW_PAGES: usize = 4;
const ROUNDS_PER_PAGE: usize = 4;
const OPS_PER_ROUND: usize = 512;

pub fn run<H: FaultHandler>(vm: &mut PageTable<H>, seed: u64) -> VmResult<u64> {
    let npages = vm.npages();
    let window = WINDOW_PAGES.min(npages) * PAGE_SIZE;
    let mut rng = StdRng::seed_from_u64(seed);
    let mut shadow = shadow_of(vm.len())?;
    let mut sum = 0u64;

    for _ in 0..npages * ROUNDS_PER_PAGE {
        let base = rng.random_range(0..=npages - window / PAGE_SIZE) * PAGE_SIZE;

        for _ in 0..OPS_PER_ROUND {
            let addr = base + rng.random_range(0..window);

            if rng.random_ratio(1, 3) {
                let value: u8 = rng.random();
                vm.write(addr, value)?;
                shadow[addr] = value;
            } else {
                let byte = vm.read(addr)?;
                expect_byte(addr, shadow[addr], byte)?;
                sum += u64::from(byte);
            }
        }
    }

    Ok(sum)
}
