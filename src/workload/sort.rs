use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    error::VmResult,
    mmu::{FaultHandler, PageTable},
    workload::expect_byte,
};

pub fn run<H: FaultHandler>(vm: &mut PageTable<H>, seed: u64) -> VmResult<u64> {
    let len = vm.len();
    let mut rng = StdRng::seed_from_u64(seed);
    let mut histogram = [0usize; 256];

    for addr in 0..len {
        let value: u8 = rng.random();
        histogram[usize::from(value)] += 1;
        vm.write(addr, value)?;
    }

    heap_sort(vm, len)?;

    // sorted output is the histogram laid out in order
    let mut sum = 0u64;
    let mut addr = 0;
    for (value, count) in histogram.iter().enumerate() {
        let expected = value as u8;
        for _ in 0..*count {
            let byte = vm.read(addr)?;
            expect_byte(addr, expected, byte)?;
            sum += u64::from(byte);
            addr += 1;
        }
    }

    Ok(sum)
}

fn heap_sort<H: FaultHandler>(vm: &mut PageTable<H>, len: usize) -> VmResult<()> {
    for root in (0..len / 2).rev() {
        sift_down(vm, root, len)?;
    }

    for end in (1..len).rev() {
        let top = vm.read(0)?;
        let last = vm.read(end)?;
        vm.write(0, last)?;
        vm.write(end, top)?;
        sift_down(vm, 0, end)?;
    }

    Ok(())
}

fn sift_down<H: FaultHandler>(vm: &mut PageTable<H>, mut root: usize, end: usize) -> VmResult<()> {
    loop {
        let mut child = 2 * root + 1;
        if child >= end {
            return Ok(());
        }

        let mut child_value = vm.read(child)?;
        if child + 1 < end {
            let right = vm.read(child + 1)?;
            if right > child_value {
                child += 1;
                child_value = right;
            }
        }

        let root_value = vm.read(root)?;
        if root_value >= child_value {
            return Ok(());
        }

        vm.write(root, child_value)?;
        vm.write(child, root_value)?;
        root = child;
    }
}
