use crate::{
    common::ids::PageId,
    config::Config,
    debugger::Component,
    error::VmResult,
    fault::PageFaultController,
    frame::FrameTable,
    mmu::PageTable,
    replacement::Strategy,
    stats::RunStats,
    storage::{BlockStore, FileDisk, errors::StorageError},
    vm_info,
    workload::{
        Workload,
        trace::{self, Touch},
    },
};

/// Everything one run owns: the simulated page table, and through it the
/// fault controller with its frame table, eviction state, backing store,
/// random generator and counters.
pub struct Simulator {
    vm: PageTable<PageFaultController>,
}

impl Simulator {
    pub fn new(
        npages: usize,
        nframes: usize,
        strategy: Strategy,
        disk: Box<dyn BlockStore>,
        seed: u64,
    ) -> VmResult<Self> {
        check_disk_capacity(disk.as_ref(), npages)?;
        let controller = PageFaultController::new(nframes, strategy, disk, seed);
        Self::with_controller(npages, nframes, controller, seed)
    }

    pub fn with_controller(
        npages: usize,
        nframes: usize,
        controller: PageFaultController,
        seed: u64,
    ) -> VmResult<Self> {
        let vm = PageTable::new(npages, nframes, controller)?;

        vm_info!(
            Component::Sim,
            "{} pages, {} frames, {} eviction, seed {}",
            npages,
            nframes,
            vm.handler().policy().strategy(),
            seed
        );

        Ok(Self { vm })
    }

    /// Builds the run described by `config`, backed by a fresh file disk.
    pub fn from_config(config: &Config) -> VmResult<Self> {
        let disk = FileDisk::create(&config.disk_path, config.npages)?;
        Self::new(
            config.npages,
            config.nframes,
            config.strategy,
            Box::new(disk),
            config.seed,
        )
    }

    pub fn controller(&self) -> &PageFaultController {
        self.vm.handler()
    }

    pub fn frames(&self) -> &FrameTable {
        self.controller().frames()
    }

    pub fn stats(&self) -> RunStats {
        self.controller().stats()
    }

    pub fn run(&mut self, workload: Workload, seed: u64) -> VmResult<u64> {
        let checksum = workload.run(&mut self.vm, seed)?;
        vm_info!(
            Component::Workload,
            "{} finished, checksum {}",
            workload,
            checksum
        );
        Ok(checksum)
    }

    pub fn replay(&mut self, touches: &[Touch]) -> VmResult<u64> {
        trace::replay(&mut self.vm, touches)
    }

    pub fn check_consistency(&self) -> VmResult<()> {
        self.controller().check_consistency(self.vm.space())?;
        Ok(())
    }

    /// Resident frame of `page` according to the translation entry.
    pub fn frame_of(&self, page: usize) -> VmResult<Option<usize>> {
        let entry = self.vm.get_entry(PageId(page))?;
        Ok(entry.frame.filter(|_| entry.is_resident()).map(|f| f.0))
    }
}

fn check_disk_capacity(disk: &dyn BlockStore, npages: usize) -> Result<(), StorageError> {
    if disk.nblocks() < npages {
        return Err(StorageError::BlockOutOfRange {
            page: PageId(npages - 1),
            nblocks: disk.nblocks(),
        });
    }
    Ok(())
}
