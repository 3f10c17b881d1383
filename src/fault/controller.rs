use rand::{SeedableRng, rngs::StdRng};

use crate::{
    common::{
        PAGE_SIZE,
        ids::{FrameId, PageId},
    },
    debugger::Component,
    fault::errors::{FaultError, FaultResult},
    frame::FrameTable,
    mmu::{AddressSpace, FaultHandler, PageEntry, Protection},
    replacement::{EvictionPolicy, Strategy, VictimContext},
    stats::RunStats,
    storage::BlockStore,
    vm_debug, vm_trace,
};

/// Resolves page faults: finds or reclaims a frame, moves pages between
/// physical memory and the backing store, and keeps the frame table and
/// translation entries in agreement.
pub struct PageFaultController {
    frames: FrameTable,
    policy: EvictionPolicy,
    disk: Box<dyn BlockStore>,
    rng: StdRng,
    stats: RunStats,
    /// Landing buffer for reads, so a failed read touches no frame.
    staging: Vec<u8>,
}

impl PageFaultController {
    pub fn new(nframes: usize, strategy: Strategy, disk: Box<dyn BlockStore>, seed: u64) -> Self {
        Self::with_policy(nframes, EvictionPolicy::new(strategy, nframes), disk, seed)
    }

    pub fn with_policy(
        nframes: usize,
        policy: EvictionPolicy,
        disk: Box<dyn BlockStore>,
        seed: u64,
    ) -> Self {
        Self {
            frames: FrameTable::new(nframes),
            policy,
            disk,
            rng: StdRng::seed_from_u64(seed),
            stats: RunStats::default(),
            staging: vec![0u8; PAGE_SIZE],
        }
    }

    pub fn stats(&self) -> RunStats {
        self.stats
    }

    pub fn frames(&self) -> &FrameTable {
        &self.frames
    }

    pub fn policy(&self) -> &EvictionPolicy {
        &self.policy
    }

    /// Cross-checks the frame table, the translation entries and the FIFO
    /// queue against each other.
    pub fn check_consistency(&self, space: &AddressSpace) -> FaultResult<()> {
        for (frame, entry) in self.frames.iter() {
            match (entry.occupied, entry.resident_page) {
                (false, None) => {}
                (true, Some(page)) => {
                    let mapped = space.get_entry(page)?;
                    if !mapped.is_resident() || mapped.frame != Some(frame) {
                        return Err(FaultError::invariant(format!(
                            "{} claims {} but its entry is {:?}",
                            frame, page, mapped
                        )));
                    }
                }
                (occupied, page) => {
                    return Err(FaultError::invariant(format!(
                        "{} is occupied={} with resident {:?}",
                        frame, occupied, page
                    )));
                }
            }
        }

        for (page, entry) in space.entries() {
            if !entry.is_resident() {
                continue;
            }
            let frame = entry
                .frame
                .ok_or_else(|| FaultError::invariant(format!("{} resident without frame", page)))?;
            if self.frames.lookup(frame)? != page {
                return Err(FaultError::invariant(format!(
                    "{} maps to {} which holds another page",
                    page, frame
                )));
            }
        }

        if let EvictionPolicy::Fifo(queue) = &self.policy {
            if queue.len() != self.frames.occupied_count() {
                return Err(FaultError::invariant(format!(
                    "fifo queue tracks {} frames, {} are occupied",
                    queue.len(),
                    self.frames.occupied_count()
                )));
            }
            for frame in queue.order() {
                self.frames.lookup(frame)?;
            }
        }

        Ok(())
    }

    /// Brings `page` in. All disk I/O happens before any table changes, so a
    /// failed read or flush leaves the controller as it was. Past that point
    /// only invariant violations can fail, and those end the run.
    fn load(&mut self, space: &mut AddressSpace, page: PageId) -> FaultResult<()> {
        let victim = if self.frames.occupied_count() < self.frames.len() {
            None
        } else {
            let mut ctx = VictimContext {
                frames: &self.frames,
                space: &*space,
                rng: &mut self.rng,
            };
            let victim = self.policy.select_victim(&mut ctx)?;
            self.flush(space, victim)?;
            Some(victim)
        };

        self.disk.read_page(page, &mut self.staging)?;
        self.stats.disk_reads += 1;

        let frame = match victim {
            Some(victim) => {
                self.unmap(space, victim)?;
                self.policy.frame_refilled(victim)?;
                victim
            }
            None => {
                let frame = self
                    .frames
                    .find_free_frame()
                    .ok_or_else(|| FaultError::invariant("free frame vanished during load"))?;
                self.policy.frame_populated(frame)?;
                frame
            }
        };

        space.frame_mut(frame)?.copy_from_slice(&self.staging);
        space.set_entry(page, PageEntry::mapped(frame, Protection::Read))?;
        self.frames.bind(frame, page)?;

        vm_debug!(Component::Fault, "loaded {} into {}", page, frame);
        Ok(())
    }

    /// Writes the page held by `victim` back to disk if it is dirty. The
    /// page stays mapped.
    fn flush(&mut self, space: &AddressSpace, victim: FrameId) -> FaultResult<()> {
        let old = self.frames.lookup(victim)?;
        let entry = space.get_entry(old)?;

        if entry.frame != Some(victim) || !entry.is_resident() {
            return Err(FaultError::invariant(format!(
                "victim {} holds {} but its entry is {:?}",
                victim, old, entry
            )));
        }

        if entry.is_dirty() {
            self.disk.write_page(old, space.frame(victim)?)?;
            self.stats.disk_writes += 1;
            vm_trace!(Component::Fault, "flushed dirty {} from {}", old, victim);
        }
        Ok(())
    }

    /// Unmaps whatever lives in `victim`. The frame stays claimed for the
    /// caller.
    fn unmap(&mut self, space: &mut AddressSpace, victim: FrameId) -> FaultResult<()> {
        let old = self.frames.lookup(victim)?;
        space.set_entry(old, PageEntry::unmapped())?;
        self.stats.evictions += 1;

        vm_debug!(Component::Fault, "evicted {} from {}", old, victim);
        Ok(())
    }
}

impl FaultHandler for PageFaultController {
    fn page_fault(&mut self, space: &mut AddressSpace, page: PageId) -> FaultResult<()> {
        self.stats.page_faults += 1;

        let entry = space.get_entry(page)?;
        vm_debug!(
            Component::Fault,
            "fault #{} on {} ({:?})",
            self.stats.page_faults,
            page,
            entry.prot
        );

        match entry.prot {
            Protection::None => self.load(space, page),

            Protection::Read => {
                let frame = entry.frame.ok_or_else(|| {
                    FaultError::invariant(format!("{} readable without a frame", page))
                })?;
                space.set_entry(page, PageEntry::mapped(frame, Protection::ReadWrite))?;
                vm_trace!(Component::Fault, "{} now dirty in {}", page, frame);
                Ok(())
            }

            Protection::ReadWrite => Err(FaultError::invariant(format!(
                "fault on fully permitted {}",
                page
            ))),
        }
    }
}
