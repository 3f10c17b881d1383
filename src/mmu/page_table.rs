use crate::{
    common::{
        PAGE_SIZE,
        ids::{FrameId, PageId},
        try_filled,
    },
    debugger::Component,
    error::VmResult,
    fault::errors::FaultResult,
    mmu::{
        entry::{Access, PageEntry, Protection},
        errors::{MmuError, MmuResult},
    },
    vm_trace,
};

/// Handler calls allowed for a single access before it is declared stuck.
/// A write to an unmapped page needs two (load, then upgrade).
pub const MAX_FAULTS_PER_ACCESS: usize = 3;

/// Receives page faults from a [`PageTable`].
///
/// The handler is called synchronously in the middle of an access and must
/// leave the entry for `page` permitting more than it did before, or the
/// access faults again.
pub trait FaultHandler {
    fn page_fault(&mut self, space: &mut AddressSpace, page: PageId) -> FaultResult<()>;
}

/// Translation entries plus the physical memory they point into.
pub struct AddressSpace {
    entries: Vec<PageEntry>,
    physmem: Vec<u8>,
    nframes: usize,
}

impl AddressSpace {
    pub fn new(npages: usize, nframes: usize) -> MmuResult<Self> {
        if npages == 0 || nframes == 0 {
            return Err(MmuError::InvalidGeometry { npages, nframes });
        }

        // the virtual range must stay addressable byte by byte
        let too_large = || MmuError::TooLarge { npages, nframes };
        npages.checked_mul(PAGE_SIZE).ok_or_else(too_large)?;
        let physmem_len = nframes.checked_mul(PAGE_SIZE).ok_or_else(too_large)?;

        let entries =
            try_filled(npages, PageEntry::unmapped()).ok_or(MmuError::Allocation {
                what: "page entries",
                len: npages,
            })?;
        let physmem = try_filled(physmem_len, 0u8).ok_or(MmuError::Allocation {
            what: "physical memory",
            len: physmem_len,
        })?;

        Ok(Self {
            entries,
            physmem,
            nframes,
        })
    }

    pub fn npages(&self) -> usize {
        self.entries.len()
    }

    pub fn nframes(&self) -> usize {
        self.nframes
    }

    pub fn get_entry(&self, page: PageId) -> MmuResult<PageEntry> {
        self.entries
            .get(page.0)
            .copied()
            .ok_or(MmuError::PageOutOfRange {
                page,
                npages: self.entries.len(),
            })
    }

    pub fn set_entry(&mut self, page: PageId, entry: PageEntry) -> MmuResult<()> {
        match entry.frame {
            None if entry.prot != Protection::None => {
                return Err(MmuError::InvalidEntry {
                    page,
                    reason: format!("{:?} permission without a frame", entry.prot),
                });
            }
            Some(frame) if frame.0 >= self.nframes => {
                return Err(MmuError::FrameOutOfRange {
                    frame,
                    nframes: self.nframes,
                });
            }
            _ => {}
        }

        let npages = self.entries.len();
        let slot = self
            .entries
            .get_mut(page.0)
            .ok_or(MmuError::PageOutOfRange { page, npages })?;
        *slot = entry;
        Ok(())
    }

    pub fn entries(&self) -> impl Iterator<Item = (PageId, PageEntry)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .map(|(idx, entry)| (PageId(idx), *entry))
    }

    pub fn physmem(&self) -> &[u8] {
        &self.physmem
    }

    pub fn frame(&self, frame: FrameId) -> MmuResult<&[u8]> {
        let range = self.frame_range(frame)?;
        Ok(&self.physmem[range])
    }

    pub fn frame_mut(&mut self, frame: FrameId) -> MmuResult<&mut [u8]> {
        let range = self.frame_range(frame)?;
        Ok(&mut self.physmem[range])
    }

    fn frame_range(&self, frame: FrameId) -> MmuResult<std::ops::Range<usize>> {
        if frame.0 >= self.nframes {
            return Err(MmuError::FrameOutOfRange {
                frame,
                nframes: self.nframes,
            });
        }
        let start = frame.0 * PAGE_SIZE;
        Ok(start..start + PAGE_SIZE)
    }
}

/// Simulated virtual memory: byte accesses are translated through the
/// address space, and any access the current entry does not permit is
/// reported to the injected handler and retried.
pub struct PageTable<H> {
    space: AddressSpace,
    handler: H,
}

impl<H: FaultHandler> PageTable<H> {
    pub fn new(npages: usize, nframes: usize, handler: H) -> MmuResult<Self> {
        Ok(Self {
            space: AddressSpace::new(npages, nframes)?,
            handler,
        })
    }

    pub fn space(&self) -> &AddressSpace {
        &self.space
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// Size of the virtual memory in bytes.
    pub fn len(&self) -> usize {
        self.space.npages() * PAGE_SIZE
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn npages(&self) -> usize {
        self.space.npages()
    }

    pub fn nframes(&self) -> usize {
        self.space.nframes()
    }

    pub fn get_entry(&self, page: PageId) -> MmuResult<PageEntry> {
        self.space.get_entry(page)
    }

    pub fn physmem(&self) -> &[u8] {
        self.space.physmem()
    }

    pub fn read(&mut self, addr: usize) -> VmResult<u8> {
        let phys = self.resolve(addr, Access::Read)?;
        Ok(self.space.physmem[phys])
    }

    pub fn write(&mut self, addr: usize, value: u8) -> VmResult<()> {
        let phys = self.resolve(addr, Access::Write)?;
        self.space.physmem[phys] = value;
        Ok(())
    }

    /// Translates `addr` to a physical memory offset, faulting as often as
    /// needed to obtain the permission `access` requires.
    fn resolve(&mut self, addr: usize, access: Access) -> VmResult<usize> {
        let len = self.len();
        if addr >= len {
            return Err(MmuError::AddressOutOfRange { addr, len }.into());
        }

        let page = PageId(addr / PAGE_SIZE);
        let offset = addr % PAGE_SIZE;
        let mut faults = 0;

        loop {
            let entry = self.space.get_entry(page)?;
            if entry.permits(access) {
                let frame = entry.frame.ok_or_else(|| MmuError::InvalidEntry {
                    page,
                    reason: "resident without a frame".into(),
                })?;
                return Ok(frame.0 * PAGE_SIZE + offset);
            }

            if faults == MAX_FAULTS_PER_ACCESS {
                return Err(MmuError::UnresolvedFault { page, access }.into());
            }

            vm_trace!(
                Component::Mmu,
                "{:?} fault at {:#x} ({}, {:?})",
                access,
                addr,
                page,
                entry.prot
            );
            self.handler.page_fault(&mut self.space, page)?;
            faults += 1;
        }
    }
}
