use crate::common::ids::FrameId;

/// Permission bits of a translation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protection {
    None,
    Read,
    /// Granted on the first write after a load; the page is dirty.
    ReadWrite,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Read,
    Write,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageEntry {
    pub frame: Option<FrameId>,
    pub prot: Protection,
}

impl PageEntry {
    pub fn unmapped() -> Self {
        Self {
            frame: None,
            prot: Protection::None,
        }
    }

    pub fn mapped(frame: FrameId, prot: Protection) -> Self {
        Self {
            frame: Some(frame),
            prot,
        }
    }

    pub fn is_resident(&self) -> bool {
        self.prot != Protection::None
    }

    pub fn is_dirty(&self) -> bool {
        self.prot == Protection::ReadWrite
    }

    pub fn permits(&self, access: Access) -> bool {
        match (access, self.prot) {
            (_, Protection::None) => false,
            (Access::Read, _) => true,
            (Access::Write, Protection::ReadWrite) => true,
            (Access::Write, Protection::Read) => false,
        }
    }
}

impl Default for PageEntry {
    fn default() -> Self {
        Self::unmapped()
    }
}
