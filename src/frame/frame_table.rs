use crate::{
    common::ids::{FrameId, PageId},
    fault::errors::{FaultError, FaultResult},
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameEntry {
    pub resident_page: Option<PageId>,
    pub occupied: bool,
}

/// Which virtual page lives in each physical frame.
///
/// Sized once to the frame count and never resized.
#[derive(Debug)]
pub struct FrameTable {
    entries: Vec<FrameEntry>,
}

impl FrameTable {
    pub fn new(nframes: usize) -> Self {
        Self {
            entries: vec![FrameEntry::default(); nframes],
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Claims the lowest-numbered unoccupied frame.
    ///
    /// The scan is left to right so that a run is reproducible for a given
    /// eviction seed.
    pub fn find_free_frame(&mut self) -> Option<FrameId> {
        let idx = self.entries.iter().position(|e| !e.occupied)?;
        self.entries[idx].occupied = true;
        Some(FrameId(idx))
    }

    pub fn bind(&mut self, frame: FrameId, page: PageId) -> FaultResult<()> {
        let entry = self.entry_mut(frame)?;
        if !entry.occupied {
            return Err(FaultError::invariant(format!(
                "binding {} to unclaimed {}",
                page, frame
            )));
        }
        entry.resident_page = Some(page);
        Ok(())
    }

    /// Page resident in an occupied frame.
    pub fn lookup(&self, frame: FrameId) -> FaultResult<PageId> {
        let entry = self.entries.get(frame.0).ok_or_else(|| {
            FaultError::invariant(format!("{} outside frame table of {}", frame, self.len()))
        })?;

        match entry {
            FrameEntry {
                occupied: true,
                resident_page: Some(page),
            } => Ok(*page),
            _ => Err(FaultError::invariant(format!(
                "{} holds no resident page",
                frame
            ))),
        }
    }

    pub fn frame_of(&self, page: PageId) -> Option<FrameId> {
        self.entries
            .iter()
            .position(|e| e.resident_page == Some(page))
            .map(FrameId)
    }

    pub fn occupied_count(&self) -> usize {
        self.entries.iter().filter(|e| e.occupied).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FrameId, &FrameEntry)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(idx, entry)| (FrameId(idx), entry))
    }

    fn entry_mut(&mut self, frame: FrameId) -> FaultResult<&mut FrameEntry> {
        let len = self.entries.len();
        self.entries.get_mut(frame.0).ok_or_else(|| {
            FaultError::invariant(format!("{} outside frame table of {}", frame, len))
        })
    }
}
