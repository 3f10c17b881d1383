use std::collections::VecDeque;

use crate::{
    common::ids::FrameId,
    fault::errors::{FaultError, FaultResult},
    frame::FrameTable,
};

/// Frames in residency order, oldest at the front.
#[derive(Debug)]
pub struct FifoQueue {
    queue: VecDeque<FrameId>,
    capacity: usize,
}

impl FifoQueue {
    pub fn new(nframes: usize) -> Self {
        Self {
            queue: VecDeque::with_capacity(nframes),
            capacity: nframes,
        }
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn order(&self) -> impl Iterator<Item = FrameId> + '_ {
        self.queue.iter().copied()
    }

    pub fn enqueue(&mut self, frame: FrameId) -> FaultResult<()> {
        if self.queue.len() >= self.capacity {
            return Err(FaultError::invariant(format!(
                "fifo queue full ({} frames) when enqueueing {}",
                self.capacity, frame
            )));
        }
        if self.queue.contains(&frame) {
            return Err(FaultError::invariant(format!("{} enqueued twice", frame)));
        }
        self.queue.push_back(frame);
        Ok(())
    }

    /// The oldest frame. The queue is left alone until [`FifoQueue::requeue`]
    /// confirms the frame was refilled.
    pub fn select_victim(&self, frames: &FrameTable) -> FaultResult<FrameId> {
        let victim = *self
            .queue
            .front()
            .ok_or_else(|| FaultError::invariant("fifo queue empty with no free frame"))?;

        // only occupied frames are ever queued
        frames.lookup(victim)?;
        Ok(victim)
    }

    /// Moves the refilled oldest frame to the tail as the newest resident.
    pub fn requeue(&mut self, frame: FrameId) -> FaultResult<()> {
        if self.queue.front() != Some(&frame) {
            return Err(FaultError::invariant(format!(
                "{} refilled but {:?} is oldest",
                frame,
                self.queue.front()
            )));
        }
        self.queue.rotate_left(1);
        Ok(())
    }
}
