//! Victim selection for when every frame is occupied.
//!
//! The strategy is picked once from the command line and fixed for the
//! run; all of them go through [`EvictionPolicy::select_victim`].

pub mod fifo;
pub mod protect_clean;
pub mod random;

use std::{fmt, str::FromStr};

use rand::rngs::StdRng;

use crate::{
    common::ids::FrameId,
    config::ConfigError,
    debugger::Component,
    fault::errors::FaultResult,
    frame::FrameTable,
    mmu::AddressSpace,
    vm_trace,
};

pub use fifo::FifoQueue;
pub use protect_clean::{PROTECT_CLEAN_RETRIES, ProtectClean};
pub use random::RandomVictim;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    Fifo,
    Random,
    ProtectClean,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Random, Strategy::Fifo, Strategy::ProtectClean];

    /// Name accepted on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Fifo => "fifo",
            Strategy::Random => "rand",
            Strategy::ProtectClean => "custom",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fifo" => Ok(Strategy::Fifo),
            "rand" | "random" => Ok(Strategy::Random),
            "custom" | "protect-clean" => Ok(Strategy::ProtectClean),
            other => Err(ConfigError::UnknownStrategy(other.to_string())),
        }
    }
}

/// What a strategy may look at while choosing a victim.
pub struct VictimContext<'a> {
    pub frames: &'a FrameTable,
    pub space: &'a AddressSpace,
    pub rng: &'a mut StdRng,
}

#[derive(Debug)]
pub enum EvictionPolicy {
    Fifo(FifoQueue),
    Random(RandomVictim),
    ProtectClean(ProtectClean),
}

impl EvictionPolicy {
    pub fn new(strategy: Strategy, nframes: usize) -> Self {
        match strategy {
            Strategy::Fifo => EvictionPolicy::Fifo(FifoQueue::new(nframes)),
            Strategy::Random => EvictionPolicy::Random(RandomVictim),
            Strategy::ProtectClean => EvictionPolicy::ProtectClean(ProtectClean::default()),
        }
    }

    pub fn strategy(&self) -> Strategy {
        match self {
            EvictionPolicy::Fifo(_) => Strategy::Fifo,
            EvictionPolicy::Random(_) => Strategy::Random,
            EvictionPolicy::ProtectClean(_) => Strategy::ProtectClean,
        }
    }

    /// Called when a free frame receives its first page.
    pub fn frame_populated(&mut self, frame: FrameId) -> FaultResult<()> {
        match self {
            EvictionPolicy::Fifo(queue) => queue.enqueue(frame),
            EvictionPolicy::Random(_) | EvictionPolicy::ProtectClean(_) => Ok(()),
        }
    }

    /// Called once an evicted frame has received its new page.
    pub fn frame_refilled(&mut self, frame: FrameId) -> FaultResult<()> {
        match self {
            EvictionPolicy::Fifo(queue) => queue.requeue(frame),
            EvictionPolicy::Random(_) | EvictionPolicy::ProtectClean(_) => Ok(()),
        }
    }

    /// Picks the frame to reclaim without changing any policy state.
    pub fn select_victim(&self, ctx: &mut VictimContext<'_>) -> FaultResult<FrameId> {
        let victim = match self {
            EvictionPolicy::Fifo(queue) => queue.select_victim(ctx.frames)?,
            EvictionPolicy::Random(random) => random.select_victim(ctx)?,
            EvictionPolicy::ProtectClean(protect) => protect.select_victim(ctx)?,
        };

        vm_trace!(
            Component::Evict,
            "{} chose {}",
            self.strategy(),
            victim
        );
        Ok(victim)
    }
}
