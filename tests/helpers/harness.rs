use virtmem::{replacement::Strategy, sim::Simulator, stats::RunStats, workload::trace::Touch};

use super::disk::{IoLog, RecordingDisk};

pub struct TestSim {
    pub sim: Simulator,
    pub log: IoLog,
}

impl TestSim {
    pub fn new(npages: usize, nframes: usize, strategy: Strategy) -> Self {
        Self::seeded(npages, nframes, strategy, 1)
    }

    pub fn seeded(npages: usize, nframes: usize, strategy: Strategy, seed: u64) -> Self {
        let (disk, log) = RecordingDisk::new(npages);
        let sim = Simulator::new(npages, nframes, strategy, Box::new(disk), seed).unwrap();
        Self { sim, log }
    }

    #[allow(dead_code)]
    pub fn replay(&mut self, touches: &[Touch]) -> Result<u64, anyhow::Error> {
        Ok(self.sim.replay(touches)?)
    }

    /// Replays one touch at a time, auditing the tables after each.
    #[allow(dead_code)]
    pub fn replay_checked(&mut self, touches: &[Touch]) -> Result<(), anyhow::Error> {
        for touch in touches {
            self.sim.replay(std::slice::from_ref(touch))?;
            self.sim.check_consistency()?;
        }
        Ok(())
    }

    pub fn stats(&self) -> RunStats {
        self.sim.stats()
    }
}

#[allow(dead_code)]
pub fn reads(pages: &[usize]) -> Vec<Touch> {
    pages.iter().map(|p| Touch::Read(*p)).collect()
}
