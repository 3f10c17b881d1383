// src/debugger/phases.rs

use std::cell::RefCell;
use std::time::{Duration, Instant};

/// Wall-clock timeline of the named phases of a run (setup, workload, ...).
pub struct PhaseTracker {
    phases: Vec<Phase>,
    open: Vec<usize>,
}

struct Phase {
    name: String,
    depth: usize,
    start: Instant,
    elapsed: Option<Duration>,
}

impl PhaseTracker {
    pub fn new() -> Self {
        Self {
            phases: Vec::new(),
            open: Vec::new(),
        }
    }

    pub fn begin(&mut self, name: impl Into<String>) {
        self.open.push(self.phases.len());
        self.phases.push(Phase {
            name: name.into(),
            depth: self.open.len() - 1,
            start: Instant::now(),
            elapsed: None,
        });
    }

    pub fn end(&mut self) {
        if let Some(idx) = self.open.pop() {
            let phase = &mut self.phases[idx];
            phase.elapsed = Some(phase.start.elapsed());
        }
    }

    pub fn report(&self) -> String {
        let mut output = String::from("\n=== Run Timeline ===\n");

        for phase in &self.phases {
            let millis = phase.elapsed.unwrap_or_default().as_secs_f64() * 1000.0;
            output.push_str(&format!(
                "{}{}  {:.2}ms\n",
                "  ".repeat(phase.depth),
                phase.name,
                millis
            ));
        }

        output
    }
}

impl Default for PhaseTracker {
    fn default() -> Self {
        Self::new()
    }
}

thread_local! {
    static PHASE_TRACKER: RefCell<PhaseTracker> = RefCell::new(PhaseTracker::new());
}

pub fn begin_phase(name: impl Into<String>) {
    PHASE_TRACKER.with(|t| t.borrow_mut().begin(name));
}

pub fn end_phase() {
    PHASE_TRACKER.with(|t| t.borrow_mut().end());
}

pub fn get_report() -> String {
    PHASE_TRACKER.with(|t| t.borrow().report())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_phases_are_indented() {
        let mut tracker = PhaseTracker::new();
        tracker.begin("run");
        tracker.begin("workload");
        tracker.end();
        tracker.end();

        let report = tracker.report();
        assert!(report.contains("\nrun  "));
        assert!(report.contains("\n  workload  "));
    }

    #[test]
    fn end_without_begin_is_ignored() {
        let mut tracker = PhaseTracker::new();
        tracker.end();
        assert!(tracker.report().ends_with("===\n"));
    }
}
