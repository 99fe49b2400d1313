//! Simulation driver - replays a trace against a frame set.
//!
//! The [`Simulator`] provides:
//! - Per-reference hit/fault classification
//! - Policy-specific frame set mutation through a [`Replacer`]
//! - A [`SimulationReport`] with the ordered result trace and counters

use std::fmt;

use log::{info, trace};

use crate::common::config::{FAULT_LABEL, HIT_LABEL};
use crate::common::{PageId, Result, SimulationConfig};
use crate::frames::replacer::{self, Replacer};
use crate::frames::{FrameSet, SimulationStats};

/// Whether a reference found its page resident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Hit,
    Fault,
}

impl Outcome {
    /// Fixed output label (`HIT` or `PF`).
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Hit => HIT_LABEL,
            Outcome::Fault => FAULT_LABEL,
        }
    }

    #[inline]
    pub fn is_fault(&self) -> bool {
        matches!(self, Outcome::Fault)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One trace entry with its outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClassifiedReference {
    pub page_id: PageId,
    pub outcome: Outcome,
}

/// Result of a complete run.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationReport {
    config: SimulationConfig,
    results: Vec<ClassifiedReference>,
    stats: SimulationStats,
}

impl SimulationReport {
    pub fn config(&self) -> SimulationConfig {
        self.config
    }

    /// Classified references in trace order.
    pub fn results(&self) -> &[ClassifiedReference] {
        &self.results
    }

    pub fn stats(&self) -> SimulationStats {
        self.stats
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Fault rate as a percentage.
    ///
    /// # Errors
    /// - `Error::UndefinedRate` for an empty trace
    pub fn fault_rate(&self) -> Result<f64> {
        self.stats.fault_rate()
    }
}

/// Replays page references against one frame set with one policy.
///
/// # Architecture
/// ```text
///   trace ──▶ access(page) ──▶ FrameSet::find
///                 │                 │
///                 │        hit ◀────┴────▶ fault
///                 ▼                        ▼
///        replacer.record_hit     replacer.handle_fault
///                 └──────────┬─────────────┘
///                            ▼
///                 replacer.after_reference
/// ```
///
/// All state is owned by the simulator and dropped with it; two simulators
/// never share anything.
///
/// # Usage
/// ```
/// use pagesim::{PageId, Policy, SimulationConfig, Simulator};
///
/// let config = SimulationConfig::new(Policy::Fifo, 2).unwrap();
/// let trace = [1, 2, 1, 3].map(PageId::new);
///
/// let report = Simulator::new(config).unwrap().run(trace).unwrap();
/// assert_eq!(report.stats().hits, 1);
/// assert_eq!(report.fault_rate().unwrap(), 75.0);
/// ```
#[derive(Debug)]
pub struct Simulator {
    config: SimulationConfig,
    frames: FrameSet,
    replacer: Box<dyn Replacer>,
    stats: SimulationStats,
    results: Vec<ClassifiedReference>,
}

impl Simulator {
    /// Create a simulator with a fresh, empty frame set.
    ///
    /// # Errors
    /// - `Error::AllocationFailure` if the frame set cannot be allocated
    pub fn new(config: SimulationConfig) -> Result<Self> {
        Ok(Self {
            config,
            frames: FrameSet::new(config.capacity())?,
            replacer: replacer::for_policy(config.policy()),
            stats: SimulationStats::new(),
            results: Vec::new(),
        })
    }

    /// Process one reference.
    pub fn access(&mut self, page_id: PageId) -> Result<ClassifiedReference> {
        let outcome = match self.frames.find(page_id) {
            Some(frame_id) => {
                self.replacer.record_hit(&mut self.frames, frame_id);
                self.stats.record_hit();
                Outcome::Hit
            }
            None => {
                let evicted = self.replacer.handle_fault(&mut self.frames, page_id)?;
                self.stats.record_fault(evicted.is_some());
                Outcome::Fault
            }
        };
        self.replacer.after_reference(&mut self.frames);

        trace!("{} page {} -> {}", self.config.policy(), page_id, outcome);

        let reference = ClassifiedReference { page_id, outcome };
        self.results.push(reference);
        Ok(reference)
    }

    /// Consume the whole trace and return the report.
    pub fn run<I>(mut self, trace: I) -> Result<SimulationReport>
    where
        I: IntoIterator<Item = PageId>,
    {
        let trace = trace.into_iter();
        self.results.reserve(trace.size_hint().0);

        for page_id in trace {
            self.access(page_id)?;
        }

        info!(
            "{} with {} frames: {}",
            self.config.policy(),
            self.config.capacity(),
            self.stats
        );
        Ok(self.into_report())
    }

    /// Stop here and report what has been processed so far.
    pub fn into_report(self) -> SimulationReport {
        SimulationReport {
            config: self.config,
            results: self.results,
            stats: self.stats,
        }
    }

    pub fn frames(&self) -> &FrameSet {
        &self.frames
    }

    pub fn stats(&self) -> SimulationStats {
        self.stats
    }

    pub fn config(&self) -> SimulationConfig {
        self.config
    }
}

/// Run `trace` under `config` with a freshly initialised frame set.
pub fn simulate<I>(config: SimulationConfig, trace: I) -> Result<SimulationReport>
where
    I: IntoIterator<Item = PageId>,
{
    Simulator::new(config)?.run(trace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{Error, Policy};

    fn pages(ids: &[u32]) -> Vec<PageId> {
        ids.iter().copied().map(PageId::new).collect()
    }

    fn outcomes(report: &SimulationReport) -> String {
        report
            .results()
            .iter()
            .map(|r| if r.outcome.is_fault() { 'F' } else { 'H' })
            .collect()
    }

    fn run(policy: Policy, capacity: usize, ids: &[u32]) -> SimulationReport {
        let config = SimulationConfig::new(policy, capacity).unwrap();
        simulate(config, pages(ids)).unwrap()
    }

    const BELADY: [u32; 12] = [1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5];

    #[test]
    fn test_fifo_belady_trace() {
        let report = run(Policy::Fifo, 3, &BELADY);

        assert_eq!(outcomes(&report), "FFFFFFFHHFFH");
        assert_eq!(report.stats().faults, 9);
        assert_eq!(report.stats().evictions, 6);
        assert_eq!(report.fault_rate().unwrap(), 75.0);
    }

    #[test]
    fn test_frequency_belady_trace() {
        let report = run(Policy::Frequency, 3, &BELADY);

        assert_eq!(outcomes(&report), "FFFFFHFFHHFF");
        assert_eq!(report.fault_rate().unwrap(), 75.0);
    }

    #[test]
    fn test_frequency_keeps_hot_page() {
        // Page 1 earns a reference, so page 2 is evicted instead
        let report = run(Policy::Frequency, 2, &[1, 1, 2, 3, 1]);
        assert_eq!(outcomes(&report), "FHFFH");
    }

    #[test]
    fn test_results_preserve_order() {
        let ids = [4, 4, 9, 0, 9, 4];
        let report = run(Policy::Fifo, 2, &ids);

        let seen: Vec<u32> = report.results().iter().map(|r| r.page_id.0).collect();
        assert_eq!(seen, ids);
    }

    #[test]
    fn test_empty_trace() {
        let report = run(Policy::Frequency, 4, &[]);

        assert!(report.is_empty());
        assert!(matches!(report.fault_rate(), Err(Error::UndefinedRate)));
    }

    #[test]
    fn test_access_step_by_step() {
        let config = SimulationConfig::new(Policy::Fifo, 2).unwrap();
        let mut sim = Simulator::new(config).unwrap();

        assert_eq!(sim.access(PageId::new(1)).unwrap().outcome, Outcome::Fault);
        assert_eq!(sim.access(PageId::new(1)).unwrap().outcome, Outcome::Hit);
        assert!(!sim.frames().is_full());

        sim.access(PageId::new(2)).unwrap();
        assert!(sim.frames().is_full());
        assert_eq!(sim.stats().total(), 3);

        let report = sim.into_report();
        assert_eq!(report.len(), 3);
    }

    #[test]
    fn test_outcome_labels() {
        assert_eq!(Outcome::Hit.to_string(), "HIT");
        assert_eq!(Outcome::Fault.to_string(), "PF");
    }
}
