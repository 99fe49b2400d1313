//! Simulation statistics tracking.

use std::fmt;

use crate::common::{Error, Result};

/// Counters accumulated over one simulation run.
///
/// Plain integers: a run is single-threaded and owns its stats outright.
///
/// # Example
/// ```
/// use pagesim::SimulationStats;
///
/// let mut stats = SimulationStats::new();
/// stats.record_fault(false);
/// stats.record_hit();
/// assert_eq!(stats.fault_rate().unwrap(), 50.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulationStats {
    /// References served by a resident page.
    pub hits: u64,

    /// References that had to load their page.
    pub faults: u64,

    /// Faults that displaced a resident page.
    pub evictions: u64,
}

impl SimulationStats {
    /// Create a new stats tracker with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a hit.
    #[inline]
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    /// Count a fault, and an eviction if one happened.
    #[inline]
    pub fn record_fault(&mut self, evicted: bool) {
        self.faults += 1;
        if evicted {
            self.evictions += 1;
        }
    }

    /// Total references processed.
    #[inline]
    pub fn total(&self) -> u64 {
        self.hits + self.faults
    }

    /// Fault rate as a percentage (0.0 to 100.0).
    ///
    /// # Errors
    /// - `Error::UndefinedRate` if no references were processed
    pub fn fault_rate(&self) -> Result<f64> {
        match self.total() {
            0 => Err(Error::UndefinedRate),
            total => Ok(self.faults as f64 / total as f64 * 100.0),
        }
    }

    /// Hit rate as a percentage (0.0 to 100.0).
    ///
    /// # Errors
    /// - `Error::UndefinedRate` if no references were processed
    pub fn hit_rate(&self) -> Result<f64> {
        self.fault_rate().map(|rate| 100.0 - rate)
    }

    /// Reset all counters to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl fmt::Display for SimulationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ hits: {}, faults: {}, evictions: {}, fault_rate: ",
            self.hits, self.faults, self.evictions
        )?;
        match self.fault_rate() {
            Ok(rate) => write!(f, "{:.2}% }}", rate),
            Err(_) => write!(f, "undefined }}"),
        }
    }
}
