//! Configuration for a simulation run.
//!
//! A [`SimulationConfig`] is the only thing the simulator receives from the
//! outside world. It is validated on construction, so an invalid capacity or
//! policy name never reaches the core.

use std::fmt;
use std::str::FromStr;

use crate::common::{Error, Result};

/// Output label for a reference that was already resident.
pub const HIT_LABEL: &str = "HIT";

/// Output label for a page fault.
pub const FAULT_LABEL: &str = "PF";

/// Prefix of the summary record written after all references.
pub const FAULT_RATE_PREFIX: &str = "PF Rate : ";

/// Smallest frame capacity a run accepts.
pub const MIN_CAPACITY: usize = 1;

/// Eviction policy applied for the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Policy {
    /// Evict the longest-resident page.
    Fifo,

    /// Evict the page with the fewest references since it was loaded.
    ///
    /// Historically labelled "LRU", but the counter is cumulative and never
    /// decays, so this is a frequency policy rather than a recency one.
    Frequency,
}

impl Policy {
    /// Label used on the command line and in logs.
    pub fn label(&self) -> &'static str {
        match self {
            Policy::Fifo => "fifo",
            Policy::Frequency => "lru",
        }
    }
}

impl FromStr for Policy {
    type Err = Error;

    /// Case-insensitive. `frequency` is accepted as an alias of `lru`.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "fifo" => Ok(Policy::Fifo),
            "lru" | "frequency" => Ok(Policy::Frequency),
            _ => Err(Error::UnknownPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Validated `{policy, capacity}` pair.
///
/// # Example
/// ```
/// use pagesim::{Policy, SimulationConfig};
///
/// let config = SimulationConfig::new(Policy::Fifo, 3).unwrap();
/// assert_eq!(config.capacity(), 3);
///
/// assert!(SimulationConfig::new(Policy::Fifo, 0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationConfig {
    policy: Policy,
    capacity: usize,
}

impl SimulationConfig {
    /// Create a config, rejecting capacities below [`MIN_CAPACITY`].
    pub fn new(policy: Policy, capacity: usize) -> Result<Self> {
        if capacity < MIN_CAPACITY {
            return Err(Error::InvalidCapacity(capacity));
        }
        Ok(Self { policy, capacity })
    }

    #[inline]
    pub fn policy(&self) -> Policy {
        self.policy
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
