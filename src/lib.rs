//! pagesim - a page replacement trace simulator with swappable eviction policies.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            pagesim                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                 Trace I/O (trace/)                       │   │
//! │  │        TraceReader → ... → ResultWriter                  │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │             Simulation Driver (simulator)                │   │
//! │  │        classify each reference as HIT or PF              │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │          Frame Set (frames/)  [Swappable Policy]        │   │
//! │  │   ┌─────────────────────────────────────────────────┐   │   │
//! │  │   │        Eviction Policies: FIFO | Frequency       │   │   │
//! │  │   └─────────────────────────────────────────────────┘   │   │
//! │  │        FrameSet + FrameSlot + SimulationStats            │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, FrameId, Error, config)
//! - [`frames`] - Frame set and eviction policies
//! - [`simulator`] - The per-reference driver and its report
//! - [`trace`] - Reading traces and writing result files
//!
//! # Quick Start
//! ```
//! use pagesim::{simulate, PageId, Policy, SimulationConfig};
//!
//! let config = SimulationConfig::new(Policy::Fifo, 3).unwrap();
//! let trace = [1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5].map(PageId::new);
//!
//! let report = simulate(config, trace).unwrap();
//! assert_eq!(report.stats().faults, 9);
//! ```

pub mod common;
pub mod frames;
pub mod simulator;
pub mod trace;

// Re-export commonly used items at crate root for convenience
pub use common::{Error, FrameId, PageId, Policy, Result, SimulationConfig};

pub use frames::{FrameSet, FrameSlot, SimulationStats};
pub use simulator::{simulate, ClassifiedReference, Outcome, SimulationReport, Simulator};
pub use trace::{read_trace_file, replay_file, write_report_file};
