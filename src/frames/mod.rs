//! Frame set management.
//!
//! The frame set is the fixed pool of slots the simulated memory offers.
//! Each slot holds at most one page.
//!
//! # Components
//! - [`FrameSet`] - Fixed-capacity, ordered set of slots
//! - [`FrameSlot`] - A slot holding a page + reference count
//! - [`SimulationStats`] - Hit/fault/eviction counters
//! - [`replacer`] - Eviction policy implementations

mod frame;
mod frame_set;
pub mod replacer;
mod stats;

pub use frame::FrameSlot;
pub use frame_set::FrameSet;
pub use stats::SimulationStats;
