//! Eviction policy implementations (replacers).
//!
//! Currently implements:
//! - [`FifoReplacer`] - evicts the longest-resident page
//! - [`FrequencyReplacer`] - evicts the page with the fewest references
//!   since loading (the policy historically labelled "LRU")
//!
//! A replacer never owns the frame set. The simulator lends it the set for
//! each reference, so the same replacer type can drive any number of
//! independent runs.

mod fifo;
mod frequency;

use std::fmt;

pub use fifo::FifoReplacer;
pub use frequency::FrequencyReplacer;

use crate::common::{FrameId, PageId, Policy, Result};
use crate::frames::FrameSet;

/// Policy-specific bookkeeping for one reference.
///
/// The simulator calls exactly one of [`record_hit`](Replacer::record_hit)
/// or [`handle_fault`](Replacer::handle_fault) per reference, followed by
/// [`after_reference`](Replacer::after_reference).
pub trait Replacer: fmt::Debug {
    /// Which policy this replacer implements.
    fn policy(&self) -> Policy;

    /// Account for a reference served from `frame_id`.
    fn record_hit(&mut self, frames: &mut FrameSet, frame_id: FrameId);

    /// Load `page_id` after a miss, evicting if the set is full.
    ///
    /// Returns the evicted page, or None if a free slot was used.
    fn handle_fault(&mut self, frames: &mut FrameSet, page_id: PageId) -> Result<Option<PageId>>;

    /// Hook run after every reference, hit or fault.
    fn after_reference(&mut self, _frames: &mut FrameSet) {}
}

/// Build the replacer for `policy`.
pub fn for_policy(policy: Policy) -> Box<dyn Replacer> {
    match policy {
        Policy::Fifo => Box::new(FifoReplacer::new()),
        Policy::Frequency => Box::new(FrequencyReplacer::new()),
    }
}
