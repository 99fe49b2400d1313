//! FIFO (First-In-First-Out) replacement policy.

use log::debug;

use crate::common::{Error, FrameId, PageId, Policy, Result};
use crate::frames::replacer::Replacer;
use crate::frames::FrameSet;

/// A FIFO eviction policy.
///
/// Evicts pages in the order they were loaded. Slot order *is* the queue:
/// index 0 holds the oldest resident and the last occupied slot the newest.
/// Free slots only ever form a suffix, since nothing leaves the set without
/// a replacement, so filling the lowest free slot appends to the tail.
///
/// Re-accessing a resident page never reorders anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct FifoReplacer;

impl FifoReplacer {
    /// Create a new FIFO replacer.
    pub fn new() -> Self {
        Self
    }
}

impl Replacer for FifoReplacer {
    fn policy(&self) -> Policy {
        Policy::Fifo
    }

    fn record_hit(&mut self, _frames: &mut FrameSet, _frame_id: FrameId) {}

    fn handle_fault(&mut self, frames: &mut FrameSet, page_id: PageId) -> Result<Option<PageId>> {
        if !frames.is_full() {
            frames.insert_into_free_slot(page_id)?;
            return Ok(None);
        }

        // Head leaves, everyone moves up one, newcomer joins at the tail
        let slots = frames.slots_mut();
        slots.rotate_left(1);
        let tail = slots.last_mut().ok_or(Error::NoFreeFrames)?;
        let evicted = tail.load(page_id);

        if let Some(victim) = evicted {
            debug!("fifo: evicted page {} for page {}", victim, page_id);
        }
        Ok(evicted)
    }
}
