//! Frequency replacement policy (the historical "LRU" label).
//!
//! Each slot counts the references it has served since its page was loaded.
//! On a full-set fault the slot with the smallest count is overwritten.
//! Counts never decay, so this is least-frequently-used-since-load rather
//! than least-recently-used.

use log::debug;

use crate::common::{Error, FrameId, PageId, Policy, Result};
use crate::frames::replacer::Replacer;
use crate::frames::{FrameSet, FrameSlot};

/// A reference-count eviction policy.
///
/// After every reference the replacer performs one promotion pass: the first
/// occupied slot whose count is strictly below slot 0's is swapped into
/// slot 0. Slot 0 therefore always holds a minimum-count resident, and that
/// is the victim of the next full-set fault.
///
/// The promotion is a single swap, not a sort. It moves the old slot-0 page
/// to a new position, which changes later tie-breaking. Existing result
/// files depend on that order.
///
/// # Example
/// ```
/// use pagesim::frames::replacer::{FrequencyReplacer, Replacer};
/// use pagesim::{FrameSet, PageId};
///
/// let mut frames = FrameSet::new(2).unwrap();
/// let mut replacer = FrequencyReplacer::new();
///
/// replacer.handle_fault(&mut frames, PageId::new(1)).unwrap();
/// let fid = frames.find(PageId::new(1)).unwrap();
/// replacer.record_hit(&mut frames, fid);
/// replacer.handle_fault(&mut frames, PageId::new(2)).unwrap();
/// replacer.after_reference(&mut frames);
///
/// // Page 2 has fewer references, so it goes first
/// let evicted = replacer.handle_fault(&mut frames, PageId::new(3)).unwrap();
/// assert_eq!(evicted, Some(PageId::new(2)));
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct FrequencyReplacer;

impl FrequencyReplacer {
    /// Create a new frequency replacer.
    pub fn new() -> Self {
        Self
    }

    /// Lowest-index occupied slot with the smallest count.
    fn victim(slots: &[FrameSlot]) -> Option<FrameId> {
        slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| !slot.is_empty())
            .min_by_key(|(_, slot)| slot.ref_count())
            .map(|(index, _)| FrameId::new(index))
    }

    /// Swap the first strictly-smaller occupied slot into slot 0.
    fn promote_minimum(slots: &mut [FrameSlot]) {
        let Some(head) = slots.first() else {
            return;
        };

        let mut min_count = head.ref_count();
        let mut min_pos = 0;
        for (index, slot) in slots.iter().enumerate().skip(1) {
            if !slot.is_empty() && slot.ref_count() < min_count {
                min_count = slot.ref_count();
                min_pos = index;
            }
        }

        if min_pos != 0 {
            slots.swap(0, min_pos);
        }
    }
}

impl Replacer for FrequencyReplacer {
    fn policy(&self) -> Policy {
        Policy::Frequency
    }

    fn record_hit(&mut self, frames: &mut FrameSet, frame_id: FrameId) {
        frames.slot_mut(frame_id).record_reference();
    }

    fn handle_fault(&mut self, frames: &mut FrameSet, page_id: PageId) -> Result<Option<PageId>> {
        if !frames.is_full() {
            frames.insert_into_free_slot(page_id)?;
            return Ok(None);
        }

        let frame_id = Self::victim(frames.slots()).ok_or(Error::NoFreeFrames)?;
        let slot = frames.slot_mut(frame_id);
        let count = slot.ref_count();
        let evicted = slot.load(page_id);

        if let Some(victim) = evicted {
            debug!(
                "lru: evicted page {} (refs {}) from {} for page {}",
                victim, count, frame_id, page_id
            );
        }
        Ok(evicted)
    }

    fn after_reference(&mut self, frames: &mut FrameSet) {
        Self::promote_minimum(frames.slots_mut());
    }
}
