//! FrameSet - the fixed-capacity set of resident pages.

use log::debug;

use crate::common::{Error, FrameId, PageId, Result};
use crate::frames::FrameSlot;

/// Fixed-length, ordered sequence of [`FrameSlot`]s.
///
/// # Layout
/// ```text
/// ┌──────────────────────────────────────────────┐
/// │ slots: Vec<FrameSlot>   (len == capacity)    │
/// │  [0: Some(p)] [1: Some(q)] [2: None] ...     │
/// │   ▲ replacers keep their victim at index 0   │
/// └──────────────────────────────────────────────┘
/// ```
///
/// # Invariants
/// - `slots.len() == capacity` for the whole run
/// - At most `capacity` slots are occupied
/// - Once full, the set stays full: nothing is removed without a
///   replacement being loaded in the same step
///
/// There is no public remove. Eviction belongs to the replacers, which
/// mutate the slots through crate-internal accessors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSet {
    slots: Vec<FrameSlot>,
}

impl FrameSet {
    /// Allocate a frame set with `capacity` free slots.
    ///
    /// # Errors
    /// - `Error::InvalidCapacity` if `capacity` is 0
    /// - `Error::AllocationFailure` if the slots cannot be reserved
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidCapacity(capacity));
        }

        let mut slots = Vec::new();
        slots.try_reserve_exact(capacity)?;
        slots.resize(capacity, FrameSlot::new());

        debug!("Allocated frame set with {} slots", capacity);
        Ok(Self { slots })
    }

    // ========================================================================
    // Membership
    // ========================================================================

    /// Check if `page_id` is resident. O(capacity).
    #[inline]
    pub fn contains(&self, page_id: PageId) -> bool {
        self.find(page_id).is_some()
    }

    /// Find the slot holding `page_id`.
    pub fn find(&self, page_id: PageId) -> Option<FrameId> {
        self.slots
            .iter()
            .position(|slot| slot.holds(page_id))
            .map(FrameId::new)
    }

    /// Check if no slot is free.
    pub fn is_full(&self) -> bool {
        self.slots.iter().all(|slot| !slot.is_empty())
    }

    /// Load `page_id` into the lowest-index free slot with a zero count.
    ///
    /// # Errors
    /// - `Error::NoFreeFrames` if the set is already full
    pub fn insert_into_free_slot(&mut self, page_id: PageId) -> Result<FrameId> {
        let index = self
            .slots
            .iter()
            .position(FrameSlot::is_empty)
            .ok_or(Error::NoFreeFrames)?;

        self.slots[index].load(page_id);
        Ok(FrameId::new(index))
    }

    // ========================================================================
    // Read access
    // ========================================================================

    /// Number of slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| !slot.is_empty()).count()
    }

    /// Check if no page is resident.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(FrameSlot::is_empty)
    }

    /// All slots in order.
    #[inline]
    pub fn slots(&self) -> &[FrameSlot] {
        &self.slots
    }

    /// Get one slot.
    ///
    /// # Panics
    /// Panics if `frame_id` is out of range.
    #[inline]
    pub fn slot(&self, frame_id: FrameId) -> &FrameSlot {
        &self.slots[frame_id.0]
    }

    /// Resident pages in slot order.
    pub fn resident_pages(&self) -> impl Iterator<Item = PageId> + '_ {
        self.slots.iter().filter_map(FrameSlot::occupant)
    }

    // ========================================================================
    // Internal: replacer access
    // ========================================================================

    #[inline]
    pub(crate) fn slot_mut(&mut self, frame_id: FrameId) -> &mut FrameSlot {
        &mut self.slots[frame_id.0]
    }

    #[inline]
    pub(crate) fn slots_mut(&mut self) -> &mut [FrameSlot] {
        &mut self.slots
    }
}
