//! FrameSlot - one unit of capacity in the frame set.
//!
//! A [`FrameSlot`] holds at most one resident page plus the metadata the
//! replacers need:
//! - Which page is loaded (if any)
//! - How many references it has served since loading

use crate::common::PageId;

/// A slot in the frame set.
///
/// Slots are plain values. The frame set owns them in a `Vec` and the
/// replacers reorder them by swapping or rotating, so a slot's position is
/// part of the policy state while its contents travel with the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameSlot {
    /// Which page is currently loaded, or None if the slot is free.
    occupant: Option<PageId>,

    /// References satisfied from this slot since the page was loaded.
    ///
    /// Unused by FIFO. The frequency replacer evicts the smallest count.
    ref_count: u64,
}

impl FrameSlot {
    /// Create a new free slot.
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // State queries
    // ========================================================================

    /// Get the page loaded in this slot.
    #[inline]
    pub fn occupant(&self) -> Option<PageId> {
        self.occupant
    }

    /// Get the reference count of the loaded page.
    #[inline]
    pub fn ref_count(&self) -> u64 {
        self.ref_count
    }

    /// Check if the slot is free (no page loaded).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }

    /// Check if the slot holds `page_id`.
    #[inline]
    pub fn holds(&self, page_id: PageId) -> bool {
        self.occupant == Some(page_id)
    }

    // ========================================================================
    // Mutation (crate-internal, driven by the frame set and replacers)
    // ========================================================================

    /// Load a page, replacing any previous occupant and zeroing the count.
    ///
    /// Returns the page that was displaced, if any.
    pub(crate) fn load(&mut self, page_id: PageId) -> Option<PageId> {
        self.ref_count = 0;
        self.occupant.replace(page_id)
    }

    /// Count one more reference served from this slot.
    #[inline]
    pub(crate) fn record_reference(&mut self) {
        self.ref_count = self.ref_count.saturating_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_new() {
        let slot = FrameSlot::new();
        assert!(slot.is_empty());
        assert_eq!(slot.occupant(), None);
        assert_eq!(slot.ref_count(), 0);
    }

    #[test]
    fn test_slot_load() {
        let mut slot = FrameSlot::new();

        assert_eq!(slot.load(PageId::new(3)), None);
        assert!(slot.holds(PageId::new(3)));
        assert!(!slot.holds(PageId::new(4)));
        assert!(!slot.is_empty());
    }

    #[test]
    fn test_slot_reload_resets_count() {
        let mut slot = FrameSlot::new();
        slot.load(PageId::new(1));
        slot.record_reference();
        slot.record_reference();
        assert_eq!(slot.ref_count(), 2);

        // Displaced page is reported and the counter starts over
        assert_eq!(slot.load(PageId::new(2)), Some(PageId::new(1)));
        assert_eq!(slot.ref_count(), 0);
        assert_eq!(slot.occupant(), Some(PageId::new(2)));
    }
}
