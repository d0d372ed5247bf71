//! Binder page layout and slot addressing.
//!
//! A binder is a sequence of pages, each a `rows x columns` grid. Slots are
//! numbered globally from 1, page by page, row-major within a page.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Page/row/column coordinates of a slot, all 1-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SlotAddress {
    pub page: u32,
    pub row: u32,
    pub column: u32,
}

impl SlotAddress {
    /// Create a slot address.
    #[must_use]
    pub const fn new(page: u32, row: u32, column: u32) -> Self {
        Self { page, row, column }
    }
}

impl std::fmt::Display for SlotAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "p{} r{} c{}", self.page, self.row, self.column)
    }
}

/// Grid shape of a binder page.
///
/// ## Example
///
/// ```
/// use deckhaven::binder::{BinderLayout, SlotAddress};
///
/// let layout = BinderLayout::new(3, 3);
/// assert_eq!(layout.address_of(10), Some(SlotAddress::new(2, 1, 1)));
/// assert_eq!(layout.slot_of(SlotAddress::new(2, 1, 1)), Some(10));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinderLayout {
    pub rows: u32,
    pub columns: u32,
}

impl Default for BinderLayout {
    /// The common 9-pocket page.
    fn default() -> Self {
        Self { rows: 3, columns: 3 }
    }
}

impl BinderLayout {
    /// Create a layout.
    ///
    /// Panics if either dimension is zero.
    #[must_use]
    pub fn new(rows: u32, columns: u32) -> Self {
        assert!(rows > 0 && columns > 0, "Binder pages need at least one row and column");
        Self { rows, columns }
    }

    /// Slots on one page. `None` when the grid is empty or its size does
    /// not fit in a `u32`; such a layout has no addressable slots.
    #[must_use]
    pub fn slots_per_page(&self) -> Option<u32> {
        // Deserialized layouts skip the `new` check.
        self.rows.checked_mul(self.columns).filter(|&n| n > 0)
    }

    /// Coordinates of a global slot number. `None` for slot 0.
    #[must_use]
    pub fn address_of(&self, slot: u32) -> Option<SlotAddress> {
        let index = slot.checked_sub(1)?;
        let per_page = self.slots_per_page()?;
        let within = index % per_page;
        Some(SlotAddress {
            page: index / per_page + 1,
            row: within / self.columns + 1,
            column: within % self.columns + 1,
        })
    }

    /// Global slot number of an address. `None` if any coordinate is out
    /// of range or the result overflows.
    #[must_use]
    pub fn slot_of(&self, address: SlotAddress) -> Option<u32> {
        let SlotAddress { page, row, column } = address;
        if page == 0 || row == 0 || column == 0 || row > self.rows || column > self.columns {
            return None;
        }
        let within = (row - 1).checked_mul(self.columns)?.checked_add(column)?;
        (page - 1)
            .checked_mul(self.slots_per_page()?)?
            .checked_add(within)
    }

    /// Pages needed to hold `total_slots` slots (at least one).
    #[must_use]
    pub fn page_count(&self, total_slots: u32) -> u32 {
        match self.slots_per_page() {
            None => 1,
            Some(per_page) => total_slots.div_ceil(per_page).max(1),
        }
    }

    /// Global slot numbers on a page. Empty for page 0 and for layouts
    /// without addressable slots.
    #[must_use]
    pub fn page_slots(&self, page: u32) -> RangeInclusive<u32> {
        let Some(per_page) = self.slots_per_page() else {
            return RangeInclusive::new(1, 0);
        };
        if page == 0 {
            return RangeInclusive::new(1, 0);
        }
        let first = (page - 1).saturating_mul(per_page).saturating_add(1);
        first..=first.saturating_add(per_page - 1)
    }
}
