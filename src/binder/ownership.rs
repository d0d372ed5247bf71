//! Owned-card highlighting for binder slots.
//!
//! A binder may show the same card in several slots while the collection
//! owns fewer copies. Occurrences are counted in global slot order: the
//! k-th occurrence of a card is owned iff k <= the owned quantity.

use rustc_hash::FxHashMap;

use crate::cards::CardId;

use super::layout::BinderLayout;

/// Owned flag for every slot, in the same order as `slots`.
///
/// `slots[i]` is global slot `i + 1`. Empty slots are never owned.
#[must_use]
pub fn owned_flags(slots: &[Option<CardId>], owned: &FxHashMap<CardId, u32>) -> Vec<bool> {
    let mut seen: FxHashMap<&CardId, u32> = FxHashMap::default();
    slots
        .iter()
        .map(|slot| match slot {
            Some(card) => {
                let count = seen.entry(card).or_insert(0);
                *count += 1;
                *count <= owned.get(card).copied().unwrap_or(0)
            }
            None => false,
        })
        .collect()
}

/// Owned flags for the slots of one page.
///
/// Counting still starts from slot 1, so a duplicate's status on a later
/// page depends on the copies shown on earlier pages. Slots past the end
/// of `slots` are reported as not owned.
#[must_use]
pub fn page_owned_flags(
    layout: &BinderLayout,
    page: u32,
    slots: &[Option<CardId>],
    owned: &FxHashMap<CardId, u32>,
) -> Vec<bool> {
    let flags = owned_flags(slots, owned);
    layout
        .page_slots(page)
        .map(|slot| flags.get(slot as usize - 1).copied().unwrap_or(false))
        .collect()
}

/// Copies shown in the binder beyond what the collection owns, per card.
#[must_use]
pub fn missing_copies(slots: &[Option<CardId>], owned: &FxHashMap<CardId, u32>) -> FxHashMap<CardId, u32> {
    let mut shown: FxHashMap<&CardId, u32> = FxHashMap::default();
    for card in slots.iter().flatten() {
        *shown.entry(card).or_insert(0) += 1;
    }
    shown
        .into_iter()
        .filter_map(|(card, count)| {
            let have = owned.get(card).copied().unwrap_or(0);
            (count > have).then(|| (card.clone(), count - have))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: &str) -> Option<CardId> {
        Some(CardId::new(id))
    }

    fn owned(pairs: &[(&str, u32)]) -> FxHashMap<CardId, u32> {
        pairs.iter().map(|(id, n)| (CardId::new(*id), *n)).collect()
    }

    #[test]
    fn test_duplicates_counted_in_slot_order() {
        let slots = vec![card("bolt"), None, card("bolt"), card("ring"), card("bolt")];
        let flags = owned_flags(&slots, &owned(&[("bolt", 2)]));
        assert_eq!(flags, vec![true, false, true, false, false]);
    }

    #[test]
    fn test_prefixed_ids_counted_separately() {
        let slots = vec![card("c:x"), card("x")];
        let flags = owned_flags(&slots, &owned(&[("x", 1)]));
        assert_eq!(flags, vec![false, true]);
    }

    #[test]
    fn test_page_flags_continue_counting() {
        let layout = BinderLayout::new(1, 2);
        let slots = vec![card("a"), card("a"), card("a")];
        let owned = owned(&[("a", 2)]);

        assert_eq!(page_owned_flags(&layout, 1, &slots, &owned), vec![true, true]);
        // Third copy on page 2, plus one slot past the end.
        assert_eq!(page_owned_flags(&layout, 2, &slots, &owned), vec![false, false]);
        assert!(page_owned_flags(&layout, 0, &slots, &owned).is_empty());
    }

    #[test]
    fn test_missing_copies() {
        let slots = vec![card("a"), card("a"), card("a"), card("b"), None];
        let missing = missing_copies(&slots, &owned(&[("a", 1), ("b", 5)]));
        assert_eq!(missing.len(), 1);
        assert_eq!(missing.get(&CardId::new("a")), Some(&2));
    }
}
