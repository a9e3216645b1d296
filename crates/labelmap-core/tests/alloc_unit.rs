//! Unit tests for the label allocator.
//!
//! These live in `tests/` rather than inline: they exercise the allocator
//! against `RunRegion`, and the dev-dependency cycle with
//! `labelmap-region` means inline `#[cfg(test)]` tests would see a second
//! copy of this crate's traits.

use labelmap_core::alloc::allocate_label;
use labelmap_core::{Error, LabelStore, LabelValue, new_handle};
use labelmap_region::RunRegion;

fn store_with<L: LabelValue>(labels: &[L]) -> LabelStore<RunRegion<L>> {
    let mut store = LabelStore::new();
    for &label in labels {
        store.insert_or_replace(label, new_handle(label));
    }
    store
}

#[test]
fn test_empty_store_bootstrap() {
    let store: LabelStore<RunRegion<u32>> = LabelStore::new();
    assert_eq!(allocate_label(&store, 0), Ok(1));
    assert_eq!(allocate_label(&store, 5), Ok(0));
}

#[test]
fn test_appends_past_last_not_first_gap() {
    // {2} with background 0 allocates 3, never the gap at 1
    let store = store_with(&[2u32]);
    assert_eq!(allocate_label(&store, 0), Ok(3));
}

#[test]
fn test_append_skips_background() {
    // last + 1 is the background, so last + 2 is taken
    let store = store_with(&[1u32, 2]);
    assert_eq!(allocate_label(&store, 3), Ok(4));
}

#[test]
fn test_falls_back_below_first() {
    // last sits at the type maximum, so the slot below first is used
    let store = store_with(&[200u8, u8::MAX]);
    assert_eq!(allocate_label(&store, 0), Ok(199));
}

#[test]
fn test_gap_scan_when_boundaries_blocked() {
    // top of range taken and first - 1 is the background
    let store = store_with(&[1u8, 3, u8::MAX]);
    assert_eq!(allocate_label(&store, 0), Ok(2));
}

#[test]
fn test_gap_scan_skips_background() {
    // first sits at the type minimum and last at the maximum, so only
    // the scan remains; it must step over the background at 4
    let store = store_with(&[0u8, 1, 2, 3, u8::MAX]);
    assert_eq!(allocate_label(&store, 4), Ok(5));
}

#[test]
fn test_full_label_space() {
    let labels: Vec<u8> = (1..=u8::MAX).collect();
    let store = store_with(&labels);
    assert_eq!(allocate_label(&store, 0), Err(Error::MapFull));
}

#[test]
fn test_signed_labels_use_negative_range() {
    // top of range taken: the slot below the smallest label is negative
    let store = store_with(&[-1i8, i8::MAX]);
    assert_eq!(allocate_label(&store, 0), Ok(-2));
}
