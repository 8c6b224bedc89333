//! Tests for `intern` module

use super::intern::*;
use std::sync::Arc;

#[test]
fn test_intern_shares_allocation() {
    let mut pool = StringPool::new();

    let a = pool.intern("smile");
    let b = pool.intern("smile");

    // Same allocation, not just equal content
    assert!(Arc::ptr_eq(&a, &b));
    assert_eq!(pool.len(), 1);
}

#[test]
fn test_intern_distinct_content() {
    let mut pool = StringPool::new();

    let a = pool.intern("smile");
    let b = pool.intern("笑顔");

    assert!(!Arc::ptr_eq(&a, &b));
    assert_eq!(pool.len(), 2);
}

#[test]
fn test_intern_shared_deduplicates() {
    let mut pool = StringPool::new();

    let first = pool.intern("えがお");
    let outside: SharedStr = Arc::from("えがお");
    let second = pool.intern_shared(outside);

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(pool.len(), 1);
}

#[test]
fn test_purge_drops_unowned_entries() {
    let mut pool = StringPool::new();

    let kept = pool.intern("kept");
    {
        let _dropped = pool.intern("dropped");
    }
    assert_eq!(pool.len(), 2);

    pool.purge();

    assert_eq!(pool.len(), 1);
    // The surviving entry still deduplicates
    let again = pool.intern("kept");
    assert!(Arc::ptr_eq(&kept, &again));
}

#[test]
fn test_clear_leaves_outstanding_handles_valid() {
    let mut pool = StringPool::new();
    let handle = pool.intern("joy");

    pool.clear();

    assert!(pool.is_empty());
    assert_eq!(handle.as_ref(), "joy");
}

#[test]
fn test_contains_tracks_interned_strings() {
    let mut pool = StringPool::new();
    assert!(!pool.contains("smile"));

    let handle = pool.intern("smile");
    assert!(pool.contains("smile"));

    drop(handle);
    pool.purge();
    assert!(!pool.contains("smile"));
}
