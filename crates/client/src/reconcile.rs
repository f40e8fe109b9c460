//! Local list reconciliation.
//!
//! After a mutation succeeds, the screen's local copy of a server list
//! is updated in place instead of re-fetched. Three shapes cover every
//! mutation in the app:
//!
//! - removal: moderation resolution, cart/wishlist removal
//! - field patch: account suspension, order status change
//! - id-list append/move: cart and wishlist membership
//!
//! All helpers are pure over the collection they receive and idempotent,
//! so a retried mutation that reports success twice leaves the list in
//! the same state.

/// Remove every item whose key matches `target`.
///
/// Returns `true` when anything was removed. Removing an absent key is
/// a no-op.
pub fn remove_item<T, K, F>(items: &mut Vec<T>, key: F, target: &K) -> bool
where
    K: PartialEq,
    F: Fn(&T) -> K,
{
    let before = items.len();
    items.retain(|item| key(item) != *target);
    items.len() != before
}

/// Apply `patch` to the first item whose key matches `target`.
///
/// Returns `true` when an item was patched; `false` leaves the list
/// untouched (the row may have been removed by another screen already).
pub fn patch_item<T, K, F, P>(items: &mut [T], key: F, target: &K, patch: P) -> bool
where
    K: PartialEq,
    F: Fn(&T) -> K,
    P: FnOnce(&mut T),
{
    match items.iter_mut().find(|item| key(item) == *target) {
        Some(item) => {
            patch(item);
            true
        }
        None => false,
    }
}

/// Append `id` to a membership list unless it is already present.
///
/// Returns `true` when the id was appended.
pub fn append_id<K: PartialEq>(ids: &mut Vec<K>, id: K) -> bool {
    if ids.contains(&id) {
        false
    } else {
        ids.push(id);
        true
    }
}

/// Move `id` from one membership list to another.
///
/// The wishlist-to-cart move: drop from `from`, append to `to` without
/// duplicating. Safe when the id is missing from `from` or already in
/// `to`.
pub fn move_id<K: PartialEq>(from: &mut Vec<K>, to: &mut Vec<K>, id: K) {
    from.retain(|existing| *existing != id);
    append_id(to, id);
}
