//! Ordered collection editing
//!
//! Positional mutation primitives for the document's entity lists. These
//! operate in place and assume the caller has already validated indices
//! against the current list length; out-of-range indices are a programming
//! error and panic, they are not a recoverable condition.

/// Entities addressable by their unique id
pub trait HasId {
    fn id(&self) -> &str;
}

/// Move the element at `from` to position `to` using splice semantics: the
/// element is removed first and reinserted against the shortened list.
/// No-op when `from == to`; relative order of all other elements is stable.
pub fn move_item<T>(list: &mut Vec<T>, from: usize, to: usize) {
    if from == to {
        return;
    }
    let item = list.remove(from);
    list.insert(to, item);
}

/// Prepend an item so the newest entry appears first
pub fn insert_front<T>(list: &mut Vec<T>, item: T) {
    list.insert(0, item);
}

/// Remove the element with the given id. Removing an absent id is a no-op.
pub fn remove_by_id<T: HasId>(list: &mut Vec<T>, id: &str) {
    list.retain(|item| item.id() != id);
}

/// Replace the element whose id matches `item`, keeping its position.
/// Deliberately never inserts; returns whether a replacement happened so
/// callers can report a missing id. Adding entries goes through the
/// dedicated create operations.
pub fn upsert_by_id<T: HasId>(list: &mut [T], item: T) -> bool {
    match list.iter_mut().find(|existing| existing.id() == item.id()) {
        Some(slot) => {
            *slot = item;
            true
        }
        None => false,
    }
}
