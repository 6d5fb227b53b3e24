//! Order maintenance for the document's list collections.
//!
//! Sections, content blocks, and tech stack items carry an `order` field that
//! must stay a contiguous `0..n-1` permutation matching the list's logical
//! sequence. Every list mutation in the engine funnels through [`renumber`]
//! (after adds and deletes) or [`reorder`] (explicit rearrangement), so the
//! invariant holds by construction. Social links implement [`Orderable`] too
//! but the engine deliberately skips renumbering them on delete.

use crate::model::{ContentBlock, ProfileSection, SocialLink, TechStackItem};
use std::collections::HashMap;

/// An entity that lives in an ordered, id-addressed collection.
pub trait Orderable {
    fn id(&self) -> &str;
    fn order(&self) -> u32;
    fn set_order(&mut self, order: u32);
}

macro_rules! impl_orderable {
    ($ty:ty) => {
        impl Orderable for $ty {
            fn id(&self) -> &str {
                &self.id
            }
            fn order(&self) -> u32 {
                self.order
            }
            fn set_order(&mut self, order: u32) {
                self.order = order;
            }
        }
    };
}

impl_orderable!(SocialLink);
impl_orderable!(ProfileSection);
impl_orderable!(ContentBlock);
impl_orderable!(TechStackItem);

/// Reassign contiguous zero-based `order` values, preserving relative order.
pub fn renumber<T: Orderable>(items: &mut [T]) {
    for (i, item) in items.iter_mut().enumerate() {
        item.set_order(i as u32);
    }
}

/// Rearrange `items` to match `ids`, then renumber.
///
/// Ids that name no current entity are silently dropped; entities whose id is
/// missing from `ids` are silently dropped from the result. Callers must pass
/// a permutation of all current ids to avoid losing entries.
pub fn reorder<T: Orderable>(items: Vec<T>, ids: &[String]) -> Vec<T> {
    let mut by_id: HashMap<String, T> = items
        .into_iter()
        .map(|item| (item.id().to_string(), item))
        .collect();
    let mut result: Vec<T> = ids.iter().filter_map(|id| by_id.remove(id)).collect();
    renumber(&mut result);
    result
}
