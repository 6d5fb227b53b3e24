//! Identity generation for document entities.
//!
//! Every entity the engine creates gets a `"{prefix}-{millis}-{suffix}"` id:
//! a human-readable namespace tag, the creation time in epoch milliseconds,
//! and a random hex suffix. The timestamp makes ids sortable by creation and
//! easy to eyeball; the random suffix keeps two ids minted in the same
//! millisecond from colliding. Callers never re-check for collisions.

use chrono::Utc;
use uuid::Uuid;

const SUFFIX_LEN: usize = 9;

/// Generate a fresh entity id under the given namespace prefix.
pub fn generate_id(prefix: &str) -> String {
    let millis = Utc::now().timestamp_millis();
    let hex = Uuid::new_v4().simple().to_string();
    format!("{}-{}-{}", prefix, millis, &hex[..SUFFIX_LEN])
}
