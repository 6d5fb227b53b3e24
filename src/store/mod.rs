//! # Storage Layer
//!
//! The engine persists exactly one blob: the committed [`Profile`]. The
//! [`ProfileStore`] trait abstracts where that blob lives so the engine can
//! run against different backends.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with [`memory::InMemoryStore`] (no filesystem needed)
//! - Allow **future backends** (browser storage, a remote blob store) without
//!   changing engine logic
//! - Keep the draft/commit contract **decoupled** from persistence details
//!
//! ## Contract
//!
//! - `load` returns `Ok(None)` when nothing was ever committed. It returns
//!   `Err` only for real failures (unreadable file, corrupt JSON); the engine
//!   treats those as recoverable and falls back to the built-in template.
//! - `save` is all-or-nothing. The engine applies no success side effect
//!   (replacing its committed snapshot) until `save` returns `Ok`.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, a single `profile.json` written
//!   atomically (temp file + rename) in an OS-appropriate data directory.
//! - [`memory::InMemoryStore`]: in-memory storage for tests, plus fixtures
//!   (including a store whose saves always fail) behind the `test_utils`
//!   feature.

use crate::error::Result;
use crate::model::Profile;

pub mod fs;
pub mod memory;

/// Abstract interface for profile persistence.
pub trait ProfileStore {
    /// Load the last committed profile, or `None` if nothing is stored.
    fn load(&self) -> Result<Option<Profile>>;

    /// Durably store a profile. Must be all-or-nothing.
    fn save(&mut self, profile: &Profile) -> Result<()>;
}
