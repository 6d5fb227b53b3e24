//! # Folio Architecture
//!
//! Folio is a **UI-agnostic profile document engine**. It maintains two
//! parallel, independently structured content trees ("modes") describing a
//! personal profile, lets callers edit them through granular CRUD
//! operations, and commits or discards edits atomically. There is no
//! rendering, no widgets, no auth — a host application brings those and
//! calls the engine.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Host UI (not in this crate)                                │
//! │  - Editors, modals, drag-and-drop, auth                     │
//! │  - Re-reads engine accessors after each mutation            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Engine Layer (engine/)                                     │
//! │  - ProfileEngine<S>: draft + committed document pair        │
//! │  - CRUD/reorder mutations, dirty derivation                 │
//! │  - commit / discard / export / import                       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract ProfileStore trait                              │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Draft/Commit Duality
//!
//! The engine holds two structurally independent copies of the document:
//! the *draft* (every mutation applies here) and the *committed* snapshot
//! (the last persisted state). Dirtiness is derived, not stored:
//! `is_dirty = draft != committed`. `commit()` persists the draft and only
//! then promotes it; `discard()` reverts the draft wholesale. Nothing in the
//! engine is fatal: load failures fall back to the built-in template, stale
//! ids no-op, and failed commits leave the draft intact for retry.
//!
//! ## Concurrency Model
//!
//! Single-threaded and synchronous by design: there is exactly one mutator
//! (the local user) and one document per engine lifetime, so mutations run
//! to completion with no locking. The only I/O sits behind
//! [`store::ProfileStore`], and its success side effects apply strictly
//! after the store confirms.
//!
//! ## Module Overview
//!
//! - [`engine`]: the draft/commit engine — entry point for all operations
//! - [`model`]: the profile document types and built-in template
//! - [`ordering`]: contiguous order maintenance for list collections
//! - [`ident`]: entity id generation
//! - [`store`]: storage abstraction and implementations
//! - [`config`]: storage location configuration
//! - [`error`]: error types

pub mod config;
pub mod engine;
pub mod error;
pub mod ident;
pub mod model;
pub mod ordering;
pub mod store;
