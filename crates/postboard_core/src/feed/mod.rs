//! Merged feed state and projections.
//!
//! # Responsibility
//! - Own the page-level collections and flags.
//! - Project both sources into one filterable, ordered view.
//! - Route deletions to the collection that owns the target id.
//!
//! # Invariants
//! - Single writer per field: load methods write the remote collection and
//!   the `loading`/`error` flags; store methods write the local collection.
//! - The merged view never contains two posts with the same id.

pub mod session;
pub mod view;
