//! Guarded post composition.
//!
//! # Responsibility
//! - Stage and validate new-post input before it reaches the local store.
//!
//! # Invariants
//! - At most one commit per open session.
//! - Once a commit is in flight it cannot be cancelled; it will occur.

pub mod composer;
