//! Mutable local collection.
//!
//! # Responsibility
//! - Hold user-created posts for the lifetime of the hosting page.
//!
//! # Invariants
//! - Ordering is most-recent-first; creation prepends.
//! - Contents are in-memory only and die with the page.

pub mod local_store;
