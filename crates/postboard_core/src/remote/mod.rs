//! Remote origin access.
//!
//! # Responsibility
//! - Fetch the read-only remote collections over HTTP.
//! - Normalize raw origin records into the domain model.
//!
//! # Invariants
//! - The origin is never mutated; all writes stay local to the page.
//! - A failed fetch surfaces a typed error; retry is always caller-driven.

pub mod loader;
