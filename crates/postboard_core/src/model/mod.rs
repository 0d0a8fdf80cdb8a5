//! Domain model for the dual-source post feed.
//!
//! # Responsibility
//! - Define the canonical post record shared by the remote and local
//!   collections.
//! - Keep the two id namespaces incomparable at the type level.
//!
//! # Invariants
//! - A post's owning collection is derivable from its `PostId` variant.
//! - A post never migrates between the remote and local namespaces.

pub mod post;
pub mod user;
