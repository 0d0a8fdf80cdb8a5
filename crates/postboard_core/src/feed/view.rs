//! Read-only merged projection over both collections.
//!
//! # Responsibility
//! - Filter posts by a case-insensitive substring match on title or content.
//! - Keep local posts first (most-recent-first) followed by remote posts in
//!   origin order.
//!
//! # Invariants
//! - Pure over its inputs; no mutation, no normalization.
//! - An empty search term includes everything.

use crate::model::post::Post;

/// Computes the merged display view for `search_term`.
///
/// `local` is expected most-recent-first and `remote` in origin order, which
/// are the orderings [`crate::store::local_store::LocalStore`] and the remote
/// loader already maintain; this projection preserves both.
pub fn merged_view(local: &[Post], remote: &[Post], search_term: &str) -> Vec<Post> {
    let needle = search_term.to_lowercase();
    local
        .iter()
        .chain(remote.iter())
        .filter(|post| matches_term(post, &needle))
        .cloned()
        .collect()
}

fn matches_term(post: &Post, needle_lower: &str) -> bool {
    if needle_lower.is_empty() {
        return true;
    }
    post.title.to_lowercase().contains(needle_lower)
        || post.content.to_lowercase().contains(needle_lower)
}
