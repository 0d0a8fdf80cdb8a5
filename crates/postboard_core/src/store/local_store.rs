//! In-memory store for locally composed posts.
//!
//! # Responsibility
//! - Create, delete, and list user-created posts.
//! - Report mutations through return values so callers can react without
//!   threading callbacks through the layers.
//!
//! # Invariants
//! - Every stored id is `PostId::Local` and unique at assignment time.
//! - `list()` is most-recent-first; `create` prepends.
//! - Deleting an absent id is a no-op, not an error.

use crate::model::post::{Post, PostId};
use log::debug;
use uuid::Uuid;

/// Ordered in-memory collection of locally composed posts.
#[derive(Debug, Default)]
pub struct LocalStore {
    posts: Vec<Post>,
}

impl LocalStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a local post with a fresh id and `created_at = now`, prepends
    /// it, and returns it by value.
    pub fn create(&mut self, title: impl Into<String>, content: impl Into<String>) -> Post {
        let post = Post::local(title, content);
        debug!("event=local_create module=store status=ok id={}", post.id);
        self.posts.insert(0, post.clone());
        post
    }

    /// Removes the post with `id` if present; reports whether a removal
    /// occurred.
    pub fn delete(&mut self, id: Uuid) -> bool {
        let before = self.posts.len();
        self.posts.retain(|post| post.id != PostId::Local(id));
        let removed = self.posts.len() != before;
        debug!(
            "event=local_delete module=store status=ok id=local:{id} removed={removed}"
        );
        removed
    }

    /// Current collection, most-recent-first.
    pub fn list(&self) -> &[Post] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}
