//! Owned page-level feed state.
//!
//! # Responsibility
//! - Hold the remote display set, the local store, and the load flags.
//! - Drive the one-shot remote load lifecycle and its explicit retries.
//! - Route deletions by id namespace.
//!
//! # Invariants
//! - Only the load methods write the remote collection, `loading`, and
//!   `error`; only the local store writes the local collection.
//! - Removing a remote post affects this display set only; the origin is
//!   never mutated and a fresh load restores the full collection.

use crate::feed::view::merged_view;
use crate::model::post::{Post, PostId};
use crate::remote::loader::{FetchError, FetchResult, RemoteClient};
use crate::store::local_store::LocalStore;
use log::{debug, info, warn};

/// Page-scoped feed state: both collections plus the remote-load flags.
///
/// Single-threaded by design; every method runs as a reaction to a user
/// action or to the completion of the one asynchronous fetch.
#[derive(Debug, Default)]
pub struct FeedSession {
    remote: Vec<Post>,
    local: LocalStore,
    loading: bool,
    error: Option<FetchError>,
    loaded: bool,
}

impl FeedSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the remote load as in flight and clears any previous error.
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
        debug!("event=remote_load module=feed status=start");
    }

    /// Applies a completed fetch.
    ///
    /// Success replaces the remote display set in full; failure records the
    /// error and leaves the previous display set untouched so an earlier
    /// successful load stays visible behind the retry affordance.
    pub fn apply_remote_result(&mut self, result: FetchResult<Vec<Post>>) {
        self.loading = false;
        match result {
            Ok(posts) => {
                info!(
                    "event=remote_load module=feed status=ok count={}",
                    posts.len()
                );
                self.remote = posts;
                self.loaded = true;
            }
            Err(err) => {
                warn!("event=remote_load module=feed status=error detail={err}");
                self.error = Some(err);
            }
        }
    }

    /// Runs the full load lifecycle against `client`.
    ///
    /// Called once on page mount; calling it again is the explicit retry,
    /// which re-runs the whole fetch (no partial resume). Returns whether
    /// the load succeeded.
    pub async fn load(&mut self, client: &RemoteClient) -> bool {
        self.begin_load();
        let result = client.fetch_posts().await;
        self.apply_remote_result(result);
        self.error.is_none()
    }

    /// Merged, filtered display projection. Pure over current state.
    pub fn view(&self, search_term: &str) -> Vec<Post> {
        merged_view(self.local.list(), &self.remote, search_term)
    }

    /// Routes a delete request to the collection owning `id`.
    ///
    /// Local ids delegate to the local store; remote ids are removed from
    /// this page's display set only. A missing id is a no-op returning
    /// `false` in both branches.
    pub fn delete(&mut self, id: &PostId) -> bool {
        let removed = match id {
            PostId::Local(local_id) => self.local.delete(*local_id),
            PostId::Remote(_) => {
                let before = self.remote.len();
                self.remote.retain(|post| post.id != *id);
                self.remote.len() != before
            }
        };
        debug!("event=delete_routed module=feed status=ok id={id} removed={removed}");
        removed
    }

    /// Whether the one asynchronous fetch is currently outstanding.
    pub fn loading(&self) -> bool {
        self.loading
    }

    /// Terminal error of the most recent load attempt, if it failed.
    pub fn error(&self) -> Option<&FetchError> {
        self.error.as_ref()
    }

    /// Whether any load has completed successfully this page lifetime.
    pub fn has_loaded(&self) -> bool {
        self.loaded
    }

    /// Remote display set, origin order minus display-only removals.
    pub fn remote(&self) -> &[Post] {
        &self.remote
    }

    pub fn local(&self) -> &LocalStore {
        &self.local
    }

    /// Mutable local store handle for the composer commit path.
    pub fn local_mut(&mut self) -> &mut LocalStore {
        &mut self.local
    }
}
