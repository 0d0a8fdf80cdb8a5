//! Core domain logic for Postboard.
//! This crate is the single source of truth for feed invariants; rendering
//! layers consume it through [`FeedSession`], [`Composer`], and the model
//! projections.

pub mod dialog;
pub mod feed;
pub mod logging;
pub mod model;
pub mod remote;
pub mod store;

pub use dialog::composer::{
    CancelSignal, Composer, ComposerPhase, SubmitError, ARTIFICIAL_SUBMIT_LATENCY,
};
pub use feed::session::FeedSession;
pub use feed::view::merged_view;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::post::{
    ContentPreview, DraftError, Post, PostDraft, PostId, PostSource, CONTENT_MAX_CHARS,
    PREVIEW_MAX_CHARS, TITLE_MAX_CHARS,
};
pub use model::user::RemoteUser;
pub use remote::loader::{
    normalize_posts, normalize_users, FetchError, FetchResult, RawPostRecord, RawUserRecord,
    RemoteClient, DEFAULT_BASE_URL,
};
pub use store::local_store::LocalStore;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
