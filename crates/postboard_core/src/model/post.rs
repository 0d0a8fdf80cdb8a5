//! Post domain model.
//!
//! # Responsibility
//! - Define the canonical post record for both remote and local sources.
//! - Provide draft validation for the composer path.
//! - Derive display projections (content preview, creation date label).
//!
//! # Invariants
//! - `PostId::Remote` and `PostId::Local` are never compared across
//!   namespaces; equality holds only within the same variant.
//! - `owner` is meaningful only for remote posts.
//! - `created_at` is meaningful only for local posts.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Title cap applied to locally composed posts. Remote titles are accepted
/// as-is.
pub const TITLE_MAX_CHARS: usize = 100;

/// Content cap applied to locally composed posts. Remote bodies may be
/// arbitrarily long; display goes through [`Post::preview`].
pub const CONTENT_MAX_CHARS: usize = 500;

/// Default character budget for content previews.
pub const PREVIEW_MAX_CHARS: usize = 160;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Identifier carrying its owning namespace.
///
/// The remote origin assigns numeric ids; local posts get a fresh v4 UUID
/// at creation time, so rapid successive creations cannot collide. The two
/// variants never compare equal, which is what keeps deletion routing from
/// cross-contaminating the collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "source", content = "value", rename_all = "snake_case")]
pub enum PostId {
    /// Assigned by the remote origin; unique within the remote collection.
    Remote(u64),
    /// Generated at creation time; unique within the local collection.
    Local(Uuid),
}

impl PostId {
    /// Returns the namespace tag for this id.
    pub fn source(&self) -> PostSource {
        match self {
            Self::Remote(_) => PostSource::Remote,
            Self::Local(_) => PostSource::Local,
        }
    }
}

impl Display for PostId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Remote(id) => write!(f, "remote:{id}"),
            Self::Local(id) => write!(f, "local:{id}"),
        }
    }
}

/// Owning collection of a post, fixed for its whole lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostSource {
    Remote,
    Local,
}

/// Canonical post record for both collections.
///
/// One flat shape serves both sources; source-specific fields stay optional
/// so the merged view can carry either kind without copying.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Namespace-tagged identifier; determines the owning collection.
    pub id: PostId,
    pub title: String,
    pub content: String,
    /// Opaque foreign-user reference. Meaningful only for remote posts.
    pub owner: Option<u64>,
    /// Creation instant. Meaningful only for local posts; drives the
    /// most-recent-first ordering and the display date label.
    pub created_at: Option<DateTime<Utc>>,
}

impl Post {
    /// Builds a post normalized from a remote origin record.
    pub fn remote(
        id: u64,
        title: impl Into<String>,
        content: impl Into<String>,
        owner: u64,
    ) -> Self {
        Self {
            id: PostId::Remote(id),
            title: title.into(),
            content: content.into(),
            owner: Some(owner),
            created_at: None,
        }
    }

    /// Builds a locally composed post with a fresh id and `created_at = now`.
    pub fn local(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self::local_at(Uuid::new_v4(), Utc::now(), title, content)
    }

    /// Builds a local post with caller-provided identity and timestamp.
    ///
    /// Used by tests that need deterministic ids and instants.
    pub fn local_at(
        id: Uuid,
        created_at: DateTime<Utc>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: PostId::Local(id),
            title: title.into(),
            content: content.into(),
            owner: None,
            created_at: Some(created_at),
        }
    }

    /// Returns which collection owns this post.
    pub fn source(&self) -> PostSource {
        self.id.source()
    }

    /// Derives a whitespace-collapsed content preview capped at `max_chars`.
    ///
    /// `truncated` tells the renderer whether an expand affordance applies.
    pub fn preview(&self, max_chars: usize) -> ContentPreview {
        let collapsed = WHITESPACE_RE.replace_all(self.content.trim(), " ");
        if collapsed.chars().count() <= max_chars {
            return ContentPreview {
                text: collapsed.into_owned(),
                truncated: false,
            };
        }

        let mut text: String = collapsed.chars().take(max_chars).collect();
        text.truncate(text.trim_end().len());
        text.push_str("...");
        ContentPreview {
            text,
            truncated: true,
        }
    }

    /// Formats the creation date for card display.
    ///
    /// Returns `None` for remote posts, which carry no creation instant.
    pub fn created_label(&self) -> Option<String> {
        self.created_at
            .map(|instant| instant.format("%b %d, %Y").to_string())
    }
}

/// Content preview projection for card display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentPreview {
    /// Whitespace-collapsed text, ellipsis-terminated when truncated.
    pub text: String,
    /// Whether the full content exceeds the preview budget.
    pub truncated: bool,
}

/// Staged composer input, pre-validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
}

impl PostDraft {
    /// Returns a copy with surrounding whitespace removed from both fields.
    pub fn trimmed(&self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            content: self.content.trim().to_string(),
        }
    }

    /// Checks the composer rules against the trimmed fields.
    ///
    /// Reports the first failing rule; a clean draft commits verbatim after
    /// trimming.
    pub fn validate(&self) -> Result<(), DraftError> {
        let trimmed = self.trimmed();

        if trimmed.title.is_empty() {
            return Err(DraftError::EmptyTitle);
        }
        let title_chars = trimmed.title.chars().count();
        if title_chars > TITLE_MAX_CHARS {
            return Err(DraftError::TitleTooLong {
                chars: title_chars,
                max: TITLE_MAX_CHARS,
            });
        }

        if trimmed.content.is_empty() {
            return Err(DraftError::EmptyContent);
        }
        let content_chars = trimmed.content.chars().count();
        if content_chars > CONTENT_MAX_CHARS {
            return Err(DraftError::ContentTooLong {
                chars: content_chars,
                max: CONTENT_MAX_CHARS,
            });
        }

        Ok(())
    }
}

/// Validation failure for a staged composer draft.
///
/// Surfaced inline next to the offending field; never escalated further.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftError {
    EmptyTitle,
    EmptyContent,
    TitleTooLong { chars: usize, max: usize },
    ContentTooLong { chars: usize, max: usize },
}

impl Display for DraftError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "title must not be empty"),
            Self::EmptyContent => write!(f, "content must not be empty"),
            Self::TitleTooLong { chars, max } => {
                write!(f, "title has {chars} characters, limit is {max}")
            }
            Self::ContentTooLong { chars, max } => {
                write!(f, "content has {chars} characters, limit is {max}")
            }
        }
    }
}

impl Error for DraftError {}
