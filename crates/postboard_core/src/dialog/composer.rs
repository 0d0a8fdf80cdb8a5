//! Composer dialog state machine.
//!
//! # Responsibility
//! - Track the closed/editing/submitting lifecycle of the creation dialog.
//! - Gate the single commit into [`LocalStore`] behind draft validation.
//!
//! # Invariants
//! - Staging and cancel input is accepted only while editing.
//! - The commit side effect runs exactly once per open session.
//! - The artificial submit latency elapses in full before the commit; the
//!   dialog is inert for its duration.

use crate::model::post::{DraftError, Post, PostDraft};
use crate::store::local_store::LocalStore;
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::mem;
use std::time::Duration;
use tokio::time::sleep;

/// Simulated network delay between the commit trigger and the commit side
/// effect. No real call happens; the delay exists so the submitting state is
/// observable. Tests inject [`Duration::ZERO`] via [`Composer::with_latency`].
pub const ARTIFICIAL_SUBMIT_LATENCY: Duration = Duration::from_millis(500);

/// Externally observable dialog phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposerPhase {
    Closed,
    Editing,
    Submitting,
}

/// What dismissed the dialog. Display-only distinction; all three routes
/// discard the draft identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelSignal {
    Button,
    EscapeKey,
    BackdropClick,
}

impl CancelSignal {
    fn as_str(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::EscapeKey => "escape_key",
            Self::BackdropClick => "backdrop_click",
        }
    }
}

#[derive(Debug)]
enum ComposerState {
    Closed,
    Editing { draft: PostDraft },
    Submitting { title: String, content: String },
}

/// Submit trigger rejected by the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// Trigger arrived while the dialog was closed.
    NotOpen,
    /// Second trigger while a commit was already in flight.
    AlreadySubmitting,
    /// Commit completion requested without a staged commit.
    NothingStaged,
    /// Staged draft fails validation; the dialog stays in editing.
    InvalidDraft(DraftError),
}

impl Display for SubmitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotOpen => write!(f, "composer is not open"),
            Self::AlreadySubmitting => write!(f, "a commit is already in flight"),
            Self::NothingStaged => write!(f, "no staged commit to complete"),
            Self::InvalidDraft(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SubmitError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidDraft(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DraftError> for SubmitError {
    fn from(value: DraftError) -> Self {
        Self::InvalidDraft(value)
    }
}

/// Modal dialog state machine guarding local post creation.
#[derive(Debug)]
pub struct Composer {
    state: ComposerState,
    latency: Duration,
}

impl Composer {
    pub fn new() -> Self {
        Self::with_latency(ARTIFICIAL_SUBMIT_LATENCY)
    }

    /// Creates a composer with a caller-chosen submit latency.
    pub fn with_latency(latency: Duration) -> Self {
        Self {
            state: ComposerState::Closed,
            latency,
        }
    }

    pub fn phase(&self) -> ComposerPhase {
        match self.state {
            ComposerState::Closed => ComposerPhase::Closed,
            ComposerState::Editing { .. } => ComposerPhase::Editing,
            ComposerState::Submitting { .. } => ComposerPhase::Submitting,
        }
    }

    /// Opens the dialog with empty staged fields.
    ///
    /// Ignored while a commit is in flight; re-opening during editing resets
    /// the draft.
    pub fn open(&mut self) {
        if matches!(self.state, ComposerState::Submitting { .. }) {
            return;
        }
        self.state = ComposerState::Editing {
            draft: PostDraft::default(),
        };
        debug!("event=composer_open module=dialog status=ok");
    }

    /// Stages title text. Ignored unless editing.
    pub fn set_title(&mut self, value: impl Into<String>) {
        if let ComposerState::Editing { draft } = &mut self.state {
            draft.title = value.into();
        }
    }

    /// Stages content text. Ignored unless editing.
    pub fn set_content(&mut self, value: impl Into<String>) {
        if let ComposerState::Editing { draft } = &mut self.state {
            draft.content = value.into();
        }
    }

    /// Currently staged title, empty outside of editing.
    pub fn title(&self) -> &str {
        match &self.state {
            ComposerState::Editing { draft } => &draft.title,
            _ => "",
        }
    }

    /// Currently staged content, empty outside of editing.
    pub fn content(&self) -> &str {
        match &self.state {
            ComposerState::Editing { draft } => &draft.content,
            _ => "",
        }
    }

    /// First failing validation rule for the staged draft, for inline
    /// display. `None` when the draft is clean or the dialog is not editing.
    pub fn draft_error(&self) -> Option<DraftError> {
        match &self.state {
            ComposerState::Editing { draft } => draft.validate().err(),
            _ => None,
        }
    }

    /// Whether the commit trigger is enabled.
    pub fn can_submit(&self) -> bool {
        matches!(&self.state, ComposerState::Editing { draft } if draft.validate().is_ok())
    }

    /// Dismisses the dialog without committing; reports whether it closed.
    ///
    /// Has no effect while closed or while a commit is in flight.
    pub fn cancel(&mut self, signal: CancelSignal) -> bool {
        if !matches!(self.state, ComposerState::Editing { .. }) {
            return false;
        }
        self.state = ComposerState::Closed;
        debug!(
            "event=composer_cancel module=dialog status=ok signal={}",
            signal.as_str()
        );
        true
    }

    /// Moves a valid draft into the submitting state.
    ///
    /// This is the double-commit guard: once submitting, further triggers
    /// fail until the commit completes and the dialog closes.
    pub fn begin_submit(&mut self) -> Result<(), SubmitError> {
        match &self.state {
            ComposerState::Closed => Err(SubmitError::NotOpen),
            ComposerState::Submitting { .. } => Err(SubmitError::AlreadySubmitting),
            ComposerState::Editing { draft } => {
                draft.validate()?;
                let trimmed = draft.trimmed();
                self.state = ComposerState::Submitting {
                    title: trimmed.title,
                    content: trimmed.content,
                };
                debug!("event=composer_submit module=dialog status=staged");
                Ok(())
            }
        }
    }

    /// Waits out the artificial latency, commits the staged draft exactly
    /// once, and closes the dialog.
    pub async fn finish_submit(&mut self, store: &mut LocalStore) -> Result<Post, SubmitError> {
        if !matches!(self.state, ComposerState::Submitting { .. }) {
            return Err(SubmitError::NothingStaged);
        }

        sleep(self.latency).await;

        let ComposerState::Submitting { title, content } =
            mem::replace(&mut self.state, ComposerState::Closed)
        else {
            return Err(SubmitError::NothingStaged);
        };

        let post = store.create(title, content);
        info!(
            "event=composer_commit module=dialog status=ok id={}",
            post.id
        );
        Ok(post)
    }

    /// Full submit flow: stage the commit, wait out the latency, commit.
    pub async fn submit(&mut self, store: &mut LocalStore) -> Result<Post, SubmitError> {
        self.begin_submit()?;
        self.finish_submit(store).await
    }
}

impl Default for Composer {
    fn default() -> Self {
        Self::new()
    }
}
