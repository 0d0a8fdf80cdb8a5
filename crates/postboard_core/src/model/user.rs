//! Remote user display record.
//!
//! Users come only from the remote origin and are read-only; the feed never
//! creates, mutates, or deletes them. Kept separate from [`crate::model::post`]
//! because users carry no local counterpart.

use serde::{Deserialize, Serialize};

/// Normalized remote user, used for display grouping only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteUser {
    /// Origin-assigned numeric id.
    pub id: u64,
    pub name: String,
    pub email: String,
}
