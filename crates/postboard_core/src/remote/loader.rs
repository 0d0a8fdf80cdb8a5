//! HTTP loader and normalization for the remote origin.
//!
//! # Responsibility
//! - One-shot GET against the fixed collection endpoints.
//! - Map the origin's record shape onto [`Post`] / [`RemoteUser`].
//!
//! # Invariants
//! - Non-2xx responses and transport failures both surface as [`FetchError`].
//! - No automatic retry; a caller-triggered retry re-runs the full fetch.
//! - Normalization is pure and callable without a network.

use crate::model::post::Post;
use crate::model::user::RemoteUser;
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Duration;

/// Fixed collection origin used when no override is supplied.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

const TRANSPORT_TIMEOUT_SECS: u64 = 10;

pub type FetchResult<T> = Result<T, FetchError>;

/// Remote load failure, recoverable through an explicit caller retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Connect, timeout, or body-decode failure below the HTTP status layer.
    Transport { url: String, message: String },
    /// The origin answered with a non-success status.
    Status { url: String, status: u16 },
}

impl Display for FetchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport { url, message } => {
                write!(f, "remote fetch failed for `{url}`: {message}")
            }
            Self::Status { url, status } => {
                write!(f, "remote endpoint `{url}` returned status {status}")
            }
        }
    }
}

impl Error for FetchError {}

/// Raw post record as served by the origin.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPostRecord {
    pub id: u64,
    pub title: String,
    /// Body-like field; becomes [`Post::content`].
    pub body: String,
    /// Foreign-key-like field; becomes [`Post::owner`].
    #[serde(rename = "userId")]
    pub user_id: u64,
}

/// Raw user record as served by the origin. Unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RawUserRecord {
    pub id: u64,
    pub name: String,
    pub email: String,
}

/// Normalizes raw origin posts into the domain model, preserving origin
/// order.
pub fn normalize_posts(records: Vec<RawPostRecord>) -> Vec<Post> {
    records
        .into_iter()
        .map(|record| Post::remote(record.id, record.title, record.body, record.user_id))
        .collect()
}

/// Normalizes raw origin users, preserving origin order.
pub fn normalize_users(records: Vec<RawUserRecord>) -> Vec<RemoteUser> {
    records
        .into_iter()
        .map(|record| RemoteUser {
            id: record.id,
            name: record.name,
            email: record.email,
        })
        .collect()
}

/// HTTP client for the remote origin.
///
/// Built once per page; holds no response state. The transport timeout is
/// the only timeout in the load path, and its expiry surfaces as a
/// [`FetchError::Transport`] like any other failure.
#[derive(Debug, Clone)]
pub struct RemoteClient {
    http: reqwest::Client,
    base_url: String,
}

impl RemoteClient {
    /// Creates a client against [`DEFAULT_BASE_URL`].
    pub fn new() -> FetchResult<Self> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a client against a caller-provided origin.
    pub fn with_base_url(base_url: impl Into<String>) -> FetchResult<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(TRANSPORT_TIMEOUT_SECS))
            .build()
            .map_err(|err| FetchError::Transport {
                url: base_url.clone(),
                message: err.to_string(),
            })?;

        Ok(Self { http, base_url })
    }

    /// Fetches and normalizes the full remote post collection.
    pub async fn fetch_posts(&self) -> FetchResult<Vec<Post>> {
        let url = format!("{}/posts", self.base_url);
        let records: Vec<RawPostRecord> = self.get_json(&url).await?;
        debug!(
            "event=remote_fetch module=remote status=ok url={url} count={}",
            records.len()
        );
        Ok(normalize_posts(records))
    }

    /// Fetches and normalizes the remote user collection.
    pub async fn fetch_users(&self) -> FetchResult<Vec<RemoteUser>> {
        let url = format!("{}/users", self.base_url);
        let records: Vec<RawUserRecord> = self.get_json(&url).await?;
        debug!(
            "event=remote_fetch module=remote status=ok url={url} count={}",
            records.len()
        );
        Ok(normalize_users(records))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> FetchResult<T> {
        debug!("event=remote_fetch module=remote status=start url={url}");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|err| FetchError::Transport {
                url: url.to_string(),
                message: err.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(
                "event=remote_fetch module=remote status=error url={url} http_status={}",
                status.as_u16()
            );
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.json::<T>().await.map_err(|err| {
            warn!("event=remote_fetch module=remote status=error url={url} kind=decode");
            FetchError::Transport {
                url: url.to_string(),
                message: err.to_string(),
            }
        })
    }
}
