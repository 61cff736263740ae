//! Wire types for the posting service API — plain JSON with serde.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A post as returned by the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub board: String,
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    pub author: String,
    #[serde(default)]
    pub score: i64,
    pub created_at: DateTime<Utc>,
    /// Populated when fetching a single post; list endpoints omit it.
    #[serde(default)]
    pub comments: Vec<Comment>,
}

/// A comment on a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub post_id: String,
    #[serde(default)]
    pub parent_id: Option<String>,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
}

/// A board (topic community) on the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    pub name: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub subscribers: u64,
}

/// The authenticated account's profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub karma: i64,
    pub created_at: DateTime<Utc>,
}

/// Service health/status response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub ok: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Body for creating a post.
#[derive(Debug, Clone, Serialize)]
pub struct CreatePostRequest {
    pub board: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Body for creating a comment.
#[derive(Debug, Clone, Serialize)]
pub struct CreateCommentRequest {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}

/// Vote direction on a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteDirection {
    Up,
    Down,
}

impl VoteDirection {
    /// Path segment used by the vote endpoint.
    pub fn as_path(&self) -> &'static str {
        match self {
            VoteDirection::Up => "upvote",
            VoteDirection::Down => "downvote",
        }
    }
}

impl fmt::Display for VoteDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_path())
    }
}

/// Error body the service returns on non-2xx responses.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
