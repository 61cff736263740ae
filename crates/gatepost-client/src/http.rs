//! Blocking HTTP transport with bearer-token auth.

use gatepost_core::errors::{ApiError, GatepostResult};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::protocol::{
    Board, Comment, CreateCommentRequest, CreatePostRequest, ErrorBody, Post, Profile,
    ServiceStatus, VoteDirection,
};

/// Default API endpoint; override with `GATEPOST_API_URL`.
pub const DEFAULT_BASE_URL: &str = "https://api.perchline.social/v1";

/// Synchronous client for the posting service.
///
/// One thin method per endpoint; no retries, no response caching. Request
/// logs carry method and path only, never bodies.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    api_key: String,
    http: reqwest::blocking::Client,
}

impl ApiClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            http: reqwest::blocking::Client::new(),
        }
    }

    /// Build a client from `GATEPOST_API_KEY` and optional `GATEPOST_API_URL`.
    pub fn from_env() -> GatepostResult<Self> {
        let api_key = std::env::var("GATEPOST_API_KEY").map_err(|_| ApiError::MissingApiKey)?;
        let base_url =
            std::env::var("GATEPOST_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Ok(Self::with_base_url(api_key, base_url))
    }

    // ── Endpoints ──────────────────────────────────────────────────────────

    pub fn status(&self) -> GatepostResult<ServiceStatus> {
        self.get("status", &[])
    }

    pub fn me(&self) -> GatepostResult<Profile> {
        self.get("me", &[])
    }

    pub fn create_post(&self, req: &CreatePostRequest) -> GatepostResult<Post> {
        self.post("posts", req)
    }

    pub fn list_posts(
        &self,
        board: Option<&str>,
        sort: &str,
        limit: u32,
    ) -> GatepostResult<Vec<Post>> {
        let limit = limit.to_string();
        let mut query = vec![("sort", sort), ("limit", limit.as_str())];
        if let Some(board) = board {
            query.push(("board", board));
        }
        self.get("posts", &query)
    }

    pub fn get_post(&self, id: &str) -> GatepostResult<Post> {
        self.get(&format!("posts/{id}"), &[])
    }

    pub fn delete_post(&self, id: &str) -> GatepostResult<()> {
        let url = self.url(&format!("posts/{id}"));
        tracing::debug!(%url, "DELETE");
        let resp = self
            .http
            .delete(&url)
            .bearer_auth(&self.api_key)
            .send()
            .map_err(network_error)?;
        Self::check_status(resp).map(|_| ())
    }

    pub fn vote(&self, id: &str, direction: VoteDirection) -> GatepostResult<()> {
        let url = self.url(&format!("posts/{id}/{}", direction.as_path()));
        tracing::debug!(%url, "POST");
        let resp = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .send()
            .map_err(network_error)?;
        Self::check_status(resp).map(|_| ())
    }

    pub fn create_comment(
        &self,
        post_id: &str,
        req: &CreateCommentRequest,
    ) -> GatepostResult<Comment> {
        self.post(&format!("posts/{post_id}/comments"), req)
    }

    pub fn search(&self, query: &str, limit: u32) -> GatepostResult<Vec<Post>> {
        let limit = limit.to_string();
        self.get("search", &[("q", query), ("limit", limit.as_str())])
    }

    pub fn list_boards(&self) -> GatepostResult<Vec<Board>> {
        self.get("boards", &[])
    }

    pub fn subscribe(&self, board: &str) -> GatepostResult<()> {
        let url = self.url(&format!("boards/{board}/subscribe"));
        tracing::debug!(%url, "POST");
        let resp = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .send()
            .map_err(network_error)?;
        Self::check_status(resp).map(|_| ())
    }

    // ── Transport plumbing ─────────────────────────────────────────────────

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> GatepostResult<T> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");
        let resp = self
            .http
            .get(&url)
            .query(query)
            .bearer_auth(&self.api_key)
            .send()
            .map_err(network_error)?;
        Self::decode(Self::check_status(resp)?)
    }

    fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> GatepostResult<T> {
        let url = self.url(path);
        tracing::debug!(%url, "POST");
        let resp = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .map_err(network_error)?;
        Self::decode(Self::check_status(resp)?)
    }

    fn check_status(
        resp: reqwest::blocking::Response,
    ) -> GatepostResult<reqwest::blocking::Response> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let body: ErrorBody = resp.json().unwrap_or_default();
        Err(ApiError::Status {
            status: status.as_u16(),
            message: body.error.unwrap_or_else(|| "unspecified error".to_string()),
        }
        .into())
    }

    fn decode<T: DeserializeOwned>(resp: reqwest::blocking::Response) -> GatepostResult<T> {
        resp.json().map_err(|e| {
            ApiError::BadResponse {
                reason: e.to_string(),
            }
            .into()
        })
    }
}

fn network_error(e: reqwest::Error) -> gatepost_core::errors::GatepostError {
    // reqwest errors name the URL and cause, never the request body.
    ApiError::Network {
        reason: e.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let client = ApiClient::with_base_url("key", "https://example.test/api/");
        assert_eq!(client.url("posts"), "https://example.test/api/posts");
    }

    #[test]
    fn default_base_url_is_versioned() {
        assert!(DEFAULT_BASE_URL.ends_with("/v1"));
    }
}
