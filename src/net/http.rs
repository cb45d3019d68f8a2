//! Outbound request pipeline: bearer attachment and refresh-on-401.
//!
//! DESIGN
//! ======
//! `dispatch` is the single path every JSON call takes. It attaches the
//! stored credential unless the caller set one explicitly, and on a first
//! 401 it performs exactly one refresh followed by exactly one resend. The
//! refresh call is a bare transport send so it can never re-enter this
//! pipeline. A failed refresh clears the stored session and surfaces the
//! *original* 401, never a refresh-specific error.
//!
//! The transport and token storage are trait seams so the whole policy is
//! exercised on the host with scripted fakes.

#![allow(async_fn_in_trait)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::error::{ApiError, error_message};

/// Base URL of the marketplace REST API.
#[cfg(feature = "csr")]
pub const API_BASE_URL: &str = "https://api.natakahii.com/api/v1";

/// Refresh endpoint used by the retry branch.
pub const REFRESH_PATH: &str = "/auth/refresh";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

/// One outbound JSON call, described as data so fakes can record it.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<serde_json::Value>,
    /// Explicit `Authorization` value; `None` means "attach the stored
    /// credential if there is one".
    pub auth: Option<String>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self { method: Method::Get, path: path.into(), body: None, auth: None }
    }

    pub fn post(path: impl Into<String>, body: Option<serde_json::Value>) -> Self {
        Self { method: Method::Post, path: path.into(), body, auth: None }
    }

    pub fn patch(path: impl Into<String>, body: Option<serde_json::Value>) -> Self {
        Self { method: Method::Patch, path: path.into(), body, auth: None }
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self { method: Method::Delete, path: path.into(), body: None, auth: None }
    }
}

/// Raw response: status plus the unparsed body text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Decode` when the body does not match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_str(&self.body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Sends a described request and returns the raw response. Transport-level
/// failures (no response at all) are `ApiError::Network`.
pub trait Transport {
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, ApiError>;
}

/// Credential storage as seen by the pipeline: read the current token,
/// replace it after a successful refresh, clear everything when refresh
/// proves the session dead.
pub trait TokenSource {
    fn token(&self) -> Option<String>;
    fn store_refreshed(&self, token: &str);
    fn clear(&self);
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Attach the stored credential, keeping any explicitly set value.
pub fn attach_token(request: &mut ApiRequest, token: Option<&str>) {
    if request.auth.is_none() {
        if let Some(token) = token {
            request.auth = Some(bearer(token));
        }
    }
}

/// What to do with a response status, given whether this logical request
/// already went through the refresh branch once.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RetryDecision {
    Propagate,
    RefreshAndRetry,
}

pub fn retry_decision(status: u16, already_retried: bool) -> RetryDecision {
    if status == 401 && !already_retried {
        RetryDecision::RefreshAndRetry
    } else {
        RetryDecision::Propagate
    }
}

/// Result of the one permitted refresh attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RefreshOutcome {
    Refreshed(String),
    Failed,
}

#[derive(Deserialize)]
struct RefreshBody {
    #[serde(default)]
    token: Option<String>,
}

/// Exchange the current credential for a fresh one. A bare transport send:
/// the refresh call itself is never intercepted.
pub async fn request_refresh<T: Transport>(transport: &T, token: Option<&str>) -> RefreshOutcome {
    let mut request = ApiRequest::post(REFRESH_PATH, None);
    attach_token(&mut request, token);
    let Ok(response) = transport.send(&request).await else {
        return RefreshOutcome::Failed;
    };
    if !response.ok() {
        return RefreshOutcome::Failed;
    }
    match response.json::<RefreshBody>() {
        Ok(RefreshBody { token: Some(token) }) if !token.is_empty() => {
            RefreshOutcome::Refreshed(token)
        }
        _ => RefreshOutcome::Failed,
    }
}

fn classify(response: ApiResponse) -> Result<ApiResponse, ApiError> {
    if response.ok() {
        Ok(response)
    } else {
        let message = error_message(&response.body, response.status);
        Err(ApiError::Status { status: response.status, message })
    }
}

/// Send `request` with the full session policy applied.
///
/// # Errors
///
/// `ApiError::Network` when no response arrived, `ApiError::Status` for any
/// non-success status after the retry policy ran its course.
pub async fn dispatch<T: Transport, S: TokenSource>(
    transport: &T,
    tokens: &S,
    mut request: ApiRequest,
) -> Result<ApiResponse, ApiError> {
    attach_token(&mut request, tokens.token().as_deref());
    let first = transport.send(&request).await?;
    match retry_decision(first.status, false) {
        RetryDecision::Propagate => classify(first),
        // the refresh exchanges the stale credential for a fresh one
        RetryDecision::RefreshAndRetry => match request_refresh(transport, tokens.token().as_deref()).await {
            RefreshOutcome::Refreshed(token) => {
                tokens.store_refreshed(&token);
                request.auth = Some(bearer(&token));
                let second = transport.send(&request).await?;
                // A repeat 401 is final for this logical request.
                classify(second)
            }
            RefreshOutcome::Failed => {
                log::error!("token refresh failed; clearing stored session");
                tokens.clear();
                classify(first)
            }
        },
    }
}

/// Percent-encode a query-string value (RFC 3986 unreserved set kept).
pub fn encode_query_value(raw: &str) -> String {
    let mut encoded = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char);
            }
            _ => encoded.push_str(&format!("%{byte:02X}")),
        }
    }
    encoded
}

/// Browser transport over `gloo-net`, rooted at [`API_BASE_URL`].
#[cfg(feature = "csr")]
#[derive(Clone, Debug)]
pub struct GlooTransport {
    base: String,
}

#[cfg(feature = "csr")]
impl Default for GlooTransport {
    fn default() -> Self {
        Self { base: API_BASE_URL.to_owned() }
    }
}

#[cfg(feature = "csr")]
impl Transport for GlooTransport {
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, ApiError> {
        use gloo_net::http::Request;

        let url = format!("{}{}", self.base, request.path);
        let mut builder = match request.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Patch => Request::patch(&url),
            Method::Delete => Request::delete(&url),
        };
        builder = builder.header("Accept", "application/json");
        if let Some(auth) = &request.auth {
            builder = builder.header("Authorization", auth);
        }
        let response = match &request.body {
            Some(body) => builder
                .json(body)
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await,
            None => builder.send().await,
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Ok(ApiResponse { status, body })
    }
}
