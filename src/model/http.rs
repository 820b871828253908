/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

use crate::constants::AUTH_SCHEME;
use crate::error::AppError;
use reqwest::{Client, Method, Response, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, trace};

/// Joins a path onto the base URL
///
/// Absolute URLs (`http://` / `https://`) are returned untouched, so links
/// handed out by the API (resource `url` fields, `next` pages) can be
/// requested directly.
#[must_use]
pub fn build_url(base_url: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        path.to_string()
    } else {
        format!(
            "{}/{}",
            base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// Checks that `url` lives on the same origin (scheme, host, port) as `base_url`
///
/// The session token must never be sent anywhere else, so absolute URLs
/// pointing at a foreign host are rejected with [`AppError::InvalidInput`].
pub fn ensure_same_origin(base_url: &str, url: &str) -> Result<(), AppError> {
    let base = Url::parse(base_url)
        .map_err(|e| AppError::InvalidInput(format!("invalid base URL {base_url}: {e}")))?;
    let target =
        Url::parse(url).map_err(|e| AppError::InvalidInput(format!("invalid URL {url}: {e}")))?;

    if base.origin() != target.origin() {
        return Err(AppError::InvalidInput(format!(
            "refusing to send credentials to {}, expected origin {}",
            target.origin().ascii_serialization(),
            base.origin().ascii_serialization()
        )));
    }
    Ok(())
}

/// Sends a single HTTP request
///
/// No status handling happens here: whatever the server answers is returned
/// so the caller can decide whether to re-authenticate.
///
/// # Arguments
///
/// * `client` - The HTTP client to use for the request
/// * `method` - HTTP method
/// * `url` - Full URL to request
/// * `token` - Session token, sent as `Authorization: token <token>` when present
/// * `query` - Query parameters appended to the URL
/// * `body` - Optional request body (serialized to JSON)
///
/// # Returns
///
/// * `Ok(Response)` - The response, whatever its status
/// * `Err(AppError)` - If the request could not be sent
pub async fn send_request<B: Serialize + ?Sized>(
    client: &Client,
    method: Method,
    url: &str,
    token: Option<&str>,
    query: &[(String, String)],
    body: Option<&B>,
) -> Result<Response, AppError> {
    debug!("{} {}", method, url);

    let mut request = client
        .request(method, url)
        .header("Accept", "application/json");

    if let Some(token) = token {
        request = request.header("Authorization", format!("{AUTH_SCHEME} {token}"));
    }

    if !query.is_empty() {
        request = request.query(query);
    }

    if let Some(b) = body {
        request = request.json(b);
    }

    let response = request.send().await?;
    debug!("Response status: {}", response.status());

    Ok(response)
}

/// Passes successful responses through and turns everything else into [`AppError::Http`]
pub async fn check_status(response: Response) -> Result<Response, AppError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => format!("<failed to read response body: {e}>"),
    };
    trace!("Request failed with status {}", status);
    Err(AppError::Http { status, body })
}

/// Parses a response body as JSON
pub async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}
