/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Client for the Rossum API
//!
//! Every operation goes through [`ApiClient::request`], which:
//! - Logs in first when no token is held
//! - Sends `Authorization: token <token>`
//! - On `401 Unauthorized`, logs in once more and retries exactly once
//!
//! # Example
//! ```ignore
//! use rossum_client::prelude::*;
//!
//! let client = ApiClient::new("username", "password")?;
//! let workspace = client.fetch_one("workspaces", 7694).await?;
//! ```

use crate::application::auth::Auth;
use crate::application::config::Config;
use crate::application::interfaces::resource::ResourceService;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::model::http::{build_url, check_status, ensure_same_origin, parse_json, send_request};
use crate::model::resource::{Resource, ResourceId};
use crate::model::responses::PageEnvelope;
use async_trait::async_trait;
use futures::stream::{self, BoxStream, StreamExt, TryStreamExt};
use reqwest::{Client as HttpClient, Method, Response, StatusCode};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Client for the Rossum API with automatic authentication
pub struct ApiClient {
    auth: Arc<Auth>,
    http_client: HttpClient,
    config: Arc<Config>,
}

/// Where the next page of a listing comes from
enum PageCursor {
    First {
        path: String,
        query: Vec<(String, String)>,
    },
    Next(String),
    Done,
}

impl ApiClient {
    /// Creates a client for the default base URL
    ///
    /// No request is made; the first operation logs in.
    ///
    /// # Arguments
    /// * `username` - Account username
    /// * `password` - Account password
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Result<Self, AppError> {
        Self::with_config(Config::with_credentials(username, password))
    }

    /// Creates a client from an explicit configuration
    pub fn with_config(config: Config) -> Result<Self, AppError> {
        let config = Arc::new(config);

        let http_client = HttpClient::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()?;

        let auth = Arc::new(Auth::new(config.clone(), http_client.clone()));

        Ok(Self {
            auth,
            http_client,
            config,
        })
    }

    /// Creates a client configured from the environment (see [`Config::new`])
    pub fn from_env() -> Result<Self, AppError> {
        Self::with_config(Config::new())
    }

    /// Returns the current token, if any
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.auth.token()
    }

    /// Replaces the current token
    ///
    /// Use it to reuse a token obtained elsewhere, or pass `None` to force a
    /// login on the next request.
    pub fn set_token(&self, token: Option<String>) {
        self.auth.set_token(token);
    }

    /// Logs in and stores the new token
    pub async fn authenticate(&self) -> Result<String, AppError> {
        self.auth.authenticate().await
    }

    /// Logs out and clears the current token
    pub async fn logout(&self) -> Result<(), AppError> {
        self.auth.logout().await
    }

    /// Gets the configuration in use
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Gets Auth reference
    pub fn auth(&self) -> &Auth {
        &self.auth
    }

    /// Sends an authenticated request
    ///
    /// # Arguments
    /// * `method` - HTTP method
    /// * `path` - Path relative to the base URL, or an absolute URL
    /// * `query` - Query parameters
    /// * `body` - Optional JSON body
    ///
    /// # Returns
    /// * `Ok(Response)` - A 2xx response, body unread
    /// * `Err(AppError::Http)` - Any other status, after at most one re-authentication
    /// * `Err(AppError::InvalidInput)` - If `path` is an absolute URL on another origin
    pub async fn request<B: Serialize + Sync + ?Sized>(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        body: Option<&B>,
    ) -> Result<Response, AppError> {
        let url = build_url(&self.config.rest_api.base_url, path);
        ensure_same_origin(&self.config.rest_api.base_url, &url)?;

        let token = match self.auth.token() {
            Some(token) => token,
            None => {
                info!("No active session, logging in");
                self.auth.authenticate().await?
            }
        };

        let response = send_request(
            &self.http_client,
            method.clone(),
            &url,
            Some(&token),
            query,
            body,
        )
        .await?;

        if response.status() != StatusCode::UNAUTHORIZED {
            return check_status(response).await;
        }

        // A second 401 is a real authorization failure, not an expired token
        warn!("Token rejected for {} {}, logging in again and retrying", method, url);
        let token = self.auth.authenticate().await?;
        let response =
            send_request(&self.http_client, method, &url, Some(&token), query, body).await?;
        check_status(response).await
    }

    async fn fetch_page(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<PageEnvelope, AppError> {
        let response = self.request(Method::GET, path, query, None::<&()>).await?;
        let page: PageEnvelope = parse_json(response).await?;
        debug!(
            "Fetched page of {} items from {}, next: {:?}",
            page.results.len(),
            path,
            page.next_page()
        );
        Ok(page)
    }
}

fn collection_path(resource: &str) -> Result<String, AppError> {
    let resource = resource.trim_matches('/');
    if resource.is_empty() {
        return Err(AppError::InvalidInput(
            "resource name must not be empty".to_string(),
        ));
    }
    Ok(resource.to_string())
}

fn item_path(resource: &str, id: ResourceId) -> Result<String, AppError> {
    let segment = id.as_str();
    if segment.is_empty() || segment == "." || segment == ".." {
        return Err(AppError::InvalidInput(format!(
            "invalid resource id {segment:?}"
        )));
    }
    Ok(format!(
        "{}/{}",
        collection_path(resource)?,
        urlencoding::encode(segment)
    ))
}

#[async_trait]
impl ResourceService for ApiClient {
    async fn fetch_one<I>(&self, resource: &str, id: I) -> Result<Resource, AppError>
    where
        I: Into<ResourceId> + Send,
    {
        let path = item_path(resource, id.into())?;
        let response = self.request(Method::GET, &path, &[], None::<&()>).await?;
        parse_json(response).await
    }

    fn fetch_all<'a>(
        &'a self,
        resource: &str,
        query: &[(&str, &str)],
    ) -> BoxStream<'a, Result<Resource, AppError>> {
        let path = match collection_path(resource) {
            Ok(path) => path,
            Err(e) => return stream::once(async move { Err(e) }).boxed(),
        };

        let mut params = vec![("page_size".to_string(), self.config.page_size.to_string())];
        params.extend(query.iter().map(|(k, v)| (k.to_string(), v.to_string())));

        let first = PageCursor::First {
            path,
            query: params,
        };

        stream::try_unfold(first, move |cursor| async move {
            let page = match cursor {
                PageCursor::First { path, query } => self.fetch_page(&path, &query).await?,
                // The next link already carries its query string
                PageCursor::Next(url) => self.fetch_page(&url, &[]).await?,
                PageCursor::Done => return Ok::<_, AppError>(None),
            };

            let next = match page.next_page() {
                Some(url) => PageCursor::Next(url.to_string()),
                None => PageCursor::Done,
            };

            Ok::<_, AppError>(Some((page.results, next)))
        })
        .map_ok(|results| stream::iter(results.into_iter().map(Ok::<Resource, AppError>)))
        .try_flatten()
        .boxed()
    }

    async fn create<D>(&self, resource: &str, data: &D) -> Result<Resource, AppError>
    where
        D: Serialize + Sync + ?Sized,
    {
        let path = collection_path(resource)?;
        let response = self.request(Method::POST, &path, &[], Some(data)).await?;
        parse_json(response).await
    }

    async fn replace<I, D>(&self, resource: &str, id: I, data: &D) -> Result<Resource, AppError>
    where
        I: Into<ResourceId> + Send,
        D: Serialize + Sync + ?Sized,
    {
        let path = item_path(resource, id.into())?;
        let response = self.request(Method::PUT, &path, &[], Some(data)).await?;
        parse_json(response).await
    }

    async fn update<I, D>(&self, resource: &str, id: I, data: &D) -> Result<Resource, AppError>
    where
        I: Into<ResourceId> + Send,
        D: Serialize + Sync + ?Sized,
    {
        let path = item_path(resource, id.into())?;
        let response = self.request(Method::PATCH, &path, &[], Some(data)).await?;
        parse_json(response).await
    }

    async fn delete<I>(&self, resource: &str, id: I) -> Result<(), AppError>
    where
        I: Into<ResourceId> + Send,
    {
        let path = item_path(resource, id.into())?;
        self.request(Method::DELETE, &path, &[], None::<&()>).await?;
        Ok(())
    }
}
