/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Authentication for the Rossum API
//!
//! Holds the credentials and the current session token. The token is plain
//! shared state: it can be read, replaced or cleared at any time, and every
//! request picks up whatever value is current when it is sent.

use crate::application::config::Config;
use crate::constants::{LOGIN_PATH, LOGOUT_PATH};
use crate::error::AppError;
use crate::model::http::{build_url, check_status, parse_json, send_request};
use crate::model::requests::LoginRequest;
use crate::model::responses::LoginResponse;
use reqwest::{Client, Method};
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, info};

/// Authentication manager for the Rossum API
///
/// Two concurrent calls that both hit a 401 will both log in; the last login
/// wins. The lock is only held for the read or write itself.
pub struct Auth {
    config: Arc<Config>,
    client: Client,
    token: RwLock<Option<String>>,
}

impl Auth {
    /// Creates a new Auth instance without a token
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials and API settings
    /// * `client` - HTTP client used for login and logout
    pub fn new(config: Arc<Config>, client: Client) -> Self {
        Self {
            config,
            client,
            token: RwLock::new(None),
        }
    }

    /// Returns the current token, if any
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replaces the current token
    ///
    /// Passing `None` forces a login before the next request.
    pub fn set_token(&self, token: Option<String>) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = token;
    }

    /// Logs in with the configured credentials and stores the new token
    ///
    /// # Returns
    /// * `Ok(String)` - The token now held
    /// * `Err(AppError::Http)` - If the login endpoint answered with a non-2xx status
    /// * `Err(AppError::Deserialization)` - If the response carried no `key`
    pub async fn authenticate(&self) -> Result<String, AppError> {
        let url = build_url(&self.config.rest_api.base_url, LOGIN_PATH);
        let body = LoginRequest {
            username: &self.config.credentials.username,
            password: &self.config.credentials.password,
        };

        info!("Logging in as {}", self.config.credentials.username);

        let response = send_request(&self.client, Method::POST, &url, None, &[], Some(&body)).await?;
        let response = check_status(response).await?;
        let login: LoginResponse = parse_json(response).await?;

        let token = login.key.ok_or_else(|| {
            AppError::Deserialization("login response has no `key` field".to_string())
        })?;

        if let Some(domain) = &login.domain {
            debug!("Session domain: {}", domain);
        }

        self.set_token(Some(token.clone()));
        info!("✓ Login successful");
        Ok(token)
    }

    /// Invalidates the session on the server and clears the local token
    ///
    /// The local token is cleared even when the server rejects the logout.
    pub async fn logout(&self) -> Result<(), AppError> {
        let Some(token) = self.token() else {
            debug!("No active session, nothing to log out");
            return Ok(());
        };

        info!("Logging out");

        let url = build_url(&self.config.rest_api.base_url, LOGOUT_PATH);
        let result = send_request(&self.client, Method::POST, &url, Some(&token), &[], None::<&()>).await;
        self.set_token(None);
        check_status(result?).await?;

        info!("✓ Logged out successfully");
        Ok(())
    }
}
