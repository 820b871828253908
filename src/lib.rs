/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # Rossum Client
//!
//! Async client for the Rossum REST API.
//!
//! The client exposes uniform CRUD operations over any resource collection
//! (`workspaces`, `queues`, `annotations`, ...) and takes care of:
//! - Logging in with username and password on first use
//! - Re-authenticating once when the server answers `401 Unauthorized`
//! - Walking paginated list endpoints lazily, one page per request
//!
//! Resources are handled as dynamic JSON mappings; typed models are left to
//! the caller.
//!
//! # Example
//! ```ignore
//! use futures::TryStreamExt;
//! use rossum_client::prelude::*;
//!
//! let client = ApiClient::new("username", "password")?;
//!
//! let workspace = client.fetch_one("workspaces", 7694).await?;
//! let queues: Vec<Resource> = client.fetch_all("queues", &[]).try_collect().await?;
//! ```

/// Application layer: configuration, authentication and the API client
pub mod application;
/// Library-wide constants
pub mod constants;
/// Error type shared by every fallible operation
pub mod error;
/// Request, response and resource models
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// Environment and logging helpers
pub mod utils;

pub use application::config;

/// Crate version, as declared in `Cargo.toml`
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the crate version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
