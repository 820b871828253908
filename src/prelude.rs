/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # Rossum Client Prelude
//!
//! Brings the commonly used types and traits into scope.
//!
//! ## Usage
//!
//! ```rust
//! use rossum_client::prelude::*;
//!
//! let config = Config::with_credentials("username", "password");
//! assert_eq!(config.page_size, 100);
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the Rossum API client
pub use crate::config::{Config, Credentials, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// CLIENT AND AUTHENTICATION
// ============================================================================

/// Authentication manager holding the session token
pub use crate::application::auth::Auth;

/// API client
pub use crate::application::client::ApiClient;

/// CRUD interface implemented by the client
pub use crate::application::interfaces::resource::ResourceService;

// ============================================================================
// MODELS
// ============================================================================

/// Dynamic resource payload and identifier
pub use crate::model::resource::{Resource, ResourceId};

/// List response envelope
pub use crate::model::responses::{PageEnvelope, Pagination};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;
