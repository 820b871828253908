/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Error type for the Rossum client
//!
//! Every non-2xx response that is not recovered by the single
//! re-authentication retry surfaces as [`AppError::Http`], carrying the
//! status code and the raw body. Callers branch on the status code.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors returned by the Rossum client
#[derive(Debug, Error)]
pub enum AppError {
    /// The server answered with a non-success status code
    #[error("HTTP status error {status}: {body}")]
    Http {
        /// Status code of the failed response
        status: StatusCode,
        /// Raw response body, possibly empty
        body: String,
    },

    /// The request could not be sent or its body could not be read
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// JSON could not be encoded or decoded
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The response JSON was valid but lacked a required field
    #[error("deserialization error: {0}")]
    Deserialization(String),

    /// The caller passed an unusable argument
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// I/O failure
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Status code of the response that caused this error, if any
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::Http { status, .. } => Some(*status),
            AppError::Network(e) => e.status(),
            _ => None,
        }
    }

    /// Whether the server answered `404 Not Found`
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }

    /// Whether the server answered `401 Unauthorized`
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }
}
