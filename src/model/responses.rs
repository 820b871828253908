/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::model::resource::Resource;
use serde::Deserialize;

/// Response to a successful login
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    /// Session token to send in the `Authorization` header
    pub key: Option<String>,
    /// Organization domain the account belongs to
    #[serde(default)]
    pub domain: Option<String>,
}

/// Pagination metadata attached to list responses
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Pagination {
    /// Absolute URL of the next page, `None` on the last page
    #[serde(default)]
    pub next: Option<String>,
    /// Absolute URL of the previous page
    #[serde(default)]
    pub previous: Option<String>,
    /// Total number of items across all pages
    #[serde(default)]
    pub total: Option<u64>,
    /// Total number of pages
    #[serde(default)]
    pub total_pages: Option<u64>,
}

/// One page of a list endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct PageEnvelope {
    /// Items on this page, in server order
    pub results: Vec<Resource>,
    /// Pagination block, as sent by the API
    #[serde(default)]
    pub pagination: Option<Pagination>,
    /// Top-level next link, used by endpoints without a pagination block
    #[serde(default)]
    pub next: Option<String>,
}

impl PageEnvelope {
    /// URL of the page following this one, if any
    ///
    /// `pagination.next` wins over a top-level `next`. Empty strings count as absent.
    #[must_use]
    pub fn next_page(&self) -> Option<&str> {
        self.pagination
            .as_ref()
            .and_then(|p| p.next.as_deref())
            .or(self.next.as_deref())
            .filter(|url| !url.is_empty())
    }
}
