/// Base URL of the production Rossum API
pub const DEFAULT_BASE_URL: &str = "https://elis.rossum.ai/api/v1";
/// Path of the login endpoint, relative to the base URL
pub const LOGIN_PATH: &str = "auth/login";
/// Path of the logout endpoint, relative to the base URL
pub const LOGOUT_PATH: &str = "auth/logout";
/// Number of items requested per page on list endpoints
pub const DEFAULT_PAGE_SIZE: u32 = 100;
/// Transport timeout in seconds for a single request
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// User agent string used in HTTP requests to identify this client
pub const USER_AGENT: &str = concat!("rossum-client/", env!("CARGO_PKG_VERSION"));
/// Prefix of the `Authorization` header value
pub const AUTH_SCHEME: &str = "token";
