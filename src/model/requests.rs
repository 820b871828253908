use serde::Serialize;

/// Body of the login request
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    /// Account username
    pub username: &'a str,
    /// Account password
    pub password: &'a str,
}
