/// Authentication and session token handling
pub mod auth;
/// API client with transparent re-authentication and pagination
pub mod client;
/// Application configuration module
pub mod config;
/// Service interfaces implemented by the client
pub mod interfaces;
