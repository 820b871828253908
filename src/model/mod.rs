/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
/// HTTP request helpers shared by login and authenticated requests
pub mod http;
/// Request models for API calls
pub mod requests;
/// Dynamic resource payloads and identifiers
pub mod resource;
/// Response models from API calls
pub mod responses;
