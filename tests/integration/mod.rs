//! Router and HTTP client tests

#[cfg(feature = "ssr")]
pub mod account_api;
pub mod http_client;
