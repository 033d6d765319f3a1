//! HTTP networking module
//!
//! Provides HTTP client functionality for making requests to the upstream
//! search provider.

mod client;

pub use client::HttpClient;
