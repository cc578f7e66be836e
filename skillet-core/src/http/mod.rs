//! HTTP transport for the recipe catalog API.

mod client;

pub use client::{ApiHttpClient, HttpClient, MockClient, MockResponse};
