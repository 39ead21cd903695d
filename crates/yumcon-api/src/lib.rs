//! Reqwest client for the yum repository-management HTTP API.

mod client;
mod http;
mod models;

pub use client::YumClient;
pub use http::ApiError;
