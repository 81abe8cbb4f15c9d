//! HTTP client module with response status classification.

mod client;
mod status;

pub use client::HttpClient;
pub use status::{check_status, describe_status_error};
