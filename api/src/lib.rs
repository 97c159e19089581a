//! HTTP boundary for the console.
//!
//! One read-only call against the public demo endpoint; everything else in
//! the application is in-memory state.

mod client;
mod error;

pub use client::{ApiClient, BASE_URL, REQUEST_TIMEOUT};
pub use error::ApiError;
