//! External service interactions
//!
//! - Fetching from the recipe service
//! - Running fetches in the background

#[cfg(test)]
pub mod fake;
pub mod fetch;
pub mod fetch_runner;

pub use fetch::{FetchClient, HttpTransport, ResultSet};
pub use fetch_runner::{FetchCompletion, FetchRunner, PendingRequest};
