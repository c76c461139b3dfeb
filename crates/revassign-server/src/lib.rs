//! HTTP server.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod errors;
mod handlers;
mod health;
mod metrics;
pub mod server;
#[cfg(test)]
mod tests;
mod types;

pub use errors::{Result, ServerError};
