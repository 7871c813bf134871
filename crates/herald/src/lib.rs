//! The shared library for Herald, a Rust-based full-stack web application.
//!
//! This library provides the pieces used by both the frontend and backend:
//! the HTTP client, wire data structures, client configuration, the
//! framework-agnostic message view model, error types and logging.

pub mod api;
pub mod config;
pub mod data;
pub mod errors;
pub mod lifecycle;
pub mod log;
pub mod view;

pub use serde;
pub use serde_json;
pub use tracing;
