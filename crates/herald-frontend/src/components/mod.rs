//! UI components for the Herald frontend.

pub mod message_view;

pub use message_view::*;
