//! Services shared by the frontend components.

pub mod api;
