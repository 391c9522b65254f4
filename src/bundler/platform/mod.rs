//! Platform-specific bundle handling.

pub mod macos;
