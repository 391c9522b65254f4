//! Shared helpers for staging steps.

pub mod fs;
