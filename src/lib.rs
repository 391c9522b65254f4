//! Electron runtime staging library.
//!
//! This library packages a pre-built application source tree together with a
//! vendored Electron runtime distribution into a staged output directory:
//! - darwin/x64 (`Electron.app` bundle, optionally renamed and rebranded)
//! - linux/x64, linux/ia32 (flat layout)
//! - win32/x64, win32/ia32 (flat layout)
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod bundler;
pub mod cli;
pub mod error;
pub mod metadata;

// Re-export commonly used types
pub use bundler::{StageOptions, StagedApp, Stager, stage};
pub use error::{BundlerError, CliError, PLUGIN_NAME, Result};
