//! Staging orchestration and its steps.
//!
//! This module provides the [`Stager`] orchestrator that turns a runtime
//! distribution plus application sources into a staged output directory.
//!
//! # Overview
//!
//! The stager:
//! 1. Checks inputs with [`preflight`]
//! 2. Recreates the build dir and copies the runtime ([`stage`])
//! 3. Installs the sources ([`source`])
//! 4. Applies branding ([`branding`])
//! 5. Digests the staged tree ([`checksum`])
//!
//! # Module Organization
//!
//! - [`branding`] - executable, icon, Info.plist and bundle renaming
//! - [`checksum`] - SHA256 of the staged tree
//! - [`layout`] - step outputs and the final [`StagedApp`] report
//! - [`orchestrator`] - the [`Stager`] itself
//! - [`preflight`] - input validation before any write
//! - [`source`] - application source installation
//! - [`stage`] - build dir preparation and runtime copy

pub mod branding;
pub mod checksum;
pub mod layout;
pub mod orchestrator;
pub mod preflight;
pub mod source;
pub mod stage;

pub use layout::{StagedApp, StagedLayout};
pub use orchestrator::{Stager, stage};
