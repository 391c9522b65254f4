//! Command line argument parsing and validation.
//!
//! This module provides CLI argument parsing using clap and maps arguments
//! onto [`StageOptions`].

use crate::bundler::StageOptions;
use clap::Parser;
use std::path::PathBuf;

/// Electron runtime staging tool
#[derive(Parser, Debug)]
#[command(
    name = "kodegen_bundler_electron",
    version,
    about = "Stage an Electron runtime with your application sources",
    long_about = "Copies a vendored Electron runtime distribution into a clean build directory,
installs the application sources under resources/app and optionally brands the
result (executable name, macOS bundle name, Info.plist strings, icon).

Usage:
  kodegen_bundler_electron --platform linux --arch x64
  kodegen_bundler_electron --platform darwin --name MyApp --bundle-identifier com.example.myapp --icon assets/MyApp.icns
  kodegen_bundler_electron --config electron.toml --build-dir out/staging

The build directory is wiped on every run.
Exit code 0 = staged output guaranteed to exist in the build directory."
)]
pub struct Args {
    /// TOML file with staging options; flags override its values
    #[arg(short, long, value_name = "FILE", env = "KODEGEN_ELECTRON_CONFIG")]
    pub config: Option<PathBuf>,

    /// Target platform: darwin, linux, win32 [default: host]
    #[arg(short, long, value_name = "PLATFORM")]
    pub platform: Option<String>,

    /// Target architecture: x64, ia32 [default: host]
    #[arg(short, long, value_name = "ARCH")]
    pub arch: Option<String>,

    /// Application source directory [default: ./build/dev]
    #[arg(short, long, value_name = "DIR")]
    pub src_dir: Option<PathBuf>,

    /// Output directory, wiped on every run [default: ./build/staging]
    #[arg(short, long, value_name = "DIR")]
    pub build_dir: Option<PathBuf>,

    /// Directory with one runtime distribution per platform [default: ./electron/binaries]
    #[arg(long, value_name = "DIR")]
    pub binaries_dir: Option<PathBuf>,

    /// Application name; enables branding
    #[arg(short, long, value_name = "NAME")]
    pub name: Option<String>,

    /// Custom icon for the target platform
    #[arg(long, value_name = "FILE")]
    pub icon: Option<PathBuf>,

    /// Bundle identifier for the target platform (required for named darwin bundles)
    #[arg(long, value_name = "ID")]
    pub bundle_identifier: Option<String>,

    /// Print the staging report as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if let Some(name) = &self.name
            && name.trim().is_empty()
        {
            return Err("Application name cannot be empty".to_string());
        }

        if let Some(id) = &self.bundle_identifier
            && id.trim().is_empty()
        {
            return Err("Bundle identifier cannot be empty".to_string());
        }

        Ok(())
    }

    /// Options given on the command line, without any config file applied.
    ///
    /// `--icon` and `--bundle-identifier` attach to the `--platform` value,
    /// or to `platform_key` when no platform flag was given.
    pub fn to_options(&self, platform_key: &str) -> StageOptions {
        let mut options = StageOptions {
            platform: self.platform.clone(),
            arch: self.arch.clone(),
            src_dir: self.src_dir.clone(),
            build_dir: self.build_dir.clone(),
            binaries_dir: self.binaries_dir.clone(),
            name: self.name.clone(),
            ..Default::default()
        };

        if self.icon.is_some() || self.bundle_identifier.is_some() {
            let key = self.platform.as_deref().unwrap_or(platform_key).to_string();
            let resources = options.platform_resources.entry(key).or_default();
            resources.icon = self.icon.clone();
            resources.bundle_identifier = self.bundle_identifier.clone();
        }

        options
    }
}
