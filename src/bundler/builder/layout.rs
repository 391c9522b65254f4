//! Paths produced by pipeline steps, and the final run report.

use crate::bundler::{Arch, Platform, Settings};
use std::path::{Path, PathBuf};

/// Step outputs threaded through the later pipeline steps.
///
/// [`Settings`] stays read-only; whatever a step produces (the installed app
/// directory, a renamed executable, a copied icon, a renamed bundle) is
/// recorded here for the steps after it.
#[derive(Clone, Debug)]
pub struct StagedLayout {
    /// Directory holding the application sources.
    pub app_dir: PathBuf,
    /// Current executable path (renamed by branding).
    pub executable_path: PathBuf,
    /// File name of the custom icon copied into resources.
    pub icon_filename: Option<String>,
    /// Renamed darwin bundle.
    pub bundle_path: Option<PathBuf>,
}

impl StagedLayout {
    /// Layout right after the sources were installed.
    pub fn new(settings: &Settings, app_dir: PathBuf) -> Self {
        Self {
            app_dir,
            executable_path: settings.executable_path().to_path_buf(),
            icon_filename: None,
            bundle_path: None,
        }
    }

    /// Re-roots every path inside `from` to live inside `to`.
    pub(crate) fn relocate(&mut self, from: &Path, to: &Path) {
        self.app_dir = rebase(&self.app_dir, from, to);
        self.executable_path = rebase(&self.executable_path, from, to);
    }

    /// Final report for a completed run.
    pub fn into_report(self, settings: &Settings, checksum: String) -> StagedApp {
        let resources_dir = match &self.bundle_path {
            Some(bundle) => rebase(
                settings.resources_dir(),
                &settings.runtime_bundle_path(),
                bundle,
            ),
            None => settings.resources_dir().to_path_buf(),
        };

        StagedApp {
            platform: settings.platform(),
            arch: settings.arch(),
            name: settings.name().map(str::to_string),
            build_dir: settings.build_dir().to_path_buf(),
            resources_dir,
            app_dir: self.app_dir,
            executable_path: self.executable_path,
            bundle_path: self.bundle_path,
            icon_filename: self.icon_filename,
            checksum,
        }
    }
}

/// Outcome of a successful staging run.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct StagedApp {
    /// Platform the output was staged for.
    pub platform: Platform,
    /// Architecture the output was staged for.
    pub arch: Arch,
    /// Application name, if branded.
    pub name: Option<String>,
    /// Output root.
    pub build_dir: PathBuf,
    /// Final resources directory.
    pub resources_dir: PathBuf,
    /// Final application source directory.
    pub app_dir: PathBuf,
    /// Final executable path.
    pub executable_path: PathBuf,
    /// Renamed darwin bundle, if branded on darwin.
    pub bundle_path: Option<PathBuf>,
    /// Custom icon file name, if one was installed.
    pub icon_filename: Option<String>,
    /// SHA-256 of the staged tree.
    pub checksum: String,
}

fn rebase(path: &Path, from: &Path, to: &Path) -> PathBuf {
    match path.strip_prefix(from) {
        Ok(rest) => to.join(rest),
        Err(_) => path.to_path_buf(),
    }
}
