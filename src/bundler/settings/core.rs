//! Core Settings struct and option resolution.

use super::{
    Arch, Platform, PlatformResources, StageOptions,
    macos::{APP_DIR, INFO_PLIST, RUNTIME_BUNDLE_NAME, RUNTIME_PRODUCT_NAME},
    options::{DEFAULT_BINARIES_DIR, DEFAULT_BUILD_DIR, DEFAULT_SRC_DIR},
};
use crate::bundler::{Error, Result, error::ErrorExt};
use path_absolutize::Absolutize;
use std::path::{Path, PathBuf};

/// Resolved, immutable configuration for one staging run.
///
/// Built once by [`StageOptions::resolve`] (or [`SettingsBuilder`](super::SettingsBuilder))
/// and only read afterwards. All paths are absolute and normalized.
///
/// # Examples
///
/// ```no_run
/// use kodegen_bundler_electron::bundler::{SettingsBuilder, Platform};
///
/// # fn example() -> kodegen_bundler_electron::bundler::Result<()> {
/// let settings = SettingsBuilder::new()
///     .platform(Platform::Linux)
///     .arch("x64")
///     .name("MyApp")
///     .build()?;
///
/// println!("executable: {}", settings.executable_path().display());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Settings {
    platform: Platform,
    arch: Arch,

    /// Application source tree.
    src_dir: PathBuf,

    /// Output root, owned by this run.
    build_dir: PathBuf,

    /// `<binaries root>/<platform>`.
    binaries_dir: PathBuf,

    /// Runtime resources directory inside the build dir.
    resources_dir: PathBuf,

    /// `<resources_dir>/../Info.plist`; only present on darwin.
    metadata_file: PathBuf,

    /// Stock runtime executable inside the build dir.
    executable_path: PathBuf,

    /// Application name; `None` disables branding.
    name: Option<String>,

    /// Branding assets for the active platform.
    resources: Option<PlatformResources>,
}

impl Settings {
    /// Returns the target platform.
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Returns the target architecture.
    pub fn arch(&self) -> Arch {
        self.arch
    }

    /// Returns the application source directory.
    pub fn src_dir(&self) -> &Path {
        &self.src_dir
    }

    /// Returns the build output directory.
    pub fn build_dir(&self) -> &Path {
        &self.build_dir
    }

    /// Returns the platform's runtime distribution directory.
    pub fn binaries_dir(&self) -> &Path {
        &self.binaries_dir
    }

    /// Returns the runtime resources directory inside the build dir.
    pub fn resources_dir(&self) -> &Path {
        &self.resources_dir
    }

    /// Returns the Info.plist path (meaningful on darwin only).
    pub fn metadata_file(&self) -> &Path {
        &self.metadata_file
    }

    /// Returns the stock runtime executable path inside the build dir.
    pub fn executable_path(&self) -> &Path {
        &self.executable_path
    }

    /// Returns the directory application sources are installed into.
    pub fn app_dir(&self) -> PathBuf {
        self.resources_dir.join(APP_DIR)
    }

    /// Returns the stock bundle path (darwin layout).
    pub fn runtime_bundle_path(&self) -> PathBuf {
        self.build_dir.join(RUNTIME_BUNDLE_NAME)
    }

    /// Returns the application name, if branding is enabled.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns branding assets for the active platform.
    pub fn platform_resources(&self) -> Option<&PlatformResources> {
        self.resources.as_ref()
    }

    /// Returns the custom icon for the active platform.
    pub fn icon(&self) -> Option<&Path> {
        self.resources.as_ref()?.icon.as_deref()
    }

    /// Returns the bundle identifier for the active platform.
    pub fn bundle_identifier(&self) -> Option<&str> {
        self.resources.as_ref()?.bundle_identifier.as_deref()
    }
}

impl StageOptions {
    /// Resolves raw options into [`Settings`].
    ///
    /// Fills defaults from the host, validates in order (platform, darwin
    /// architecture, architecture, application name, bundle identifier) and
    /// derives every path. Touches nothing on disk.
    ///
    /// # Errors
    ///
    /// - [`Error::UnsupportedPlatform`] for anything but darwin, linux, win32
    /// - [`Error::UnsupportedArchitecture`] for non-x64 darwin or anything but x64/ia32
    /// - [`Error::InvalidApplicationName`] for empty names or names with separators
    /// - [`Error::MissingBundleIdentifier`] when a darwin bundle is named without one
    pub fn resolve(mut self) -> Result<Settings> {
        let platform_name = self
            .platform
            .take()
            .unwrap_or_else(|| Platform::host().to_string());
        let arch_name = self
            .arch
            .take()
            .unwrap_or_else(|| Arch::host().to_string());

        let platform: Platform = platform_name.parse()?;

        if platform == Platform::Darwin && arch_name != Arch::X64.as_str() {
            return Err(Error::UnsupportedArchitecture {
                platform: platform.to_string(),
                arch: arch_name,
                supported: "x64",
            });
        }

        let arch = Arch::parse(&arch_name).ok_or_else(|| Error::UnsupportedArchitecture {
            platform: platform.to_string(),
            arch: arch_name.clone(),
            supported: "x64 and ia32",
        })?;

        if let Some(name) = &self.name
            && (name.trim().is_empty()
                || name.contains(['/', '\\'])
                || name == "."
                || name == "..")
        {
            return Err(Error::InvalidApplicationName(name.clone()));
        }

        let mut resources = self.platform_resources.remove(platform.as_str());
        if let Some(r) = resources.as_mut()
            && r.bundle_identifier.as_deref().is_some_and(|id| id.trim().is_empty())
        {
            r.bundle_identifier = None;
        }

        if platform == Platform::Darwin
            && self.name.is_some()
            && resources
                .as_ref()
                .and_then(|r| r.bundle_identifier.as_ref())
                .is_none()
        {
            return Err(Error::MissingBundleIdentifier(platform.to_string()));
        }

        let base_dir = match self.base_dir.take() {
            Some(dir) => dir,
            None => std::env::current_dir().fs_context("reading current directory", ".")?,
        };
        let absolute = |path: &Path| -> Result<PathBuf> {
            Ok(path
                .absolutize_from(base_dir.as_path())
                .fs_context("normalizing path", path)?
                .into_owned())
        };

        let src_dir = absolute(
            self.src_dir
                .as_deref()
                .unwrap_or_else(|| Path::new(DEFAULT_SRC_DIR)),
        )?;
        let build_dir = absolute(
            self.build_dir
                .as_deref()
                .unwrap_or_else(|| Path::new(DEFAULT_BUILD_DIR)),
        )?;
        let binaries_root = self
            .binaries_dir
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_BINARIES_DIR));
        let binaries_dir = absolute(&binaries_root.join(platform.as_str()))?;

        if let Some(icon) = resources.as_mut().and_then(|r| r.icon.as_mut()) {
            *icon = absolute(icon)?;
        }

        let (resources_dir, executable_path) = runtime_layout(platform, &build_dir);
        let metadata_file = resources_dir
            .parent()
            .unwrap_or(build_dir.as_path())
            .join(INFO_PLIST);

        let settings = Settings {
            platform,
            arch,
            src_dir,
            build_dir,
            binaries_dir,
            resources_dir,
            metadata_file,
            executable_path,
            name: self.name,
            resources,
        };

        log::debug!("Resolved staging settings: {:#?}", settings);

        Ok(settings)
    }
}

/// Resources directory and executable path of a stock runtime staged at `build_dir`.
fn runtime_layout(platform: Platform, build_dir: &Path) -> (PathBuf, PathBuf) {
    match platform {
        Platform::Darwin => {
            let contents = build_dir.join(RUNTIME_BUNDLE_NAME).join("Contents");
            (
                contents.join("Resources"),
                contents.join("MacOS").join(RUNTIME_PRODUCT_NAME),
            )
        }
        Platform::Linux => (build_dir.join("resources"), build_dir.join("electron")),
        Platform::Win32 => (build_dir.join("resources"), build_dir.join("electron.exe")),
    }
}
