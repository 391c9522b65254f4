//! Builder for constructing Settings.

use super::{Platform, PlatformResources, Settings, StageOptions};
use std::path::{Path, PathBuf};

/// Builder for constructing [`Settings`].
///
/// Provides a fluent API over [`StageOptions`]; [`build`](Self::build) runs
/// the same resolution and validation as [`StageOptions::resolve`].
///
/// # Examples
///
/// ```no_run
/// use kodegen_bundler_electron::bundler::{Platform, SettingsBuilder};
///
/// # fn example() -> kodegen_bundler_electron::bundler::Result<()> {
/// let settings = SettingsBuilder::new()
///     .platform(Platform::Darwin)
///     .arch("x64")
///     .src_dir("dist")
///     .build_dir("out/staging")
///     .binaries_dir("vendor/electron")
///     .name("MyApp")
///     .bundle_identifier("com.example.myapp")
///     .icon("assets/MyApp.icns")
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct SettingsBuilder {
    options: StageOptions,
    platform: Option<Platform>,
    icon: Option<PathBuf>,
    bundle_identifier: Option<String>,
}

impl SettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Starts from existing raw options.
    pub fn from_options(options: StageOptions) -> Self {
        Self {
            options,
            ..Default::default()
        }
    }

    /// Sets the target platform.
    ///
    /// Default: host platform
    pub fn platform(mut self, platform: Platform) -> Self {
        self.platform = Some(platform);
        self.options.platform = Some(platform.as_str().to_string());
        self
    }

    /// Sets the target architecture by runtime name (`x64`, `ia32`).
    ///
    /// Default: host architecture
    pub fn arch(mut self, arch: impl Into<String>) -> Self {
        self.options.arch = Some(arch.into());
        self
    }

    /// Sets the application source directory.
    ///
    /// Default: `./build/dev`
    pub fn src_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.options.src_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the build output directory. Wiped on every run.
    ///
    /// Default: `./build/staging`
    pub fn build_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.options.build_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the root directory holding one runtime distribution per platform.
    ///
    /// Default: `./electron/binaries`
    pub fn binaries_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.options.binaries_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the directory relative paths resolve against.
    ///
    /// Default: current working directory
    pub fn base_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.options.base_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the application name, enabling branding.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.options.name = Some(name.into());
        self
    }

    /// Sets branding assets for a specific platform.
    pub fn platform_resources(mut self, platform: Platform, resources: PlatformResources) -> Self {
        self.options
            .platform_resources
            .insert(platform.as_str().to_string(), resources);
        self
    }

    /// Sets the custom icon for the target platform.
    pub fn icon<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.icon = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the bundle identifier for the target platform.
    pub fn bundle_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.bundle_identifier = Some(identifier.into());
        self
    }

    /// Returns the raw options this builder has accumulated.
    ///
    /// Platform-less `icon`/`bundle_identifier` settings attach to the
    /// explicit platform, or the host platform when none was given.
    pub fn into_options(mut self) -> StageOptions {
        if self.icon.is_some() || self.bundle_identifier.is_some() {
            let key = match (self.platform, &self.options.platform) {
                (Some(platform), _) => platform.as_str().to_string(),
                (None, Some(name)) => name.clone(),
                (None, None) => Platform::host().to_string(),
            };
            let entry = self.options.platform_resources.entry(key).or_default();
            if let Some(icon) = self.icon {
                entry.icon = Some(icon);
            }
            if let Some(identifier) = self.bundle_identifier {
                entry.bundle_identifier = Some(identifier);
            }
        }
        self.options
    }

    /// Builds the settings.
    ///
    /// # Errors
    ///
    /// Any validation error from [`StageOptions::resolve`].
    pub fn build(self) -> crate::bundler::Result<Settings> {
        self.into_options().resolve()
    }
}
