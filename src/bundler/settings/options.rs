//! Raw staging options as supplied by callers, config files and the CLI.

use std::{collections::HashMap, path::PathBuf};

/// Default application source directory.
pub(crate) const DEFAULT_SRC_DIR: &str = "./build/dev";

/// Default staging output directory.
pub(crate) const DEFAULT_BUILD_DIR: &str = "./build/staging";

/// Default root holding one runtime distribution per platform.
pub(crate) const DEFAULT_BINARIES_DIR: &str = "./electron/binaries";

/// Branding assets for one platform.
///
/// # Configuration
///
/// ```toml
/// [platform_resources.darwin]
/// icon = "assets/MyApp.icns"
/// bundle_identifier = "com.example.myapp"
/// ```
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct PlatformResources {
    /// Icon file copied into the resources directory under its own file name.
    ///
    /// Default: None (stock icon kept)
    #[serde(default)]
    pub icon: Option<PathBuf>,

    /// Bundle identifier replacing the stock one in Info.plist (darwin).
    ///
    /// Default: None
    #[serde(default)]
    pub bundle_identifier: Option<String>,
}

/// Unresolved staging options.
///
/// Every field is optional; [`StageOptions::resolve`] fills in defaults,
/// validates the platform/arch pair and derives all paths.
///
/// # Configuration
///
/// ```toml
/// platform = "darwin"
/// arch = "x64"
/// src_dir = "build/dev"
/// build_dir = "build/staging"
/// binaries_dir = "electron/binaries"
/// name = "MyApp"
///
/// [platform_resources.darwin]
/// icon = "assets/MyApp.icns"
/// bundle_identifier = "com.example.myapp"
/// ```
#[derive(Clone, Debug, Default, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StageOptions {
    /// Target platform. Default: host platform.
    #[serde(default)]
    pub platform: Option<String>,

    /// Target architecture. Default: host architecture.
    #[serde(default)]
    pub arch: Option<String>,

    /// Application source tree. Default: `./build/dev`.
    #[serde(default)]
    pub src_dir: Option<PathBuf>,

    /// Output root, wiped on every run. Default: `./build/staging`.
    #[serde(default)]
    pub build_dir: Option<PathBuf>,

    /// Root with one runtime distribution per platform. Default: `./electron/binaries`.
    #[serde(default)]
    pub binaries_dir: Option<PathBuf>,

    /// Application name. When absent no branding happens.
    #[serde(default)]
    pub name: Option<String>,

    /// Branding assets keyed by platform name.
    #[serde(default)]
    pub platform_resources: HashMap<String, PlatformResources>,

    /// Directory relative paths resolve against. Default: current directory.
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

impl StageOptions {
    /// Overlays every field set in `other` onto `self`.
    ///
    /// Platform resources merge per platform and per field.
    pub fn merge(mut self, other: StageOptions) -> Self {
        self.platform = other.platform.or(self.platform);
        self.arch = other.arch.or(self.arch);
        self.src_dir = other.src_dir.or(self.src_dir);
        self.build_dir = other.build_dir.or(self.build_dir);
        self.binaries_dir = other.binaries_dir.or(self.binaries_dir);
        self.name = other.name.or(self.name);
        self.base_dir = other.base_dir.or(self.base_dir);

        for (platform, resources) in other.platform_resources {
            let entry = self.platform_resources.entry(platform).or_default();
            if resources.icon.is_some() {
                entry.icon = resources.icon;
            }
            if resources.bundle_identifier.is_some() {
                entry.bundle_identifier = resources.bundle_identifier;
            }
        }

        self
    }
}
