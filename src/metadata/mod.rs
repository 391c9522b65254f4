//! Staging options loaded from a TOML configuration file.

use crate::bundler::StageOptions;
use crate::error::{BundlerError, CliError, Result};
use path_absolutize::Absolutize;
use std::path::Path;

/// Load staging options from a TOML file.
///
/// Relative paths inside the file resolve against the file's own directory,
/// so a config checked in next to the sources works from any working
/// directory.
///
/// ```toml
/// platform = "darwin"
/// src_dir = "build/dev"
/// name = "MyApp"
///
/// [platform_resources.darwin]
/// icon = "assets/MyApp.icns"
/// bundle_identifier = "com.example.myapp"
/// ```
pub fn load_config(config_path: &Path) -> Result<StageOptions> {
    let contents = std::fs::read_to_string(config_path).map_err(|e| {
        BundlerError::Cli(CliError::InvalidConfig {
            path: config_path.display().to_string(),
            reason: e.to_string(),
        })
    })?;

    let mut options: StageOptions = toml::from_str(&contents)?;

    let absolute = config_path.absolutize()?;
    if let Some(dir) = absolute.parent() {
        options.base_dir = Some(dir.to_path_buf());
    }

    log::debug!("Loaded staging options from {}", config_path.display());

    Ok(options)
}
