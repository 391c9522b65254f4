//! Installs the application sources into the staged runtime.

use crate::bundler::{Result, Settings, utils::fs};
use std::path::PathBuf;

/// Copies the source tree into `<resources_dir>/app` and returns that path.
///
/// Files already present under the app directory are overwritten.
pub async fn install_source(settings: &Settings) -> Result<PathBuf> {
    let app_dir = settings.app_dir();

    fs::create_dir_all(&app_dir, false).await?;

    log::info!(
        "Installing application sources from {} into {}",
        settings.src_dir().display(),
        app_dir.display()
    );
    let copied = fs::copy_dir_contents(settings.src_dir(), &app_dir).await?;
    log::debug!("Installed {} source entries", copied);

    Ok(app_dir)
}
