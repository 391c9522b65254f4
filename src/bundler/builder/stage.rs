//! Build directory preparation and runtime distribution copy.

use crate::bundler::{DEFAULT_APP_DIR, Result, Settings, utils::fs};

/// Recreates the build directory empty and copies the platform's runtime
/// distribution into it.
///
/// Any previous contents are removed first, so two runs with the same
/// inputs produce the same tree.
pub async fn stage(settings: &Settings) -> Result<()> {
    let build_dir = settings.build_dir();

    log::info!("Preparing clean build directory {}", build_dir.display());
    fs::create_dir_all(build_dir, true).await?;

    log::info!(
        "Copying {} runtime from {}",
        settings.platform(),
        settings.binaries_dir().display()
    );
    let copied = fs::copy_dir_contents(settings.binaries_dir(), build_dir).await?;
    log::debug!("Copied {} runtime entries", copied);

    Ok(())
}

/// Removes the runtime's placeholder application from the resources directory.
///
/// Absence is not an error.
pub async fn clean_defaults(settings: &Settings) -> Result<()> {
    let default_app = settings.resources_dir().join(DEFAULT_APP_DIR);
    log::debug!("Removing {}", default_app.display());
    fs::remove_dir_all(&default_app).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundler::{Platform, SettingsBuilder};
    use std::fs as stdfs;
    use tempfile::tempdir;

    #[tokio::test]
    async fn stage_replaces_stale_output_and_clean_removes_default_app() {
        let dir = tempdir().unwrap();
        let runtime = dir.path().join("bin/linux");
        stdfs::create_dir_all(runtime.join("resources/default_app")).unwrap();
        stdfs::write(runtime.join("electron"), b"runtime").unwrap();
        stdfs::write(runtime.join("resources/default_app/main.js"), b"x").unwrap();
        stdfs::create_dir_all(dir.path().join("out")).unwrap();
        stdfs::write(dir.path().join("out/stale.txt"), b"stale").unwrap();

        let settings = SettingsBuilder::new()
            .platform(Platform::Linux)
            .arch("x64")
            .base_dir(dir.path())
            .build_dir("out")
            .binaries_dir("bin")
            .build()
            .unwrap();

        stage(&settings).await.unwrap();
        assert!(!dir.path().join("out/stale.txt").exists());
        assert_eq!(stdfs::read(dir.path().join("out/electron")).unwrap(), b"runtime");
        assert!(settings.resources_dir().join("default_app").is_dir());

        clean_defaults(&settings).await.unwrap();
        assert!(!settings.resources_dir().join("default_app").exists());
        assert!(settings.resources_dir().is_dir());

        // already gone
        clean_defaults(&settings).await.unwrap();
    }
}
