//! Turns the stock runtime into a named application.
//!
//! Runs only when an application name is configured, as a fixed chain:
//! Info.plist strings, executable name, custom icon, default icon removal
//! and icon reference, and finally the darwin bundle name. The bundle is
//! renamed last because the other steps address paths inside it.

use super::layout::StagedLayout;
use crate::bundler::{
    DEFAULT_BUNDLE_IDENTIFIER, DEFAULT_ICON_FILENAME, Error, Platform, RUNTIME_PRODUCT_NAME,
    Result, Settings,
    error::Context,
    platform::macos::plist::{Substitution, rewrite_info_plist},
    utils::fs,
};

/// Applies every branding step for the configured application name.
///
/// A no-op when no name is set.
pub async fn apply_branding(settings: &Settings, layout: &mut StagedLayout) -> Result<()> {
    let Some(name) = settings.name() else {
        log::info!("No application name configured, keeping stock runtime names");
        return Ok(());
    };

    log::info!("Branding staged runtime as {}", name);

    rewrite_metadata(settings, name).await?;
    rename_executable(settings, name, layout).await?;
    install_icon(settings, layout).await?;
    replace_default_icon(settings, layout).await?;
    rename_bundle(settings, name, layout).await?;

    Ok(())
}

/// Replaces the product name and bundle identifier in Info.plist (darwin).
async fn rewrite_metadata(settings: &Settings, name: &str) -> Result<()> {
    if settings.platform() != Platform::Darwin {
        return Ok(());
    }

    let identifier = settings
        .bundle_identifier()
        .ok_or_else(|| Error::MissingBundleIdentifier(settings.platform().to_string()))?;

    let substitutions = [
        Substitution::whole_word(RUNTIME_PRODUCT_NAME, name)?,
        Substitution::literal(DEFAULT_BUNDLE_IDENTIFIER, identifier)?,
    ];
    let changed = rewrite_info_plist(settings.metadata_file(), &substitutions).await?;
    log::debug!("Updated {} Info.plist value(s)", changed);

    Ok(())
}

/// Renames the runtime executable after the application.
async fn rename_executable(settings: &Settings, name: &str, layout: &mut StagedLayout) -> Result<()> {
    let file_name = match settings.platform() {
        Platform::Win32 => format!("{name}.exe"),
        Platform::Darwin | Platform::Linux => name.to_string(),
    };
    let current = layout.executable_path.clone();
    let renamed = current
        .parent()
        .context("executable path has no parent directory")?
        .join(file_name);

    log::info!("Renaming executable to {}", renamed.display());
    fs::move_path(&current, &renamed).await?;
    layout.executable_path = renamed;

    Ok(())
}

/// Copies the configured icon into the resources directory under its own name.
async fn install_icon(settings: &Settings, layout: &mut StagedLayout) -> Result<()> {
    let Some(icon) = settings.icon() else {
        log::debug!("No custom icon configured for {}", settings.platform());
        return Ok(());
    };

    let icon_filename = icon
        .file_name()
        .and_then(|n| n.to_str())
        .context("icon path has no UTF-8 file name")?
        .to_string();
    let dest = settings.resources_dir().join(&icon_filename);

    log::info!("Installing icon {}", icon_filename);
    fs::copy_file(icon, &dest).await?;
    layout.icon_filename = Some(icon_filename);

    Ok(())
}

/// Drops the stock icon and points Info.plist at the custom one.
async fn replace_default_icon(settings: &Settings, layout: &StagedLayout) -> Result<()> {
    let Some(icon_filename) = layout.icon_filename.as_deref() else {
        return Ok(());
    };
    if icon_filename == DEFAULT_ICON_FILENAME {
        // the custom icon already overwrote the stock one
        return Ok(());
    }

    fs::remove_file(&settings.resources_dir().join(DEFAULT_ICON_FILENAME)).await?;

    if settings.platform() == Platform::Darwin {
        let substitutions = [Substitution::literal(DEFAULT_ICON_FILENAME, icon_filename)?];
        rewrite_info_plist(settings.metadata_file(), &substitutions).await?;
    }

    Ok(())
}

/// Renames `Electron.app` after the application (darwin).
async fn rename_bundle(settings: &Settings, name: &str, layout: &mut StagedLayout) -> Result<()> {
    if settings.platform() != Platform::Darwin {
        return Ok(());
    }

    let from = settings.runtime_bundle_path();
    let to = settings.build_dir().join(format!("{name}.app"));

    log::info!("Renaming bundle to {}", to.display());
    fs::move_path(&from, &to).await?;
    layout.relocate(&from, &to);
    layout.bundle_path = Some(to);

    Ok(())
}
