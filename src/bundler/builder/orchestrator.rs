//! Main staging orchestration.
//!
//! This module provides the [`Stager`] that runs the staging steps in order
//! and stops at the first failure.

use super::{
    branding::apply_branding,
    checksum::calculate_tree_sha256,
    layout::{StagedApp, StagedLayout},
    preflight,
    source::install_source,
    stage::{clean_defaults, stage as stage_runtime},
};
use crate::bundler::{Result, Settings, StageOptions};

/// Runs the staging pipeline for one platform.
///
/// Steps run strictly one after another:
///
/// 1. Preflight: binaries and sources exist, build dir overlaps neither
/// 2. Stage: wipe the build dir, copy the runtime distribution into it
/// 3. Clean: drop the runtime's `default_app`
/// 4. Install: copy sources into `<resources>/app`
/// 5. Brand: rename and rebrand when an application name is set
///
/// There is no rollback. If a step after preflight fails, the build
/// directory is left as the failing step found it and must be rebuilt.
/// Two stagers must never share a build directory concurrently.
///
/// # Examples
///
/// ```no_run
/// use kodegen_bundler_electron::bundler::{Platform, SettingsBuilder, Stager};
///
/// # async fn example() -> kodegen_bundler_electron::bundler::Result<()> {
/// let settings = SettingsBuilder::new()
///     .platform(Platform::Linux)
///     .arch("x64")
///     .name("MyApp")
///     .build()?;
///
/// let staged = Stager::new(settings).run().await?;
/// println!("Staged {} ({})", staged.executable_path.display(), staged.checksum);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Stager {
    settings: Settings,
}

impl Stager {
    /// Creates a stager for already resolved settings.
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Resolves raw options and creates a stager.
    pub fn from_options(options: StageOptions) -> Result<Self> {
        Ok(Self::new(options.resolve()?))
    }

    /// Returns a reference to the staging settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Runs every step and reports the resulting layout.
    pub async fn run(&self) -> Result<StagedApp> {
        let settings = &self.settings;

        log::info!(
            "Staging {}/{} into {}",
            settings.platform(),
            settings.arch(),
            settings.build_dir().display()
        );

        preflight::validate(settings).await?;
        stage_runtime(settings).await?;
        clean_defaults(settings).await?;
        let app_dir = install_source(settings).await?;

        let mut layout = StagedLayout::new(settings, app_dir);
        apply_branding(settings, &mut layout).await?;

        let checksum = calculate_tree_sha256(settings.build_dir()).await?;
        log::info!("✓ Staged {} (sha256 {})", settings.build_dir().display(), checksum);

        Ok(layout.into_report(settings, checksum))
    }
}

/// Resolves `options` and runs the full pipeline.
pub async fn stage(options: StageOptions) -> Result<StagedApp> {
    Stager::from_options(options)?.run().await
}
