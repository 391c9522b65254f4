//! Input checks run before anything on disk is touched.

use crate::bundler::{Error, Result, Settings, utils::fs};
use std::path::Path;

/// Verifies the runtime binaries and application sources exist and that the
/// build directory can be wiped without harming either.
///
/// # Errors
///
/// - [`Error::MissingBinaries`] if `<binaries_dir>/<platform>` is not a directory
/// - [`Error::MissingSource`] if the source directory is not a directory
/// - [`Error::OverlappingDirectories`] if the build dir equals, contains or
///   sits inside either input
pub async fn validate(settings: &Settings) -> Result<()> {
    if !fs::is_dir(settings.binaries_dir()).await {
        return Err(Error::MissingBinaries(settings.binaries_dir().to_path_buf()));
    }

    if !fs::is_dir(settings.src_dir()).await {
        return Err(Error::MissingSource(settings.src_dir().to_path_buf()));
    }

    check_overlap(settings.build_dir(), settings.binaries_dir(), "binaries")?;
    check_overlap(settings.build_dir(), settings.src_dir(), "source")?;

    log::debug!(
        "Preflight passed: binaries {}, source {}",
        settings.binaries_dir().display(),
        settings.src_dir().display()
    );

    Ok(())
}

fn check_overlap(build_dir: &Path, input_dir: &Path, role: &'static str) -> Result<()> {
    if build_dir.starts_with(input_dir) || input_dir.starts_with(build_dir) {
        return Err(Error::OverlappingDirectories {
            build_dir: build_dir.to_path_buf(),
            role,
            input_dir: input_dir.to_path_buf(),
        });
    }
    Ok(())
}
