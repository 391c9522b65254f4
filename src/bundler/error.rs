//! Error types for staging operations.
//!
//! Every pipeline step returns [`Result`]. Filesystem failures carry the
//! operation being attempted and the path involved via [`ErrorExt::fs_context`].

use std::{
    fmt::Display,
    io,
    path::{Path, PathBuf},
};
use thiserror::Error as DeriveError;

/// Result type alias for staging operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while resolving options or staging a bundle.
#[derive(Debug, DeriveError)]
#[non_exhaustive]
pub enum Error {
    /// Target platform is not one of darwin, linux or win32.
    #[error("Only darwin, linux or win32 platforms are supported (got `{0}`)")]
    UnsupportedPlatform(String),

    /// Target architecture is not valid for the selected platform.
    #[error("Only the {supported} architecture(s) are supported on the {platform} platform (got `{arch}`)")]
    UnsupportedArchitecture {
        /// Platform the architecture was checked against
        platform: String,
        /// Rejected architecture
        arch: String,
        /// Human readable list of accepted architectures
        supported: &'static str,
    },

    /// The runtime binaries directory for the platform is missing.
    #[error(
        "The binaries directory {0} does not exist, please ensure the runtime binaries are available"
    )]
    MissingBinaries(PathBuf),

    /// The application source directory is missing.
    #[error(
        "The source directory {0} does not exist, please ensure it does and contains the source files for your application"
    )]
    MissingSource(PathBuf),

    /// A bundle identifier is required to brand a darwin bundle.
    #[error("platform_resources.{0}.bundle_identifier is required when an application name is set")]
    MissingBundleIdentifier(String),

    /// The application name cannot be used as a file name.
    #[error("Invalid application name `{0}`: must be non-empty and contain no path separators")]
    InvalidApplicationName(String),

    /// The build directory would clobber or recurse into an input directory.
    #[error("The build directory {build_dir} overlaps the {role} directory {input_dir}")]
    OverlappingDirectories {
        /// Output directory that would be wiped
        build_dir: PathBuf,
        /// Which input it collides with
        role: &'static str,
        /// Colliding input directory
        input_dir: PathBuf,
    },

    /// Filesystem operation failed.
    #[error("{context} {}: {error}", path.display())]
    Fs {
        /// What was being attempted
        context: &'static str,
        /// Path the operation targeted
        path: PathBuf,
        /// Underlying error
        error: io::Error,
    },

    /// Property list could not be read or written.
    #[error("Failed to process property list {}: {error}", path.display())]
    Plist {
        /// Metadata file involved
        path: PathBuf,
        /// Underlying error
        error: plist::Error,
    },

    /// I/O error without path context.
    #[error("{0}")]
    IoError(#[from] io::Error),

    /// Anything else.
    #[error("{0}")]
    GenericError(String),
}

/// Convenience conversion for attaching a message to `Option`s.
pub trait Context<T> {
    /// Attach a context message, turning failures into [`Error::GenericError`].
    fn context<C>(self, context: C) -> Result<T>
    where
        C: Display + Send + Sync + 'static;
}

impl<T> Context<T> for Option<T> {
    fn context<C>(self, context: C) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
    {
        self.ok_or_else(|| Error::GenericError(context.to_string()))
    }
}

/// Attaches filesystem context to raw I/O results.
pub trait ErrorExt<T> {
    /// Wrap an I/O failure into [`Error::Fs`] with the attempted operation and path.
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, io::Error> {
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T> {
        self.map_err(|error| Error::Fs {
            context,
            path: path.as_ref().to_path_buf(),
            error,
        })
    }
}

/// Traversal failures carry the entry that failed; `path` is the walk root,
/// used when the entry is unknown.
impl<T> ErrorExt<T> for std::result::Result<T, walkdir::Error> {
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T> {
        self.map_err(|error| {
            let path = error
                .path()
                .map_or_else(|| path.as_ref().to_path_buf(), Path::to_path_buf);
            let error = error
                .into_io_error()
                .unwrap_or_else(|| io::Error::other("filesystem loop detected"));
            Error::Fs {
                context,
                path,
                error,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fs_context_keeps_path_and_operation() {
        let err = Err::<(), _>(io::Error::from(io::ErrorKind::PermissionDenied))
            .fs_context("copying binaries", "/tmp/staging")
            .unwrap_err();

        let rendered = err.to_string();
        assert!(rendered.starts_with("copying binaries /tmp/staging"));
        assert!(matches!(err, Error::Fs { context: "copying binaries", .. }));
    }

    #[test]
    fn walk_failures_name_the_missing_entry() {
        let missing = std::env::temp_dir().join("kodegen-electron-no-such-dir");
        let err = walkdir::WalkDir::new(&missing)
            .into_iter()
            .next()
            .unwrap()
            .fs_context("walking directory", "/unused")
            .unwrap_err();

        assert!(matches!(
            err,
            Error::Fs { context: "walking directory", ref path, ref error }
                if path == &missing && error.kind() == io::ErrorKind::NotFound
        ));
    }

    #[test]
    fn option_context_becomes_generic_error() {
        let err = None::<u8>.context("icon has no file name").unwrap_err();
        assert_eq!(err.to_string(), "icon has no file name");
    }
}
