//! Names baked into the stock runtime distribution.
//!
//! These are the strings and paths a freshly unpacked runtime ships with,
//! and which branding replaces.

/// Product name used by the stock runtime in its bundle and Info.plist.
pub const RUNTIME_PRODUCT_NAME: &str = "Electron";

/// Bundle directory name of the stock darwin runtime.
pub const RUNTIME_BUNDLE_NAME: &str = "Electron.app";

/// Bundle identifier of the stock darwin runtime.
pub const DEFAULT_BUNDLE_IDENTIFIER: &str = "com.github.electron";

/// Icon shipped in the darwin bundle's `Contents/Resources`.
pub const DEFAULT_ICON_FILENAME: &str = "atom.icns";

/// Placeholder application payload removed before installing sources.
pub const DEFAULT_APP_DIR: &str = "default_app";

/// Directory under resources the application sources are installed into.
pub(crate) const APP_DIR: &str = "app";

/// Property list file name, a sibling of `Contents/Resources`.
pub(crate) const INFO_PLIST: &str = "Info.plist";
