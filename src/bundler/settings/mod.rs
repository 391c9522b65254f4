//! Configuration structures for staging operations.
//!
//! Raw, user-facing [`StageOptions`] are resolved exactly once into an
//! immutable [`Settings`], which carries every derived path the pipeline
//! steps consult. [`SettingsBuilder`] offers the same resolution through a
//! fluent API.

mod arch;
mod builder;
mod core;
mod macos;
mod options;
mod platform;

pub use arch::Arch;
pub use builder::SettingsBuilder;
pub use core::Settings;
pub use macos::{
    DEFAULT_APP_DIR, DEFAULT_BUNDLE_IDENTIFIER, DEFAULT_ICON_FILENAME, RUNTIME_BUNDLE_NAME,
    RUNTIME_PRODUCT_NAME,
};
pub use options::{PlatformResources, StageOptions};
pub use platform::Platform;
