//! Electron runtime staging.
//!
//! Resolves [`StageOptions`] into [`Settings`] and runs the [`Stager`]
//! pipeline, producing a [`StagedApp`].
//!
//! # Example
//!
//! ```no_run
//! use kodegen_bundler_electron::bundler::{Platform, SettingsBuilder, Stager};
//!
//! # async fn example() -> kodegen_bundler_electron::bundler::Result<()> {
//! let settings = SettingsBuilder::new()
//!     .platform(Platform::Darwin)
//!     .arch("x64")
//!     .name("MyApp")
//!     .bundle_identifier("com.example.myapp")
//!     .build()?;
//!
//! let staged = Stager::new(settings).run().await?;
//! println!("Bundle: {:?}", staged.bundle_path);
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod error;
pub mod platform;
pub mod settings;
pub mod utils;

pub use builder::{StagedApp, Stager, stage};
pub use error::{Error, Result};
pub use settings::{
    Arch, DEFAULT_APP_DIR, DEFAULT_BUNDLE_IDENTIFIER, DEFAULT_ICON_FILENAME, Platform,
    PlatformResources, RUNTIME_BUNDLE_NAME, RUNTIME_PRODUCT_NAME, Settings, SettingsBuilder,
    StageOptions,
};
