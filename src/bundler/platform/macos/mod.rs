//! macOS bundle support.
//!
//! The darwin runtime ships as an `Electron.app` bundle whose `Info.plist`
//! carries the product name, bundle identifier and icon reference that
//! branding rewrites.

pub mod plist;
