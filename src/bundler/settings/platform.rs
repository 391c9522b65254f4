//! Target platform types.

use crate::bundler::Error;
use std::{fmt, str::FromStr};

/// Operating system a runtime distribution is staged for.
///
/// Names follow the runtime's own conventions (`darwin`, `linux`, `win32`),
/// which is also how the binaries root is laid out on disk:
/// `<binaries_dir>/<platform>/`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// macOS, staged as an `Electron.app` bundle
    Darwin,
    /// Linux, flat executable + `resources/` layout
    Linux,
    /// Windows, flat `electron.exe` + `resources/` layout
    Win32,
}

impl Platform {
    /// All supported platforms.
    pub const ALL: [Platform; 3] = [Platform::Darwin, Platform::Linux, Platform::Win32];

    /// Canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Darwin => "darwin",
            Platform::Linux => "linux",
            Platform::Win32 => "win32",
        }
    }

    /// Host platform name in runtime conventions.
    ///
    /// Unknown hosts are returned verbatim so validation can reject them.
    pub fn host() -> &'static str {
        match std::env::consts::OS {
            "macos" => "darwin",
            "windows" => "win32",
            other => other,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "darwin" => Ok(Platform::Darwin),
            "linux" => Ok(Platform::Linux),
            "win32" => Ok(Platform::Win32),
            other => Err(Error::UnsupportedPlatform(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_runtime_platform_names() {
        for platform in Platform::ALL {
            assert_eq!(platform.as_str().parse::<Platform>().unwrap(), platform);
        }
    }

    #[test]
    fn rejects_unknown_platform() {
        let err = "amiga".parse::<Platform>().unwrap_err();
        assert!(matches!(err, Error::UnsupportedPlatform(ref p) if p == "amiga"));
    }

    #[test]
    fn host_uses_runtime_names() {
        let host = Platform::host();
        assert_ne!(host, "macos");
        assert_ne!(host, "windows");
    }
}
