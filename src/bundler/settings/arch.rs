//! CPU architecture types and utilities.

use std::fmt;

/// CPU architecture of the runtime distribution.
///
/// Only validated, never otherwise consumed: the binaries directory holds a
/// single distribution per platform.
///
/// # Platform Support
///
/// - darwin: X64
/// - linux: X64, Ia32
/// - win32: X64, Ia32
///
/// # Examples
///
/// ```no_run
/// use kodegen_bundler_electron::bundler::Arch;
///
/// let arch = Arch::X64;
/// println!("Target architecture: {}", arch);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Arch {
    /// x86_64 / AMD64 (64-bit)
    X64,
    /// x86 / i686 (32-bit)
    Ia32,
}

impl Arch {
    /// Canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Arch::X64 => "x64",
            Arch::Ia32 => "ia32",
        }
    }

    /// Parses a runtime architecture name.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "x64" => Some(Arch::X64),
            "ia32" => Some(Arch::Ia32),
            _ => None,
        }
    }

    /// Host architecture name in runtime conventions.
    ///
    /// Hosts without a runtime mapping (e.g. `arm64`) are returned as-is and
    /// fail validation later.
    pub fn host() -> &'static str {
        match std::env::consts::ARCH {
            "x86_64" => "x64",
            "x86" => "ia32",
            "aarch64" => "arm64",
            other => other,
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
