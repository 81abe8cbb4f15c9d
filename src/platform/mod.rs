//! Host platform detection.
//!
//! The release matrix only covers macOS, Linux and Windows on amd64 and
//! arm64, so detection is an enum lookup rather than a free-form string.

use anyhow::Result;

use crate::error::InstallerError;

/// Operating systems with published release artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Os {
    MacOs,
    Linux,
    Windows,
}

impl Os {
    /// The OS segment used in release artifact names.
    pub fn asset_token(&self) -> &'static str {
        match self {
            Os::MacOs => "darwin",
            Os::Linux => "linux",
            Os::Windows => "windows",
        }
    }

    fn detect() -> Option<Self> {
        #[cfg(target_os = "macos")]
        {
            Some(Os::MacOs)
        }
        #[cfg(target_os = "linux")]
        {
            Some(Os::Linux)
        }
        #[cfg(target_os = "windows")]
        {
            Some(Os::Windows)
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }
}

/// CPU architectures with published release artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arch {
    Amd64,
    Arm64,
}

impl Arch {
    /// The architecture segment used in release artifact names.
    pub fn asset_token(&self) -> &'static str {
        match self {
            Arch::Amd64 => "amd64",
            Arch::Arm64 => "arm64",
        }
    }

    fn detect() -> Option<Self> {
        #[cfg(target_arch = "x86_64")]
        {
            Some(Arch::Amd64)
        }
        #[cfg(target_arch = "aarch64")]
        {
            Some(Arch::Arm64)
        }
        #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
        {
            None
        }
    }
}

/// The (OS, architecture) pair used to select a release artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Platform {
    pub os: Os,
    pub arch: Arch,
}

impl Platform {
    /// Detect the current platform from compile-time target information.
    pub fn detect() -> Result<Self> {
        match (Os::detect(), Arch::detect()) {
            (Some(os), Some(arch)) => Ok(Self { os, arch }),
            _ => Err(InstallerError::UnsupportedPlatform {
                os: std::env::consts::OS.to_string(),
                arch: std::env::consts::ARCH.to_string(),
            }
            .into()),
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.os.asset_token(), self.arch.asset_token())
    }
}

/// Trait for platform detection (useful for testing)
pub trait PlatformDetector: Send + Sync {
    fn detect(&self) -> Result<Platform>;
}

/// Default platform detector using compile-time detection
pub struct DefaultPlatformDetector;

impl PlatformDetector for DefaultPlatformDetector {
    fn detect(&self) -> Result<Platform> {
        Platform::detect()
    }
}
