//! Release descriptor selection.
//!
//! A [`ReleaseDescriptor`] is constructed fresh for each invocation from
//! the pinned release table and the detected platform, and never mutated
//! afterwards. Exactly one download URL is selected per run.

use anyhow::Result;

use crate::error::InstallerError;
use crate::platform::{Arch, Os, Platform};

/// Release version installed by default.
pub const DEFAULT_VERSION: &str = "0.0.1-beta.21";

/// GitHub repository that publishes the release artifacts.
pub const RELEASE_REPO: &str = "mlchain/mlchain-plugin-daemon";

/// Prefix shared by all release artifact names.
pub const ARTIFACT_PREFIX: &str = "dify-plugin";

/// Name the binary is installed under, independent of the artifact name.
pub const BINARY_NAME: &str = "mlchain";

/// Default download host.
pub const DEFAULT_BASE_URL: &str = "https://github.com";

/// Everything needed to fetch and install one release artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseDescriptor {
    pub version: String,
    pub platform: Platform,
    pub artifact_name: String,
    pub download_url: String,
    pub binary_name: &'static str,
}

impl ReleaseDescriptor {
    /// Select the artifact for `platform` at `version`.
    ///
    /// Fails with [`InstallerError::UnsupportedPlatform`] for pairs the
    /// release matrix has no entry for (currently Windows on arm64).
    pub fn select(version: &str, platform: Platform, base_url: &str) -> Result<Self> {
        if !is_supported(platform) {
            return Err(InstallerError::UnsupportedPlatform {
                os: platform.os.asset_token().to_string(),
                arch: platform.arch.asset_token().to_string(),
            }
            .into());
        }

        let artifact_name = format!(
            "{}-{}-{}",
            ARTIFACT_PREFIX,
            platform.os.asset_token(),
            platform.arch.asset_token()
        );
        let download_url = format!(
            "{}/{}/releases/download/{}/{}",
            base_url.trim_end_matches('/'),
            RELEASE_REPO,
            version,
            artifact_name
        );

        Ok(Self {
            version: version.to_string(),
            platform,
            artifact_name,
            download_url,
            binary_name: binary_name_for(platform.os),
        })
    }
}

fn is_supported(platform: Platform) -> bool {
    // Windows builds are only published for amd64.
    !matches!(
        platform,
        Platform {
            os: Os::Windows,
            arch: Arch::Arm64,
        }
    )
}

fn binary_name_for(os: Os) -> &'static str {
    match os {
        Os::Windows => "mlchain.exe",
        _ => BINARY_NAME,
    }
}
