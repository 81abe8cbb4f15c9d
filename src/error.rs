//! Error taxonomy for the install pipeline.
//!
//! Every failure is terminal for the current invocation: nothing is
//! retried, and the failing stage is identifiable from the message.

/// Errors surfaced by the install pipeline, one variant per stage.
#[derive(Debug)]
pub enum InstallerError {
    /// No release artifact exists for the detected OS/architecture pair.
    UnsupportedPlatform { os: String, arch: String },
    /// Network failure or non-2xx response while fetching the artifact.
    Download(String),
    /// Filesystem failure while placing the binary.
    Install(String),
    /// The installed binary did not report the expected version.
    Verification(String),
}

impl std::fmt::Display for InstallerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InstallerError::UnsupportedPlatform { os, arch } => {
                write!(f, "Unsupported platform: no release artifact for {os}/{arch}")
            }
            InstallerError::Download(msg) => {
                write!(f, "Download failed: {msg}")
            }
            InstallerError::Install(msg) => {
                write!(f, "Install failed: {msg}")
            }
            InstallerError::Verification(msg) => {
                write!(f, "Verification failed: {msg}")
            }
        }
    }
}

impl std::error::Error for InstallerError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_platform_display() {
        let err = InstallerError::UnsupportedPlatform {
            os: "windows".to_string(),
            arch: "arm64".to_string(),
        };
        assert!(err.to_string().contains("Unsupported platform"));
        assert!(err.to_string().contains("windows/arm64"));
    }

    #[test]
    fn test_stage_is_identifiable_from_message() {
        let err = InstallerError::Download("connection reset".to_string());
        assert!(err.to_string().starts_with("Download failed"));

        let err = InstallerError::Install("permission denied".to_string());
        assert!(err.to_string().starts_with("Install failed"));

        let err = InstallerError::Verification("no version in output".to_string());
        assert!(err.to_string().starts_with("Verification failed"));
    }

    #[test]
    fn test_downcast_through_anyhow() {
        let err = anyhow::Error::from(InstallerError::Download("timeout".to_string()));
        assert!(err.downcast_ref::<InstallerError>().is_some());
    }
}
