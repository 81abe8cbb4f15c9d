use anyhow::Result;
use log::{debug, info};
use std::path::Path;

use crate::error::InstallerError;
use crate::runtime::Runtime;

/// Checks that the installed binary reports the expected version.
///
/// Runs the binary with `--version` and requires `expected_version` to
/// appear as a substring of its stdout.
#[tracing::instrument(skip(runtime))]
pub fn verify<R: Runtime>(runtime: &R, binary_path: &Path, expected_version: &str) -> Result<()> {
    debug!(
        "Verifying that {:?} reports version {}",
        binary_path, expected_version
    );

    let output = runtime
        .command_stdout(binary_path, "--version")
        .map_err(|e| InstallerError::Verification(format!("{:#}", e)))?;

    if !output.contains(expected_version) {
        return Err(InstallerError::Verification(format!(
            "expected version {} not found in output {:?}",
            expected_version,
            output.trim()
        ))
        .into());
    }

    info!("Verified: {:?} reports {}", binary_path, expected_version);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::MockRuntime;
    use mockall::predicate::eq;
    use std::path::PathBuf;

    fn binary() -> PathBuf {
        PathBuf::from("/home/user/.local/bin/mlchain")
    }

    #[test]
    fn test_verify_version_present() {
        let mut runtime = MockRuntime::new();
        runtime
            .expect_command_stdout()
            .with(eq(binary()), eq("--version"))
            .returning(|_, _| Ok("mlchain plugin daemon 0.0.1-beta.21\n".to_string()));

        assert!(verify(&runtime, &binary(), "0.0.1-beta.21").is_ok());
    }

    #[test]
    fn test_verify_version_absent() {
        let mut runtime = MockRuntime::new();
        runtime
            .expect_command_stdout()
            .returning(|_, _| Ok("mlchain plugin daemon 0.0.1-beta.20\n".to_string()));

        let err = verify(&runtime, &binary(), "0.0.1-beta.21").unwrap_err();
        match err.downcast_ref::<InstallerError>() {
            Some(InstallerError::Verification(msg)) => {
                assert!(msg.contains("0.0.1-beta.21"));
                assert!(msg.contains("0.0.1-beta.20"));
            }
            other => panic!("Expected Verification error, got {:?}", other),
        }
    }

    #[test]
    fn test_verify_binary_not_executable() {
        let mut runtime = MockRuntime::new();
        runtime
            .expect_command_stdout()
            .returning(|_, _| Err(anyhow::anyhow!("permission denied")));

        let err = verify(&runtime, &binary(), "0.0.1-beta.21").unwrap_err();
        match err.downcast_ref::<InstallerError>() {
            Some(InstallerError::Verification(msg)) => {
                assert!(msg.contains("permission denied"));
            }
            other => panic!("Expected Verification error, got {:?}", other),
        }
    }
}
