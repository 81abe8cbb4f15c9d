//! Invoking the installed binary.

use anyhow::{Context, Result, bail};
use std::path::Path;
use std::process::Command;

use super::RealRuntime;

impl RealRuntime {
    #[tracing::instrument(skip(self))]
    pub(crate) fn command_stdout_impl(&self, program: &Path, arg: &str) -> Result<String> {
        let output = Command::new(program)
            .arg(arg)
            .output()
            .with_context(|| format!("Failed to execute {:?}", program))?;

        if !output.status.success() {
            bail!(
                "{:?} {} exited with {}: {}",
                program,
                arg,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

#[cfg(test)]
mod tests {
    use crate::runtime::{RealRuntime, Runtime};
    use std::path::Path;

    #[cfg(unix)]
    #[test]
    fn test_command_stdout_captures_output() {
        let runtime = RealRuntime;
        let output = runtime.command_stdout(Path::new("/bin/echo"), "hello").unwrap();
        assert_eq!(output.trim(), "hello");
    }

    #[test]
    fn test_command_stdout_missing_program() {
        let runtime = RealRuntime;
        let result = runtime.command_stdout(Path::new("/nonexistent/program"), "--version");
        assert!(result.is_err());
    }
}
