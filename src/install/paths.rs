//! Install path resolution.

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::runtime::Runtime;

/// Default binary directory: `~/.local/bin` (same layout on Windows,
/// under the user profile).
pub fn default_bin_dir<R: Runtime>(runtime: &R) -> Result<PathBuf> {
    let home = runtime
        .home_dir()
        .context("Could not determine home directory")?;
    Ok(home.join(".local").join("bin"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::MockRuntime;
    use crate::test_utils::test_home;

    #[test]
    fn test_default_bin_dir() {
        let mut runtime = MockRuntime::new();
        runtime.expect_home_dir().returning(|| Some(test_home()));

        let dir = default_bin_dir(&runtime).unwrap();
        assert_eq!(dir, test_home().join(".local").join("bin"));
    }

    #[test]
    fn test_default_bin_dir_no_home() {
        let mut runtime = MockRuntime::new();
        runtime.expect_home_dir().returning(|| None);

        assert!(default_bin_dir(&runtime).is_err());
    }
}
