pub mod cleanup;
pub mod download;
pub mod error;
pub mod http;
pub mod install;
pub mod platform;
pub mod release;
pub mod runtime;
pub mod verify;

/// Test utilities for cross-platform path handling.
#[cfg(test)]
pub mod test_utils {
    use std::path::PathBuf;

    /// Returns a test home directory path based on the platform.
    /// - Unix: `/home/user`
    /// - Windows: `C:\Users\user`
    pub fn test_home() -> PathBuf {
        #[cfg(not(windows))]
        {
            PathBuf::from("/home/user")
        }
        #[cfg(windows)]
        {
            PathBuf::from(r"C:\Users\user")
        }
    }

    /// Returns a test binary directory based on the platform.
    /// - Unix: `/home/user/.local/bin`
    /// - Windows: `C:\Users\user\.local\bin`
    pub fn test_bin_dir() -> PathBuf {
        test_home().join(".local").join("bin")
    }
}
