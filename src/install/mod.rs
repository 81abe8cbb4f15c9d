//! The install pipeline: select, download, install, verify.
//!
//! One linear sequence per invocation. Any failure aborts the run and
//! surfaces to the caller; the only state left behind on failure is
//! whatever was installed before.

use anyhow::Result;
use log::info;
use reqwest::Client;
use std::path::PathBuf;

use crate::cleanup::PartialFileGuard;
use crate::download::download_artifact;
use crate::error::InstallerError;
use crate::http::HttpClient;
use crate::platform::Platform;
use crate::release::{DEFAULT_BASE_URL, ReleaseDescriptor};
use crate::runtime::Runtime;
use crate::verify::verify;

mod paths;

pub use paths::default_bin_dir;

/// Options shared by the install-related commands.
#[derive(Debug, Clone)]
pub struct InstallOptions {
    /// Release version to install.
    pub version: String,
    /// Binary directory override; defaults to `~/.local/bin`.
    pub bin_dir: Option<PathBuf>,
    /// Download host override; defaults to `https://github.com`.
    pub base_url: Option<String>,
}

impl InstallOptions {
    fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    fn resolve_descriptor(&self) -> Result<ReleaseDescriptor> {
        let platform = Platform::detect()?;
        ReleaseDescriptor::select(&self.version, platform, self.base_url())
    }

    fn resolve_bin_dir<R: Runtime>(&self, runtime: &R) -> Result<PathBuf> {
        match &self.bin_dir {
            Some(dir) => Ok(dir.clone()),
            None => default_bin_dir(runtime),
        }
    }
}

/// Install the pinned release for the current platform.
///
/// Downloads to a hidden `.partial` file next to the target and renames
/// it into place, so an existing installation is either fully replaced
/// or left untouched.
#[tracing::instrument(skip(runtime, opts))]
pub async fn install<R: Runtime>(runtime: &R, opts: &InstallOptions) -> Result<()> {
    let descriptor = opts.resolve_descriptor()?;
    let bin_dir = opts.resolve_bin_dir(runtime)?;

    runtime
        .create_dir_all(&bin_dir)
        .map_err(install_error)?;

    let target = bin_dir.join(descriptor.binary_name);
    let temp = bin_dir.join(format!(".{}.partial", descriptor.binary_name));

    let guard = PartialFileGuard::new(runtime, temp.clone());
    let http_client = HttpClient::new(Client::new());
    download_artifact(runtime, &descriptor.download_url, &temp, &http_client).await?;

    runtime.set_permissions(&temp, 0o755).map_err(install_error)?;
    runtime.rename(&temp, &target).map_err(install_error)?;
    guard.disarm();

    info!(
        "Installed {} {} to {:?}",
        descriptor.binary_name, descriptor.version, target
    );

    verify(runtime, &target, &descriptor.version)?;

    println!(
        "Installed {} {} to {}",
        descriptor.binary_name,
        descriptor.version,
        target.display()
    );
    Ok(())
}

/// Re-check an existing installation against the pinned version.
#[tracing::instrument(skip(runtime, opts))]
pub fn verify_installed<R: Runtime>(runtime: &R, opts: &InstallOptions) -> Result<()> {
    let descriptor = opts.resolve_descriptor()?;
    let bin_dir = opts.resolve_bin_dir(runtime)?;
    let target = bin_dir.join(descriptor.binary_name);

    if !runtime.exists(&target) {
        return Err(InstallerError::Verification(format!(
            "{} is not installed at {:?}",
            descriptor.binary_name, target
        ))
        .into());
    }

    verify(runtime, &target, &descriptor.version)?;

    println!(
        "{} {} verified at {}",
        descriptor.binary_name,
        descriptor.version,
        target.display()
    );
    Ok(())
}

/// Print the resolved release descriptor without touching the network.
#[tracing::instrument(skip(runtime, opts))]
pub fn show<R: Runtime>(runtime: &R, opts: &InstallOptions) -> Result<()> {
    let descriptor = opts.resolve_descriptor()?;
    let bin_dir = opts.resolve_bin_dir(runtime)?;
    let target = bin_dir.join(descriptor.binary_name);

    println!("version:  {}", descriptor.version);
    println!("platform: {}", descriptor.platform);
    println!("artifact: {}", descriptor.artifact_name);
    println!("url:      {}", descriptor.download_url);
    println!("install:  {}", target.display());
    Ok(())
}

fn install_error(e: anyhow::Error) -> anyhow::Error {
    InstallerError::Install(format!("{:#}", e)).into()
}
