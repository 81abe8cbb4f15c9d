use anyhow::{Context, Result};
use log::info;
use std::path::Path;

use crate::error::InstallerError;
use crate::http::HttpClient;
use crate::runtime::Runtime;

/// Downloads a release artifact from a URL to a temporary path.
///
/// Any failure is reported as [`InstallerError::Download`]; the caller
/// is responsible for cleaning up the temporary file.
#[tracing::instrument(skip(runtime, temp_path, http_client))]
pub async fn download_artifact<R: Runtime>(
    runtime: &R,
    url: &str,
    temp_path: &Path,
    http_client: &HttpClient,
) -> Result<()> {
    info!("Downloading artifact from {}...", url);

    let temp_path = temp_path.to_path_buf();
    http_client
        .download_file(url, || {
            runtime
                .create_file(&temp_path)
                .with_context(|| format!("Failed to create temporary file at {:?}", temp_path))
        })
        .await
        .map_err(|e| InstallerError::Download(format!("{:#}", e)))?;

    info!("Download complete.");
    Ok(())
}
