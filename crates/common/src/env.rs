//! Environment/runtime helpers
//!
//! Sanity checks to ensure expected directories exist before a store opens.

use tracing::{debug, warn};

/// Ensure the data directory exists, creating it (and parents) when missing.
pub async fn ensure_data_dir(data_dir: &str) -> anyhow::Result<()> {
    match tokio::fs::metadata(data_dir).await {
        Ok(meta) if meta.is_dir() => {
            debug!(%data_dir, "data directory present");
            return Ok(());
        }
        Ok(_) => return Err(anyhow::anyhow!("{data_dir} exists but is not a directory")),
        Err(_) => warn!(%data_dir, "data directory not found; creating it"),
    }
    tokio::fs::create_dir_all(data_dir)
        .await
        .map_err(|e| anyhow::anyhow!("cannot create {data_dir}: {e}"))?;
    Ok(())
}
