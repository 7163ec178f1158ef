//! Runtime helpers
//!
//! Wire configuration, logging and the file-backed store into a ready
//! repository for embedding applications.

use configs::{AppConfig, StoreConfig};
use tracing::info;

use crate::preferences::UserPreferencesRepository;
use crate::storage::JsonPreferencesStore;

pub type FileRepository = UserPreferencesRepository<JsonPreferencesStore>;

/// Ensure the data directory exists and open the namespace file.
pub async fn open_repository(cfg: &StoreConfig) -> anyhow::Result<FileRepository> {
    common::env::ensure_data_dir(&cfg.data_dir).await?;
    let store = JsonPreferencesStore::open(cfg.file_path()).await?;
    info!(
        event = "store_ready",
        namespace = %cfg.namespace,
        path = %store.file_path().display(),
        "user preferences store ready"
    );
    Ok(UserPreferencesRepository::new(store))
}

/// Install logging from `cfg` and open the repository it describes.
pub async fn start(cfg: &AppConfig) -> anyhow::Result<FileRepository> {
    common::utils::logging::init_logging(&cfg.logging);
    open_repository(&cfg.store).await
}

/// Load `config.toml` (or `CONFIG_PATH`), validate it and start.
pub async fn bootstrap() -> anyhow::Result<FileRepository> {
    let cfg = AppConfig::load_and_validate()?;
    start(&cfg).await
}
