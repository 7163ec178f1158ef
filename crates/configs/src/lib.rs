use anyhow::Result;
use serde::Deserialize;
use anyhow::anyhow;
use models::USER_PREFERENCES_NAME;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_namespace")]
    pub namespace: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { data_dir: default_data_dir(), namespace: default_namespace() }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct LoggingConfig {
    /// Emit JSON lines instead of the compact human format.
    #[serde(default)]
    pub json: bool,
    /// Fallback filter when `RUST_LOG` is unset.
    #[serde(default)]
    pub filter: Option<String>,
}

fn default_data_dir() -> String { "data".to_string() }
fn default_namespace() -> String { USER_PREFERENCES_NAME.to_string() }

/// Load from `CONFIG_PATH` (default `config.toml`), after applying `.env`.
pub fn load_default() -> Result<AppConfig> {
    dotenvy::dotenv().ok();
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    load_from_str(&content)
}

pub fn load_from_str(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default()?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.store.normalize();
        self.store.validate()?;
        Ok(())
    }
}

impl StoreConfig {
    pub fn normalize(&mut self) {
        if self.data_dir.trim().is_empty() {
            self.data_dir = default_data_dir();
        }
        let ns = self.namespace.trim();
        self.namespace = if ns.is_empty() { default_namespace() } else { ns.to_string() };
    }

    pub fn validate(&self) -> Result<()> {
        // the namespace becomes a file stem
        if self.namespace.contains(['/', '\\']) || self.namespace.starts_with('.') {
            return Err(anyhow!("store.namespace must be a plain name, got {:?}", self.namespace));
        }
        Ok(())
    }

    /// Path of the file backing the namespace.
    pub fn file_path(&self) -> std::path::PathBuf {
        std::path::Path::new(&self.data_dir).join(format!("{}.json", self.namespace))
    }
}
