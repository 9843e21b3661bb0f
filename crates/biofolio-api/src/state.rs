//! Application state shared by every command.
//!
//! Holds the resolved data directory and the loaded configuration. Biography
//! records are not part of it: each session owns its own `SessionState`.

use std::path::PathBuf;

use biofolio_infra::config::load_global_config;
use biofolio_infra::filesystem::resolve_data_dir;
use biofolio_types::config::GlobalConfig;

#[derive(Debug, Clone)]
pub struct AppState {
    pub data_dir: PathBuf,
    pub config: GlobalConfig,
}

impl AppState {
    /// Resolve the data directory and load `config.toml` from it.
    ///
    /// The directory is never created; a missing config simply yields defaults.
    pub async fn init() -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();
        let config = load_global_config(&data_dir).await;
        tracing::debug!(data_dir = %data_dir.display(), "application state initialized");

        Ok(Self { data_dir, config })
    }
}
