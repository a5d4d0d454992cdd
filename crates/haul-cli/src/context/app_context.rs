use std::path::Path;

use anyhow::Context;
use haul_config::HaulConfig;
use haul_db::service::FreightService;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: FreightService,
    pub config: HaulConfig,
}

impl AppContext {
    /// Open the project database and keep it alongside the loaded config.
    pub async fn init(project_root: &Path, config: HaulConfig) -> anyhow::Result<Self> {
        let db_path = config.database_path(project_root);
        let service = FreightService::new_local(&db_path.to_string_lossy())
            .await
            .with_context(|| format!("failed to open {}", db_path.display()))?;
        tracing::debug!(db = %db_path.display(), "haul database ready");

        if !config.origin.is_configured() {
            tracing::debug!("origin not configured; `haul book plan` will refuse to run");
        }

        Ok(Self { service, config })
    }
}

/// Load `.env` from the project root (if any), then the layered config.
pub fn load_config(project_root: &Path) -> anyhow::Result<HaulConfig> {
    let env_path = project_root.join(".env");
    if env_path.is_file() {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load {}", env_path.display()))?;
    }
    HaulConfig::load_for_project(project_root).map_err(anyhow::Error::from)
}
