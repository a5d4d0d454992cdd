use std::path::{Path, PathBuf};

use anyhow::Context;
use haul_config::{HaulConfig, PROJECT_DIR};
use haul_db::service::FreightService;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::InitArgs;
use crate::output::output;

const CONFIG_TEMPLATE: &str = r#"# Haul project configuration.
# Environment variables override these values: HAUL_ORIGIN__CITY, HAUL_GENERAL__DEFAULT_LIMIT, ...

[general]
default_limit = 50

[logging]
level = "warn"

# Pickup location used by `haul book plan`.
[origin]
company = ""
address = ""
city = ""
state = ""
postal_code = ""
country = "USA"
contact_name = ""
contact_phone = ""
contact_email = ""
dock_hours_open = "09:00 AM"
dock_hours_close = "04:00 PM"
"#;

#[derive(Debug, Serialize)]
struct InitResponse {
    project_root: PathBuf,
    config: PathBuf,
    config_written: bool,
    database: PathBuf,
}

/// Handle `haul init`.
pub async fn handle(args: &InitArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let project_root = match &flags.project {
        Some(path) => PathBuf::from(path),
        None => std::env::current_dir().context("failed to read current directory")?,
    };
    let response = init_project(&project_root, args.force).await?;
    output(&response, flags.format)
}

async fn init_project(project_root: &Path, force: bool) -> anyhow::Result<InitResponse> {
    let haul_dir = project_root.join(PROJECT_DIR);
    std::fs::create_dir_all(&haul_dir)
        .with_context(|| format!("failed to create {}", haul_dir.display()))?;

    let config_path = HaulConfig::project_config_path(project_root);
    let config_written = force || !config_path.exists();
    if config_written {
        std::fs::write(&config_path, CONFIG_TEMPLATE)
            .with_context(|| format!("failed to write {}", config_path.display()))?;
    }

    let config = HaulConfig::load_for_project(project_root)?;
    let database = config.database_path(project_root);
    FreightService::new_local(&database.to_string_lossy())
        .await
        .context("failed to create haul database")?;
    tracing::info!(root = %project_root.display(), "haul project initialized");

    Ok(InitResponse {
        project_root: project_root.to_path_buf(),
        config: config_path,
        config_written,
        database,
    })
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[tokio::test]
    async fn init_creates_config_and_database() {
        let temp = TempDir::new().expect("tempdir should create");
        let response = init_project(temp.path(), false).await.expect("init should work");

        assert!(response.config_written);
        assert!(response.config.is_file());
        assert!(response.database.is_file());
        assert!(response.database.ends_with(".haul/haul.db"));
    }

    #[tokio::test]
    async fn init_keeps_existing_config() {
        let temp = TempDir::new().expect("tempdir should create");
        init_project(temp.path(), false).await.expect("first init should work");

        let config_path = HaulConfig::project_config_path(temp.path());
        std::fs::write(&config_path, "[general]\ndefault_limit = 7\n").expect("write config");

        let response = init_project(temp.path(), false).await.expect("second init should work");
        assert!(!response.config_written);
        let kept = std::fs::read_to_string(&config_path).expect("read config");
        assert!(kept.contains("default_limit = 7"));
    }

    #[test]
    fn template_parses_as_config() {
        let temp = TempDir::new().expect("tempdir should create");
        let dir = temp.path().join(PROJECT_DIR);
        std::fs::create_dir_all(&dir).expect("create .haul");
        std::fs::write(dir.join("config.toml"), CONFIG_TEMPLATE).expect("write template");

        let config: HaulConfig = HaulConfig::figment(temp.path())
            .extract()
            .expect("template should parse");
        assert_eq!(config.general.default_limit, 50);
        assert_eq!(config.origin.dock_hours_close, "04:00 PM");
    }
}
