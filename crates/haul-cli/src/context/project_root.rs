use std::path::{Path, PathBuf};

use anyhow::Context;
use haul_config::PROJECT_DIR;

/// Walk upwards from `start` until a `.haul` directory is found.
#[must_use]
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(PROJECT_DIR).is_dir())
        .map(Path::to_path_buf)
}

/// Resolve the project root from `--project` or the current directory.
///
/// `--project` may name either the project root or its `.haul` directory.
pub fn resolve_project_root(project_override: Option<&str>) -> anyhow::Result<PathBuf> {
    if let Some(path) = project_override {
        let explicit = PathBuf::from(path);
        if explicit.file_name().is_some_and(|name| name == PROJECT_DIR) {
            return explicit
                .parent()
                .map(Path::to_path_buf)
                .context("invalid --project path: '.haul' directory has no parent");
        }
        if explicit.join(PROJECT_DIR).is_dir() {
            return Ok(explicit);
        }
        anyhow::bail!(
            "invalid --project '{}': no .haul directory. Run 'haul init' there first.",
            explicit.display()
        );
    }

    let start = std::env::current_dir().context("failed to read current directory")?;
    find_project_root(&start)
        .context("not a haul project (no .haul directory found). Run 'haul init' first.")
}
