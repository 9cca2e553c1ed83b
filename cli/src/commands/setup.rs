use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;

pub const OPERATIONS_DIR: &str = "operations";

/// Creates `<base>/operations/op-<unix seconds>` and returns its path.
pub fn create_operation_directory(base: &Path) -> anyhow::Result<PathBuf> {
    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .context("system clock is set before the unix epoch")?
        .as_secs();

    let dir = base.join(OPERATIONS_DIR).join(format!("op-{stamp}"));
    fs::create_dir_all(&dir).with_context(|| format!("failed to create {}", dir.display()))?;
    Ok(dir)
}
