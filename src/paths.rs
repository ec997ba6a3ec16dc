use anyhow::{Context, Result};
use std::{
    env,
    path::{Path, PathBuf},
};

/// Directory created under the repository root to hold Phenotype data.
pub const PHENOTYPE_DIR: &str = ".phenotype";

/// Database file name inside [`PHENOTYPE_DIR`].
pub const CONFIG_DB_FILE: &str = "config.db";

/// Resolve the repository root for an initialization call.
///
/// An explicit `root` is passed through unchanged; no existence or
/// writability check is performed here. When `root` is `None`, the process
/// current working directory at call time is used.
///
/// # Errors
/// Returns an error only when no root is given and the current working
/// directory cannot be determined.
pub fn repo_root(root: Option<&Path>) -> Result<PathBuf> {
    match root {
        Some(r) => Ok(r.to_path_buf()),
        None => env::current_dir().context("failed to resolve current working directory"),
    }
}

/// Compute the config database path for a repository root.
///
/// The suffix is fixed: `<repo_root>/.phenotype/config.db`. The value is
/// computed fresh on each call and never cached.
pub fn config_db_path(repo_root: &Path) -> PathBuf {
    repo_root.join(PHENOTYPE_DIR).join(CONFIG_DB_FILE)
}
