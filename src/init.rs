use anyhow::Result;
use std::path::Path;

use crate::paths::{config_db_path, repo_root};
use crate::stores::StoreFactory;

/// Open or create the `.phenotype/config.db` for a repository.
///
/// This is the whole initialization sequence:
/// 1. If `stores` is `None` (no Phenotype SDK available), return immediately.
///    This is a normal outcome, not an error, and nothing is written.
/// 2. Resolve the repository root: `repo_root` if given, otherwise the
///    current working directory at call time.
/// 3. Compute `<root>/.phenotype/config.db`.
/// 4. Ensure the configuration store, then the feature-flag store, at that
///    path. Both receive the identical path; creating the directory, the
///    file, and the schema is the factory's job.
///
/// The caller is never told which branch ran. No handle to either store is
/// retained; the side effect on disk is the point.
///
/// # Errors
/// - Resolving the current working directory can fail when no root is given.
/// - Any error from the store factory propagates unchanged. A failure from
///   the configuration store short-circuits, so the flag store is not
///   touched. Nothing beyond the absent-SDK case is swallowed.
pub fn init_phenotype(stores: Option<&dyn StoreFactory>, root: Option<&Path>) -> Result<()> {
    let Some(stores) = stores else {
        return Ok(());
    };

    let root = repo_root(root)?;
    let db = config_db_path(&root);

    stores.ensure_config_store(&db)?;
    stores.ensure_flag_store(&db)?;
    Ok(())
}
