//! Store-factory seam for the Phenotype SDK.
//!
//! The SDK is an optional external dependency: some builds bundle it, most do
//! not. Rather than probing for it at runtime, callers inject an
//! implementation of [`StoreFactory`] (or none at all, see
//! [`init_phenotype`](crate::init_phenotype)). This keeps the "SDK absent"
//! branch explicit and lets the rest of the codebase stay independent of any
//! concrete SDK binding.

use anyhow::Result;
use std::path::Path;

/// The two capabilities the Phenotype SDK exposes for a repository database.
///
/// Both operations take the computed `config.db` path and are expected to
/// create the underlying storage and its schema if absent, or open it if
/// already present. The database format itself is owned entirely by the SDK.
pub trait StoreFactory {
    /// Ensure the general configuration store exists at `db_path`.
    ///
    /// # Errors
    /// Surfaces whatever the SDK reports (typically I/O or permission
    /// errors); nothing is caught or reclassified here.
    fn ensure_config_store(&self, db_path: &Path) -> Result<()>;

    /// Ensure the feature-flag store exists at `db_path`.
    ///
    /// Layered over the same on-disk file as the configuration store.
    ///
    /// # Errors
    /// Same contract as [`ensure_config_store`](Self::ensure_config_store).
    fn ensure_flag_store(&self, db_path: &Path) -> Result<()>;
}

/// Stand-in factory for builds without a Phenotype SDK.
///
/// Both operations succeed without touching the filesystem, so call sites
/// that always want a factory in hand can use this instead of branching.
pub struct NoopStores;

impl StoreFactory for NoopStores {
    fn ensure_config_store(&self, _db_path: &Path) -> Result<()> {
        Ok(())
    }

    fn ensure_flag_store(&self, _db_path: &Path) -> Result<()> {
        Ok(())
    }
}
