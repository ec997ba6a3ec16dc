//! Crate entry point for **pheno**.
//!
//! This library backs the `pheno` CLI and is the bootstrap shim for the
//! optional Phenotype configuration SDK: given a repository root, it makes
//! sure `.phenotype/config.db` exists by delegating to whatever SDK binding
//! the build supplies, and does nothing when none is supplied.
//!
//! Each submodule covers one responsibility (path construction, the SDK
//! store seam, the initialization sequence). The `pub use` re-exports make
//! the public surface accessible directly from the crate root.

mod init;
mod paths;
mod stores;

/// Re-export the public API so it can be accessed from `pheno::*`.
pub use init::init_phenotype;
pub use paths::{CONFIG_DB_FILE, PHENOTYPE_DIR, config_db_path, repo_root};
pub use stores::{NoopStores, StoreFactory};
