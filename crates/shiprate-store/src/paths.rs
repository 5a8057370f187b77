//! Data directory resolution.

use std::path::{Path, PathBuf};

use shiprate_model::TableKind;

/// Environment variable for overriding the data directory.
pub const DATA_DIR_ENV_VAR: &str = "SHIPRATE_DATA_DIR";

/// Data directory used when nothing else is configured.
pub const DEFAULT_DATA_DIR: &str = "DB";

/// Resolve the data directory.
///
/// Resolution order:
/// 1. an explicit path (the `--data-dir` flag)
/// 2. `SHIPRATE_DATA_DIR` environment variable
/// 3. `./DB`
pub fn resolve_data_dir(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    if let Ok(root) = std::env::var(DATA_DIR_ENV_VAR)
        && !root.trim().is_empty()
    {
        return PathBuf::from(root);
    }
    PathBuf::from(DEFAULT_DATA_DIR)
}

/// File holding `kind` inside `root`.
pub fn table_path(root: &Path, kind: TableKind) -> PathBuf {
    root.join(kind.file_name())
}
