//! Timestamped backups taken before a table file is overwritten.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, TimeZone};
use tracing::debug;

use crate::error::StoreError;

/// `<file>.<YYYYmmddHHMMSS>.bak` next to `path`.
pub fn backup_path<Tz>(path: &Path, at: &DateTime<Tz>) -> PathBuf
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let mut name = path.as_os_str().to_os_string();
    name.push(format!(".{}.bak", at.format("%Y%m%d%H%M%S")));
    PathBuf::from(name)
}

/// Copy `path` to a timestamped backup. Returns `None` when there is nothing
/// to back up yet.
pub fn create_backup(path: &Path) -> Result<Option<PathBuf>, StoreError> {
    if !path.exists() {
        return Ok(None);
    }
    let target = backup_path(path, &Local::now());
    std::fs::copy(path, &target).map_err(|e| StoreError::io(&target, e))?;
    debug!(source = %path.display(), backup = %target.display(), "table backup written");
    Ok(Some(target))
}
