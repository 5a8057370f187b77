//! Storage backends.

use std::path::{Path, PathBuf};

use tracing::info;

use shiprate_model::{Table, TableKind};

use crate::backup::create_backup;
use crate::csv_table::{read_table, write_table};
use crate::error::StoreError;
use crate::paths::{resolve_data_dir, table_path};
use crate::snapshot::ReferenceData;

/// Source and sink of reference tables.
///
/// `load` takes a fresh snapshot; `commit` replaces one whole table. Callers
/// only commit rows that already passed validation.
pub trait ReferenceStore {
    fn load(&self) -> Result<ReferenceData, StoreError>;
    fn commit(&mut self, table: Table) -> Result<(), StoreError>;
}

/// In-memory store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    data: ReferenceData,
    commits: usize,
}

impl MemoryStore {
    pub fn new(data: ReferenceData) -> Self {
        Self { data, commits: 0 }
    }

    pub fn data(&self) -> &ReferenceData {
        &self.data
    }

    /// Number of successful commits.
    pub fn commits(&self) -> usize {
        self.commits
    }
}

impl ReferenceStore for MemoryStore {
    fn load(&self) -> Result<ReferenceData, StoreError> {
        Ok(self.data.clone())
    }

    fn commit(&mut self, table: Table) -> Result<(), StoreError> {
        self.data.replace(table);
        self.commits += 1;
        Ok(())
    }
}

/// One CSV file per table inside a data directory.
#[derive(Debug, Clone)]
pub struct CsvStore {
    root: PathBuf,
    backups: bool,
}

impl CsvStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            backups: true,
        }
    }

    /// Store rooted at the configured data directory.
    pub fn from_config(explicit: Option<&Path>) -> Self {
        Self::new(resolve_data_dir(explicit))
    }

    /// Toggle the timestamped backup taken before each overwrite.
    pub fn with_backups(mut self, enabled: bool) -> Self {
        self.backups = enabled;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path(&self, kind: TableKind) -> PathBuf {
        table_path(&self.root, kind)
    }
}

impl ReferenceStore for CsvStore {
    fn load(&self) -> Result<ReferenceData, StoreError> {
        let mut data = ReferenceData::new();
        for kind in TableKind::ALL {
            data.replace(read_table(kind, &self.path(kind))?);
        }
        Ok(data)
    }

    fn commit(&mut self, table: Table) -> Result<(), StoreError> {
        let kind = table.kind();
        let path = self.path(kind);
        let backup = if self.backups {
            create_backup(&path)?
        } else {
            None
        };
        write_table(&path, &table)?;
        info!(
            table = %kind,
            rows = table.len(),
            path = %path.display(),
            backup = backup.as_ref().map(|p| p.display().to_string()),
            "table committed"
        );
        Ok(())
    }
}
