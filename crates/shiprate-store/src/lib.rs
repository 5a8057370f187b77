//! Reference data storage.
//!
//! The engine works on an immutable [`ReferenceData`] snapshot taken at the
//! start of each operation. Persistence sits behind the [`ReferenceStore`]
//! trait: [`CsvStore`] keeps one BOM-prefixed CSV file per table in a data
//! directory, [`MemoryStore`] keeps everything in memory.

pub mod backup;
pub mod csv_table;
pub mod error;
pub mod paths;
pub mod snapshot;
pub mod store;

pub use backup::{backup_path, create_backup};
pub use csv_table::{read_batch, read_table, write_table};
pub use error::StoreError;
pub use paths::{DATA_DIR_ENV_VAR, DEFAULT_DATA_DIR, resolve_data_dir, table_path};
pub use snapshot::ReferenceData;
pub use store::{CsvStore, MemoryStore, ReferenceStore};
