//! CSV reading and writing for reference tables.
//!
//! Files are UTF-8 with a leading BOM. Header names and cells are trimmed on
//! read; a row whose field count differs from the header is skipped.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use shiprate_model::{
    Batch, BoxDraft, CarrierZoneMapping, Country, RateDraft, Service, SettingEntry, Settings,
    Table, TableKind,
};

use crate::error::StoreError;

const BOM: &str = "\u{feff}";

struct RawTable {
    headers: StringRecord,
    rows: Vec<StringRecord>,
}

fn normalize_header(raw: &str, lowercase: bool) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}').trim();
    if lowercase {
        trimmed.to_lowercase()
    } else {
        trimmed.to_string()
    }
}

fn normalize_cell(raw: &str) -> &str {
    raw.trim().trim_matches('\u{feff}')
}

/// Read the header line and every well-formed row. `None` when the file has
/// no header line.
fn read_raw(path: &Path, lowercase_headers: bool) -> Result<Option<RawTable>, StoreError> {
    let file = File::open(path).map_err(|e| StoreError::io(path, e))?;
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut records = reader.records();
    let headers = match records.next() {
        Some(record) => record.map_err(|e| StoreError::csv(path, &e))?,
        None => return Ok(None),
    };
    let headers: StringRecord = headers
        .iter()
        .map(|header| normalize_header(header, lowercase_headers))
        .collect();

    let mut rows = Vec::new();
    let mut skipped = 0usize;
    for record in records {
        let record = record.map_err(|e| StoreError::csv(path, &e))?;
        if record.len() != headers.len() {
            skipped += 1;
            continue;
        }
        rows.push(record.iter().map(normalize_cell).collect::<StringRecord>());
    }
    debug!(
        path = %path.display(),
        rows = rows.len(),
        skipped,
        "csv table read"
    );
    Ok(Some(RawTable { headers, rows }))
}

fn deserialize_rows<T: DeserializeOwned>(raw: &RawTable, path: &Path) -> Result<Vec<T>, StoreError> {
    raw.rows
        .iter()
        .map(|row| {
            row.deserialize(Some(&raw.headers))
                .map_err(|e| StoreError::csv(path, &e))
        })
        .collect()
}

fn settings_from(rows: Vec<SettingEntry>) -> Settings {
    Settings::from_entries(rows)
}

/// Read a persisted table, canonicalizing every row. A missing or empty file
/// is an empty table.
pub fn read_table(kind: TableKind, path: &Path) -> Result<Table, StoreError> {
    let raw = if path.exists() {
        read_raw(path, false)?
    } else {
        None
    };
    let Some(raw) = raw else {
        return Ok(empty_table(kind));
    };
    let table = match kind {
        TableKind::Countries => Table::Countries(
            deserialize_rows::<Country>(&raw, path)?
                .iter()
                .map(Country::normalized)
                .collect(),
        ),
        TableKind::Services => Table::Services(
            deserialize_rows::<Service>(&raw, path)?
                .iter()
                .map(Service::normalized)
                .collect(),
        ),
        TableKind::CarrierZones => Table::CarrierZones(
            deserialize_rows::<CarrierZoneMapping>(&raw, path)?
                .iter()
                .map(CarrierZoneMapping::normalized)
                .collect(),
        ),
        TableKind::Rates => Table::Rates(
            deserialize_rows::<RateDraft>(&raw, path)?
                .iter()
                .map(RateDraft::normalize)
                .collect(),
        ),
        TableKind::Settings => Table::Settings(settings_from(deserialize_rows(&raw, path)?)),
        TableKind::Boxes => Table::Boxes(
            deserialize_rows::<BoxDraft>(&raw, path)?
                .iter()
                .map(BoxDraft::normalize)
                .collect(),
        ),
    };
    Ok(table)
}

/// Read an uploaded file as a candidate batch. Header names are matched
/// case-insensitively and every canonical column must be present.
pub fn read_batch(kind: TableKind, path: &Path) -> Result<Batch, StoreError> {
    let raw = read_raw(path, true)?.ok_or_else(|| StoreError::EmptyFile {
        path: path.to_path_buf(),
    })?;
    for column in kind.columns() {
        if !raw.headers.iter().any(|header| header == *column) {
            return Err(StoreError::MissingColumn {
                path: path.to_path_buf(),
                column: (*column).to_string(),
            });
        }
    }
    let batch = match kind {
        TableKind::Countries => Batch::Countries(deserialize_rows(&raw, path)?),
        TableKind::Services => Batch::Services(deserialize_rows(&raw, path)?),
        TableKind::CarrierZones => Batch::CarrierZones(deserialize_rows(&raw, path)?),
        TableKind::Rates => Batch::Rates(deserialize_rows(&raw, path)?),
        TableKind::Settings => Batch::Settings(settings_from(deserialize_rows(&raw, path)?)),
        TableKind::Boxes => Batch::Boxes(deserialize_rows(&raw, path)?),
    };
    Ok(batch)
}

fn empty_table(kind: TableKind) -> Table {
    match kind {
        TableKind::Countries => Table::Countries(Vec::new()),
        TableKind::Services => Table::Services(Vec::new()),
        TableKind::CarrierZones => Table::CarrierZones(Vec::new()),
        TableKind::Rates => Table::Rates(Vec::new()),
        TableKind::Settings => Table::Settings(Settings::new()),
        TableKind::Boxes => Table::Boxes(Vec::new()),
    }
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".tmp");
    PathBuf::from(name)
}

fn write_staging(staging: &Path, table: &Table) -> Result<(), StoreError> {
    let mut file = File::create(staging).map_err(|e| StoreError::io(staging, e))?;
    file.write_all(BOM.as_bytes())
        .map_err(|e| StoreError::io(staging, e))?;

    let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
    writer
        .write_record(table.kind().columns())
        .and_then(|()| match table {
            Table::Countries(rows) => write_rows(&mut writer, rows),
            Table::Services(rows) => write_rows(&mut writer, rows),
            Table::CarrierZones(rows) => write_rows(&mut writer, rows),
            Table::Rates(rows) => write_rows(&mut writer, rows),
            Table::Settings(settings) => write_rows(&mut writer, settings.entries()),
            Table::Boxes(rows) => write_rows(&mut writer, rows),
        })
        .map_err(|e| StoreError::csv(staging, &e))?;
    writer.flush().map_err(|e| StoreError::io(staging, e))
}

fn write_rows<W: Write, T: Serialize>(
    writer: &mut csv::Writer<W>,
    rows: &[T],
) -> Result<(), csv::Error> {
    for row in rows {
        writer.serialize(row)?;
    }
    Ok(())
}

/// Write `table` to `path` with a BOM and the canonical header. The file is
/// staged next to the target and renamed into place.
pub fn write_table(path: &Path, table: &Table) -> Result<(), StoreError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
    }
    let staging = staging_path(path);
    let written = write_staging(&staging, table)
        .and_then(|()| std::fs::rename(&staging, path).map_err(|e| StoreError::io(path, e)));
    if written.is_err() {
        // The staging file is never left behind on failure.
        let _ = std::fs::remove_file(&staging);
    }
    written?;
    debug!(path = %path.display(), rows = table.len(), "csv table written");
    Ok(())
}
