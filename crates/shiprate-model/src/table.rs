//! Table kinds and whole-table payloads.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::records::{BoxDraft, BoxSpec, CarrierZoneMapping, Country, RateDraft, RateEntry, Service};
use crate::settings::Settings;

/// The reference tables an admin can edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableKind {
    Countries,
    Services,
    CarrierZones,
    Rates,
    Settings,
    Boxes,
}

impl TableKind {
    pub const ALL: [TableKind; 6] = [
        TableKind::Countries,
        TableKind::Services,
        TableKind::CarrierZones,
        TableKind::Rates,
        TableKind::Settings,
        TableKind::Boxes,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TableKind::Countries => "countries",
            TableKind::Services => "services",
            TableKind::CarrierZones => "carrier_zones",
            TableKind::Rates => "rates",
            TableKind::Settings => "settings",
            TableKind::Boxes => "boxes",
        }
    }

    /// Canonical column order; also the headers an upload must carry.
    pub fn columns(self) -> &'static [&'static str] {
        match self {
            TableKind::Countries => &["name", "code"],
            TableKind::Services => &[
                "id",
                "name",
                "carrier",
                "color",
                "description",
                "country_codes",
                "use_actual_weight",
            ],
            TableKind::CarrierZones => &["carrier", "country_code", "zone"],
            TableKind::Rates => &["service", "zone", "weight", "price"],
            TableKind::Settings => &["key", "value"],
            TableKind::Boxes => &[
                "key",
                "label",
                "length_cm",
                "width_cm",
                "height_cm",
                "comment",
                "sort",
            ],
        }
    }

    /// Columns forming the natural key.
    pub fn key_columns(self) -> &'static [&'static str] {
        match self {
            TableKind::Countries => &["code"],
            TableKind::Services => &["id"],
            TableKind::CarrierZones => &["carrier", "country_code"],
            TableKind::Rates => &["service", "zone", "weight"],
            TableKind::Settings | TableKind::Boxes => &["key"],
        }
    }

    pub fn file_name(self) -> String {
        format!("{}.csv", self.as_str())
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TableKind {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let wanted = value.trim().to_ascii_lowercase();
        TableKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == wanted)
            .ok_or_else(|| ModelError::UnknownTableKind(value.to_string()))
    }
}

/// How an incoming batch combines with the current table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MergeMode {
    /// The batch becomes the whole table.
    #[default]
    Replace,
    /// The batch is added to the current rows.
    Append,
}

impl fmt::Display for MergeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MergeMode::Replace => "replace",
            MergeMode::Append => "append",
        })
    }
}

impl FromStr for MergeMode {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "replace" => Ok(MergeMode::Replace),
            "append" => Ok(MergeMode::Append),
            _ => Err(ModelError::UnknownMergeMode(value.to_string())),
        }
    }
}

/// A whole table in canonical form, ready to persist.
#[derive(Debug, Clone, PartialEq)]
pub enum Table {
    Countries(Vec<Country>),
    Services(Vec<Service>),
    CarrierZones(Vec<CarrierZoneMapping>),
    Rates(Vec<RateEntry>),
    Settings(Settings),
    Boxes(Vec<BoxSpec>),
}

impl Table {
    pub fn kind(&self) -> TableKind {
        match self {
            Table::Countries(_) => TableKind::Countries,
            Table::Services(_) => TableKind::Services,
            Table::CarrierZones(_) => TableKind::CarrierZones,
            Table::Rates(_) => TableKind::Rates,
            Table::Settings(_) => TableKind::Settings,
            Table::Boxes(_) => TableKind::Boxes,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Table::Countries(rows) => rows.len(),
            Table::Services(rows) => rows.len(),
            Table::CarrierZones(rows) => rows.len(),
            Table::Rates(rows) => rows.len(),
            Table::Settings(settings) => settings.len(),
            Table::Boxes(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Candidate rows for one table, as received from an edit or upload.
#[derive(Debug, Clone, PartialEq)]
pub enum Batch {
    Countries(Vec<Country>),
    Services(Vec<Service>),
    CarrierZones(Vec<CarrierZoneMapping>),
    Rates(Vec<RateDraft>),
    Settings(Settings),
    Boxes(Vec<BoxDraft>),
}

impl Batch {
    pub fn kind(&self) -> TableKind {
        match self {
            Batch::Countries(_) => TableKind::Countries,
            Batch::Services(_) => TableKind::Services,
            Batch::CarrierZones(_) => TableKind::CarrierZones,
            Batch::Rates(_) => TableKind::Rates,
            Batch::Settings(_) => TableKind::Settings,
            Batch::Boxes(_) => TableKind::Boxes,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Batch::Countries(rows) => rows.len(),
            Batch::Services(rows) => rows.len(),
            Batch::CarrierZones(rows) => rows.len(),
            Batch::Rates(rows) => rows.len(),
            Batch::Settings(settings) => settings.len(),
            Batch::Boxes(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
