pub mod error;
pub mod records;
pub mod settings;
pub mod table;
pub mod validation;

mod serde_cells;

pub use error::{ModelError, Result};
pub use records::{
    BoxDraft, BoxSpec, CarrierZoneMapping, Country, RateDraft, RateEntry, Service,
};
pub use settings::{SettingEntry, Settings};
pub use table::{Batch, MergeMode, Table, TableKind};
pub use validation::{ValidationError, ViolationKind};
