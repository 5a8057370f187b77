//! Terminal rendering with `comfy-table`.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use shiprate_core::{BoxGuideEntry, LineStatus, Quote, ReconcileOutcome};
use shiprate_model::TableKind;
use shiprate_normalization::format_decimal;

use crate::commands::CoverageReport;

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

/// Yen amount with thousands separators.
pub fn format_price(price: i64) -> String {
    let digits = price.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if price < 0 { "-" } else { "" };
    format!("¥{sign}{grouped}")
}

fn status_cell(status: &LineStatus) -> Cell {
    match status {
        LineStatus::Priced { price, .. } => Cell::new(format_price(*price))
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        LineStatus::Unavailable | LineStatus::NoRateForWeight => dim_cell(status.label()),
        LineStatus::CarrierNotConfigured | LineStatus::ZoneNotConfigured => {
            Cell::new(status.label()).fg(Color::Yellow)
        }
    }
}

pub fn weight_lines(quote: &Quote) -> Vec<String> {
    vec![
        format!("Destination: {} ({})", quote.country.name, quote.country.code),
        format!("Actual weight: {:.2} kg", quote.weights.actual),
        format!("Volumetric weight: {:.2} kg", quote.weights.volumetric),
        format!("Applied weight: {:.2} kg", quote.weights.applied),
    ]
}

pub fn quote_table(quote: &Quote) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Service"),
        header_cell("Carrier"),
        header_cell("Zone"),
        header_cell("Billable kg"),
        header_cell("Price"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for line in &quote.lines {
        let mut name = line.service.display_name().to_string();
        if line.service.use_actual_weight {
            name.push_str(" (actual weight)");
        }
        table.add_row(vec![
            Cell::new(name),
            if line.carrier.is_empty() {
                dim_cell("-")
            } else {
                Cell::new(&line.carrier)
            },
            if line.zone.is_empty() {
                dim_cell("-")
            } else {
                Cell::new(&line.zone)
            },
            Cell::new(format_decimal(line.billable_weight)),
            status_cell(&line.status),
        ]);
    }
    table
}

pub fn diagnostic_lines(quote: &Quote) -> Vec<String> {
    let mut lines = Vec::new();
    if !quote.diagnostics.services_without_carrier.is_empty() {
        lines.push(format!(
            "Services without carrier: {}",
            quote.diagnostics.services_without_carrier.join(", ")
        ));
    }
    if !quote.diagnostics.missing_zones.is_empty() {
        lines.push(format!(
            "Carrier zones not configured: {}",
            quote.diagnostics.missing_zones.join(", ")
        ));
    }
    lines
}

pub fn outcome_line(kind: TableKind, outcome: &ReconcileOutcome, committed: bool) -> String {
    let verb = if committed { "written" } else { "valid" };
    format!(
        "{kind} ({mode}): {incoming} incoming rows, {total} rows {verb}",
        mode = outcome.mode,
        incoming = outcome.incoming,
        total = outcome.total,
    )
}

pub fn coverage_lines(report: &CoverageReport) -> Vec<String> {
    let mut lines = Vec::new();
    if report.gaps.is_empty() {
        lines.push("Every carrier has a zone for every country.".to_string());
    } else {
        let pairs: Vec<String> = report.gaps.iter().map(ToString::to_string).collect();
        lines.push(format!("Missing carrier zones ({}): {}", pairs.len(), pairs.join(", ")));
    }
    if let Some(added) = report.filled {
        lines.push(format!("Added {added} placeholder rows (zone=TODO)."));
    }
    lines
}

pub fn boxes_table(entries: &[BoxGuideEntry]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Key"),
        header_cell("Label"),
        header_cell("Size (cm)"),
        header_cell("Cube px"),
        header_cell("Tape px"),
        header_cell("Comment"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for entry in entries {
        let spec = &entry.spec;
        table.add_row(vec![
            Cell::new(&spec.key),
            Cell::new(&spec.label),
            Cell::new(format!(
                "{}×{}×{}",
                format_decimal(spec.length_cm),
                format_decimal(spec.width_cm),
                format_decimal(spec.height_cm)
            )),
            Cell::new(entry.cube_px),
            Cell::new(entry.tape_px),
            Cell::new(&spec.comment),
        ]);
    }
    table
}

pub fn tables_table(counts: &[(TableKind, usize)]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Table"), header_cell("File"), header_cell("Rows")]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for (kind, rows) in counts {
        let rows_cell = if *rows == 0 {
            dim_cell(rows)
        } else {
            Cell::new(rows)
        };
        table.add_row(vec![Cell::new(kind), Cell::new(kind.file_name()), rows_cell]);
    }
    table
}
