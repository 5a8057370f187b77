use std::fs;
use std::path::Path;

use shiprate_cli::commands::{
    run_boxes, run_coverage, run_quote, run_tables, run_upload, run_validate, run_zone_countries,
};
use shiprate_cli::report::{coverage_lines, format_price, outcome_line};
use shiprate_core::{LineStatus, QuoteRequest};
use shiprate_model::{CarrierZoneMapping, Country, MergeMode, Service, Table, TableKind};
use shiprate_store::{CsvStore, MemoryStore, ReferenceData, ReferenceStore};

fn write(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), format!("\u{feff}{contents}")).expect("write fixture");
}

fn seeded() -> (tempfile::TempDir, CsvStore) {
    let dir = tempfile::tempdir().expect("tempdir");
    write(dir.path(), "countries.csv", "name,code\nUnited States,US\nJapan,JP\n");
    write(
        dir.path(),
        "services.csv",
        "id,name,carrier,color,description,country_codes,use_actual_weight\n\
         fx,FedEx Priority,fedex,#4d148c,,,0\n\
         dh,DHL Express,dhl,#ffcc00,,US,0\n",
    );
    write(
        dir.path(),
        "carrier_zones.csv",
        "carrier,country_code,zone\nfedex,US,E\nfedex,JP,F\ndhl,US,3\n",
    );
    write(
        dir.path(),
        "rates.csv",
        "service,zone,weight,price\nFedEx Priority,E,5,4200\nDHL Express,3,5,3900\n",
    );
    write(
        dir.path(),
        "boxes.csv",
        "key,label,length_cm,width_cm,height_cm,comment,sort\nm,Medium,40,30,30,,2\ns,Small,20,20,10,,1\n",
    );
    let store = CsvStore::new(dir.path());
    (dir, store)
}

#[test]
fn quote_reads_tables_from_disk() {
    let (_dir, store) = seeded();
    let quote = run_quote(&store, &QuoteRequest::new("us", 2.0)).expect("quote");
    let prices: Vec<Option<i64>> = quote.lines.iter().map(|line| line.status.price()).collect();
    assert_eq!(prices, [Some(3900), Some(4200)]);

    let quote = run_quote(&store, &QuoteRequest::new("JP", 2.0)).expect("quote");
    assert_eq!(quote.lines[1].status, LineStatus::Unavailable);
    assert!(run_quote(&store, &QuoteRequest::new("FR", 2.0)).is_err());
}

#[test]
fn rejected_upload_leaves_file_untouched() {
    let (dir, mut store) = seeded();
    let before = fs::read_to_string(dir.path().join("rates.csv")).expect("read rates");
    let upload = dir.path().join("upload.csv");
    fs::write(&upload, "service,zone,weight,price\nFedEx Priority,E,5.0,3000\n").expect("write");

    let err = run_upload(&mut store, TableKind::Rates, &upload, MergeMode::Append).unwrap_err();
    insta::assert_snapshot!(
        format!("{err:#}"),
        @"rates upload failed: rates: duplicate service,zone,weight combinations: FedEx Priority|E|5"
    );
    let after = fs::read_to_string(dir.path().join("rates.csv")).expect("read rates");
    assert_eq!(before, after);
}

#[test]
fn append_upload_reports_counts() {
    let (dir, mut store) = seeded();
    let upload = dir.path().join("upload.csv");
    fs::write(&upload, "SERVICE,Zone,weight,price\nFedEx Priority,F,10,6100\n").expect("write");

    let dry = run_validate(&store, TableKind::Rates, &upload, MergeMode::Append).expect("valid");
    assert_eq!(
        outcome_line(TableKind::Rates, &dry, false),
        "rates (append): 1 incoming rows, 3 rows valid"
    );
    assert_eq!(store.load().expect("load").rates().len(), 2);

    let outcome = run_upload(&mut store, TableKind::Rates, &upload, MergeMode::Append)
        .expect("upload");
    assert_eq!(outcome.total, 3);
    assert_eq!(store.load().expect("load").rates().len(), 3);
}

#[test]
fn coverage_fill_writes_placeholders() {
    let (_dir, mut store) = seeded();
    let report = run_coverage(&mut store, true).expect("coverage");
    assert_eq!(
        coverage_lines(&report),
        [
            "Missing carrier zones (1): dhl:JP",
            "Added 1 placeholder rows (zone=TODO).",
        ]
    );
    assert_eq!(
        run_zone_countries(&store, "DHL", "TODO").expect("lookup"),
        ["JP"]
    );
    assert!(run_coverage(&mut store, false).expect("coverage").gaps.is_empty());
}

#[test]
fn coverage_fill_refuses_invalid_stored_zones() {
    let data = ReferenceData::new()
        .with_table(Table::Countries(vec![Country::new("Japan", "JP")]))
        .with_table(Table::Services(vec![Service::new("fx", "FedEx", "fedex")]))
        .with_table(Table::CarrierZones(vec![
            CarrierZoneMapping::new("fedex", "XX", "E"),
            CarrierZoneMapping::new("ups", "JP", "1"),
        ]));
    let mut store = MemoryStore::new(data.clone());

    let error = run_coverage(&mut store, true).expect_err("fill must be validated");
    insta::assert_snapshot!(
        format!("{error:#}"),
        @"carrier_zones fill rejected: carrier_zones: unknown carriers: ups"
    );
    assert_eq!(store.commits(), 0);
    assert_eq!(store.data(), &data);
}

#[test]
fn boxes_and_table_counts() {
    let (_dir, store) = seeded();
    let keys: Vec<String> = run_boxes(&store)
        .expect("boxes")
        .into_iter()
        .map(|entry| entry.spec.key)
        .collect();
    assert_eq!(keys, ["s", "m"]);

    let counts = run_tables(&store).expect("tables");
    assert!(counts.contains(&(TableKind::Rates, 2)));
    assert!(counts.contains(&(TableKind::Settings, 0)));
}

#[test]
fn prices_use_thousands_separators() {
    assert_eq!(format_price(0), "¥0");
    assert_eq!(format_price(4200), "¥4,200");
    assert_eq!(format_price(1_234_567), "¥1,234,567");
}
