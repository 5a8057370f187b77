use std::fs;

use chrono::{Local, TimeZone};
use shiprate_model::{
    Batch, CarrierZoneMapping, Country, RateDraft, RateEntry, Service, Settings, Table, TableKind,
};
use shiprate_store::{
    CsvStore, MemoryStore, ReferenceData, ReferenceStore, StoreError, backup_path, read_batch,
    read_table, write_table,
};

#[test]
fn missing_files_load_as_empty_tables() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = CsvStore::new(dir.path());
    let data = store.load().expect("load");
    for kind in TableKind::ALL {
        assert_eq!(data.row_count(kind), 0, "{kind}");
    }
}

#[test]
fn persisted_rates_are_canonicalized_on_read() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("rates.csv");
    fs::write(
        &path,
        "\u{feff} service , zone ,weight,price\nA, E ,5.00,1000\nbroken,row\nA,E,10,1500.9\n",
    )
    .expect("write rates");

    let table = read_table(TableKind::Rates, &path).expect("read rates");
    assert_eq!(
        table,
        Table::Rates(vec![
            RateEntry::new("A", "E", 5.0, 1000),
            RateEntry::new("A", "E", 10.0, 1500),
        ])
    );
}

#[test]
fn written_tables_carry_bom_and_canonical_header() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("carrier_zones.csv");
    let table = Table::CarrierZones(vec![CarrierZoneMapping::new("fedex", "US", "E")]);
    write_table(&path, &table).expect("write");

    let text = fs::read_to_string(&path).expect("read back");
    assert_eq!(text, "\u{feff}carrier,country_code,zone\nfedex,US,E\n");
    assert_eq!(read_table(TableKind::CarrierZones, &path).expect("reread"), table);
}

#[test]
fn failed_write_removes_staging_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("countries.csv");
    fs::create_dir(&path).expect("create blocking dir");
    fs::write(path.join("keep"), "x").expect("fill blocking dir");

    let table = Table::Countries(vec![Country::new("Japan", "JP")]);
    let error = write_table(&path, &table).expect_err("rename onto a directory");
    assert!(matches!(error, StoreError::Io { .. }), "{error}");
    assert!(!dir.path().join("countries.csv.tmp").exists());
    assert!(path.join("keep").exists());
}

#[test]
fn services_flag_is_written_as_digit() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("services.csv");
    let table = Table::Services(vec![
        Service::new("s1", "Express", "fedex")
            .with_country_codes("US,CA")
            .with_actual_weight(true),
    ]);
    write_table(&path, &table).expect("write");

    let text = fs::read_to_string(&path).expect("read back");
    assert!(text.ends_with("s1,Express,fedex,,,\"US,CA\",1\n"), "{text}");
    assert_eq!(read_table(TableKind::Services, &path).expect("reread"), table);
}

#[test]
fn upload_headers_match_case_insensitively() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("upload.csv");
    fs::write(&path, "Service,ZONE,Weight,Price\nA,E,,1000\n").expect("write upload");

    let batch = read_batch(TableKind::Rates, &path).expect("read batch");
    assert_eq!(batch, Batch::Rates(vec![RateDraft::new("A", "E", "", "1000")]));
}

#[test]
fn upload_without_required_column_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("upload.csv");
    fs::write(&path, "carrier,zone\nfedex,E\n").expect("write upload");

    let err = read_batch(TableKind::CarrierZones, &path).unwrap_err();
    match err {
        StoreError::MissingColumn { column, .. } => assert_eq!(column, "country_code"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn empty_upload_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("upload.csv");
    fs::write(&path, "").expect("write upload");
    assert!(matches!(
        read_batch(TableKind::Countries, &path),
        Err(StoreError::EmptyFile { .. })
    ));
}

#[test]
fn commit_backs_up_previous_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut store = CsvStore::new(dir.path());
    store
        .commit(Table::Countries(vec![Country::new("Japan", "JP")]))
        .expect("first commit");
    store
        .commit(Table::Countries(vec![Country::new("Korea", "KR")]))
        .expect("second commit");

    let backups: Vec<_> = fs::read_dir(dir.path())
        .expect("list dir")
        .filter_map(Result::ok)
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .filter(|name| name.starts_with("countries.csv.") && name.ends_with(".bak"))
        .collect();
    assert_eq!(backups.len(), 1, "{backups:?}");

    let data = store.load().expect("load");
    assert_eq!(data.countries(), &[Country::new("Korea", "KR")]);
}

#[test]
fn backup_name_uses_compact_timestamp() {
    let at = Local
        .with_ymd_and_hms(2024, 3, 9, 7, 5, 1)
        .single()
        .expect("valid local time");
    let path = backup_path(std::path::Path::new("DB/rates.csv"), &at);
    assert_eq!(path, std::path::PathBuf::from("DB/rates.csv.20240309070501.bak"));
}

#[test]
fn settings_round_trip_in_file_order() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut store = CsvStore::new(dir.path()).with_backups(false);
    let mut settings = Settings::new();
    settings.insert("title", "Rates");
    settings.insert("boxGuideRefCm", "45");
    store
        .commit(Table::Settings(settings.clone()))
        .expect("commit settings");

    let data = store.load().expect("load");
    assert_eq!(data.settings(), &settings);
    assert_eq!(data.settings().number("boxGuideRefCm", 60.0), 45.0);
}

#[test]
fn memory_store_replaces_whole_table() {
    let mut store = MemoryStore::new(
        ReferenceData::new().with_table(Table::Countries(vec![Country::new("Japan", "JP")])),
    );
    store
        .commit(Table::Countries(vec![Country::new("Korea", "KR")]))
        .expect("commit");
    assert_eq!(store.commits(), 1);
    assert_eq!(
        store.load().expect("load").countries(),
        &[Country::new("Korea", "KR")]
    );
}
