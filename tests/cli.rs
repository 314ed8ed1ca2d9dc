mod common;

use std::fs;

use assert_cmd::Command;
use predicates::str::contains;
use tmcf_wizard::mapping::{MappedThing, Mapping, MappingVal};

use common::TestWorkspace;

const VALID_MAPPING: &str = r#"{
  "Place": {"type": "column", "column": {"id": "iso", "header": "iso", "columnIdx": 0}, "placeType": "country", "placeProperty": "isoCode"},
  "Date": {"type": "column", "column": {"id": "date", "header": "date", "columnIdx": 2}},
  "StatVar": {"type": "column", "column": {"id": "indicators", "header": "indicators", "columnIdx": 1}},
  "Unit": {"type": "fileConstant", "fileConstant": "USDollar"},
  "Value": {"type": "column", "column": {"id": "val", "header": "val", "columnIdx": 3}}
}"#;

fn sample_csv() -> &'static str {
    "iso,indicators,date,val\nUS,Count_Person,2018,331000000\nNO,Count_Person,2018,5300000\nIT,Count_Person,2019,59000000\n"
}

#[test]
fn detect_writes_predicted_mapping() {
    let ws = TestWorkspace::new();
    let csv = ws.write("sample.csv", sample_csv());
    let mapping_path = ws.path().join("predicted.json");
    Command::cargo_bin("tmcf-wizard")
        .expect("binary exists")
        .args([
            "detect",
            "-i",
            csv.to_str().unwrap(),
            "-o",
            mapping_path.to_str().unwrap(),
        ])
        .assert()
        .success();

    let predicted = Mapping::load(&mapping_path).expect("load predicted mapping");
    match predicted.get(MappedThing::Place) {
        Some(MappingVal::Column { column, .. }) => assert_eq!(column.id, "iso"),
        other => panic!("unexpected place prediction: {other:?}"),
    }
    match predicted.get(MappedThing::Date) {
        Some(MappingVal::Column { column, .. }) => assert_eq!(column.id, "date"),
        other => panic!("unexpected date prediction: {other:?}"),
    }
    assert!(predicted.get(MappedThing::StatVar).is_none());
}

#[test]
fn detect_prints_mapping_to_stdout_when_no_output_given() {
    let ws = TestWorkspace::new();
    let csv = ws.write("sample.csv", sample_csv());
    Command::cargo_bin("tmcf-wizard")
        .expect("binary exists")
        .args(["detect", "-i", csv.to_str().unwrap()])
        .assert()
        .success()
        .stdout(contains("\"Place\""))
        .stdout(contains("isoCode"));
}

#[test]
fn check_accepts_a_complete_mapping() {
    let ws = TestWorkspace::new();
    let mapping = ws.write("mapping.json", VALID_MAPPING);
    Command::cargo_bin("tmcf-wizard")
        .expect("binary exists")
        .args(["check", "-m", mapping.to_str().unwrap()])
        .assert()
        .success();
}

#[test]
fn check_reports_missing_required_things() {
    let ws = TestWorkspace::new();
    let mapping = ws.write(
        "mapping.json",
        r#"{"Place": {"type": "column", "column": {"id": "iso", "header": "iso", "columnIdx": 0}, "placeType": "country", "placeProperty": "isoCode"}}"#,
    );
    Command::cargo_bin("tmcf-wizard")
        .expect("binary exists")
        .args(["check", "-m", mapping.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(contains("StatVar"))
        .stderr(contains("Date"));
}

#[test]
fn preview_prints_observations_with_row_numbers() {
    let ws = TestWorkspace::new();
    let csv = ws.write("sample.csv", sample_csv());
    let mapping = ws.write("mapping.json", VALID_MAPPING);
    Command::cargo_bin("tmcf-wizard")
        .expect("binary exists")
        .args([
            "preview",
            "-i",
            csv.to_str().unwrap(),
            "-m",
            mapping.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(contains(
            "2: Value of Count_Person for US in 2018 is 331000000 USDollar",
        ))
        .stdout(contains(
            "4: Value of Count_Person for IT in 2019 is 59000000 USDollar",
        ));
}

#[test]
fn preview_rejects_an_invalid_mapping() {
    let ws = TestWorkspace::new();
    let csv = ws.write("sample.csv", sample_csv());
    let mapping = ws.write("mapping.json", "{}");
    Command::cargo_bin("tmcf-wizard")
        .expect("binary exists")
        .args([
            "preview",
            "-i",
            csv.to_str().unwrap(),
            "-m",
            mapping.to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(contains("issue"));
}

#[test]
fn generate_writes_template_document() {
    let ws = TestWorkspace::new();
    let csv = ws.write("sample.csv", sample_csv());
    let mapping = ws.write("mapping.json", VALID_MAPPING);
    let output = ws.path().join("import.tmcf");
    Command::cargo_bin("tmcf-wizard")
        .expect("binary exists")
        .args([
            "generate",
            "-i",
            csv.to_str().unwrap(),
            "-m",
            mapping.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
        ])
        .assert()
        .success();

    let template = fs::read_to_string(&output).expect("read template");
    assert!(template.contains("Node: E:CSVTable->E0"));
    assert!(template.contains("typeOf: dcid:StatVarObservation"));
    assert!(template.contains("observationAbout: C:CSVTable->iso"));
    assert!(template.contains("unit: dcid:USDollar"));
    assert!(template.contains("value: C:CSVTable->val"));
}

#[test]
fn generate_writes_translation_metadata_and_skips_clean_csv() {
    let ws = TestWorkspace::new();
    let csv = ws.write("sample.csv", sample_csv());
    let mapping = ws.write("mapping.json", VALID_MAPPING);
    let output = ws.path().join("import.tmcf");
    let metadata = ws.path().join("metadata.json");
    let cleaned = ws.path().join("cleaned.csv");
    Command::cargo_bin("tmcf-wizard")
        .expect("binary exists")
        .args([
            "generate",
            "-i",
            csv.to_str().unwrap(),
            "-m",
            mapping.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
            "--metadata-out",
            metadata.to_str().unwrap(),
            "--csv-out",
            cleaned.to_str().unwrap(),
        ])
        .assert()
        .success();

    let metadata_json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&metadata).expect("read metadata"))
            .expect("parse metadata");
    assert_eq!(metadata_json["predictions"], serde_json::json!({}));
    assert_eq!(
        metadata_json["correctedMapping"]["Unit"]["fileConstant"],
        serde_json::json!("USDollar")
    );
    // No renamed columns and no value map, so no cleaned copy is needed.
    assert!(!cleaned.exists());
}

#[test]
fn generate_writes_clean_csv_when_value_map_present() {
    let ws = TestWorkspace::new();
    let csv = ws.write("sample.csv", sample_csv());
    let mapping = ws.write("mapping.json", VALID_MAPPING);
    let value_map = ws.write("value_map.json", r#"{"US": "USA"}"#);
    let cleaned = ws.path().join("cleaned.csv");
    Command::cargo_bin("tmcf-wizard")
        .expect("binary exists")
        .args([
            "generate",
            "-i",
            csv.to_str().unwrap(),
            "-m",
            mapping.to_str().unwrap(),
            "-o",
            ws.path().join("import.tmcf").to_str().unwrap(),
            "--csv-out",
            cleaned.to_str().unwrap(),
            "--value-map",
            value_map.to_str().unwrap(),
        ])
        .assert()
        .success();

    let contents = fs::read_to_string(&cleaned).expect("read cleaned csv");
    assert!(contents.starts_with("iso,indicators,date,val\n"));
    assert!(contents.contains("USA,Count_Person,2018,331000000"));
    assert!(!contents.contains("\nUS,"));
}

#[test]
fn generate_writes_tab_delimited_clean_file_for_tsv_output() {
    let ws = TestWorkspace::new();
    let csv = ws.write("sample.csv", sample_csv());
    let mapping = ws.write("mapping.json", VALID_MAPPING);
    let value_map = ws.write("value_map.json", r#"{"US": "USA"}"#);
    let cleaned = ws.path().join("cleaned.tsv");
    Command::cargo_bin("tmcf-wizard")
        .expect("binary exists")
        .args([
            "generate",
            "-i",
            csv.to_str().unwrap(),
            "-m",
            mapping.to_str().unwrap(),
            "-o",
            ws.path().join("import.tmcf").to_str().unwrap(),
            "--csv-out",
            cleaned.to_str().unwrap(),
            "--value-map",
            value_map.to_str().unwrap(),
        ])
        .assert()
        .success();

    let contents = fs::read_to_string(&cleaned).expect("read cleaned tsv");
    assert!(contents.starts_with("iso\tindicators\tdate\tval\n"));
    assert!(contents.contains("USA\tCount_Person\t2018\t331000000"));
}
