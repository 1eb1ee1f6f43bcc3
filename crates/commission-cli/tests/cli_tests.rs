use std::path::{Path, PathBuf};

use commission_cli::{
    list_fields, render_snapshot, run_script, validate_values, Config, ReportSettings, Status,
};
use commission_forms::AggregateRecord;
use commission_report::ReportFormat;
use commission_schema::SectionId;
use commission_test_utils::{equipment_values, valid_values};
use pretty_assertions::assert_eq;
use serde_json::json;
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

fn complete_script() -> String {
    let steps: Vec<_> = SectionId::ALL
        .into_iter()
        .flat_map(|section| {
            [
                json!({ "action": "fill", "values": valid_values(section) }),
                json!({ "action": "submit" }),
            ]
        })
        .collect();
    json!({ "steps": steps }).to_string()
}

fn output(buf: Vec<u8>) -> String {
    String::from_utf8(buf).unwrap()
}

fn text_settings() -> ReportSettings {
    ReportSettings::default()
}

#[test]
fn run_prints_rejections_and_partial_report() {
    let dir = TempDir::new().unwrap();
    let script = write(
        &dir,
        "session.yaml",
        r#"
steps:
  - action: fill
    values:
      modelNumber: HP-2000
      serialNumber: SN123
  - action: submit
  - action: goto
    to: summary
"#,
    );
    let mut stdout = Vec::new();

    let status = run_script(&script, None, None, text_settings(), &mut stdout).unwrap();

    let text = output(stdout);
    assert_eq!(status, Status::Invalid);
    assert!(text.starts_with("equipment: submission rejected\n"));
    assert!(text.contains("  compressorType: Compressor type is required\n"));
    assert!(text.contains("Equipment Specifications  [draft, not validated]"));
    assert!(text.contains("  Model Number: HP-2000"));
    assert!(text.contains("No installation data provided yet."));
}

#[test]
fn complete_run_writes_final_report_and_snapshot() {
    let dir = TempDir::new().unwrap();
    let script = write(&dir, "session.json", &complete_script());
    let out = dir.path().join("report.txt");
    let save = dir.path().join("snapshot.json");
    let mut stdout = Vec::new();

    let status = run_script(&script, Some(&out), Some(&save), text_settings(), &mut stdout).unwrap();
    assert_eq!(status, Status::Ok);

    let printed = output(stdout);
    let written = std::fs::read_to_string(&out).unwrap();
    assert_eq!(written.trim_end(), printed.trim_end());
    assert!(!written.contains("Please complete all sections"));

    let snapshot: AggregateRecord =
        serde_json::from_str(&std::fs::read_to_string(&save).unwrap()).unwrap();
    assert!(snapshot.is_complete());
    assert_eq!(snapshot.completed_sections().count(), 5);

    let mut rendered = Vec::new();
    render_snapshot(&save, text_settings(), &mut rendered).unwrap();
    assert_eq!(output(rendered).trim_end(), written.trim_end());
}

#[test]
fn incomplete_run_never_creates_the_output_file() {
    let dir = TempDir::new().unwrap();
    let script = write(&dir, "session.yaml", "steps: []\n");
    let out = dir.path().join("report.txt");
    let mut stdout = Vec::new();

    let err = run_script(&script, Some(&out), None, text_settings(), &mut stdout).unwrap_err();

    assert!(format!("{err:#}").contains("missing sections: equipment"));
    assert!(!out.exists());
    assert!(output(stdout).contains("Please complete all sections"));
}

#[test]
fn require_complete_refuses_partial_snapshot() {
    let dir = TempDir::new().unwrap();
    let snapshot = write(&dir, "snapshot.json", "{}");
    let settings = ReportSettings {
        format: ReportFormat::Json,
        require_complete: true,
    };
    let mut stdout = Vec::new();

    assert!(render_snapshot(&snapshot, settings, &mut stdout).is_err());
    assert!(stdout.is_empty());
}

#[test]
fn validate_reports_normalized_record_or_errors() {
    let dir = TempDir::new().unwrap();
    let good = write(
        &dir,
        "equipment.json",
        &serde_json::to_string(&equipment_values()).unwrap(),
    );
    let mut stdout = Vec::new();
    let status = validate_values(SectionId::Equipment, &good, ReportFormat::Text, &mut stdout).unwrap();
    assert_eq!(status, Status::Ok);
    let record: serde_json::Value = serde_json::from_slice(&stdout).unwrap();
    assert_eq!(record["section"], "equipment");
    assert_eq!(record["modelNumber"], "HP-2000");

    let bad = write(&dir, "control.yaml", "controlSystemType: smart\nperformanceMonitoring: yes-ish\n");
    let mut stdout = Vec::new();
    let status = validate_values(SectionId::Control, &bad, ReportFormat::Json, &mut stdout).unwrap();
    assert_eq!(status, Status::Invalid);
    let errors: serde_json::Value = serde_json::from_slice(&stdout).unwrap();
    assert_eq!(errors["lowAmbientLockout"], "Low ambient lockout is required");
    assert_eq!(errors["performanceMonitoring"], "Expected true or false");
    assert!(errors.get("controlSystemType").is_none());
}

#[test]
fn fields_lists_one_section() {
    let mut stdout = Vec::new();
    list_fields(Some(SectionId::Safety), ReportFormat::Json, &mut stdout).unwrap();
    let listing: serde_json::Value = serde_json::from_slice(&stdout).unwrap();
    let fields = listing["safety"].as_array().unwrap();
    assert_eq!(fields.len(), 7);
    assert_eq!(fields[0]["name"], "csaCompliance");
    assert_eq!(fields[0]["kind"], "flag");
    assert_eq!(fields[6]["required"], false);
    assert!(listing.get("equipment").is_none());
}

#[test]
fn config_file_is_optional() {
    let dir = TempDir::new().unwrap();
    assert_eq!(Config::load(None).unwrap(), Config::default());
    assert_eq!(
        Config::load(Some(Path::new("/nonexistent/commission.toml"))).unwrap(),
        Config::default()
    );

    let path = write(&dir, "commission.toml", "[report]\nformat = \"json\"\n");
    assert_eq!(Config::load(Some(&path)).unwrap().report.format, ReportFormat::Json);

    let path = write(&dir, "broken.toml", "[report]\ncolour = true\n");
    assert!(Config::load(Some(&path)).is_err());
}

#[test]
fn unquoted_numbers_are_accepted_as_text() {
    let dir = TempDir::new().unwrap();
    let values = write(
        &dir,
        "equipment.yaml",
        "modelNumber: HP-2000\n\
         serialNumber: SN123\n\
         compressorType: variable\n\
         heatingCapacity: 36000\n\
         coolingCapacity: 30000\n\
         hspfRating: 10\n\
         eerRating: 14\n\
         seerRating: 20\n\
         replacementType: gas\n",
    );
    let mut stdout = Vec::new();

    let status = validate_values(SectionId::Equipment, &values, ReportFormat::Text, &mut stdout).unwrap();

    assert_eq!(status, Status::Ok);
    let record: serde_json::Value = serde_json::from_slice(&stdout).unwrap();
    assert_eq!(record["heatingCapacity"], "36000");
    assert_eq!(record["seerRating"], "20");
}

#[test]
fn script_steps_accept_numeric_values() {
    let dir = TempDir::new().unwrap();
    let script = write(
        &dir,
        "session.yaml",
        r#"
steps:
  - action: goto
    to: performance
  - action: fill
    values:
      thermalBalancePoint: -8
      temperatureSplitActual: 19
      temperatureSplitExpected: 20
      ductLeakageReduction: 60
      powerDrawHeating: 3.1
      powerDrawCooling: 2.4
  - action: submit
"#,
    );
    let mut stdout = Vec::new();

    let status = run_script(&script, None, None, text_settings(), &mut stdout).unwrap();

    let text = output(stdout);
    assert_eq!(status, Status::Ok);
    assert!(text.contains("  Thermal Balance Point: -8°C"));
    assert!(text.contains("  Power Draw (Heating): 3.1 kW"));
}
