//! Report Generator
//!
//! Pure projection of an [`AggregateRecord`] into a [`ReportView`]. Drafts are
//! read leniently so whatever the installer typed still shows up.

use commission_forms::{AggregateRecord, SectionData};
use commission_schema::{
    ControlRecord, EquipmentRecord, InstallationRecord, PerformanceRecord, SafetyRecord, SectionId,
    SectionRecord,
};

use crate::view::{BlockStatus, ReportBlock, ReportLine, ReportView, INCOMPLETE_WARNING, REPORT_TITLE};

/// Build the summary for the current record
#[must_use]
pub fn generate(record: &AggregateRecord) -> ReportView {
    let blocks: Vec<ReportBlock> = SectionId::ALL
        .into_iter()
        .map(|section| block_for(record, section))
        .collect();
    let missing = record.missing_sections();
    let is_complete = missing.is_empty();
    tracing::debug!(is_complete, missing = missing.len(), "Report generated");
    ReportView {
        title: REPORT_TITLE,
        blocks,
        is_complete,
        missing,
        warning: (!is_complete).then_some(INCOMPLETE_WARNING),
    }
}

/// Text shown for a section with no saved data
#[must_use]
pub const fn placeholder(section: SectionId) -> &'static str {
    match section {
        SectionId::Equipment => "No equipment data provided yet.",
        SectionId::Installation => "No installation data provided yet.",
        SectionId::Control => "No control system data provided yet.",
        SectionId::Safety => "No safety & compliance data provided yet.",
        SectionId::Performance => "No performance metrics provided yet.",
    }
}

fn block_for(record: &AggregateRecord, section: SectionId) -> ReportBlock {
    let completed = record.is_completed(section);
    let (status, lines, placeholder) = match record.entry(section) {
        None => (BlockStatus::NotProvided, Vec::new(), Some(placeholder(section))),
        Some(data) => {
            let status = match data {
                SectionData::Validated(_) => BlockStatus::Provided,
                SectionData::Draft(_) => BlockStatus::Draft,
            };
            (status, lines_for(&data.display_record(section)), None)
        }
    };
    ReportBlock {
        section,
        title: section.title(),
        status,
        completed,
        lines,
        placeholder,
    }
}

fn lines_for(record: &SectionRecord) -> Vec<ReportLine> {
    match record {
        SectionRecord::Equipment(r) => equipment_lines(r),
        SectionRecord::Installation(r) => installation_lines(r),
        SectionRecord::Control(r) => control_lines(r),
        SectionRecord::Safety(r) => safety_lines(r),
        SectionRecord::Performance(r) => performance_lines(r),
    }
}

fn equipment_lines(r: &EquipmentRecord) -> Vec<ReportLine> {
    vec![
        ReportLine::new("Model Number", &r.model_number),
        ReportLine::new("Serial Number", &r.serial_number),
        ReportLine::new("Compressor Type", &r.compressor_type),
        ReportLine::new("Heating Capacity", format!("{} BTU/h", r.heating_capacity)),
        ReportLine::new("Cooling Capacity", format!("{} BTU/h", r.cooling_capacity)),
        ReportLine::new("HSPF Rating", &r.hspf_rating),
        ReportLine::new("EER Rating", &r.eer_rating),
        ReportLine::new("SEER Rating", &r.seer_rating),
        ReportLine::new("Replacement Type", &r.replacement_type),
    ]
}

fn installation_lines(r: &InstallationRecord) -> Vec<ReportLine> {
    let mut lines = vec![
        ReportLine::new(
            "External Static Pressure",
            format!("{} inches WC", r.external_static_pressure),
        ),
        ReportLine::new("Airflow Measurement", format!("{} CFM", r.airflow_measurement)),
        ReportLine::new("Airflow Method", &r.airflow_method),
        ReportLine::new("Refrigerant Charge (Heating)", &r.refrigerant_charge_heating),
        ReportLine::new("Refrigerant Charge (Cooling)", &r.refrigerant_charge_cooling),
        ReportLine::new(
            "Duct Leakage",
            format!(
                "{} → {} {}",
                r.duct_leakage_before, r.duct_leakage_after, r.duct_leakage_unit
            ),
        ),
    ];
    push_notes(&mut lines, "Notes", r.notes.as_deref());
    lines
}

fn control_lines(r: &ControlRecord) -> Vec<ReportLine> {
    let mut lines = vec![
        ReportLine::new("Control System Type", &r.control_system_type),
        ReportLine::new("Low Ambient Lockout", format!("{}°C", r.low_ambient_lockout)),
        ReportLine::new("Auxiliary Heat Lockout", format!("{}°C", r.auxiliary_heat_lockout)),
        ReportLine::new(
            "Performance Monitoring",
            if r.performance_monitoring { "Enabled" } else { "Disabled" },
        ),
    ];
    if r.performance_monitoring {
        lines.push(ReportLine::new(
            "Temperature Differential",
            r.temperature_differential.as_deref().unwrap_or_default(),
        ));
        lines.push(ReportLine::new(
            "Pressure Readings",
            r.pressure_readings.as_deref().unwrap_or_default(),
        ));
    }
    push_notes(&mut lines, "Notes", r.notes.as_deref());
    lines
}

fn safety_lines(r: &SafetyRecord) -> Vec<ReportLine> {
    let mut lines = vec![
        ReportLine::new("CSA Compliance", yes_no(r.csa_compliance)),
        ReportLine::new("Documentation Complete", yes_no(r.documentation_complete)),
        ReportLine::new("Installer Name", &r.installer_name),
        ReportLine::new("Installer License", &r.installer_license),
        ReportLine::new("Installation Date", &r.installation_date),
        ReportLine::new("Sign-Off Date", &r.sign_off_date),
    ];
    push_notes(&mut lines, "Additional Notes", r.additional_notes.as_deref());
    lines
}

fn performance_lines(r: &PerformanceRecord) -> Vec<ReportLine> {
    let mut lines = vec![
        ReportLine::new("Thermal Balance Point", format!("{}°C", r.thermal_balance_point)),
        ReportLine::new(
            "Temperature Split",
            format!(
                "{}°C (Actual) vs {}°C (Expected)",
                r.temperature_split_actual, r.temperature_split_expected
            ),
        ),
        ReportLine::new("Duct Leakage Reduction", format!("{}%", r.duct_leakage_reduction)),
        ReportLine::new("Power Draw (Heating)", format!("{} kW", r.power_draw_heating)),
        ReportLine::new("Power Draw (Cooling)", format!("{} kW", r.power_draw_cooling)),
    ];
    push_notes(&mut lines, "Notes", r.notes.as_deref());
    lines
}

fn push_notes(lines: &mut Vec<ReportLine>, label: &'static str, notes: Option<&str>) {
    if let Some(notes) = notes.filter(|n| !n.is_empty()) {
        lines.push(ReportLine::new(label, notes));
    }
}

const fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use commission_forms::RecordStore;
    use commission_schema::FieldValues;

    #[test]
    fn empty_record_is_all_placeholders() {
        let view = generate(&AggregateRecord::default());
        assert_eq!(view.title, "Heat Pump System Summary");
        assert!(!view.is_complete);
        assert_eq!(view.missing, SectionId::ALL.to_vec());
        assert_eq!(view.warning, Some(INCOMPLETE_WARNING));
        for block in &view.blocks {
            assert_eq!(block.status, BlockStatus::NotProvided);
            assert!(block.lines.is_empty());
            assert_eq!(block.placeholder, Some(placeholder(block.section)));
        }
    }

    #[test]
    fn draft_block_is_read_leniently() {
        let mut store = RecordStore::new();
        store.save_draft(
            SectionId::Safety,
            FieldValues::new().with("installerName", "Jordan Lee"),
        );
        let view = generate(store.get());
        let block = view.block(SectionId::Safety).unwrap();

        assert_eq!(block.status, BlockStatus::Draft);
        assert!(!block.completed);
        assert_eq!(block.line("Installer Name"), Some("Jordan Lee"));
        assert_eq!(block.line("CSA Compliance"), Some("No"));
        assert_eq!(block.line("Installer License"), Some(""));
        assert_eq!(block.line("Additional Notes"), None);
    }

    #[test]
    fn monitoring_details_follow_the_flag() {
        let mut control = ControlRecord {
            control_system_type: "smart".into(),
            low_ambient_lockout: "-15".into(),
            auxiliary_heat_lockout: "-10".into(),
            performance_monitoring: false,
            temperature_differential: Some("4".into()),
            pressure_readings: None,
            notes: Some(String::new()),
        };
        let labels = |r: &ControlRecord| -> Vec<&'static str> {
            control_lines(r).into_iter().map(|l| l.label).collect()
        };
        assert_eq!(
            labels(&control),
            ["Control System Type", "Low Ambient Lockout", "Auxiliary Heat Lockout", "Performance Monitoring"]
        );

        control.performance_monitoring = true;
        let lines = control_lines(&control);
        assert_eq!(lines[3].value, "Enabled");
        assert_eq!(lines[4].value, "4");
        assert_eq!(lines[5].label, "Pressure Readings");
        assert_eq!(lines[5].value, "");
    }
}
