//! Typed section records
//!
//! A record only exists once its raw values passed the section validator
//! (see [`crate::validate`]), or when a draft is read leniently for display.

use serde::{Deserialize, Serialize};

use crate::field::{control, equipment, installation, performance, safety, FieldSpec};
use crate::section::SectionId;
use crate::value::{FieldValue, FieldValues};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentRecord {
    pub model_number: String,
    pub serial_number: String,
    pub compressor_type: String,
    pub heating_capacity: String,
    pub cooling_capacity: String,
    pub hspf_rating: String,
    pub eer_rating: String,
    pub seer_rating: String,
    pub replacement_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallationRecord {
    pub external_static_pressure: String,
    pub airflow_measurement: String,
    pub airflow_method: String,
    pub refrigerant_charge_heating: String,
    pub refrigerant_charge_cooling: String,
    pub duct_leakage_before: String,
    pub duct_leakage_after: String,
    pub duct_leakage_unit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Control system settings.
///
/// `temperature_differential` and `pressure_readings` only carry meaning
/// while `performance_monitoring` is on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlRecord {
    pub control_system_type: String,
    pub low_ambient_lockout: String,
    pub auxiliary_heat_lockout: String,
    pub performance_monitoring: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature_differential: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pressure_readings: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafetyRecord {
    pub csa_compliance: bool,
    pub documentation_complete: bool,
    pub installer_name: String,
    pub installer_license: String,
    pub installation_date: String,
    pub sign_off_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceRecord {
    pub thermal_balance_point: String,
    pub temperature_split_actual: String,
    pub temperature_split_expected: String,
    pub duct_leakage_reduction: String,
    pub power_draw_heating: String,
    pub power_draw_cooling: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A record of any section, tagged with its section id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "section", rename_all = "lowercase")]
pub enum SectionRecord {
    Equipment(EquipmentRecord),
    Installation(InstallationRecord),
    Control(ControlRecord),
    Safety(SafetyRecord),
    Performance(PerformanceRecord),
}

impl SectionRecord {
    #[must_use]
    pub const fn section(&self) -> SectionId {
        match self {
            SectionRecord::Equipment(_) => SectionId::Equipment,
            SectionRecord::Installation(_) => SectionId::Installation,
            SectionRecord::Control(_) => SectionId::Control,
            SectionRecord::Safety(_) => SectionId::Safety,
            SectionRecord::Performance(_) => SectionId::Performance,
        }
    }

    /// Raw values an editor would hold for this record.
    ///
    /// Validating the result yields the same record back.
    #[must_use]
    pub fn to_values(&self) -> FieldValues {
        let mut out = ValueWriter::default();
        match self {
            SectionRecord::Equipment(r) => {
                out.text(&equipment::MODEL_NUMBER, &r.model_number);
                out.text(&equipment::SERIAL_NUMBER, &r.serial_number);
                out.text(&equipment::COMPRESSOR_TYPE, &r.compressor_type);
                out.text(&equipment::HEATING_CAPACITY, &r.heating_capacity);
                out.text(&equipment::COOLING_CAPACITY, &r.cooling_capacity);
                out.text(&equipment::HSPF_RATING, &r.hspf_rating);
                out.text(&equipment::EER_RATING, &r.eer_rating);
                out.text(&equipment::SEER_RATING, &r.seer_rating);
                out.text(&equipment::REPLACEMENT_TYPE, &r.replacement_type);
            }
            SectionRecord::Installation(r) => {
                out.text(&installation::EXTERNAL_STATIC_PRESSURE, &r.external_static_pressure);
                out.text(&installation::AIRFLOW_MEASUREMENT, &r.airflow_measurement);
                out.text(&installation::AIRFLOW_METHOD, &r.airflow_method);
                out.text(&installation::REFRIGERANT_CHARGE_HEATING, &r.refrigerant_charge_heating);
                out.text(&installation::REFRIGERANT_CHARGE_COOLING, &r.refrigerant_charge_cooling);
                out.text(&installation::DUCT_LEAKAGE_BEFORE, &r.duct_leakage_before);
                out.text(&installation::DUCT_LEAKAGE_AFTER, &r.duct_leakage_after);
                out.text(&installation::DUCT_LEAKAGE_UNIT, &r.duct_leakage_unit);
                out.optional(&installation::NOTES, r.notes.as_deref());
            }
            SectionRecord::Control(r) => {
                out.text(&control::CONTROL_SYSTEM_TYPE, &r.control_system_type);
                out.text(&control::LOW_AMBIENT_LOCKOUT, &r.low_ambient_lockout);
                out.text(&control::AUXILIARY_HEAT_LOCKOUT, &r.auxiliary_heat_lockout);
                out.flag(&control::PERFORMANCE_MONITORING, r.performance_monitoring);
                out.optional(&control::TEMPERATURE_DIFFERENTIAL, r.temperature_differential.as_deref());
                out.optional(&control::PRESSURE_READINGS, r.pressure_readings.as_deref());
                out.optional(&control::NOTES, r.notes.as_deref());
            }
            SectionRecord::Safety(r) => {
                out.flag(&safety::CSA_COMPLIANCE, r.csa_compliance);
                out.flag(&safety::DOCUMENTATION_COMPLETE, r.documentation_complete);
                out.text(&safety::INSTALLER_NAME, &r.installer_name);
                out.text(&safety::INSTALLER_LICENSE, &r.installer_license);
                out.text(&safety::INSTALLATION_DATE, &r.installation_date);
                out.text(&safety::SIGN_OFF_DATE, &r.sign_off_date);
                out.optional(&safety::ADDITIONAL_NOTES, r.additional_notes.as_deref());
            }
            SectionRecord::Performance(r) => {
                out.text(&performance::THERMAL_BALANCE_POINT, &r.thermal_balance_point);
                out.text(&performance::TEMPERATURE_SPLIT_ACTUAL, &r.temperature_split_actual);
                out.text(&performance::TEMPERATURE_SPLIT_EXPECTED, &r.temperature_split_expected);
                out.text(&performance::DUCT_LEAKAGE_REDUCTION, &r.duct_leakage_reduction);
                out.text(&performance::POWER_DRAW_HEATING, &r.power_draw_heating);
                out.text(&performance::POWER_DRAW_COOLING, &r.power_draw_cooling);
                out.optional(&performance::NOTES, r.notes.as_deref());
            }
        }
        out.0
    }

    /// Best-effort read of unvalidated values, for display only.
    ///
    /// Missing or mistyped text reads as empty, a missing or unreadable flag
    /// as `false`. Optional fields stay absent when absent.
    #[must_use]
    pub fn from_values_lenient(section: SectionId, values: &FieldValues) -> Self {
        let read = LenientReader(values);
        match section {
            SectionId::Equipment => SectionRecord::Equipment(EquipmentRecord {
                model_number: read.text(&equipment::MODEL_NUMBER),
                serial_number: read.text(&equipment::SERIAL_NUMBER),
                compressor_type: read.text(&equipment::COMPRESSOR_TYPE),
                heating_capacity: read.text(&equipment::HEATING_CAPACITY),
                cooling_capacity: read.text(&equipment::COOLING_CAPACITY),
                hspf_rating: read.text(&equipment::HSPF_RATING),
                eer_rating: read.text(&equipment::EER_RATING),
                seer_rating: read.text(&equipment::SEER_RATING),
                replacement_type: read.text(&equipment::REPLACEMENT_TYPE),
            }),
            SectionId::Installation => SectionRecord::Installation(InstallationRecord {
                external_static_pressure: read.text(&installation::EXTERNAL_STATIC_PRESSURE),
                airflow_measurement: read.text(&installation::AIRFLOW_MEASUREMENT),
                airflow_method: read.text(&installation::AIRFLOW_METHOD),
                refrigerant_charge_heating: read.text(&installation::REFRIGERANT_CHARGE_HEATING),
                refrigerant_charge_cooling: read.text(&installation::REFRIGERANT_CHARGE_COOLING),
                duct_leakage_before: read.text(&installation::DUCT_LEAKAGE_BEFORE),
                duct_leakage_after: read.text(&installation::DUCT_LEAKAGE_AFTER),
                duct_leakage_unit: read.text(&installation::DUCT_LEAKAGE_UNIT),
                notes: read.optional(&installation::NOTES),
            }),
            SectionId::Control => SectionRecord::Control(ControlRecord {
                control_system_type: read.text(&control::CONTROL_SYSTEM_TYPE),
                low_ambient_lockout: read.text(&control::LOW_AMBIENT_LOCKOUT),
                auxiliary_heat_lockout: read.text(&control::AUXILIARY_HEAT_LOCKOUT),
                performance_monitoring: read.flag(&control::PERFORMANCE_MONITORING),
                temperature_differential: read.optional(&control::TEMPERATURE_DIFFERENTIAL),
                pressure_readings: read.optional(&control::PRESSURE_READINGS),
                notes: read.optional(&control::NOTES),
            }),
            SectionId::Safety => SectionRecord::Safety(SafetyRecord {
                csa_compliance: read.flag(&safety::CSA_COMPLIANCE),
                documentation_complete: read.flag(&safety::DOCUMENTATION_COMPLETE),
                installer_name: read.text(&safety::INSTALLER_NAME),
                installer_license: read.text(&safety::INSTALLER_LICENSE),
                installation_date: read.text(&safety::INSTALLATION_DATE),
                sign_off_date: read.text(&safety::SIGN_OFF_DATE),
                additional_notes: read.optional(&safety::ADDITIONAL_NOTES),
            }),
            SectionId::Performance => SectionRecord::Performance(PerformanceRecord {
                thermal_balance_point: read.text(&performance::THERMAL_BALANCE_POINT),
                temperature_split_actual: read.text(&performance::TEMPERATURE_SPLIT_ACTUAL),
                temperature_split_expected: read.text(&performance::TEMPERATURE_SPLIT_EXPECTED),
                duct_leakage_reduction: read.text(&performance::DUCT_LEAKAGE_REDUCTION),
                power_draw_heating: read.text(&performance::POWER_DRAW_HEATING),
                power_draw_cooling: read.text(&performance::POWER_DRAW_COOLING),
                notes: read.optional(&performance::NOTES),
            }),
        }
    }
}

macro_rules! impl_from_record {
    ($($variant:ident => $record:ty),* $(,)?) => {
        $(
            impl From<$record> for SectionRecord {
                fn from(record: $record) -> Self {
                    SectionRecord::$variant(record)
                }
            }
        )*
    };
}

impl_from_record! {
    Equipment => EquipmentRecord,
    Installation => InstallationRecord,
    Control => ControlRecord,
    Safety => SafetyRecord,
    Performance => PerformanceRecord,
}

#[derive(Default)]
struct ValueWriter(FieldValues);

impl ValueWriter {
    fn text(&mut self, spec: &FieldSpec, value: &str) {
        self.0.set(spec.name, value);
    }

    fn flag(&mut self, spec: &FieldSpec, value: bool) {
        self.0.set(spec.name, value);
    }

    fn optional(&mut self, spec: &FieldSpec, value: Option<&str>) {
        if let Some(value) = value {
            self.0.set(spec.name, value);
        }
    }
}

struct LenientReader<'a>(&'a FieldValues);

impl LenientReader<'_> {
    fn text(&self, spec: &FieldSpec) -> String {
        self.0
            .get(spec.name)
            .and_then(FieldValue::as_text)
            .unwrap_or_default()
            .to_string()
    }

    fn optional(&self, spec: &FieldSpec) -> Option<String> {
        self.0
            .get(spec.name)
            .and_then(FieldValue::as_text)
            .map(str::to_string)
    }

    fn flag(&self, spec: &FieldSpec) -> bool {
        self.0
            .get(spec.name)
            .and_then(FieldValue::to_flag)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn lenient_read_fills_gaps() {
        let values = FieldValues::new()
            .with("controlSystemType", "smart")
            .with("performanceMonitoring", "yes");
        let record = SectionRecord::from_values_lenient(SectionId::Control, &values);
        assert_eq!(
            record,
            SectionRecord::Control(ControlRecord {
                control_system_type: "smart".into(),
                low_ambient_lockout: String::new(),
                auxiliary_heat_lockout: String::new(),
                performance_monitoring: true,
                temperature_differential: None,
                pressure_readings: None,
                notes: None,
            })
        );
    }

    #[test]
    fn optional_fields_are_omitted_when_absent() {
        let record = SectionRecord::Safety(SafetyRecord {
            csa_compliance: true,
            documentation_complete: false,
            installer_name: "Ana Ruiz".into(),
            installer_license: "L-77".into(),
            installation_date: "2024-03-01".into(),
            sign_off_date: "2024-03-02".into(),
            additional_notes: None,
        });
        let values = record.to_values();
        assert!(values.get("additionalNotes").is_none());
        assert_eq!(values.get("csaCompliance"), Some(&FieldValue::Flag(true)));

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["section"], "safety");
        assert_eq!(json["installerName"], "Ana Ruiz");
        assert!(json.get("additionalNotes").is_none());
    }
}
