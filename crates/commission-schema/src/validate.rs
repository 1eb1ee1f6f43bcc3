//! Section validators
//!
//! One plain function per section. Each checks only its own section's
//! values and returns either the typed record or every failing field.
//!
//! Advisory limits (the lockout temperature hints) are never checked here.

use crate::error::{FieldErrors, FieldValidationError};
use crate::field::{control, equipment, installation, performance, safety, FieldSpec, Requirement};
use crate::records::{
    ControlRecord, EquipmentRecord, InstallationRecord, PerformanceRecord, SafetyRecord,
    SectionRecord,
};
use crate::section::SectionId;
use crate::value::{FieldValue, FieldValues};

const EXPECTED_TEXT: &str = "Expected text";
const EXPECTED_FLAG: &str = "Expected true or false";

/// Validate raw values for any section
///
/// # Errors
/// Returns every field that failed, keyed by field name
pub fn validate_section(section: SectionId, values: &FieldValues) -> Result<SectionRecord, FieldErrors> {
    match section {
        SectionId::Equipment => validate_equipment(values).map(Into::into),
        SectionId::Installation => validate_installation(values).map(Into::into),
        SectionId::Control => validate_control(values).map(Into::into),
        SectionId::Safety => validate_safety(values).map(Into::into),
        SectionId::Performance => validate_performance(values).map(Into::into),
    }
}

/// # Errors
/// Returns every field that failed, keyed by field name
pub fn validate_equipment(values: &FieldValues) -> Result<EquipmentRecord, FieldErrors> {
    let mut check = Checker::new(values);
    let record = EquipmentRecord {
        model_number: check.text(&equipment::MODEL_NUMBER),
        serial_number: check.text(&equipment::SERIAL_NUMBER),
        compressor_type: check.text(&equipment::COMPRESSOR_TYPE),
        heating_capacity: check.text(&equipment::HEATING_CAPACITY),
        cooling_capacity: check.text(&equipment::COOLING_CAPACITY),
        hspf_rating: check.text(&equipment::HSPF_RATING),
        eer_rating: check.text(&equipment::EER_RATING),
        seer_rating: check.text(&equipment::SEER_RATING),
        replacement_type: check.text(&equipment::REPLACEMENT_TYPE),
    };
    check.finish(record)
}

/// # Errors
/// Returns every field that failed, keyed by field name
pub fn validate_installation(values: &FieldValues) -> Result<InstallationRecord, FieldErrors> {
    let mut check = Checker::new(values);
    let record = InstallationRecord {
        external_static_pressure: check.text(&installation::EXTERNAL_STATIC_PRESSURE),
        airflow_measurement: check.text(&installation::AIRFLOW_MEASUREMENT),
        airflow_method: check.text(&installation::AIRFLOW_METHOD),
        refrigerant_charge_heating: check.text(&installation::REFRIGERANT_CHARGE_HEATING),
        refrigerant_charge_cooling: check.text(&installation::REFRIGERANT_CHARGE_COOLING),
        duct_leakage_before: check.text(&installation::DUCT_LEAKAGE_BEFORE),
        duct_leakage_after: check.text(&installation::DUCT_LEAKAGE_AFTER),
        duct_leakage_unit: check.text(&installation::DUCT_LEAKAGE_UNIT),
        notes: check.optional_text(&installation::NOTES),
    };
    check.finish(record)
}

/// Monitoring detail fields are accepted whatever the monitoring toggle says.
///
/// # Errors
/// Returns every field that failed, keyed by field name
pub fn validate_control(values: &FieldValues) -> Result<ControlRecord, FieldErrors> {
    let mut check = Checker::new(values);
    let record = ControlRecord {
        control_system_type: check.text(&control::CONTROL_SYSTEM_TYPE),
        low_ambient_lockout: check.text(&control::LOW_AMBIENT_LOCKOUT),
        auxiliary_heat_lockout: check.text(&control::AUXILIARY_HEAT_LOCKOUT),
        performance_monitoring: check.flag(&control::PERFORMANCE_MONITORING),
        temperature_differential: check.optional_text(&control::TEMPERATURE_DIFFERENTIAL),
        pressure_readings: check.optional_text(&control::PRESSURE_READINGS),
        notes: check.optional_text(&control::NOTES),
    };
    check.finish(record)
}

/// # Errors
/// Returns every field that failed, keyed by field name
pub fn validate_safety(values: &FieldValues) -> Result<SafetyRecord, FieldErrors> {
    let mut check = Checker::new(values);
    let record = SafetyRecord {
        csa_compliance: check.flag(&safety::CSA_COMPLIANCE),
        documentation_complete: check.flag(&safety::DOCUMENTATION_COMPLETE),
        installer_name: check.text(&safety::INSTALLER_NAME),
        installer_license: check.text(&safety::INSTALLER_LICENSE),
        installation_date: check.text(&safety::INSTALLATION_DATE),
        sign_off_date: check.text(&safety::SIGN_OFF_DATE),
        additional_notes: check.optional_text(&safety::ADDITIONAL_NOTES),
    };
    check.finish(record)
}

/// # Errors
/// Returns every field that failed, keyed by field name
pub fn validate_performance(values: &FieldValues) -> Result<PerformanceRecord, FieldErrors> {
    let mut check = Checker::new(values);
    let record = PerformanceRecord {
        thermal_balance_point: check.text(&performance::THERMAL_BALANCE_POINT),
        temperature_split_actual: check.text(&performance::TEMPERATURE_SPLIT_ACTUAL),
        temperature_split_expected: check.text(&performance::TEMPERATURE_SPLIT_EXPECTED),
        duct_leakage_reduction: check.text(&performance::DUCT_LEAKAGE_REDUCTION),
        power_draw_heating: check.text(&performance::POWER_DRAW_HEATING),
        power_draw_cooling: check.text(&performance::POWER_DRAW_COOLING),
        notes: check.optional_text(&performance::NOTES),
    };
    check.finish(record)
}

/// Collects field errors while a record is being assembled.
///
/// Failing fields yield placeholder values; the record is discarded by
/// [`Checker::finish`] whenever any error was recorded.
struct Checker<'a> {
    values: &'a FieldValues,
    errors: FieldErrors,
}

impl<'a> Checker<'a> {
    fn new(values: &'a FieldValues) -> Self {
        Self {
            values,
            errors: FieldErrors::new(),
        }
    }

    fn fail(&mut self, spec: &FieldSpec, message: &str) {
        self.errors.push(FieldValidationError::new(spec.name, message));
    }

    fn required_message(spec: &FieldSpec) -> &'static str {
        match spec.requirement {
            Requirement::Required(message) => message,
            Requirement::Optional => "Required",
        }
    }

    fn text(&mut self, spec: &FieldSpec) -> String {
        let values = self.values;
        match values.get(spec.name) {
            Some(FieldValue::Text(text)) if !text.is_empty() => text.clone(),
            Some(FieldValue::Flag(_)) => {
                self.fail(spec, EXPECTED_TEXT);
                String::new()
            }
            Some(FieldValue::Text(_)) | None => {
                self.fail(spec, Self::required_message(spec));
                String::new()
            }
        }
    }

    fn optional_text(&mut self, spec: &FieldSpec) -> Option<String> {
        let values = self.values;
        match values.get(spec.name) {
            None => None,
            Some(FieldValue::Text(text)) => Some(text.clone()),
            Some(FieldValue::Flag(_)) => {
                self.fail(spec, EXPECTED_TEXT);
                None
            }
        }
    }

    fn flag(&mut self, spec: &FieldSpec) -> bool {
        let values = self.values;
        match values.get(spec.name) {
            Some(value) => {
                if let Some(flag) = value.to_flag() {
                    flag
                } else {
                    self.fail(spec, EXPECTED_FLAG);
                    false
                }
            }
            None => {
                self.fail(spec, Self::required_message(spec));
                false
            }
        }
    }

    fn finish<R>(self, record: R) -> Result<R, FieldErrors> {
        if self.errors.is_empty() {
            Ok(record)
        } else {
            Err(self.errors)
        }
    }
}
