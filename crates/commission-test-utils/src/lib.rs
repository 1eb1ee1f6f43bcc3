//! Testing utilities for the commissioning workspace
//!
//! Shared fixtures: complete raw values and typed records for every section,
//! and sessions driven to a known state.

#![allow(missing_docs)]

use commission_forms::CommissioningSession;
use commission_schema::{
    validate_section, Destination, FieldValues, SectionId, SectionRecord,
};

/// The equipment entry used throughout the end-to-end scenarios
pub fn equipment_values() -> FieldValues {
    FieldValues::new()
        .with("modelNumber", "HP-2000")
        .with("serialNumber", "SN123")
        .with("compressorType", "variable")
        .with("heatingCapacity", "36000")
        .with("coolingCapacity", "30000")
        .with("hspfRating", "10")
        .with("eerRating", "14")
        .with("seerRating", "20")
        .with("replacementType", "gas")
}

pub fn installation_values() -> FieldValues {
    FieldValues::new()
        .with("externalStaticPressure", "0.5")
        .with("airflowMeasurement", "1200")
        .with("airflowMethod", "trueflow")
        .with("refrigerantChargeHeating", "subcooling 10F")
        .with("refrigerantChargeCooling", "superheat 8F")
        .with("ductLeakageBefore", "300")
        .with("ductLeakageAfter", "120")
        .with("ductLeakageUnit", "cfm")
        .with("notes", "Sealed supply plenum")
}

/// Control values with performance monitoring off and the detail fields blank
pub fn control_values() -> FieldValues {
    FieldValues::new()
        .with("controlSystemType", "smart")
        .with("lowAmbientLockout", "-15")
        .with("auxiliaryHeatLockout", "-10")
        .with("performanceMonitoring", false)
        .with("temperatureDifferential", "")
        .with("pressureReadings", "")
        .with("notes", "")
}

pub fn safety_values() -> FieldValues {
    FieldValues::new()
        .with("csaCompliance", true)
        .with("documentationComplete", true)
        .with("installerName", "Jordan Lee")
        .with("installerLicense", "HVAC-44821")
        .with("installationDate", "2024-05-14")
        .with("signOffDate", "2024-05-15")
}

pub fn performance_values() -> FieldValues {
    FieldValues::new()
        .with("thermalBalancePoint", "-8")
        .with("temperatureSplitActual", "19")
        .with("temperatureSplitExpected", "20")
        .with("ductLeakageReduction", "60")
        .with("powerDrawHeating", "3.1")
        .with("powerDrawCooling", "2.4")
}

/// Complete, valid raw values for a section
pub fn valid_values(section: SectionId) -> FieldValues {
    match section {
        SectionId::Equipment => equipment_values(),
        SectionId::Installation => installation_values(),
        SectionId::Control => control_values(),
        SectionId::Safety => safety_values(),
        SectionId::Performance => performance_values(),
    }
}

/// Typed record built from [`valid_values`]
pub fn valid_record(section: SectionId) -> SectionRecord {
    validate_section(section, &valid_values(section))
        .unwrap_or_else(|errors| panic!("fixture for {section} is invalid: {errors:?}"))
}

/// Fill the active section's editor with `values`
pub fn fill(session: &mut CommissioningSession, values: &FieldValues) {
    for (field, value) in values.iter() {
        session.set_field(field, value.clone());
    }
}

/// A session where every section was submitted once, ending on the summary
pub fn completed_session() -> CommissioningSession {
    let mut session = CommissioningSession::new();
    for section in SectionId::ALL {
        assert_eq!(session.current(), Destination::Section(section));
        fill(&mut session, &valid_values(section));
        session
            .submit()
            .unwrap_or_else(|errors| panic!("fixture for {section} rejected: {errors:?}"));
    }
    assert_eq!(session.current(), Destination::Summary);
    session
}
