//! Declarative field tables
//!
//! Every section declares its fields once. The validators read the
//! requirement and message; the rendering layer reads labels, hints,
//! units and choice lists.

use crate::section::SectionId;
use crate::value::{FieldValue, FieldValues};

/// Input shape of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free-form or selected text
    Text,
    /// Checkbox
    Flag,
}

/// Whether a field must be supplied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// Must be present (non-empty text or an explicit boolean); carries the error message
    Required(&'static str),
    /// May be omitted entirely
    Optional,
}

/// One entry of a fixed choice list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Declaration of a single field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// camelCase wire name
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub requirement: Requirement,
    /// Advisory text for the user. Never enforced.
    pub hint: Option<&'static str>,
    /// Unit suffix used in reports
    pub unit: Option<&'static str>,
    /// Choices offered by the input layer. Validation accepts any text.
    pub options: &'static [FieldOption],
    /// Initial text of a fresh editor
    pub default_text: &'static str,
}

impl FieldSpec {
    const fn base(name: &'static str, label: &'static str, kind: FieldKind, requirement: Requirement) -> Self {
        Self {
            name,
            label,
            kind,
            requirement,
            hint: None,
            unit: None,
            options: &[],
            default_text: "",
        }
    }

    /// Required text field
    #[must_use]
    pub const fn text(name: &'static str, label: &'static str, message: &'static str) -> Self {
        Self::base(name, label, FieldKind::Text, Requirement::Required(message))
    }

    /// Optional text field
    #[must_use]
    pub const fn optional_text(name: &'static str, label: &'static str) -> Self {
        Self::base(name, label, FieldKind::Text, Requirement::Optional)
    }

    /// Required boolean field
    #[must_use]
    pub const fn flag(name: &'static str, label: &'static str, message: &'static str) -> Self {
        Self::base(name, label, FieldKind::Flag, Requirement::Required(message))
    }

    #[must_use]
    pub const fn with_hint(mut self, hint: &'static str) -> Self {
        self.hint = Some(hint);
        self
    }

    #[must_use]
    pub const fn with_unit(mut self, unit: &'static str) -> Self {
        self.unit = Some(unit);
        self
    }

    #[must_use]
    pub const fn with_options(mut self, options: &'static [FieldOption]) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub const fn with_default(mut self, text: &'static str) -> Self {
        self.default_text = text;
        self
    }

    #[inline]
    #[must_use]
    pub const fn is_required(&self) -> bool {
        matches!(self.requirement, Requirement::Required(_))
    }

    /// Value a fresh editor starts with
    #[must_use]
    pub fn default_value(&self) -> FieldValue {
        match self.kind {
            FieldKind::Text => FieldValue::Text(self.default_text.to_string()),
            FieldKind::Flag => FieldValue::Flag(false),
        }
    }

    /// Label of the option whose value matches, if any
    #[must_use]
    pub fn option_label(&self, value: &str) -> Option<&'static str> {
        self.options.iter().find(|opt| opt.value == value).map(|opt| opt.label)
    }
}

const fn opt(value: &'static str, label: &'static str) -> FieldOption {
    FieldOption { value, label }
}

/// Equipment specification fields
pub mod equipment {
    use super::{opt, FieldOption, FieldSpec};

    pub const COMPRESSOR_TYPES: &[FieldOption] = &[
        opt("variable", "Variable Speed"),
        opt("single", "Single Speed"),
        opt("dual", "Dual Stage"),
    ];
    pub const REPLACEMENT_TYPES: &[FieldOption] = &[
        opt("electric", "Electric System"),
        opt("gas", "Gas System"),
        opt("oil", "Oil System"),
        opt("other", "Other"),
    ];

    pub const MODEL_NUMBER: FieldSpec =
        FieldSpec::text("modelNumber", "Model Number", "Model number is required");
    pub const SERIAL_NUMBER: FieldSpec =
        FieldSpec::text("serialNumber", "Serial Number", "Serial number is required");
    pub const COMPRESSOR_TYPE: FieldSpec =
        FieldSpec::text("compressorType", "Compressor Type", "Compressor type is required")
            .with_options(COMPRESSOR_TYPES);
    pub const HEATING_CAPACITY: FieldSpec =
        FieldSpec::text("heatingCapacity", "Heating Capacity", "Heating capacity is required")
            .with_unit("BTU/h");
    pub const COOLING_CAPACITY: FieldSpec =
        FieldSpec::text("coolingCapacity", "Cooling Capacity", "Cooling capacity is required")
            .with_unit("BTU/h");
    pub const HSPF_RATING: FieldSpec =
        FieldSpec::text("hspfRating", "HSPF Rating", "HSPF rating is required");
    pub const EER_RATING: FieldSpec =
        FieldSpec::text("eerRating", "EER Rating", "EER rating is required");
    pub const SEER_RATING: FieldSpec =
        FieldSpec::text("seerRating", "SEER Rating", "SEER rating is required");
    pub const REPLACEMENT_TYPE: FieldSpec =
        FieldSpec::text("replacementType", "Replacement Type", "Replacement type is required")
            .with_options(REPLACEMENT_TYPES);

    pub const FIELDS: &[FieldSpec] = &[
        MODEL_NUMBER,
        SERIAL_NUMBER,
        COMPRESSOR_TYPE,
        HEATING_CAPACITY,
        COOLING_CAPACITY,
        HSPF_RATING,
        EER_RATING,
        SEER_RATING,
        REPLACEMENT_TYPE,
    ];
}

/// Installation and commissioning fields
pub mod installation {
    use super::{opt, FieldOption, FieldSpec};

    pub const AIRFLOW_METHODS: &[FieldOption] = &[
        opt("trueflow", "TrueFlow"),
        opt("fanCurve", "Fan Curve"),
        opt("tempSplit", "Temperature Split"),
        opt("other", "Other"),
    ];
    pub const LEAKAGE_UNITS: &[FieldOption] = &[opt("cfm", "CFM"), opt("percentage", "Percentage")];

    pub const EXTERNAL_STATIC_PRESSURE: FieldSpec = FieldSpec::text(
        "externalStaticPressure",
        "External Static Pressure",
        "External static pressure is required",
    )
    .with_unit("inches WC");
    pub const AIRFLOW_MEASUREMENT: FieldSpec = FieldSpec::text(
        "airflowMeasurement",
        "Airflow Measurement",
        "Airflow measurement is required",
    )
    .with_unit("CFM");
    pub const AIRFLOW_METHOD: FieldSpec =
        FieldSpec::text("airflowMethod", "Airflow Method", "Airflow method is required")
            .with_options(AIRFLOW_METHODS);
    pub const REFRIGERANT_CHARGE_HEATING: FieldSpec = FieldSpec::text(
        "refrigerantChargeHeating",
        "Refrigerant Charge (Heating)",
        "Refrigerant charge for heating is required",
    );
    pub const REFRIGERANT_CHARGE_COOLING: FieldSpec = FieldSpec::text(
        "refrigerantChargeCooling",
        "Refrigerant Charge (Cooling)",
        "Refrigerant charge for cooling is required",
    );
    pub const DUCT_LEAKAGE_BEFORE: FieldSpec = FieldSpec::text(
        "ductLeakageBefore",
        "Duct Leakage Before",
        "Duct leakage before is required",
    );
    pub const DUCT_LEAKAGE_AFTER: FieldSpec = FieldSpec::text(
        "ductLeakageAfter",
        "Duct Leakage After",
        "Duct leakage after is required",
    );
    pub const DUCT_LEAKAGE_UNIT: FieldSpec =
        FieldSpec::text("ductLeakageUnit", "Duct Leakage Unit", "Duct leakage unit is required")
            .with_options(LEAKAGE_UNITS)
            .with_default("cfm");
    pub const NOTES: FieldSpec = FieldSpec::optional_text("notes", "Notes");

    pub const FIELDS: &[FieldSpec] = &[
        EXTERNAL_STATIC_PRESSURE,
        AIRFLOW_MEASUREMENT,
        AIRFLOW_METHOD,
        REFRIGERANT_CHARGE_HEATING,
        REFRIGERANT_CHARGE_COOLING,
        DUCT_LEAKAGE_BEFORE,
        DUCT_LEAKAGE_AFTER,
        DUCT_LEAKAGE_UNIT,
        NOTES,
    ];
}

/// Control system fields
pub mod control {
    use super::{opt, FieldOption, FieldSpec};

    pub const CONTROL_SYSTEM_TYPES: &[FieldOption] = &[
        opt("integrated", "Integrated Control System"),
        opt("standalone", "Standalone Control System"),
        opt("smart", "Smart Thermostat"),
        opt("other", "Other"),
    ];

    pub const CONTROL_SYSTEM_TYPE: FieldSpec = FieldSpec::text(
        "controlSystemType",
        "Control System Type",
        "Control system type is required",
    )
    .with_options(CONTROL_SYSTEM_TYPES);
    pub const LOW_AMBIENT_LOCKOUT: FieldSpec = FieldSpec::text(
        "lowAmbientLockout",
        "Low Ambient Lockout",
        "Low ambient lockout is required",
    )
    .with_unit("°C")
    .with_hint("Must be ≤ 3°C");
    pub const AUXILIARY_HEAT_LOCKOUT: FieldSpec = FieldSpec::text(
        "auxiliaryHeatLockout",
        "Auxiliary Heat Lockout",
        "Auxiliary heat lockout is required",
    )
    .with_unit("°C")
    .with_hint("Must be ≤ 2°C");
    pub const PERFORMANCE_MONITORING: FieldSpec = FieldSpec::flag(
        "performanceMonitoring",
        "Performance Monitoring",
        "Performance monitoring is required",
    );
    pub const TEMPERATURE_DIFFERENTIAL: FieldSpec =
        FieldSpec::optional_text("temperatureDifferential", "Temperature Differential");
    pub const PRESSURE_READINGS: FieldSpec =
        FieldSpec::optional_text("pressureReadings", "Pressure Readings");
    pub const NOTES: FieldSpec = FieldSpec::optional_text("notes", "Notes");

    pub const FIELDS: &[FieldSpec] = &[
        CONTROL_SYSTEM_TYPE,
        LOW_AMBIENT_LOCKOUT,
        AUXILIARY_HEAT_LOCKOUT,
        PERFORMANCE_MONITORING,
        TEMPERATURE_DIFFERENTIAL,
        PRESSURE_READINGS,
        NOTES,
    ];
}

/// Safety and compliance fields
pub mod safety {
    use super::FieldSpec;

    pub const CSA_COMPLIANCE: FieldSpec = FieldSpec::flag(
        "csaCompliance",
        "CSA Compliance",
        "CSA compliance is required",
    )
    .with_hint("Complies with CAN/CSA C273.5 standards");
    pub const DOCUMENTATION_COMPLETE: FieldSpec = FieldSpec::flag(
        "documentationComplete",
        "Documentation Complete",
        "Documentation complete is required",
    )
    .with_hint("All test results and system parameters documented");
    pub const INSTALLER_NAME: FieldSpec =
        FieldSpec::text("installerName", "Installer Name", "Installer name is required");
    pub const INSTALLER_LICENSE: FieldSpec =
        FieldSpec::text("installerLicense", "Installer License", "Installer license is required");
    pub const INSTALLATION_DATE: FieldSpec =
        FieldSpec::text("installationDate", "Installation Date", "Installation date is required");
    pub const SIGN_OFF_DATE: FieldSpec =
        FieldSpec::text("signOffDate", "Sign-Off Date", "Sign-off date is required");
    pub const ADDITIONAL_NOTES: FieldSpec =
        FieldSpec::optional_text("additionalNotes", "Additional Notes");

    pub const FIELDS: &[FieldSpec] = &[
        CSA_COMPLIANCE,
        DOCUMENTATION_COMPLETE,
        INSTALLER_NAME,
        INSTALLER_LICENSE,
        INSTALLATION_DATE,
        SIGN_OFF_DATE,
        ADDITIONAL_NOTES,
    ];
}

/// Performance metric fields
pub mod performance {
    use super::FieldSpec;

    pub const THERMAL_BALANCE_POINT: FieldSpec = FieldSpec::text(
        "thermalBalancePoint",
        "Thermal Balance Point",
        "Thermal balance point is required",
    )
    .with_unit("°C");
    pub const TEMPERATURE_SPLIT_ACTUAL: FieldSpec = FieldSpec::text(
        "temperatureSplitActual",
        "Temperature Split (Actual)",
        "Actual temperature split is required",
    )
    .with_unit("°C");
    pub const TEMPERATURE_SPLIT_EXPECTED: FieldSpec = FieldSpec::text(
        "temperatureSplitExpected",
        "Temperature Split (Expected)",
        "Expected temperature split is required",
    )
    .with_unit("°C");
    pub const DUCT_LEAKAGE_REDUCTION: FieldSpec = FieldSpec::text(
        "ductLeakageReduction",
        "Duct Leakage Reduction",
        "Duct leakage reduction is required",
    )
    .with_unit("%");
    pub const POWER_DRAW_HEATING: FieldSpec = FieldSpec::text(
        "powerDrawHeating",
        "Power Draw (Heating)",
        "Power draw for heating is required",
    )
    .with_unit("kW");
    pub const POWER_DRAW_COOLING: FieldSpec = FieldSpec::text(
        "powerDrawCooling",
        "Power Draw (Cooling)",
        "Power draw for cooling is required",
    )
    .with_unit("kW");
    pub const NOTES: FieldSpec = FieldSpec::optional_text("notes", "Notes");

    pub const FIELDS: &[FieldSpec] = &[
        THERMAL_BALANCE_POINT,
        TEMPERATURE_SPLIT_ACTUAL,
        TEMPERATURE_SPLIT_EXPECTED,
        DUCT_LEAKAGE_REDUCTION,
        POWER_DRAW_HEATING,
        POWER_DRAW_COOLING,
        NOTES,
    ];
}

impl SectionId {
    /// Declared fields of this section, in display order
    #[must_use]
    pub const fn fields(self) -> &'static [FieldSpec] {
        match self {
            SectionId::Equipment => equipment::FIELDS,
            SectionId::Installation => installation::FIELDS,
            SectionId::Control => control::FIELDS,
            SectionId::Safety => safety::FIELDS,
            SectionId::Performance => performance::FIELDS,
        }
    }

    /// Look up a declared field by wire name
    #[must_use]
    pub fn field(self, name: &str) -> Option<&'static FieldSpec> {
        self.fields().iter().find(|spec| spec.name == name)
    }

    /// Values a fresh editor starts with
    #[must_use]
    pub fn default_values(self) -> FieldValues {
        self.fields()
            .iter()
            .map(|spec| (spec.name, spec.default_value()))
            .collect()
    }
}

/// Presentation policy: whether the input for `field` should be enabled.
///
/// Only Control's monitoring detail fields depend on another value; they are
/// disabled while performance monitoring is off. Validation ignores this.
#[must_use]
pub fn field_enabled(section: SectionId, field: &str, values: &FieldValues) -> bool {
    let monitoring_detail = field == control::TEMPERATURE_DIFFERENTIAL.name
        || field == control::PRESSURE_READINGS.name;
    if section != SectionId::Control || !monitoring_detail {
        return true;
    }
    values
        .get(control::PERFORMANCE_MONITORING.name)
        .and_then(FieldValue::to_flag)
        .unwrap_or(false)
}
