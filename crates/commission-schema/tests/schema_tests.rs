use commission_schema::{validate_section, FieldValue, Requirement, SectionId, SectionRecord};
use commission_test_utils::{valid_record, valid_values};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn any_section() -> impl Strategy<Value = SectionId> {
    prop_oneof![
        Just(SectionId::Equipment),
        Just(SectionId::Installation),
        Just(SectionId::Control),
        Just(SectionId::Safety),
        Just(SectionId::Performance),
    ]
}

#[test]
fn valid_fixtures_pass_every_schema() {
    for section in SectionId::ALL {
        let record = validate_section(section, &valid_values(section)).unwrap();
        assert_eq!(record.section(), section);
    }
}

#[test]
fn record_values_validate_back_to_the_same_record() {
    for section in SectionId::ALL {
        let record = valid_record(section);
        let again = validate_section(section, &record.to_values()).unwrap();
        assert_eq!(again, record);
    }
}

#[test]
fn blank_control_details_are_kept_as_empty() {
    let SectionRecord::Control(control) = valid_record(SectionId::Control) else {
        panic!("expected a control record");
    };
    assert!(!control.performance_monitoring);
    assert_eq!(control.temperature_differential.as_deref(), Some(""));
    assert_eq!(control.pressure_readings.as_deref(), Some(""));
}

#[test]
fn optional_fields_may_be_omitted_entirely() {
    for section in SectionId::ALL {
        let mut values = valid_values(section);
        for spec in section.fields().iter().filter(|f| !f.is_required()) {
            values.remove(spec.name);
        }
        assert!(validate_section(section, &values).is_ok(), "{section}");
    }
}

proptest! {
    #[test]
    fn prop_missing_required_field_fails_exactly_that_field(
        section in any_section(),
        pick in any::<prop::sample::Index>(),
        blank in any::<bool>(),
    ) {
        let required: Vec<_> = section
            .fields()
            .iter()
            .filter(|f| matches!(f.requirement, Requirement::Required(_)))
            .collect();
        let spec = required[pick.index(required.len())];

        let mut values = valid_values(section);
        if blank && spec.default_value().as_text().is_some() {
            values.set(spec.name, "");
        } else {
            values.remove(spec.name);
        }

        let errors = validate_section(section, &values).unwrap_err();
        prop_assert_eq!(errors.fields().collect::<Vec<_>>(), vec![spec.name]);
        let Requirement::Required(message) = spec.requirement else { unreachable!() };
        prop_assert_eq!(errors.get(spec.name), Some(message));
    }

    #[test]
    fn prop_text_in_optional_fields_never_fails(
        section in any_section(),
        text in ".{0,24}",
    ) {
        let mut values = valid_values(section);
        for spec in section.fields().iter().filter(|f| !f.is_required()) {
            values.set(spec.name, FieldValue::Text(text.clone()));
        }
        prop_assert!(validate_section(section, &values).is_ok());
    }
}
