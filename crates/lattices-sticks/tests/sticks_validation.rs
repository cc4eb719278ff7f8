//! End-to-end validation of sticks configurations built from the packaged
//! defaults.

use lattices_core::{FailureKind, Query};
use lattices_schema::structural_report;
use lattices_sticks::{
    configure, default_configuration, is_valid, validate, validate_with, OccupancyBound,
    ValidationOptions,
    STICKS_TEMPLATE,
};
use proptest::prelude::*;
use serde_json::{json, Value};

fn defaults() -> Value {
    default_configuration().unwrap()
}

fn kind_of_failure(config: &Value) -> FailureKind {
    validate(config).unwrap_err().kind
}

#[test]
fn default_configuration_validates() {
    validate(&defaults()).unwrap();
    assert!(is_valid(&defaults()));
    assert!(structural_report(&defaults(), &STICKS_TEMPLATE).unwrap().is_empty());
}

#[test]
fn label_taller_than_box() {
    let mut config = defaults();
    config["box_label"]["height"] = json!(2.5);
    let err = validate(&config).unwrap_err();
    assert_eq!(err.kind, FailureKind::GeometryViolation);
    assert_eq!(err.path.as_deref(), Some("box_label.height"));
    assert!(err.message.contains("height"));
    assert!(!is_valid(&config));
}

#[test]
fn baseline_x_boundary() {
    let mut config = defaults();
    config["lattice"]["offsets"] = json!([0.0, 0.0]);
    config["lattice"]["position_start"] = json!([5.0, 1.0]);
    config["lattice"]["position_end"] = json!([5.0, 1.0]);
    assert_eq!(kind_of_failure(&config), FailureKind::GeometryViolation);

    config["lattice"]["position_end"] = json!([10.0, 1.0]);
    validate(&config).unwrap();
}

#[test]
fn occupancy_on_five_ticks() {
    let mut config = defaults();
    config["lattice_parameters"] = json!({
        "nmers": 1,
        "nticks": 5,
        "adsorbing": [0, 4],
        "desorbing": [],
        "fixed": [],
        "jumping": [],
    });
    validate(&config).unwrap();

    config["lattice_parameters"]["adsorbing"] = json!([5]);
    assert_eq!(kind_of_failure(&config), FailureKind::ValueOutOfRange);

    config["lattice_parameters"]["adsorbing"] = json!([1, 1]);
    assert_eq!(kind_of_failure(&config), FailureKind::UniquenessViolation);
}

#[test]
fn large_distinct_indices_are_unique() {
    let big = 1u64 << 53;
    let mut config = defaults();
    config["lattice_parameters"]["nticks"] = json!(big + 3);
    config["lattice_parameters"]["adsorbing"] = json!([big, big + 1]);
    validate(&config).unwrap();

    config["lattice_parameters"]["adsorbing"] = json!([big + 1, big + 1]);
    assert_eq!(kind_of_failure(&config), FailureKind::UniquenessViolation);
}

#[test]
fn chain_policy_through_options() {
    let mut config = defaults();
    config["lattice_parameters"]["fixed"] = json!([9]);
    validate(&config).unwrap();

    let options = ValidationOptions::default().with_occupancy_bound(OccupancyBound::Chain);
    let err = validate_with(&config, &options).unwrap_err();
    assert_eq!(err.kind, FailureKind::ValueOutOfRange);
    assert_eq!(err.path.as_deref(), Some("lattice_parameters.fixed"));
}

#[test]
fn schema_runs_before_domain_checks() {
    let mut config = defaults();
    config["box"]["width"] = json!(-3);
    config["lattice_elements"]["vacancies_visible"] = json!("yes");
    assert_eq!(kind_of_failure(&config), FailureKind::TypeMismatch);
}

#[test]
fn sections_checked_in_order() {
    let mut config = defaults();
    config["lattice_parameters"]["nmers"] = json!(0);
    config["lattice"]["vertical_spacing"] = json!(-1.0);
    let err = validate(&config).unwrap_err();
    assert_eq!(err.path.as_deref(), Some("lattice.vertical_spacing"));
}

#[test]
fn bool_is_not_a_number() {
    let mut config = defaults();
    config["box"]["height"] = json!(true);
    assert_eq!(kind_of_failure(&config), FailureKind::TypeMismatch);
}

#[test]
fn configure_end_to_end() {
    let merged = configure(&json!({
        "box": {"width": 20.0},
        "lattice": {"position_end": [19.5, 1.0]},
        "lattice_parameters": {"nticks": 20, "adsorbing": [15, 3]},
    }))
    .unwrap();
    assert_eq!(merged["lattice_parameters"]["nticks"], 20);
    assert!(validate(&merged).holds());
}

#[test]
fn report_lists_every_structural_problem() {
    let mut config = defaults();
    config["box"]["height"] = json!("tall");
    config["lattice_elements"]["vacancies_visible"] = json!(1);
    config["box_label"].as_object_mut().unwrap().remove("width");
    let report = structural_report(&config, &STICKS_TEMPLATE).unwrap();
    assert!(report.len() >= 3, "{report}");
    assert!(validate(&config).is_err());
}

fn leaf_paths() -> Vec<(&'static str, &'static str)> {
    STICKS_TEMPLATE
        .sections
        .iter()
        .flat_map(|s| s.fields.iter().map(move |f| (s.name, f.name)))
        .collect()
}

#[test]
fn removing_any_leaf_is_key_mismatch() {
    for (section, field) in leaf_paths() {
        let mut config = defaults();
        config[section].as_object_mut().unwrap().remove(field);
        let err = validate(&config).unwrap_err();
        assert_eq!(err.kind, FailureKind::SchemaKeyMismatch, "{section}.{field}");
        assert_eq!(err.path.as_deref(), Some(section));
    }
}

#[test]
fn adding_any_key_is_key_mismatch() {
    for section in STICKS_TEMPLATE.sections {
        let mut config = defaults();
        config[section.name]["unexpected"] = json!(0);
        assert_eq!(kind_of_failure(&config), FailureKind::SchemaKeyMismatch);
    }
    let mut config = defaults();
    config["legend"] = json!({});
    assert_eq!(kind_of_failure(&config), FailureKind::SchemaKeyMismatch);
}

#[test]
fn string_in_any_typed_leaf_is_type_mismatch() {
    for (section, field) in leaf_paths() {
        let mut config = defaults();
        config[section][field] = json!("text");
        let err = validate(&config).unwrap_err();
        assert_eq!(err.kind, FailureKind::TypeMismatch, "{section}.{field}");
        assert_eq!(err.path, Some(format!("{section}.{field}")));
    }
}

proptest! {
    #[test]
    fn label_fits_iff_no_larger_than_box(height in 0.0f64..4.0, width in 0.0f64..20.0) {
        let mut config = defaults();
        config["box_label"]["height"] = json!(height);
        config["box_label"]["width"] = json!(width);
        let fits = height <= 2.0 && width <= 10.0;
        prop_assert_eq!(is_valid(&config), fits);
        if !fits {
            prop_assert_eq!(kind_of_failure(&config), FailureKind::GeometryViolation);
        }
    }

    #[test]
    fn occupancy_index_in_range(index in -5i64..20) {
        let mut config = defaults();
        config["lattice_parameters"]["desorbing"] = json!([index]);
        prop_assert_eq!(is_valid(&config), (0..10).contains(&index));
    }
}
