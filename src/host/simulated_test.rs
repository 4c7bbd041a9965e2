use super::*;
use crate::Error;
use crate::HostError;

fn sample_host() -> SimulatedHost {
    let mut host = SimulatedHost::new();
    host.insert_target(
        TargetAddress::single(2),
        SimulatedTarget::new("3x Osc")
            .with_parameter("Osc 1 level", 0.1)
            .with_parameter("Osc 2 level", 0.5)
            .with_parameter("Osc 3 level", 0.9),
    )
    .unwrap();
    host.insert_target(
        TargetAddress::slot(1, 3),
        SimulatedTarget::new("Fruity Reeverb 2").with_display_name("Hall"),
    )
    .unwrap();
    host
}

#[test]
fn lookups_resolve_inserted_targets() {
    let host = sample_host();
    let osc = TargetAddress::single(2);

    assert!(host.target_exists(&osc));
    assert_eq!(host.parameter_count(&osc), 3);
    assert_eq!(host.parameter_value(1, &osc), 0.5);
    assert_eq!(host.parameter_name(2, &osc), "Osc 3 level");
    assert_eq!(host.canonical_name(&osc), "3x Osc");
    assert_eq!(host.display_name(&osc), "3x Osc");
}

#[test]
fn display_name_prefers_user_assigned_name() {
    let host = sample_host();
    let reverb = TargetAddress::slot(1, 3);

    assert_eq!(host.canonical_name(&reverb), "Fruity Reeverb 2");
    assert_eq!(host.display_name(&reverb), "Hall");
}

#[test]
fn unknown_addresses_answer_empty_values() {
    let host = sample_host();
    let missing = TargetAddress::single(9);

    assert!(!host.target_exists(&missing));
    assert!(!host.target_exists(&TargetAddress::slot(2, 0)));
    assert_eq!(host.parameter_count(&missing), 0);
    assert_eq!(host.parameter_value(0, &missing), 0.0);
    assert_eq!(host.parameter_name(0, &missing), "");
}

#[test]
fn set_value_updates_parameter() {
    let mut host = sample_host();
    let osc = TargetAddress::single(2);

    host.set_value(&osc, 1, 0.6).unwrap();

    assert_eq!(host.parameter_value(1, &osc), 0.6);
}

#[test]
fn set_value_rejects_unknown_target_and_index() {
    let mut host = sample_host();
    let osc = TargetAddress::single(2);

    match host.set_value(&TargetAddress::single(7), 0, 1.0) {
        Err(Error::Host(HostError::UnknownTarget(address))) => {
            assert_eq!(address, TargetAddress::single(7))
        }
        other => panic!("unexpected result: {:?}", other),
    }
    match host.set_value(&osc, 3, 1.0) {
        Err(Error::Host(HostError::ParameterOutOfRange { index, count, .. })) => {
            assert_eq!(index, 3);
            assert_eq!(count, 3);
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn duplicate_targets_are_rejected() {
    let mut host = sample_host();

    let result = host.insert_target(TargetAddress::single(2), SimulatedTarget::new("Sytrus"));

    assert!(matches!(
        result,
        Err(Error::Host(HostError::DuplicateTarget(_)))
    ));
}

#[test]
fn from_rack_file_loads_targets() {
    let temp_dir = tempfile::tempdir().unwrap();
    let rack_path = temp_dir.path().join("rack.toml");
    std::fs::write(
        &rack_path,
        r#"
        [[targets]]
        index = 0
        name = "FLEX"
        display_name = "Lead"
        params = [
            { name = "Cutoff", value = 0.25 },
            { name = "Resonance" },
        ]

        [[targets]]
        index = 1
        slot = 3
        name = "Fruity Limiter"
        "#,
    )
    .unwrap();

    let host = SimulatedHost::from_rack_file(rack_path.to_str().unwrap()).unwrap();

    let flex = TargetAddress::single(0);
    assert_eq!(host.display_name(&flex), "Lead");
    assert_eq!(host.parameter_count(&flex), 2);
    assert_eq!(host.parameter_value(0, &flex), 0.25);
    assert_eq!(host.parameter_value(1, &flex), 0.0);
    assert!(host.target_exists(&TargetAddress::slot(1, 3)));
    assert_eq!(host.addresses().count(), 2);
}

#[test]
fn remove_target_makes_address_invalid() {
    let mut host = sample_host();
    let osc = TargetAddress::single(2);

    assert!(host.remove_target(&osc).is_some());
    assert!(!host.target_exists(&osc));
}
