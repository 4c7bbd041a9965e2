use super::*;

#[test]
fn index_width_bounds_are_inclusive() {
    let mut config = ConsoleConfig::default();

    config.index_width = 1;
    assert!(config.validate().is_ok());

    config.index_width = 10;
    assert!(config.validate().is_ok());
}

#[test]
fn out_of_range_index_width_is_rejected() {
    let mut config = ConsoleConfig::default();

    config.index_width = 0;
    assert!(config.validate().is_err());

    config.index_width = 11;
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("index_width 11"));
}

#[test]
fn blank_tag_is_rejected() {
    let config = ConsoleConfig {
        tag: String::new(),
        ..ConsoleConfig::default()
    };

    assert!(config.validate().is_err());
}
