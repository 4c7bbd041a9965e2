use super::*;

#[test]
fn throttle_period_of_one_samples_every_tick() {
    let config = WatchConfig {
        throttle_period: 1,
        default_keep_alive: false,
    };

    assert!(config.validate().is_ok());
}

#[test]
fn zero_throttle_period_is_rejected() {
    let config = WatchConfig {
        throttle_period: 0,
        ..WatchConfig::default()
    };

    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("throttle_period"));
}
