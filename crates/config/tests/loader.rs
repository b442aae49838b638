use config::{ConfigError, TaskConfig};
use std::fs;

fn default_config() -> TaskConfig {
    let json = fs::read_to_string("tests/data/default.json").unwrap();
    json.parse().unwrap()
}

#[test]
fn parse_default_config() {
    let cfg = default_config();
    assert_eq!(cfg.environment.seed, 7);
    assert_eq!(cfg.environment.obstacle_height_range, [0.02, 0.18]);
    assert_eq!(cfg.priors.footstep_horizon, 16);
    assert_eq!(cfg.curriculum.stages.len(), 3);
    assert_eq!(cfg.curriculum.stages[1].max_count, 4);
    assert_eq!(cfg.training.log_every, 10);
}

#[test]
fn load_from_path_matches_parse() {
    let cfg = TaskConfig::load("tests/data/default.json").unwrap();
    assert_eq!(cfg, default_config());
}

#[test]
fn missing_file_is_io_error() {
    let err = TaskConfig::load("tests/data/does_not_exist.json").unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }), "{err}");
}

#[test]
fn missing_section_is_parse_error() {
    let err = TaskConfig::load("tests/data/missing_reward.json").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)), "{err}");
}

#[test]
fn inverted_range_is_rejected() {
    let mut cfg = default_config();
    cfg.environment.obstacle_width_range = [0.8, 0.3];
    let err = cfg.validate().unwrap_err();
    assert!(
        matches!(err, ConfigError::Invalid { field: "environment.obstacle_width_range", .. }),
        "{err}"
    );
}

#[test]
fn degenerate_range_is_accepted() {
    let mut cfg = default_config();
    cfg.environment.obstacle_height_range = [0.1, 0.1];
    assert!(cfg.validate().is_ok());
}

#[test]
fn empty_stages_are_rejected() {
    let mut cfg = default_config();
    cfg.curriculum.stages.clear();
    let err = cfg.validate().unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { field: "curriculum.stages", .. }), "{err}");
}

#[test]
fn zero_log_every_is_rejected() {
    let mut cfg = default_config();
    cfg.training.log_every = 0;
    assert!(matches!(
        cfg.validate(),
        Err(ConfigError::Invalid { field: "training.log_every", .. })
    ));
}

#[test]
fn short_spawn_area_is_rejected() {
    let mut cfg = default_config();
    cfg.environment.spawn_area = [1.0, 0.2];
    assert!(matches!(
        cfg.validate(),
        Err(ConfigError::Invalid { field: "environment.spawn_area", .. })
    ));
}

