use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use quickrun_core::config::{self, Config, ConfigError, DEFAULT_HISTORY_LIMIT};

fn unique_temp_path(label: &str) -> PathBuf {
    let unique = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be after unix epoch")
        .as_nanos();
    std::env::temp_dir().join(format!(
        "quickrun-{label}-{}-{unique}",
        std::process::id()
    ))
}

#[test]
fn accepts_default_config() {
    let cfg = Config::default();
    assert_eq!(cfg.history_limit, DEFAULT_HISTORY_LIMIT);
    assert_eq!(cfg.history_limit, 200);
    assert_eq!(cfg.file_manager, "dolphin");
    assert_eq!(cfg.shell, "bash");
    assert!(cfg.history_path.to_string_lossy().contains("quickrun"));
    assert!(cfg.config_path.to_string_lossy().contains("quickrun"));
    assert!(config::validate(&cfg).is_ok());
}

#[test]
fn rejects_history_limit_out_of_range() {
    let cfg = Config {
        history_limit: 0,
        ..Default::default()
    };
    assert!(config::validate(&cfg).is_err());

    let cfg = Config {
        history_limit: 201,
        ..Default::default()
    };
    assert!(config::validate(&cfg).is_err());

    let cfg = Config {
        history_limit: 5_000,
        ..Default::default()
    };
    assert!(config::validate(&cfg).is_err());

    let cfg = Config {
        history_limit: 200,
        ..Default::default()
    };
    assert!(config::validate(&cfg).is_ok());
}

#[test]
fn rejects_blank_programs() {
    let cfg = Config {
        shell: "  ".to_string(),
        ..Default::default()
    };
    assert!(config::validate(&cfg).is_err());
}

#[test]
fn missing_file_loads_defaults_at_that_path() {
    let path = unique_temp_path("config-missing").join("config.toml");

    let cfg = config::load(Some(&path)).unwrap();

    assert_eq!(cfg.config_path, path);
    assert_eq!(cfg.history_limit, 200);
}

#[test]
fn partial_file_keeps_other_defaults() {
    let dir = unique_temp_path("config-partial");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("config.toml");
    std::fs::write(&path, "shell = \"zsh\"\nhistory_limit = 50\n").unwrap();

    let cfg = config::load(Some(&path)).unwrap();

    assert_eq!(cfg.shell, "zsh");
    assert_eq!(cfg.history_limit, 50);
    assert_eq!(cfg.file_manager, "dolphin");
    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn malformed_file_is_a_parse_error() {
    let dir = unique_temp_path("config-bad");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("config.toml");
    std::fs::write(&path, "history_limit = \"many\"").unwrap();

    let result = config::load(Some(&path));

    assert!(matches!(result, Err(ConfigError::Parse { .. })));
    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn history_limit_above_cap_is_rejected_on_load() {
    let dir = unique_temp_path("config-cap");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("config.toml");
    std::fs::write(&path, "history_limit = 5000").unwrap();

    let result = config::load(Some(&path));

    assert!(matches!(result, Err(ConfigError::Invalid(_))));
    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn invalid_values_are_rejected_on_load() {
    let dir = unique_temp_path("config-invalid");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("config.toml");
    std::fs::write(&path, "history_limit = 0").unwrap();

    let result = config::load(Some(&path));

    assert!(matches!(result, Err(ConfigError::Invalid(_))));
    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn saved_config_loads_back() {
    let dir = unique_temp_path("config-save");
    let cfg = Config {
        config_path: dir.join("nested").join("config.toml"),
        history_path: dir.join("history.txt"),
        file_manager: "thunar".to_string(),
        ..Config::default()
    };

    config::save(&cfg).unwrap();
    let loaded = config::load(Some(&cfg.config_path)).unwrap();

    assert_eq!(loaded, cfg);
    std::fs::remove_dir_all(&dir).unwrap();
}
