use std::env;
use std::fs;

use serial_test::serial;
use tempfile::TempDir;

use super::settings::Settings;
use super::{load_config, load_config_from};

#[test]
fn test_default_settings() {
    let settings = Settings::default();
    assert_eq!(settings.shell.prompt, "> ");
    assert_eq!(settings.logging.level, "warn");
}

#[test]
#[serial]
fn load_config_without_sources_uses_defaults() {
    let tmp = TempDir::new().expect("create tempdir");
    let orig = env::current_dir().expect("current_dir");
    env::set_current_dir(tmp.path()).expect("set current dir");

    let cfg = temp_env::with_vars_unset(["TOPICREG_LOGGING__LEVEL", "TOPICREG_SHELL__PROMPT"], load_config);

    env::set_current_dir(orig).expect("restore cwd");
    assert_eq!(cfg.expect("load_config failed"), Settings::default());
}

#[test]
#[serial]
fn load_config_from_file_overrides_defaults() {
    // load_config picks up config/default.toml relative to the current dir
    let tmp = TempDir::new().expect("create tempdir");
    let orig = env::current_dir().expect("current_dir");
    env::set_current_dir(tmp.path()).expect("set current dir");

    fs::create_dir_all("config").expect("create config dir");
    let toml = r#"
        [shell]
        prompt = "topicreg> "
    "#;
    fs::write("config/default.toml", toml).expect("write config file");

    let cfg = temp_env::with_var_unset("TOPICREG_LOGGING__LEVEL", load_config);

    env::set_current_dir(orig).expect("restore cwd");

    let cfg = cfg.expect("load_config failed");
    assert_eq!(cfg.shell.prompt, "topicreg> ");
    // absent from the file, so the default survives
    assert_eq!(cfg.logging.level, "warn");
}

#[test]
#[serial]
fn env_overrides_file() {
    let tmp = TempDir::new().expect("create tempdir");
    let path = tmp.path().join("custom.toml");
    fs::write(
        &path,
        r#"
        [logging]
        level = "info"
        "#,
    )
    .expect("write config file");

    let cfg = temp_env::with_var("TOPICREG_LOGGING__LEVEL", Some("debug"), || {
        load_config_from(Some(path.as_path()))
    })
    .expect("load_config_from failed");

    assert_eq!(cfg.logging.level, "debug");
    assert_eq!(cfg.shell.prompt, "> ");
}

#[test]
#[serial]
fn explicit_missing_file_is_an_error() {
    let tmp = TempDir::new().expect("create tempdir");
    let missing = tmp.path().join("nope.toml");
    assert!(load_config_from(Some(missing.as_path())).is_err());
}
