use super::SMALL_CONFIG;
use crate::storeart_cmd;
use assert_cmd::Command;
use integration_tests::Workdir;
use storeart_core::config::Config;

#[test]
fn should_print_effective_config_with_overrides() {
    let workdir = Workdir::new().with_file("storeart.toml", SMALL_CONFIG);

    let output = storeart_cmd(&workdir)
        .args(["config", "--background", "#000000"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let config = Config::parse(&String::from_utf8(output.stdout).unwrap()).unwrap();
    assert_eq!(config.product, "acme");
    assert_eq!(config.output_dir, workdir.output_dir());
    assert_eq!(config.screenshots.background.to_string(), "#000000");
    assert_eq!(config.screenshots.devices.len(), 2);
}

#[test]
fn should_plan_without_reading_source_or_writing_files() {
    let workdir = Workdir::new().with_file("storeart.toml", SMALL_CONFIG);

    let output = storeart_cmd(&workdir).arg("plan").output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("acme_app_icon_16x16_mdpi.png"), "{}", stdout);
    assert!(stdout.contains("153x204, icon 120x120 at (16, 42)"), "{}", stdout);
    assert!(!workdir.output_dir().exists());
}

#[test]
fn should_use_built_in_defaults_for_empty_config() {
    let workdir = Workdir::new().with_file("storeart.toml", "");

    let output = storeart_cmd(&workdir).arg("config").output().unwrap();

    let config = Config::parse(&String::from_utf8(output.stdout).unwrap()).unwrap();
    assert_eq!(config.product, "indira");
    assert_eq!(config.icons.len(), 7);
    assert_eq!(config.screenshot_targets().len(), 6);
}

#[test]
fn should_prefer_config_string() {
    let workdir = Workdir::new();

    let output = storeart_cmd(&workdir)
        .env("STOREART_CONFIG", "product = \"inline\"")
        .arg("config")
        .output()
        .unwrap();

    assert!(output.status.success());
    let config = Config::parse(&String::from_utf8(output.stdout).unwrap()).unwrap();
    assert_eq!(config.product, "inline");
}

#[test]
fn should_fail_for_missing_explicit_config_file() {
    let workdir = Workdir::new();

    storeart_cmd(&workdir).arg("config").assert().failure();
}

#[test]
fn should_reject_duplicate_targets_before_writing() {
    let config = SMALL_CONFIG.replace("size = 16\n    qualifier = \"mdpi\"", "size = 64");
    let workdir = Workdir::new()
        .with_file("storeart.toml", config)
        .with_opaque_source("icon.png", 64, 64);

    storeart_cmd(&workdir).assert().failure();

    assert!(workdir.output_files().is_empty());
}

#[test]
fn should_print_version_without_config() {
    let workdir = Workdir::new();

    let output = storeart_cmd(&workdir).arg("version").output().unwrap();

    assert!(output.status.success());
    assert!(String::from_utf8(output.stdout)
        .unwrap()
        .starts_with("storeart: "));
}

#[test]
fn should_resolve_relative_paths_against_working_directory() {
    let workdir = Workdir::new().with_opaque_source("icon.png", 64, 64);
    std::fs::create_dir(workdir.path().join("conf")).unwrap();
    std::fs::write(workdir.path().join("conf/storeart.toml"), SMALL_CONFIG).unwrap();

    Command::cargo_bin("test-storeart")
        .unwrap()
        .current_dir(workdir.path())
        .env_remove("STOREART_CONFIG")
        .env_remove("STOREART_CONFIG_FILE")
        .args(["--config-file", "conf/storeart.toml", "icons", "--output-dir", "out"])
        .assert()
        .success();

    assert_eq!(workdir.output_files().len(), 2);
    assert!(!workdir.path().join("conf/out").exists());
}
