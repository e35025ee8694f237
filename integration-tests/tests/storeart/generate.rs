use super::SMALL_CONFIG;
use crate::storeart_cmd;
use image::GenericImageView;
use integration_tests::Workdir;
use maplit::btreeset;

#[test]
fn should_generate_icons_and_screenshots_by_default() {
    let workdir = Workdir::new()
        .with_file("storeart.toml", SMALL_CONFIG)
        .with_transparent_source("icon.png", 256);

    storeart_cmd(&workdir).assert().success();

    assert_eq!(
        workdir.output_files(),
        btreeset! {
            "acme_app_icon_64x64.png".to_owned(),
            "acme_app_icon_16x16_mdpi.png".to_owned(),
            "acme_phone_screenshot_1.png".to_owned(),
            "acme_phone_screenshot_2.png".to_owned(),
            "acme_tablet_screenshot_1.png".to_owned(),
        }
    );
    assert_eq!(
        workdir.output_image("acme_app_icon_64x64.png").dimensions(),
        (64, 64)
    );
    assert_eq!(
        workdir.output_image("acme_tablet_screenshot_1.png").dimensions(),
        (153, 204)
    );
}

#[test]
fn should_report_each_file_and_summaries() {
    let workdir = Workdir::new()
        .with_file("storeart.toml", SMALL_CONFIG)
        .with_transparent_source("icon.png", 128);

    let output = storeart_cmd(&workdir).arg("all").output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Loaded source icon.png (128x128)"), "{}", stdout);
    assert!(stdout.contains("[OK] acme_app_icon_64x64.png (64x64)"), "{}", stdout);
    assert!(stdout.contains("[OK] acme_phone_screenshot_2.png (108x192)"), "{}", stdout);
    assert!(stdout.contains("  Phone (2 screenshots):"), "{}", stdout);
    assert!(stdout.contains("  Tablet (1 screenshot):"), "{}", stdout);
    assert!(stdout.contains("Done: 5 files"), "{}", stdout);
}

#[test]
fn should_generate_only_icons() {
    let workdir = Workdir::new()
        .with_file("storeart.toml", SMALL_CONFIG)
        .with_opaque_source("icon.png", 100, 100);

    storeart_cmd(&workdir).arg("icons").assert().success();

    assert_eq!(
        workdir.output_files(),
        btreeset! {
            "acme_app_icon_64x64.png".to_owned(),
            "acme_app_icon_16x16_mdpi.png".to_owned(),
        }
    );
}

#[test]
fn should_center_icon_on_opaque_screenshot() {
    let workdir = Workdir::new()
        .with_file("storeart.toml", SMALL_CONFIG)
        .with_transparent_source("icon.png", 240);

    storeart_cmd(&workdir).arg("screenshots").assert().success();

    let screenshot = workdir.output_image("acme_phone_screenshot_1.png");
    assert_eq!(screenshot.dimensions(), (108, 192));
    assert!(!screenshot.color().has_alpha());
    let screenshot = screenshot.to_rgb8();
    // corners show the background, the disc sits at the canvas center
    assert_eq!(screenshot.get_pixel(0, 0).0, [168, 77, 54]);
    assert_eq!(screenshot.get_pixel(14, 56).0, [168, 77, 54]);
    assert_eq!(screenshot.get_pixel(54, 96).0, [240, 240, 240]);
}

#[test]
fn should_use_separate_screenshot_source() {
    let config = SMALL_CONFIG.replace(
        "[screenshots]",
        "[screenshots]\n    source = \"feature.png\"",
    );
    let workdir = Workdir::new()
        .with_file("storeart.toml", config)
        .with_opaque_source("feature.png", 300, 200);

    storeart_cmd(&workdir).arg("screenshots").assert().success();

    assert_eq!(workdir.output_files().len(), 3);
}

#[test]
fn should_write_identical_files_on_rerun() {
    let workdir = Workdir::new()
        .with_file("storeart.toml", SMALL_CONFIG)
        .with_transparent_source("icon.png", 200);

    storeart_cmd(&workdir).assert().success();
    let first: Vec<_> = workdir
        .output_files()
        .iter()
        .map(|name| workdir.output_bytes(name))
        .collect();
    storeart_cmd(&workdir).arg("--parallel").assert().success();
    let second: Vec<_> = workdir
        .output_files()
        .iter()
        .map(|name| workdir.output_bytes(name))
        .collect();

    assert_eq!(first, second);
}

#[test]
fn should_abort_without_output_for_missing_source() {
    let workdir = Workdir::new().with_file("storeart.toml", SMALL_CONFIG);

    storeart_cmd(&workdir).assert().failure();

    assert!(!workdir.output_dir().exists());
}

#[test]
fn should_abort_without_output_for_corrupt_source() {
    let workdir = Workdir::new()
        .with_file("storeart.toml", SMALL_CONFIG)
        .with_file("icon.png", b"definitely not an image");

    storeart_cmd(&workdir).assert().failure();

    assert!(workdir.output_files().is_empty());
}

#[test]
fn should_not_write_icons_when_screenshot_source_is_missing() {
    let config = SMALL_CONFIG.replace(
        "[screenshots]",
        "[screenshots]\n    source = \"missing.png\"",
    );
    let workdir = Workdir::new()
        .with_file("storeart.toml", config)
        .with_opaque_source("icon.png", 64, 64);

    storeart_cmd(&workdir).arg("all").assert().failure();

    assert!(workdir.output_files().is_empty());
}

#[test]
fn should_override_source_and_product_from_command_line() {
    let workdir = Workdir::new()
        .with_file("storeart.toml", SMALL_CONFIG)
        .with_opaque_source("other.png", 50, 50);

    storeart_cmd(&workdir)
        .args(["icons", "--source", "other.png", "--product", "demo"])
        .assert()
        .success();

    assert_eq!(
        workdir.output_files(),
        btreeset! {
            "demo_app_icon_64x64.png".to_owned(),
            "demo_app_icon_16x16_mdpi.png".to_owned(),
        }
    );
}

#[test]
fn should_report_files_written_before_a_failure() {
    let workdir = Workdir::new()
        .with_file("storeart.toml", SMALL_CONFIG)
        .with_opaque_source("icon.png", 64, 64);
    std::fs::create_dir_all(workdir.output_dir().join("acme_app_icon_16x16_mdpi.png")).unwrap();

    let output = storeart_cmd(&workdir).arg("icons").output().unwrap();

    assert!(!output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("[OK] acme_app_icon_64x64.png (64x64)"), "{}", stdout);
    assert!(!stdout.contains("Done:"), "{}", stdout);
}
