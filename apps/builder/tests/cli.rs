use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn hm3_build() -> Command {
    Command::cargo_bin("hm3-build").unwrap()
}

#[test]
fn missing_settings_exit_successfully() {
    let tmp = TempDir::new().unwrap();

    hm3_build()
        .arg("--root")
        .arg(tmp.path())
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stdout(predicate::str::contains("No settings found"));

    assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 0);
}

#[test]
fn builds_a_minimal_application() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    fs::write(root.join("hm3.ini"), "modules = core\n").unwrap();
    fs::create_dir_all(root.join("third_party")).unwrap();
    fs::write(root.join("third_party/zepto.min.js"), "/*z*/").unwrap();
    fs::create_dir_all(root.join("modules/core")).unwrap();
    fs::write(root.join("modules/core/site.js"), "var a = 1;\n").unwrap();
    fs::write(
        root.join("index.php"),
        "<?php define('APP_PATH', ''); define('CACHE_ID', ''); define('SITE_ID', ''); \
         define('DEBUG_MODE', true);",
    )
    .unwrap();

    hm3_build()
        .arg("--root")
        .arg(root)
        .arg("--config-map")
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stdout(predicate::str::contains("scanning module"))
        .stdout(predicate::str::contains("site.js file created"))
        .stdout(predicate::str::contains("hm3.rc file written"))
        .stdout(predicate::str::contains("creating production site"));

    assert!(root.join("hm3.rc").is_file());
    assert!(root.join("config_map.html").is_file());
    assert!(root.join("site/index.php").is_file());
}

#[test]
fn broken_setup_fails_the_build() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    fs::write(root.join("hm3.ini"), "modules = core\n").unwrap();
    fs::create_dir_all(root.join("modules/core")).unwrap();
    fs::write(root.join("modules/core/setup.toml"), "[[handler]]\npage = 1\n").unwrap();

    hm3_build()
        .arg("--root")
        .arg(root)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Build failed"));
}

#[test]
fn log_dir_receives_a_log_file() {
    let tmp = TempDir::new().unwrap();
    let logs = tmp.path().join("logs");

    hm3_build().arg("--root").arg(tmp.path()).arg("--log-dir").arg(&logs).assert().success();

    let log = fs::read_to_string(logs.join("hm3-build.log")).unwrap();
    assert!(log.contains("No settings found"));
}
