mod common;

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn bin() -> Command {
    let mut cmd = Command::cargo_bin("kodegen_bundler_electron").unwrap();
    cmd.env("RUST_LOG", "warn").env_remove("KODEGEN_ELECTRON_CONFIG");
    cmd
}

#[test]
fn help_describes_the_tool() {
    bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--bundle-identifier"))
        .stdout(predicate::str::contains("--binaries-dir"));
}

#[test]
fn stages_linux_runtime_and_prints_json_report() {
    let dir = tempdir().unwrap();
    common::runtime(dir.path(), "linux");
    common::sources(dir.path());

    bin()
        .current_dir(dir.path())
        .args([
            "--platform",
            "linux",
            "--arch",
            "x64",
            "--src-dir",
            "dev",
            "--build-dir",
            "staging",
            "--binaries-dir",
            "binaries",
            "--name",
            "my-app",
            "--json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""platform": "linux""#))
        .stdout(predicate::str::contains(r#""name": "my-app""#))
        .stdout(predicate::str::contains(r#""checksum""#));

    let out = dir.path().join("staging");
    assert!(out.join("my-app").is_file());
    assert!(!out.join("electron").exists());
    assert!(out.join("resources/app/package.json").is_file());
}

#[test]
fn default_directories_are_relative_to_working_directory() {
    let dir = tempdir().unwrap();
    common::runtime(dir.path(), "win32");
    fs::create_dir_all(dir.path().join("electron")).unwrap();
    fs::rename(dir.path().join("binaries"), dir.path().join("electron/binaries")).unwrap();
    let dev = common::sources(dir.path());
    fs::create_dir_all(dir.path().join("build")).unwrap();
    fs::rename(&dev, dir.path().join("build/dev")).unwrap();

    bin()
        .current_dir(dir.path())
        .args(["--platform", "win32", "--arch", "ia32"])
        .assert()
        .success()
        .stdout(predicate::str::contains("executable:"));

    let out = dir.path().join("build/staging");
    assert!(out.join("electron.exe").is_file());
    assert!(out.join("resources/app/main.js").is_file());
    assert!(!out.join("resources/default_app").exists());
}

#[test]
fn config_file_paths_resolve_against_its_directory() {
    let dir = tempdir().unwrap();
    let project = dir.path().join("project");
    common::runtime(&project, "darwin");
    common::sources(&project);
    fs::create_dir_all(project.join("assets")).unwrap();
    fs::write(project.join("assets/MyApp.icns"), b"icon").unwrap();
    fs::write(
        project.join("electron.toml"),
        r#"
platform = "darwin"
arch = "x64"
src_dir = "dev"
build_dir = "staging"
binaries_dir = "binaries"
name = "MyApp"

[platform_resources.darwin]
icon = "assets/MyApp.icns"
bundle_identifier = "com.example.myapp"
"#,
    )
    .unwrap();

    bin()
        .current_dir(dir.path())
        .args(["--config", "project/electron.toml"])
        .assert()
        .success();

    let resources = project.join("staging/MyApp.app/Contents/Resources");
    assert!(resources.join("MyApp.icns").is_file());
    assert!(!resources.join("atom.icns").exists());
    assert!(project.join("staging/MyApp.app/Contents/MacOS/MyApp").is_file());
}

#[test]
fn flags_override_config_values() {
    let dir = tempdir().unwrap();
    common::runtime(dir.path(), "linux");
    common::sources(dir.path());
    fs::write(
        dir.path().join("electron.toml"),
        "platform = \"linux\"\narch = \"x64\"\nsrc_dir = \"dev\"\nbinaries_dir = \"binaries\"\nbuild_dir = \"from-config\"\n",
    )
    .unwrap();

    bin()
        .current_dir(dir.path())
        .args(["--config", "electron.toml", "--build-dir", "from-flag"])
        .assert()
        .success();

    assert!(dir.path().join("from-flag/electron").is_file());
    assert!(!dir.path().join("from-config").exists());
}

#[test]
fn missing_binaries_exit_non_zero_with_tagged_error() {
    let dir = tempdir().unwrap();
    common::sources(dir.path());

    bin()
        .current_dir(dir.path())
        .args(["--platform", "linux", "--arch", "x64", "--src-dir", "dev"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("[kodegen_bundler_electron]"))
        .stderr(predicate::str::contains("binaries directory"));

    assert!(!dir.path().join("build/staging").exists());
}

#[test]
fn unsupported_platform_is_rejected() {
    let dir = tempdir().unwrap();

    bin()
        .current_dir(dir.path())
        .args(["--platform", "amiga"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Only darwin, linux or win32 platforms are supported",
        ));
}

#[test]
fn named_darwin_bundle_without_identifier_is_rejected() {
    let dir = tempdir().unwrap();

    bin()
        .current_dir(dir.path())
        .args(["--platform", "darwin", "--arch", "x64", "--name", "MyApp"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("bundle_identifier is required"));
}
