#![cfg(unix)]

use serial_test::serial;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::tempdir;
use tensile_toolchain::{
    Error, OsFamily, Resolver, SearchPath, ToolVersion, ToolchainDefaults, VendorDirs, VersionQuery,
    version,
};

fn script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

#[test]
#[serial]
fn test_default_query() {
    let dir = tempdir().unwrap();
    let exe = script(
        dir.path(),
        "amdclang++",
        r#"echo "AMD clang version 17.0.2 (https://github.com/RadeonOpenCompute/llvm-project roc-6.1.2)"
echo "Target: x86_64-unknown-linux-gnu""#,
    );

    assert_eq!(version(&exe).unwrap(), ToolVersion::Known("17.0.2".into()));
}

#[test]
#[serial]
fn test_no_version_token_is_unknown() {
    let dir = tempdir().unwrap();
    let exe = script(dir.path(), "hipconfig", "echo 'HIP runtime'");

    let v = version(&exe).unwrap();
    assert_eq!(v, ToolVersion::Unknown);
    assert_eq!(v.to_string(), "<unknown>");
}

#[test]
#[serial]
fn test_exit_status_is_ignored() {
    let dir = tempdir().unwrap();
    let exe = script(dir.path(), "amdclang", "echo 'clang version 18.0.0'\nexit 3");

    assert_eq!(version(&exe).unwrap().as_str(), "18.0.0");
}

#[test]
#[serial]
fn test_stderr_is_not_scraped() {
    let dir = tempdir().unwrap();
    let exe = script(dir.path(), "amdclang", "echo 'clang version 18.0.0' >&2");

    assert_eq!(version(&exe).unwrap(), ToolVersion::Unknown);
}

#[test]
#[serial]
fn test_custom_flag_and_pattern() {
    let dir = tempdir().unwrap();
    let exe = script(
        dir.path(),
        "hipconfig",
        r#"if [ "$1" = "--version" ]; then echo "6.1.40093-bd86f1708"; else echo "usage"; fi"#,
    );

    let query = VersionQuery::new().pattern(r"^(\d+\.\d+)").unwrap();
    assert_eq!(query.query(&exe).unwrap().as_str(), "6.1");

    let wrong_flag = query.clone().flag("--help");
    assert_eq!(wrong_flag.query(&exe).unwrap(), ToolVersion::Unknown);
}

#[test]
#[serial]
fn test_flag_is_not_shell_interpreted() {
    let dir = tempdir().unwrap();
    let marker = dir.path().join("marker");
    let exe = script(dir.path(), "amdclang", r#"echo "version 1.0 $1""#);

    let flag = format!("--version; touch {}", marker.display());
    let v = VersionQuery::new().flag(flag).query(&exe).unwrap();
    assert_eq!(v.as_str(), "1.0");
    assert!(!marker.exists());
}

#[test]
#[serial]
fn test_missing_executable_is_query_error() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("amdclang++");

    let err = version(&missing).unwrap_err();
    let Error::VersionQuery { command, .. } = &err else {
        panic!("unexpected error: {err}");
    };
    assert!(command.contains(&missing.display().to_string()));
    assert!(command.contains("--version"));
}

#[test]
#[serial]
fn test_non_utf8_output_is_query_error() {
    let dir = tempdir().unwrap();
    let exe = script(dir.path(), "amdclang", r"printf 'version 1.0 \377\n'");

    let err = version(&exe).unwrap_err();
    assert!(matches!(err, Error::VersionQuery { .. }));
}

#[test]
#[serial]
fn test_resolve_then_query() {
    let dir = tempdir().unwrap();
    script(dir.path(), "amdclang++", "echo 'clang version 17.0.6'");

    let vendor = VendorDirs {
        primary: dir.path().join("rocm/bin"),
        llvm:    dir.path().join("rocm/lib/llvm/bin"),
    };
    let defaults = ToolchainDefaults::for_family(OsFamily::Posix);
    let search = SearchPath::new(OsFamily::Posix, &vendor, Some(dir.path().as_os_str()));
    let cxx = Resolver::new(defaults, search).resolve_one(defaults.cxx_compiler).unwrap();

    assert_eq!(cxx, dir.path().join("amdclang++"));
    assert_eq!(version(&cxx).unwrap().as_str(), "17.0.6");
}
