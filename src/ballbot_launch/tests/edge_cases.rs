mod common;

use ballbot_launch::ballbot::generate_launch_description;
use ballbot_launch::host::{classify_version_text, probe_host};
use ballbot_launch::{generate_record, parse_launch_arg, HostKind, LaunchError};
use std::{collections::HashMap, fs, io::Write};
use tempfile::NamedTempFile;

#[test]
fn test_empty_version_file() {
    let file = NamedTempFile::new().unwrap();
    assert_eq!(probe_host(file.path()), HostKind::Native);
}

#[test]
fn test_marker_split_across_lines_is_not_detected() {
    // Markers must appear as contiguous substrings
    assert_eq!(classify_version_text("micro\nsoft w\nsl"), HostKind::Native);
}

#[test]
fn test_marker_anywhere_in_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"Linux version 6.6.87.2\n#1 SMP PREEMPT_DYNAMIC wsl kernel\n")
        .unwrap();
    file.flush().unwrap();

    assert_eq!(probe_host(file.path()), HostKind::Wsl);
}

#[cfg(unix)]
#[test]
fn test_unreadable_file_falls_back_to_native() {
    use std::os::unix::fs::PermissionsExt;

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"Linux version 5.15 microsoft").unwrap();
    file.flush().unwrap();
    fs::set_permissions(file.path(), fs::Permissions::from_mode(0o000)).unwrap();

    // Root can still read the file; either way the probe must not fail
    let kind = probe_host(file.path());
    assert!(kind == HostKind::Native || kind == HostKind::Wsl);
}

#[test]
fn test_invalid_launch_argument_syntax() {
    let err = parse_launch_arg("task_name=mpc").unwrap_err();
    assert!(matches!(err, LaunchError::InvalidLaunchArgument(_)));
    assert!(err.to_string().contains("task_name=mpc"));
}

#[test]
fn test_empty_override_value_is_kept() {
    let dir = tempfile::tempdir().unwrap();
    let ament = common::install_ballbot_package(dir.path());
    let desc = generate_launch_description(HostKind::Native);
    let (name, value) = parse_launch_arg("task_name:=").unwrap();

    let record = generate_record(&desc, ament, HashMap::from([(name, value)])).unwrap();

    assert_eq!(record.argument("task_name").unwrap().value, "");
    for node in &record.node {
        assert_eq!(node.args, vec![""]);
    }
}

#[test]
fn test_missing_executable_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let ament = common::install_ballbot_package(dir.path());
    fs::remove_file(dir.path().join("lib/ocs2_ballbot_ros/ballbot_target")).unwrap();
    let desc = generate_launch_description(HostKind::Native);

    let err = generate_record(&desc, ament, HashMap::new()).unwrap_err();
    let err_msg = err.to_string();
    assert!(
        err_msg.contains("ballbot_target"),
        "Error should name the missing executable: {}",
        err_msg
    );
}
