use ballbot_launch::ballbot::{generate_launch_description, launch_description_for_host};
use ballbot_launch::{HostKind, LaunchEntity, OutputMode, Substitution};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_counts_independent_of_host() {
    for host in [HostKind::Wsl, HostKind::Native] {
        let desc = generate_launch_description(host);
        assert_eq!(desc.declared_arguments().count(), 2);
        assert_eq!(desc.includes().count(), 1);
        assert_eq!(desc.nodes().count(), 3);
        assert_eq!(desc.entities().len(), 6);
    }
}

#[test]
fn test_declared_argument_defaults() {
    let desc = generate_launch_description(HostKind::Native);
    let args: Vec<_> = desc
        .declared_arguments()
        .map(|a| (a.name.as_str(), a.default_value.as_str()))
        .collect();
    assert_eq!(args, vec![("rviz", "true"), ("task_name", "mpc")]);
}

#[test]
fn test_task_name_is_sole_argument_of_every_node() {
    let desc = generate_launch_description(HostKind::Wsl);
    for node in desc.nodes() {
        assert_eq!(node.package, "ocs2_ballbot_ros");
        assert_eq!(node.executable, node.name);
        assert_eq!(
            node.arguments,
            vec![vec![Substitution::LaunchConfiguration("task_name".to_string())]]
        );
        assert_eq!(node.output, OutputMode::Screen);
    }
}

#[test]
fn test_node_names_unique() {
    let desc = generate_launch_description(HostKind::Native);
    let mut names: Vec<_> = desc.nodes().map(|n| n.name.clone()).collect();
    names.sort();
    names.dedup();
    assert_eq!(
        names,
        vec!["ballbot_ddp", "ballbot_dummy_test", "ballbot_target"]
    );
}

#[test]
fn test_scenario_identification_file_absent() {
    let dir = tempfile::tempdir().unwrap();
    let (host, desc) = launch_description_for_host(&dir.path().join("version"));

    assert_eq!(host, HostKind::Native);
    assert!(host.diagnostic().contains("not WSL"));
    let prefixed: Vec<_> = desc.nodes().filter_map(|n| n.prefix.as_deref()).collect();
    assert_eq!(prefixed, vec!["gnome-terminal --", "gnome-terminal --"]);
}

#[test]
fn test_scenario_microsoft_kernel() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "Linux version 5.15.153.1-microsoft-standard-WSL2 (root@941d701f84f1) (gcc (GCC) 11.2.0)"
    )
    .unwrap();
    file.flush().unwrap();

    let (host, desc) = launch_description_for_host(file.path());

    assert_eq!(host, HostKind::Wsl);
    assert_eq!(host.diagnostic(), "Current system is WSL, use xterm as terminal");
    let prefixed: Vec<_> = desc.nodes().filter_map(|n| n.prefix.as_deref()).collect();
    assert_eq!(prefixed, vec!["xterm -e", "xterm -e"]);
}

#[test]
fn test_description_json_round_trip() {
    let desc = generate_launch_description(HostKind::Wsl);
    let json = desc.to_json().unwrap();

    let back: ballbot_launch::LaunchDescription = serde_json::from_str(&json).unwrap();
    assert_eq!(back, desc);
    assert!(matches!(back.entities()[2], LaunchEntity::Include(_)));
}
