//! Launch description for the OCS2 ballbot DDP example
//!
//! Declares the `rviz` and `task_name` arguments, includes the ballbot
//! visualization launch file and starts the DDP controller, the dummy
//! simulator and the target command node. The last two are opened in a
//! terminal of their own, chosen by probing the host.

use crate::actions::{DeclareArgumentAction, IncludeAction, NodeAction, OutputMode};
use crate::description::LaunchDescription;
use crate::host::{probe_host, HostKind};
use crate::substitution::Substitution;
use std::path::Path;

pub const PACKAGE: &str = "ocs2_ballbot_ros";
pub const VISUALIZE_LAUNCH_FILE: &str = "launch/visualize.launch.py";

pub const RVIZ_ARG: &str = "rviz";
pub const RVIZ_DEFAULT: &str = "true";
pub const TASK_NAME_ARG: &str = "task_name";
pub const TASK_NAME_DEFAULT: &str = "mpc";

pub const MPC_NODE: &str = "ballbot_ddp";
pub const DUMMY_NODE: &str = "ballbot_dummy_test";
pub const TARGET_NODE: &str = "ballbot_target";

/// Build the launch description for the given host.
pub fn generate_launch_description(host: HostKind) -> LaunchDescription {
    let prefix = host.terminal_prefix();
    let task_name = || vec![Substitution::var(TASK_NAME_ARG)];

    let visualize = IncludeAction::new(vec![Substitution::PathJoin(vec![
        vec![Substitution::FindPackageShare(PACKAGE.to_string())],
        vec![Substitution::text(VISUALIZE_LAUNCH_FILE)],
    ])])
    .with_arg("use_joint_state_publisher", vec![Substitution::text("false")]);

    LaunchDescription::new(vec![
        DeclareArgumentAction::new(RVIZ_ARG, RVIZ_DEFAULT).into(),
        DeclareArgumentAction::new(TASK_NAME_ARG, TASK_NAME_DEFAULT).into(),
        visualize.into(),
        NodeAction::new(PACKAGE, MPC_NODE, MPC_NODE)
            .with_argument(task_name())
            .with_output(OutputMode::Screen)
            .into(),
        NodeAction::new(PACKAGE, DUMMY_NODE, DUMMY_NODE)
            .with_prefix(prefix)
            .with_argument(task_name())
            .with_output(OutputMode::Screen)
            .into(),
        NodeAction::new(PACKAGE, TARGET_NODE, TARGET_NODE)
            .with_prefix(prefix)
            .with_argument(task_name())
            .with_output(OutputMode::Screen)
            .into(),
    ])
}

/// Probe the host identification file and build the description for it.
///
/// Returns the host classification alongside so callers can report the
/// terminal decision.
pub fn launch_description_for_host(proc_version: &Path) -> (HostKind, LaunchDescription) {
    let host = probe_host(proc_version);
    log::debug!("{}", host.diagnostic());
    (host, generate_launch_description(host))
}
