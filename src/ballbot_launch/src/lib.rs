//! ballbot_launch library
//!
//! Builds the launch description for the OCS2 ballbot DDP example and
//! resolves or exports it for a ROS 2 launch host.

pub mod actions;
pub mod ament;
pub mod ballbot;
pub mod description;
pub mod error;
pub mod export;
pub mod host;
pub mod record;
pub mod substitution;

pub use actions::{DeclareArgumentAction, IncludeAction, NodeAction, OutputMode};
pub use ament::AmentIndex;
pub use description::{LaunchDescription, LaunchEntity};
pub use error::{GenerationError, LaunchError, Result};
pub use host::HostKind;
pub use record::{CommandGenerator, RecordJson};
pub use substitution::{LaunchContext, Substitution};

use std::collections::HashMap;

/// Resolve `description` with `name:=value` overrides against `ament`.
pub fn generate_record(
    description: &LaunchDescription,
    ament: AmentIndex,
    cli_args: HashMap<String, String>,
) -> Result<RecordJson> {
    let context = LaunchContext::with_launch_args(ament, cli_args);
    Ok(CommandGenerator::generate(description, &context)?)
}

/// Parse a `name:=value` launch argument.
pub fn parse_launch_arg(s: &str) -> Result<(String, String)> {
    match s.split_once(":=") {
        Some((name, value)) if !name.is_empty() && !value.contains(":=") => {
            Ok((name.to_string(), value.to_string()))
        }
        _ => Err(LaunchError::InvalidLaunchArgument(s.to_string())),
    }
}
