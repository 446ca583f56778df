//! Export a launch description as a ROS 2 launch file

pub mod xml;
pub mod yaml;

pub use xml::to_launch_xml;
pub use yaml::to_launch_yaml;

use crate::substitution::{format_substitutions, Substitution};

/// Node arguments as a single space-separated `args` attribute
fn format_arguments(arguments: &[Vec<Substitution>]) -> String {
    arguments
        .iter()
        .map(|a| format_substitutions(a))
        .collect::<Vec<_>>()
        .join(" ")
}
