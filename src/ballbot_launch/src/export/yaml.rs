//! YAML launch file writer

use super::format_arguments;
use crate::actions::{DeclareArgumentAction, IncludeAction, NodeAction};
use crate::description::{LaunchDescription, LaunchEntity};
use crate::error::Result;
use crate::substitution::format_substitutions;
use serde::Serialize;

#[derive(Serialize)]
struct YamlLaunch<'a> {
    launch: Vec<YamlEntity<'a>>,
}

/// One list item of the `launch:` sequence; exactly one field is set.
#[derive(Serialize, Default)]
struct YamlEntity<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    arg: Option<YamlArg<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    include: Option<YamlInclude>,
    #[serde(skip_serializing_if = "Option::is_none")]
    node: Option<YamlNode<'a>>,
}

#[derive(Serialize)]
struct YamlArg<'a> {
    name: &'a str,
    default: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
}

#[derive(Serialize)]
struct YamlInclude {
    file: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    arg: Vec<YamlIncludeArg>,
}

#[derive(Serialize)]
struct YamlIncludeArg {
    name: String,
    value: String,
}

#[derive(Serialize)]
struct YamlNode<'a> {
    pkg: &'a str,
    exec: &'a str,
    name: &'a str,
    #[serde(skip_serializing_if = "String::is_empty")]
    args: String,
    output: &'a str,
    #[serde(rename = "launch-prefix", skip_serializing_if = "Option::is_none")]
    launch_prefix: Option<&'a str>,
}

impl<'a> From<&'a DeclareArgumentAction> for YamlArg<'a> {
    fn from(arg: &'a DeclareArgumentAction) -> Self {
        Self {
            name: &arg.name,
            default: &arg.default_value,
            description: arg.description.as_deref(),
        }
    }
}

impl From<&IncludeAction> for YamlInclude {
    fn from(include: &IncludeAction) -> Self {
        Self {
            file: format_substitutions(&include.file),
            arg: include
                .args
                .iter()
                .map(|(name, value)| YamlIncludeArg {
                    name: name.clone(),
                    value: format_substitutions(value),
                })
                .collect(),
        }
    }
}

impl<'a> From<&'a NodeAction> for YamlNode<'a> {
    fn from(node: &'a NodeAction) -> Self {
        Self {
            pkg: &node.package,
            exec: &node.executable,
            name: &node.name,
            args: format_arguments(&node.arguments),
            output: node.output.as_str(),
            launch_prefix: node.prefix.as_deref(),
        }
    }
}

/// Render `description` in the ROS 2 YAML launch format.
pub fn to_launch_yaml(description: &LaunchDescription) -> Result<String> {
    let launch = description
        .entities()
        .iter()
        .map(|entity| match entity {
            LaunchEntity::DeclareArgument(arg) => YamlEntity {
                arg: Some(arg.into()),
                ..Default::default()
            },
            LaunchEntity::Include(include) => YamlEntity {
                include: Some(include.into()),
                ..Default::default()
            },
            LaunchEntity::Node(node) => YamlEntity {
                node: Some(node.into()),
                ..Default::default()
            },
        })
        .collect();

    Ok(serde_yaml::to_string(&YamlLaunch { launch })?)
}
