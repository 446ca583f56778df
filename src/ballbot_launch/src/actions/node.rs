//! Node action implementation

use crate::substitution::Substitution;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where a node's stdout/stderr go
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    Screen,
    #[default]
    Log,
    Both,
}

impl OutputMode {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputMode::Screen => "screen",
            OutputMode::Log => "log",
            OutputMode::Both => "both",
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "screen" => Ok(OutputMode::Screen),
            "log" => Ok(OutputMode::Log),
            "both" => Ok(OutputMode::Both),
            other => Err(format!("unknown output mode '{}'", other)),
        }
    }
}

/// Node action representing a ROS 2 node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeAction {
    pub package: String,
    pub executable: String,
    pub name: String,
    /// Positional arguments passed before `--ros-args`
    pub arguments: Vec<Vec<Substitution>>,
    /// Command prepended to the executable, e.g. a terminal emulator
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(default)]
    pub output: OutputMode,
}

impl NodeAction {
    pub fn new(
        package: impl Into<String>,
        executable: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            package: package.into(),
            executable: executable.into(),
            name: name.into(),
            arguments: Vec::new(),
            prefix: None,
            output: OutputMode::default(),
        }
    }

    pub fn with_argument(mut self, argument: Vec<Substitution>) -> Self {
        self.arguments.push(argument);
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn with_output(mut self, output: OutputMode) -> Self {
        self.output = output;
        self
    }

    /// Prefix split into command tokens
    pub fn prefix_tokens(&self) -> Vec<String> {
        self.prefix
            .as_deref()
            .map(|p| p.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default()
    }
}
