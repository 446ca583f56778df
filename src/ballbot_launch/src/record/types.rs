//! record.json data structures

use crate::actions::OutputMode;
use serde::{Deserialize, Serialize};

/// Root structure for record.json
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordJson {
    pub arguments: Vec<ArgumentRecord>,
    pub include: Vec<IncludeRecord>,
    pub node: Vec<NodeRecord>,
}

impl RecordJson {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn argument(&self, name: &str) -> Option<&ArgumentRecord> {
        self.arguments.iter().find(|a| a.name == name)
    }

    pub fn node_named(&self, name: &str) -> Option<&NodeRecord> {
        self.node.iter().find(|n| n.name == name)
    }
}

/// Declared launch argument with its resolved value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArgumentRecord {
    pub name: String,
    pub value: String,
    pub default: String,
}

/// Included launch file, resolved but not traversed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncludeRecord {
    pub file: String,
    pub args: Vec<(String, String)>,
}

/// Node record structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub package: String,
    pub executable: String,
    pub name: String,
    pub exec_path: String,
    pub args: Vec<String>,
    pub prefix: Vec<String>,
    pub output: OutputMode,
    pub cmd: Vec<String>,
}
