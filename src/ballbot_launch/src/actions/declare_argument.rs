//! Declare argument action for argument metadata

use serde::{Deserialize, Serialize};

/// Declare argument action with metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeclareArgumentAction {
    pub name: String,
    pub default_value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl DeclareArgumentAction {
    pub fn new(name: impl Into<String>, default_value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default_value: default_value.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
