//! Launch description: an ordered list of launch actions

use crate::actions::{DeclareArgumentAction, IncludeAction, NodeAction};
use serde::{Deserialize, Serialize};

/// A single action in a launch description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LaunchEntity {
    DeclareArgument(DeclareArgumentAction),
    Include(IncludeAction),
    Node(NodeAction),
}

impl From<DeclareArgumentAction> for LaunchEntity {
    fn from(action: DeclareArgumentAction) -> Self {
        LaunchEntity::DeclareArgument(action)
    }
}

impl From<IncludeAction> for LaunchEntity {
    fn from(action: IncludeAction) -> Self {
        LaunchEntity::Include(action)
    }
}

impl From<NodeAction> for LaunchEntity {
    fn from(action: NodeAction) -> Self {
        LaunchEntity::Node(action)
    }
}

/// Ordered, immutable-after-construction list of launch entities
///
/// Consumed by a launch host (or by [`crate::record::CommandGenerator`])
/// which resolves substitutions and starts the processes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LaunchDescription {
    entities: Vec<LaunchEntity>,
}

impl LaunchDescription {
    pub fn new(entities: Vec<LaunchEntity>) -> Self {
        Self { entities }
    }

    pub fn entities(&self) -> &[LaunchEntity] {
        &self.entities
    }

    pub fn declared_arguments(&self) -> impl Iterator<Item = &DeclareArgumentAction> {
        self.entities.iter().filter_map(|e| match e {
            LaunchEntity::DeclareArgument(arg) => Some(arg),
            _ => None,
        })
    }

    pub fn includes(&self) -> impl Iterator<Item = &IncludeAction> {
        self.entities.iter().filter_map(|e| match e {
            LaunchEntity::Include(include) => Some(include),
            _ => None,
        })
    }

    pub fn nodes(&self) -> impl Iterator<Item = &NodeAction> {
        self.entities.iter().filter_map(|e| match e {
            LaunchEntity::Node(node) => Some(node),
            _ => None,
        })
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
