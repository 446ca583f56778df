//! Launch context for managing configurations

use crate::ament::AmentIndex;
use std::collections::HashMap;

/// Launch context holding configurations and state
#[derive(Debug, Clone)]
pub struct LaunchContext {
    configurations: HashMap<String, String>,
    ament: AmentIndex,
}

impl LaunchContext {
    /// Context with an empty ament index.
    pub fn new() -> Self {
        Self::with_ament(AmentIndex::default())
    }

    pub fn with_ament(ament: AmentIndex) -> Self {
        Self {
            configurations: HashMap::new(),
            ament,
        }
    }

    /// Context seeded with `name:=value` launch arguments.
    pub fn with_launch_args<I>(ament: AmentIndex, args: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut context = Self::with_ament(ament);
        for (k, v) in args {
            context.set_configuration(k, v);
        }
        context
    }

    pub fn ament(&self) -> &AmentIndex {
        &self.ament
    }

    pub fn set_configuration(&mut self, name: String, value: String) {
        self.configurations.insert(name, value);
    }

    pub fn get_configuration(&self, name: &str) -> Option<String> {
        self.configurations.get(name).cloned()
    }

    pub fn has_configuration(&self, name: &str) -> bool {
        self.configurations.contains_key(name)
    }

    pub fn configurations(&self) -> &HashMap<String, String> {
        &self.configurations
    }
}

impl Default for LaunchContext {
    fn default() -> Self {
        Self::new()
    }
}
