//! Include action implementation

use crate::substitution::Substitution;
use serde::{Deserialize, Serialize};

/// Include action referencing a nested launch file
///
/// The included description is owned by another package; only its path
/// and the argument overrides are kept here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncludeAction {
    pub file: Vec<Substitution>,
    /// Args as Vec to preserve order (later args can reference earlier ones)
    pub args: Vec<(String, Vec<Substitution>)>,
}

impl IncludeAction {
    pub fn new(file: Vec<Substitution>) -> Self {
        Self {
            file,
            args: Vec::new(),
        }
    }

    pub fn with_arg(mut self, name: impl Into<String>, value: Vec<Substitution>) -> Self {
        self.args.push((name.into(), value));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_include_preserves_arg_order() {
        let include = IncludeAction::new(vec![Substitution::text("/path/to/file.launch.py")])
            .with_arg("param2", vec![Substitution::text("value2")])
            .with_arg("param1", vec![Substitution::text("value1")]);

        assert_eq!(include.file.len(), 1);
        assert_eq!(include.args.len(), 2);
        assert_eq!(include.args[0].0, "param2");
        assert_eq!(include.args[1].0, "param1");
    }
}
