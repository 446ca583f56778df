//! Substitution types

use crate::error::SubstitutionError;
use crate::substitution::context::LaunchContext;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Substitution enum representing different types of substitutions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Substitution {
    /// Plain text (no substitution)
    Text(String),
    /// $(var name) - Launch configuration variable
    LaunchConfiguration(String),
    /// $(env VAR [default]) - Environment variable with optional default
    EnvironmentVariable {
        name: String,
        default: Option<String>,
    },
    /// $(find-pkg-share package_name) - Find ROS 2 package share directory
    FindPackageShare(String),
    /// Path components joined with '/'
    PathJoin(Vec<Vec<Substitution>>),
}

impl Substitution {
    pub fn text(s: impl Into<String>) -> Self {
        Substitution::Text(s.into())
    }

    pub fn var(name: impl Into<String>) -> Self {
        Substitution::LaunchConfiguration(name.into())
    }

    /// Resolve substitution to string value
    pub fn resolve(&self, context: &LaunchContext) -> Result<String, SubstitutionError> {
        match self {
            Substitution::Text(s) => Ok(s.clone()),
            Substitution::LaunchConfiguration(name) => context
                .get_configuration(name)
                .ok_or_else(|| SubstitutionError::UndefinedVariable(name.clone())),
            Substitution::EnvironmentVariable { name, default } => {
                std::env::var(name).or_else(|_| {
                    default
                        .clone()
                        .ok_or_else(|| SubstitutionError::UndefinedEnvVar(name.clone()))
                })
            }
            Substitution::FindPackageShare(package_name) => context
                .ament()
                .share_directory(package_name)
                .map(|p| p.display().to_string())
                .ok_or_else(|| SubstitutionError::PackageNotFound(package_name.clone())),
            Substitution::PathJoin(parts) => {
                let resolved = parts
                    .iter()
                    .map(|part| resolve_substitutions(part, context))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(resolved.join("/"))
            }
        }
    }
}

/// Renders ROS 2 launch file substitution syntax, e.g. `$(var task_name)`.
impl fmt::Display for Substitution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Substitution::Text(s) => f.write_str(s),
            Substitution::LaunchConfiguration(name) => write!(f, "$(var {})", name),
            Substitution::EnvironmentVariable {
                name,
                default: Some(default),
            } => write!(f, "$(env {} {})", name, default),
            Substitution::EnvironmentVariable {
                name,
                default: None,
            } => write!(f, "$(env {})", name),
            Substitution::FindPackageShare(package) => write!(f, "$(find-pkg-share {})", package),
            Substitution::PathJoin(parts) => {
                for (i, part) in parts.iter().enumerate() {
                    if i > 0 {
                        f.write_str("/")?;
                    }
                    f.write_str(&format_substitutions(part))?;
                }
                Ok(())
            }
        }
    }
}

/// Resolve list of substitutions to single string
pub fn resolve_substitutions(
    subs: &[Substitution],
    context: &LaunchContext,
) -> Result<String, SubstitutionError> {
    let mut result = String::new();
    for sub in subs {
        result.push_str(&sub.resolve(context)?);
    }
    Ok(result)
}

/// Render a substitution list in launch file syntax without resolving it
pub fn format_substitutions(subs: &[Substitution]) -> String {
    subs.iter().map(|s| s.to_string()).collect()
}
