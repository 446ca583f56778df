//! Error types for ballbot_launch

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("Invalid launch argument format: '{0}' (expected name:=value)")]
    InvalidLaunchArgument(String),

    #[error("XML write error: {0}")]
    XmlError(String),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Record generation failed: {0}")]
    Generation(#[from] GenerationError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<quick_xml::Error> for LaunchError {
    fn from(err: quick_xml::Error) -> Self {
        LaunchError::XmlError(err.to_string())
    }
}

#[derive(Error, Debug)]
pub enum SubstitutionError {
    #[error("Undefined variable: '{0}'. Did you forget to declare it as a launch argument?")]
    UndefinedVariable(String),

    #[error(
        "Undefined environment variable: '{0}'. Make sure the variable is set in your environment."
    )]
    UndefinedEnvVar(String),

    #[error("Package '{0}' not found. Ensure the package is installed and sourced.")]
    PackageNotFound(String),
}

#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Substitution error: {0}")]
    Substitution(#[from] SubstitutionError),

    #[error("Package not found: {0}")]
    PackageNotFound(String),

    #[error("Executable not found: {executable} in package {package}")]
    ExecutableNotFound { package: String, executable: String },

    #[error("Launch argument '{0}' is declared more than once")]
    DuplicateArgument(String),

    #[error("Node name '{0}' is used by more than one node")]
    DuplicateNodeName(String),
}

pub type Result<T> = std::result::Result<T, LaunchError>;
