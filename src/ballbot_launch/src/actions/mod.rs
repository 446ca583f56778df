//! Launch actions that make up a launch description

pub mod declare_argument;
pub mod include;
pub mod node;

pub use declare_argument::DeclareArgumentAction;
pub use include::IncludeAction;
pub use node::{NodeAction, OutputMode};
