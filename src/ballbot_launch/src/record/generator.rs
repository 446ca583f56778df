//! Command-line and record generation

use crate::actions::{DeclareArgumentAction, IncludeAction, NodeAction};
use crate::description::{LaunchDescription, LaunchEntity};
use crate::error::GenerationError;
use crate::record::types::{ArgumentRecord, IncludeRecord, NodeRecord, RecordJson};
use crate::substitution::{resolve_substitutions, LaunchContext};
use std::collections::HashSet;

/// Resolves a launch description the way a launch host would, without
/// starting any process.
pub struct CommandGenerator;

impl CommandGenerator {
    /// Walk `description` in order and produce its record.
    ///
    /// Configurations already present in `context` are treated as
    /// command-line overrides and take precedence over declared defaults.
    pub fn generate(
        description: &LaunchDescription,
        context: &LaunchContext,
    ) -> Result<RecordJson, GenerationError> {
        let mut context = context.clone();
        let mut record = RecordJson::new();
        let mut declared = HashSet::new();
        let mut node_names = HashSet::new();

        for entity in description.entities() {
            match entity {
                LaunchEntity::DeclareArgument(arg) => {
                    if !declared.insert(arg.name.clone()) {
                        return Err(GenerationError::DuplicateArgument(arg.name.clone()));
                    }
                    record
                        .arguments
                        .push(Self::apply_argument(arg, &mut context));
                }
                LaunchEntity::Include(include) => {
                    record
                        .include
                        .push(Self::generate_include_record(include, &context)?);
                }
                LaunchEntity::Node(node) => {
                    if !node_names.insert(node.name.clone()) {
                        return Err(GenerationError::DuplicateNodeName(node.name.clone()));
                    }
                    record
                        .node
                        .push(Self::generate_node_record(node, &context)?);
                }
            }
        }

        let mut undeclared: Vec<_> = context
            .configurations()
            .keys()
            .filter(|name| !declared.contains(*name))
            .collect();
        undeclared.sort();
        for name in undeclared {
            log::warn!("Launch argument '{}' was given but never declared", name);
        }

        Ok(record)
    }

    fn apply_argument(arg: &DeclareArgumentAction, context: &mut LaunchContext) -> ArgumentRecord {
        let value = match context.get_configuration(&arg.name) {
            Some(value) => {
                log::debug!("Launch argument {}:={} (override)", arg.name, value);
                value
            }
            None => {
                context.set_configuration(arg.name.clone(), arg.default_value.clone());
                arg.default_value.clone()
            }
        };

        ArgumentRecord {
            name: arg.name.clone(),
            value,
            default: arg.default_value.clone(),
        }
    }

    pub fn generate_include_record(
        include: &IncludeAction,
        context: &LaunchContext,
    ) -> Result<IncludeRecord, GenerationError> {
        let file = resolve_substitutions(&include.file, context)?;
        let args = include
            .args
            .iter()
            .map(|(name, value)| Ok((name.clone(), resolve_substitutions(value, context)?)))
            .collect::<Result<Vec<_>, GenerationError>>()?;

        log::info!("Including launch file: {}", file);
        Ok(IncludeRecord { file, args })
    }

    pub fn generate_node_record(
        node: &NodeAction,
        context: &LaunchContext,
    ) -> Result<NodeRecord, GenerationError> {
        let exec_path = Self::resolve_executable_path(&node.package, &node.executable, context)?;

        let args = node
            .arguments
            .iter()
            .map(|a| resolve_substitutions(a, context))
            .collect::<Result<Vec<_>, _>>()?;

        let prefix = node.prefix_tokens();
        let cmd = Self::generate_node_command(&prefix, &exec_path, &args, &node.name);

        Ok(NodeRecord {
            package: node.package.clone(),
            executable: node.executable.clone(),
            name: node.name.clone(),
            exec_path,
            args,
            prefix,
            output: node.output,
            cmd,
        })
    }

    /// `[prefix..., exec_path, args..., --ros-args, -r, __node:=name]`
    pub fn generate_node_command(
        prefix: &[String],
        exec_path: &str,
        args: &[String],
        node_name: &str,
    ) -> Vec<String> {
        let mut cmd = Vec::with_capacity(prefix.len() + args.len() + 4);
        cmd.extend(prefix.iter().cloned());
        cmd.push(exec_path.to_string());
        cmd.extend(args.iter().cloned());
        cmd.push("--ros-args".to_string());
        cmd.push("-r".to_string());
        cmd.push(format!("__node:={}", node_name));
        cmd
    }

    fn resolve_executable_path(
        package: &str,
        executable: &str,
        context: &LaunchContext,
    ) -> Result<String, GenerationError> {
        if context.ament().package_prefix(package).is_none() {
            return Err(GenerationError::PackageNotFound(package.to_string()));
        }
        context
            .ament()
            .executable_path(package, executable)
            .map(|p| p.display().to_string())
            .ok_or_else(|| GenerationError::ExecutableNotFound {
                package: package.to_string(),
                executable: executable.to_string(),
            })
    }
}
