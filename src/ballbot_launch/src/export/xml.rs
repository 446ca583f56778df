//! XML launch file writer

use super::format_arguments;
use crate::actions::{DeclareArgumentAction, IncludeAction, NodeAction};
use crate::description::{LaunchDescription, LaunchEntity};
use crate::error::{LaunchError, Result};
use crate::substitution::format_substitutions;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::Writer;
use std::io::Write;

/// Render `description` as a `<launch>` document accepted by `ros2 launch`.
pub fn to_launch_xml(description: &LaunchDescription) -> Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    writer.write_event(Event::Start(BytesStart::new("launch")))?;

    for entity in description.entities() {
        match entity {
            LaunchEntity::DeclareArgument(arg) => write_arg(&mut writer, arg)?,
            LaunchEntity::Include(include) => write_include(&mut writer, include)?,
            LaunchEntity::Node(node) => write_node(&mut writer, node)?,
        }
    }

    writer.write_event(Event::End(BytesEnd::new("launch")))?;

    let mut bytes = writer.into_inner();
    bytes.push(b'\n');
    String::from_utf8(bytes).map_err(|e| LaunchError::XmlError(e.to_string()))
}

fn write_arg<W: Write>(writer: &mut Writer<W>, arg: &DeclareArgumentAction) -> Result<()> {
    let mut elem = BytesStart::new("arg");
    elem.push_attribute(("name", arg.name.as_str()));
    elem.push_attribute(("default", arg.default_value.as_str()));
    if let Some(description) = &arg.description {
        elem.push_attribute(("description", description.as_str()));
    }
    writer.write_event(Event::Empty(elem))?;
    Ok(())
}

fn write_include<W: Write>(writer: &mut Writer<W>, include: &IncludeAction) -> Result<()> {
    let file = format_substitutions(&include.file);
    let mut elem = BytesStart::new("include");
    elem.push_attribute(("file", file.as_str()));

    if include.args.is_empty() {
        writer.write_event(Event::Empty(elem))?;
        return Ok(());
    }

    writer.write_event(Event::Start(elem))?;
    for (name, value) in &include.args {
        let value = format_substitutions(value);
        let mut arg = BytesStart::new("arg");
        arg.push_attribute(("name", name.as_str()));
        arg.push_attribute(("value", value.as_str()));
        writer.write_event(Event::Empty(arg))?;
    }
    writer.write_event(Event::End(BytesEnd::new("include")))?;
    Ok(())
}

fn write_node<W: Write>(writer: &mut Writer<W>, node: &NodeAction) -> Result<()> {
    let mut elem = BytesStart::new("node");
    elem.push_attribute(("pkg", node.package.as_str()));
    elem.push_attribute(("exec", node.executable.as_str()));
    elem.push_attribute(("name", node.name.as_str()));

    let args = format_arguments(&node.arguments);
    if !args.is_empty() {
        elem.push_attribute(("args", args.as_str()));
    }
    elem.push_attribute(("output", node.output.as_str()));
    if let Some(prefix) = &node.prefix {
        elem.push_attribute(("launch-prefix", prefix.as_str()));
    }

    writer.write_event(Event::Empty(elem))?;
    Ok(())
}
