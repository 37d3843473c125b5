//! Edit scripts for `filterform replay`.
//!
//! One edit per line, `#` starts a comment line:
//!
//! ```text
//! add-filter <path>
//! add-group  <path>
//! remove     <path>
//! field      <path> <dataIndex>
//! op         <path> <operation>
//! value      <path> <json | ->
//! conj       <path> <and | or>
//! ```
//!
//! Paths are dotted child indices (`1.0`); `.` is the root. A value of `-`
//! clears the slot.

use anyhow::{anyhow, bail, Context, Result};
use filterform::operations::Operation;
use filterform::path::NodePath;
use filterform::tree::Conjunction;
use filterform::value::FilterValue;
use filterform::FilterBuilder;

#[derive(Debug, Clone, PartialEq)]
pub enum Edit {
    AddFilter(NodePath),
    AddGroup(NodePath),
    Remove(NodePath),
    Field(NodePath, String),
    Operation(NodePath, Operation),
    Value(NodePath, Option<FilterValue>),
    Conjunction(NodePath, Conjunction),
}

impl Edit {
    pub fn apply(&self, builder: &mut FilterBuilder) -> filterform::Result<()> {
        match self {
            Edit::AddFilter(path) => builder.add_filter(path).map(drop),
            Edit::AddGroup(path) => builder.add_group(path).map(drop),
            Edit::Remove(path) => builder.remove_child(path).map(drop),
            Edit::Field(path, key) => builder.set_field(path, key).map(drop),
            Edit::Operation(path, op) => builder.set_operation(path, *op),
            Edit::Value(path, value) => builder.set_value(path, value.clone()).map(drop),
            Edit::Conjunction(path, c) => builder.set_conjunction(path, *c),
        }
    }
}

pub fn parse_script(text: &str) -> Result<Vec<Edit>> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with('#')
        })
        .map(|(n, line)| parse_line(line.trim()).with_context(|| format!("line {}", n + 1)))
        .collect()
}

fn parse_line(line: &str) -> Result<Edit> {
    let (verb, rest) = split_word(line);
    let (path, arg) = split_word(rest);
    if path.is_empty() {
        bail!("'{}' needs a path", verb);
    }
    let path: NodePath = path.parse()?;

    let edit = match verb {
        "add-filter" => Edit::AddFilter(path),
        "add-group" => Edit::AddGroup(path),
        "remove" => Edit::Remove(path),
        "field" => Edit::Field(path, required(verb, arg)?.to_string()),
        "op" => Edit::Operation(path, required(verb, arg)?.parse()?),
        "conj" => Edit::Conjunction(
            path,
            required(verb, arg)?.parse().map_err(|e: String| anyhow!(e))?,
        ),
        "value" => match required(verb, arg)? {
            "-" => Edit::Value(path, None),
            json => Edit::Value(
                path,
                Some(serde_json::from_str(json).with_context(|| format!("bad value '{}'", json))?),
            ),
        },
        other => return Err(anyhow!("unknown edit '{}'", other)),
    };
    Ok(edit)
}

fn split_word(s: &str) -> (&str, &str) {
    match s.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (s, ""),
    }
}

fn required<'a>(verb: &str, arg: &'a str) -> Result<&'a str> {
    if arg.is_empty() {
        bail!("'{}' needs an argument", verb);
    }
    Ok(arg)
}
