//! Form-level validation.
//!
//! Mutations store whatever the user entered. Whether a filter is complete
//! and consistent is decided here, at form granularity, the way a form library
//! marks a control as invalid until it is corrected:
//!
//! - every filter needs a field and an operation
//! - operations that compare against something need a value
//! - `in`/`nin` need a list, every other operation a single scalar
//! - scalars must fit the field type and its constraints
//!
//! Nullity and emptiness checks take no value, so their value slot is never
//! inspected.

use crate::fields::{
    DateTimeConstraints, FieldDescriptor, FieldKind, FieldSet, NumberConstraints, StringConstraints,
};
use crate::operations::Arity;
use crate::path::NodePath;
use crate::tree::{FilterNode, GroupNode};
use crate::value::{FilterValue, Scalar};
use regex::Regex;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum IssueKind {
    FieldRequired,
    UnknownField,
    OperationRequired,
    InvalidOperation,
    ValueRequired,
    ArityMismatch,
    TypeMismatch,
    ConstraintViolation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationIssue {
    pub path: NodePath,
    pub kind: IssueKind,
    pub message: String,
}

impl ValidationIssue {
    fn new(path: &NodePath, kind: IssueKind, message: impl Into<String>) -> Self {
        Self {
            path: path.clone(),
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// A regular expression that must match a whole value, compiled once.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    regex: Regex,
}

impl Pattern {
    pub fn new(source: &str) -> std::result::Result<Self, regex::Error> {
        // Anchored like an HTML `pattern` attribute.
        let regex = Regex::new(&format!("^(?:{})$", source))?;
        Ok(Self {
            source: source.to_string(),
            regex,
        })
    }

    /// The pattern as written, without anchors.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for Pattern {}

/// Validate every filter of a tree.
pub fn validate_tree(fields: &FieldSet, root: &GroupNode) -> Vec<ValidationIssue> {
    root.filters()
        .into_iter()
        .flat_map(|(path, filter)| validate_filter(fields, &path, filter))
        .collect()
}

/// Validate one filter located at `path`.
pub fn validate_filter(fields: &FieldSet, path: &NodePath, filter: &FilterNode) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    let descriptor = match filter.field.as_deref() {
        None => {
            issues.push(ValidationIssue::new(path, IssueKind::FieldRequired, "Field is required"));
            None
        }
        Some(key) => {
            let found = fields.get(key);
            if found.is_none() {
                issues.push(ValidationIssue::new(
                    path,
                    IssueKind::UnknownField,
                    format!("Unknown field '{}'", key),
                ));
            }
            found
        }
    };

    let Some(operation) = filter.operation else {
        issues.push(ValidationIssue::new(
            path,
            IssueKind::OperationRequired,
            "Operation is required",
        ));
        return issues;
    };

    if !fields.operations_of(filter.field.as_deref()).contains(&operation) {
        issues.push(ValidationIssue::new(
            path,
            IssueKind::InvalidOperation,
            format!(
                "Operation '{}' is not available for field '{}'",
                operation,
                filter.field.as_deref().unwrap_or("")
            ),
        ));
        return issues;
    }

    let scalars = match (operation.arity(), &filter.value) {
        (Arity::None, _) => return issues,
        (_, None) => {
            issues.push(ValidationIssue::new(path, IssueKind::ValueRequired, "Keyword is required"));
            return issues;
        }
        (Arity::Many, Some(FilterValue::Many(list))) if list.is_empty() => {
            issues.push(ValidationIssue::new(path, IssueKind::ValueRequired, "Keyword is required"));
            return issues;
        }
        (Arity::Many, Some(FilterValue::Many(list))) => list.as_slice(),
        (Arity::One, Some(FilterValue::One(scalar))) => std::slice::from_ref(scalar),
        (Arity::Many, Some(FilterValue::One(_))) => {
            issues.push(ValidationIssue::new(
                path,
                IssueKind::ArityMismatch,
                format!("Operation '{}' expects a list of values", operation),
            ));
            return issues;
        }
        (Arity::One, Some(FilterValue::Many(_))) => {
            issues.push(ValidationIssue::new(
                path,
                IssueKind::ArityMismatch,
                format!("Operation '{}' expects a single value", operation),
            ));
            return issues;
        }
    };

    if let Some(descriptor) = descriptor {
        for scalar in scalars {
            if !scalar.fits(descriptor.field_type()) {
                issues.push(ValidationIssue::new(
                    path,
                    IssueKind::TypeMismatch,
                    format!("'{}' is not a valid {} value", scalar, descriptor.field_type()),
                ));
                continue;
            }
            if let Some(message) = check_constraints(fields, descriptor, scalar) {
                issues.push(ValidationIssue::new(path, IssueKind::ConstraintViolation, message));
            }
        }
    }

    issues
}

fn check_constraints(fields: &FieldSet, descriptor: &FieldDescriptor, scalar: &Scalar) -> Option<String> {
    match &descriptor.kind {
        FieldKind::String(c) => check_string(
            c,
            fields.pattern_of(&descriptor.data_index),
            &scalar.as_text()?,
        ),
        FieldKind::Number(c) => check_number(c, scalar.as_number()?),
        FieldKind::DateTime(c) => check_datetime(c, scalar),
        FieldKind::Boolean | FieldKind::Uuid => None,
    }
}

fn check_string(c: &StringConstraints, pattern: Option<&Pattern>, text: &str) -> Option<String> {
    let len = text.chars().count();
    if let Some(min) = c.min_length {
        if len < min {
            return Some(format!("'{}' is shorter than {} characters", text, min));
        }
    }
    if let Some(max) = c.max_length {
        if len > max {
            return Some(format!("'{}' is longer than {} characters", text, max));
        }
    }
    if let Some(pattern) = pattern {
        if !pattern.is_match(text) {
            return Some(format!("'{}' does not match pattern '{}'", text, pattern.as_str()));
        }
    }
    None
}

fn check_number(c: &NumberConstraints, n: f64) -> Option<String> {
    if let Some(min) = c.min {
        if n < min {
            return Some(format!("{} is less than {}", n, min));
        }
    }
    if let Some(max) = c.max {
        if n > max {
            return Some(format!("{} is greater than {}", n, max));
        }
    }
    None
}

fn check_datetime(c: &DateTimeConstraints, scalar: &Scalar) -> Option<String> {
    let dt = scalar.as_datetime()?;
    if let Some(min) = c.min {
        let too_early = if c.min_inclusive { dt < min } else { dt <= min };
        if too_early {
            return Some(format!("{} is before the earliest allowed date", scalar));
        }
    }
    if let Some(max) = c.max {
        let too_late = if c.max_inclusive { dt > max } else { dt >= max };
        if too_late {
            return Some(format!("{} is after the latest allowed date", scalar));
        }
    }
    None
}
