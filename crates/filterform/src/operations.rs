//! The operation catalog.
//!
//! Every field type maps to a fixed, ordered list of comparison operations.
//! The first entry of each list is the default operation for a freshly
//! selected field.
//!
//! | Field type | Operations |
//! |------------|------------|
//! | `number`, `datetime`, `uuid` | eq, gt, gte, lt, lte, in, null, neq, ngt, ngte, nlt, nlte, nnull, nin |
//! | `boolean` | eq, neq, null |
//! | `string` | eq, contains, startsWith, endsWith, null, empty, in, neq, ncontains, nstartsWith, nendsWith, nnull, nempty, nin |
//!
//! When the valid set of a node changes, [`reconcile`] decides whether the
//! current operation survives. An operation that is no longer valid is
//! cleared, never swapped for another one.

use crate::error::FilterError;
use crate::fields::FieldType;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A comparison predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Operation {
    Eq,
    Gt,
    Gte,
    Lt,
    Lte,
    In,
    Null,
    Neq,
    Ngt,
    Ngte,
    Nlt,
    Nlte,
    Nnull,
    Nin,
    Contains,
    StartsWith,
    EndsWith,
    Empty,
    Ncontains,
    NstartsWith,
    NendsWith,
    Nempty,
}

const ORDERED: &[Operation] = &[
    Operation::Eq,
    Operation::Gt,
    Operation::Gte,
    Operation::Lt,
    Operation::Lte,
    Operation::In,
    Operation::Null,
    Operation::Neq,
    Operation::Ngt,
    Operation::Ngte,
    Operation::Nlt,
    Operation::Nlte,
    Operation::Nnull,
    Operation::Nin,
];

const BOOLEAN: &[Operation] = &[Operation::Eq, Operation::Neq, Operation::Null];

const STRING: &[Operation] = &[
    Operation::Eq,
    Operation::Contains,
    Operation::StartsWith,
    Operation::EndsWith,
    Operation::Null,
    Operation::Empty,
    Operation::In,
    Operation::Neq,
    Operation::Ncontains,
    Operation::NstartsWith,
    Operation::NendsWith,
    Operation::Nnull,
    Operation::Nempty,
    Operation::Nin,
];

/// How many values an operation takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Nullity and emptiness checks need no value.
    None,
    One,
    Many,
}

impl Operation {
    /// The wire code, e.g. `"nstartsWith"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Eq => "eq",
            Operation::Gt => "gt",
            Operation::Gte => "gte",
            Operation::Lt => "lt",
            Operation::Lte => "lte",
            Operation::In => "in",
            Operation::Null => "null",
            Operation::Neq => "neq",
            Operation::Ngt => "ngt",
            Operation::Ngte => "ngte",
            Operation::Nlt => "nlt",
            Operation::Nlte => "nlte",
            Operation::Nnull => "nnull",
            Operation::Nin => "nin",
            Operation::Contains => "contains",
            Operation::StartsWith => "startsWith",
            Operation::EndsWith => "endsWith",
            Operation::Empty => "empty",
            Operation::Ncontains => "ncontains",
            Operation::NstartsWith => "nstartsWith",
            Operation::NendsWith => "nendsWith",
            Operation::Nempty => "nempty",
        }
    }

    /// Human readable title for option lists.
    pub fn title(&self) -> &'static str {
        match self {
            Operation::Eq => "Equals",
            Operation::Gt => "Greater than",
            Operation::Gte => "Greater or equals than",
            Operation::Lt => "Less than",
            Operation::Lte => "Less or equals than",
            Operation::In => "In",
            Operation::Null => "Null",
            Operation::Neq => "Not equals",
            Operation::Ngt => "Not greater than",
            Operation::Ngte => "Not greater or equals than",
            Operation::Nlt => "Not less than",
            Operation::Nlte => "Not less or equals than",
            Operation::Nnull => "Not null",
            Operation::Nin => "Not in",
            Operation::Contains => "Contains",
            Operation::StartsWith => "Starts with",
            Operation::EndsWith => "Ends with",
            Operation::Empty => "Is empty",
            Operation::Ncontains => "Not contains",
            Operation::NstartsWith => "Not starts with",
            Operation::NendsWith => "Not ends with",
            Operation::Nempty => "Not empty",
        }
    }

    pub fn arity(&self) -> Arity {
        match self {
            Operation::In | Operation::Nin => Arity::Many,
            _ if self.needs_no_value() => Arity::None,
            _ => Arity::One,
        }
    }

    /// True for the `null` and `empty` families.
    pub fn needs_no_value(&self) -> bool {
        matches!(
            self,
            Operation::Null | Operation::Nnull | Operation::Empty | Operation::Nempty
        )
    }

    pub fn is_multi(&self) -> bool {
        self.arity() == Arity::Many
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ORDERED
            .iter()
            .chain(STRING.iter())
            .find(|op| op.as_str() == s)
            .copied()
            .ok_or_else(|| FilterError::UnknownOperation(s.to_string()))
    }
}

/// The full, ordered operation list for a field type.
pub fn operations_for(field_type: FieldType) -> &'static [Operation] {
    match field_type {
        FieldType::Number | FieldType::DateTime | FieldType::Uuid => ORDERED,
        FieldType::Boolean => BOOLEAN,
        FieldType::String => STRING,
    }
}

/// Keep `current` only if it is still part of `valid`.
pub fn reconcile(current: Option<Operation>, valid: &[Operation]) -> Option<Operation> {
    current.filter(|op| valid.contains(op))
}

/// The kind of entry control a host should render for a filter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum ValueInput {
    /// Two-valued Yes/No choice.
    Choice,
    Date { multiple: bool },
    Number,
    NumberTags,
    Text,
    TextTags,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ValueInputSpec {
    #[serde(flatten)]
    pub input: ValueInput,
    pub disabled: bool,
}

/// Pick the value entry control for a field type and operation.
///
/// Entry is disabled for both the `null` and the `empty` families.
pub fn value_input(field_type: FieldType, operation: Option<Operation>) -> ValueInputSpec {
    let multi = operation.is_some_and(|op| op.is_multi());
    let input = match field_type {
        FieldType::Boolean => ValueInput::Choice,
        FieldType::DateTime => ValueInput::Date { multiple: multi },
        FieldType::Number if multi => ValueInput::NumberTags,
        FieldType::Number => ValueInput::Number,
        FieldType::String | FieldType::Uuid if multi => ValueInput::TextTags,
        FieldType::String | FieldType::Uuid => ValueInput::Text,
    };
    ValueInputSpec {
        input,
        disabled: operation.is_some_and(|op| op.needs_no_value()),
    }
}
