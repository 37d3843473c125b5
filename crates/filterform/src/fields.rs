//! Field descriptors.
//!
//! A field is a typed, labeled attribute that a filter can reference. Hosts
//! supply the ordered field list once, at session start; it does not change
//! afterwards. The first field is the default for new filters.
//!
//! Descriptors carry per-type constraints (length and pattern for strings,
//! bounds for numbers and datetimes). The host uses them to configure its
//! entry controls, and [`crate::validation`] enforces them on submit.
//!
//! ## JSON shape
//!
//! ```json
//! { "dataIndex": "age", "label": "Age", "type": "number", "min": 0, "max": 130 }
//! ```

use crate::error::{FilterError, Result};
use crate::operations::{operations_for, Operation};
use crate::validation::Pattern;
use chrono::{DateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Boolean,
    Number,
    DateTime,
    Uuid,
    String,
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FieldType::Boolean => "boolean",
            FieldType::Number => "number",
            FieldType::DateTime => "datetime",
            FieldType::Uuid => "uuid",
            FieldType::String => "string",
        };
        f.write_str(name)
    }
}

impl std::str::FromStr for FieldType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "boolean" | "bool" => Ok(FieldType::Boolean),
            "number" => Ok(FieldType::Number),
            "datetime" => Ok(FieldType::DateTime),
            "uuid" => Ok(FieldType::Uuid),
            "string" => Ok(FieldType::String),
            other => Err(format!(
                "unknown field type '{}' (expected boolean, number, datetime, uuid or string)",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StringConstraints {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    /// Regular expression the whole value must match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NumberConstraints {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    /// Decimal places shown by the entry control.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precision: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatePrecision {
    Millisecond,
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Quarter,
    Year,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DateTimeConstraints {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<DateTime<Utc>>,
    pub min_inclusive: bool,
    pub max_inclusive: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precision: Option<DatePrecision>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
    /// Display format understood by the host's date control.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl Default for DateTimeConstraints {
    fn default() -> Self {
        Self {
            min: None,
            max: None,
            min_inclusive: true,
            max_inclusive: true,
            precision: None,
            time_zone: None,
            format: None,
        }
    }
}

/// The field type together with its type-specific constraints.
///
/// Serialized with a `type` tag next to the constraint keys. A descriptor
/// without `type` is a string field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FieldKind {
    Boolean,
    Number(NumberConstraints),
    DateTime(DateTimeConstraints),
    Uuid,
    String(StringConstraints),
}

impl<'de> Deserialize<'de> for FieldKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let mut map = serde_json::Map::deserialize(deserializer)?;
        let field_type = match map.remove("type") {
            None | Some(Value::Null) => FieldType::String,
            Some(tag) => FieldType::deserialize(tag).map_err(de::Error::custom)?,
        };
        let constraints = Value::Object(map);
        let kind = match field_type {
            FieldType::Boolean => FieldKind::Boolean,
            FieldType::Uuid => FieldKind::Uuid,
            FieldType::Number => FieldKind::Number(
                NumberConstraints::deserialize(constraints).map_err(de::Error::custom)?,
            ),
            FieldType::DateTime => FieldKind::DateTime(
                DateTimeConstraints::deserialize(constraints).map_err(de::Error::custom)?,
            ),
            FieldType::String => FieldKind::String(
                StringConstraints::deserialize(constraints).map_err(de::Error::custom)?,
            ),
        };
        Ok(kind)
    }
}

impl FieldKind {
    pub fn field_type(&self) -> FieldType {
        match self {
            FieldKind::Boolean => FieldType::Boolean,
            FieldKind::Number(_) => FieldType::Number,
            FieldKind::DateTime(_) => FieldType::DateTime,
            FieldKind::Uuid => FieldType::Uuid,
            FieldKind::String(_) => FieldType::String,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    /// Unique key; this is what filters store and what snapshots emit.
    pub data_index: String,
    pub label: String,
    #[serde(flatten)]
    pub kind: FieldKind,
    /// Restricts the catalog for this field. Catalog order is kept.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operations: Option<Vec<Operation>>,
}

impl FieldDescriptor {
    pub fn new(data_index: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            data_index: data_index.into(),
            label: label.into(),
            kind,
            operations: None,
        }
    }

    pub fn string(data_index: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(data_index, label, FieldKind::String(StringConstraints::default()))
    }

    pub fn number(data_index: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(data_index, label, FieldKind::Number(NumberConstraints::default()))
    }

    pub fn boolean(data_index: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(data_index, label, FieldKind::Boolean)
    }

    pub fn datetime(data_index: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(
            data_index,
            label,
            FieldKind::DateTime(DateTimeConstraints::default()),
        )
    }

    pub fn uuid(data_index: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(data_index, label, FieldKind::Uuid)
    }

    /// Restrict the operations offered for this field.
    pub fn with_operations(mut self, operations: &[Operation]) -> Self {
        self.operations = Some(operations.to_vec());
        self
    }

    pub fn field_type(&self) -> FieldType {
        self.kind.field_type()
    }

    /// The catalog for this field's type, narrowed by `operations` when set.
    pub fn valid_operations(&self) -> Vec<Operation> {
        let catalog = operations_for(self.field_type());
        match &self.operations {
            Some(allowed) => catalog
                .iter()
                .filter(|op| allowed.contains(op))
                .copied()
                .collect(),
            None => catalog.to_vec(),
        }
    }
}

/// The ordered, key-unique field list of a builder session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldSet {
    fields: Vec<FieldDescriptor>,
    patterns: HashMap<String, Pattern>,
}

impl FieldSet {
    /// Build a field set, rejecting duplicate keys and invalid patterns.
    pub fn new(fields: Vec<FieldDescriptor>) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut patterns = HashMap::new();
        for field in &fields {
            if !seen.insert(field.data_index.as_str()) {
                return Err(FilterError::DuplicateField(field.data_index.clone()));
            }
            if let FieldKind::String(StringConstraints {
                pattern: Some(source),
                ..
            }) = &field.kind
            {
                let pattern = Pattern::new(source).map_err(|_| FilterError::InvalidPattern {
                    field: field.data_index.clone(),
                    pattern: source.clone(),
                })?;
                patterns.insert(field.data_index.clone(), pattern);
            }
        }
        Ok(Self { fields, patterns })
    }

    /// Compiled pattern of a string field, if it declares one.
    pub fn pattern_of(&self, data_index: &str) -> Option<&Pattern> {
        self.patterns.get(data_index)
    }

    /// Parse a JSON array of descriptors.
    pub fn from_json(json: &str) -> Result<Self> {
        let fields: Vec<FieldDescriptor> = serde_json::from_str(json)?;
        Self::new(fields)
    }

    pub fn get(&self, data_index: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.data_index == data_index)
    }

    pub fn contains(&self, data_index: &str) -> bool {
        self.get(data_index).is_some()
    }

    /// The field new filters default to.
    pub fn default_field(&self) -> Option<&FieldDescriptor> {
        self.fields.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Type used for a filter's field slot. Unset or unknown keys fall back
    /// to `string`.
    pub fn type_of(&self, data_index: Option<&str>) -> FieldType {
        data_index
            .and_then(|key| self.get(key))
            .map(FieldDescriptor::field_type)
            .unwrap_or(FieldType::String)
    }

    /// Valid operations for a filter's field slot.
    pub fn operations_of(&self, data_index: Option<&str>) -> Vec<Operation> {
        match data_index.and_then(|key| self.get(key)) {
            Some(field) => field.valid_operations(),
            None => operations_for(FieldType::String).to_vec(),
        }
    }
}
