//! Filter values.
//!
//! A filter holds either one [`Scalar`] or, for the multi-valued `in`/`nin`
//! operations, a list of them. Values are stored exactly as the host entered
//! them; whether they fit the operation and field is a validation concern.

use crate::fields::FieldType;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};
use uuid::Uuid;

// Largest integer an f64 represents exactly.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// A single filter operand.
///
/// JSON strings always read back as [`Scalar::Text`], exactly as entered.
/// The `Uuid` and `DateTime` variants exist for hosts that build values from
/// typed input; text is checked against UUID and datetime fields by parsing
/// it on demand. Whole numbers serialize without a fractional part.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawScalar")]
pub enum Scalar {
    Bool(bool),
    Number(f64),
    Uuid(Uuid),
    DateTime(DateTime<Utc>),
    Text(String),
}

/// What a JSON operand can carry before any field type is known.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawScalar {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl From<RawScalar> for Scalar {
    fn from(raw: RawScalar) -> Self {
        match raw {
            RawScalar::Bool(b) => Scalar::Bool(b),
            RawScalar::Number(n) => Scalar::Number(n),
            RawScalar::Text(s) => Scalar::Text(s),
        }
    }
}

impl Scalar {
    /// Whether the scalar is acceptable for a field of `field_type`.
    ///
    /// String fields accept anything string-shaped, since UUID- or
    /// timestamp-looking text is still text. UUID and datetime fields accept
    /// text that parses as one.
    pub fn fits(&self, field_type: FieldType) -> bool {
        match (self, field_type) {
            (Scalar::Bool(_), FieldType::Boolean) => true,
            (Scalar::Number(_), FieldType::Number) => true,
            (Scalar::DateTime(_), FieldType::DateTime) => true,
            (Scalar::Text(_), FieldType::DateTime) => self.as_datetime().is_some(),
            (Scalar::Uuid(_), FieldType::Uuid) => true,
            (Scalar::Text(s), FieldType::Uuid) => Uuid::parse_str(s).is_ok(),
            (Scalar::Text(_) | Scalar::Uuid(_) | Scalar::DateTime(_), FieldType::String) => true,
            _ => false,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Scalar::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The instant this scalar denotes; RFC 3339 text is parsed.
    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            Scalar::DateTime(dt) => Some(*dt),
            Scalar::Text(s) => DateTime::parse_from_rfc3339(s)
                .ok()
                .map(|dt| dt.with_timezone(&Utc)),
            _ => None,
        }
    }

    /// Textual form, used for length and pattern checks.
    pub fn as_text(&self) -> Option<String> {
        match self {
            Scalar::Text(s) => Some(s.clone()),
            Scalar::Uuid(id) => Some(id.hyphenated().to_string()),
            Scalar::DateTime(dt) => Some(dt.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
            Scalar::Bool(_) | Scalar::Number(_) => None,
        }
    }
}

impl Serialize for Scalar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Scalar::Bool(b) => serializer.serialize_bool(*b),
            Scalar::Number(n) if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER => {
                serializer.serialize_i64(*n as i64)
            }
            Scalar::Number(n) => serializer.serialize_f64(*n),
            Scalar::Uuid(id) => id.serialize(serializer),
            Scalar::DateTime(dt) => dt.serialize(serializer),
            Scalar::Text(s) => serializer.serialize_str(s),
        }
    }
}

impl std::fmt::Display for Scalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scalar::Bool(true) => f.write_str("Yes"),
            Scalar::Bool(false) => f.write_str("No"),
            Scalar::Number(n) => write!(f, "{}", n),
            Scalar::Uuid(id) => write!(f, "{}", id),
            Scalar::DateTime(dt) => write!(f, "{}", dt.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
            Scalar::Text(s) => f.write_str(s),
        }
    }
}

impl From<bool> for Scalar {
    fn from(v: bool) -> Self {
        Scalar::Bool(v)
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Scalar::Number(v)
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Scalar::Number(v as f64)
    }
}

impl From<i32> for Scalar {
    fn from(v: i32) -> Self {
        Scalar::Number(v.into())
    }
}

impl From<&str> for Scalar {
    fn from(v: &str) -> Self {
        Scalar::Text(v.to_string())
    }
}

impl From<String> for Scalar {
    fn from(v: String) -> Self {
        Scalar::Text(v)
    }
}

impl From<Uuid> for Scalar {
    fn from(v: Uuid) -> Self {
        Scalar::Uuid(v)
    }
}

impl From<DateTime<Utc>> for Scalar {
    fn from(v: DateTime<Utc>) -> Self {
        Scalar::DateTime(v)
    }
}

/// The value slot of a filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    One(Scalar),
    Many(Vec<Scalar>),
}

impl FilterValue {
    pub fn one(value: impl Into<Scalar>) -> Self {
        FilterValue::One(value.into())
    }

    pub fn many<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Scalar>,
    {
        FilterValue::Many(values.into_iter().map(Into::into).collect())
    }

    pub fn is_many(&self) -> bool {
        matches!(self, FilterValue::Many(_))
    }

    /// All scalars held by this value.
    pub fn scalars(&self) -> &[Scalar] {
        match self {
            FilterValue::One(s) => std::slice::from_ref(s),
            FilterValue::Many(list) => list,
        }
    }
}

impl From<Scalar> for FilterValue {
    fn from(v: Scalar) -> Self {
        FilterValue::One(v)
    }
}

impl From<Vec<Scalar>> for FilterValue {
    fn from(v: Vec<Scalar>) -> Self {
        FilterValue::Many(v)
    }
}

macro_rules! single_value_from {
    ($($t:ty),*) => {
        $(
            impl From<$t> for FilterValue {
                fn from(v: $t) -> Self {
                    FilterValue::One(Scalar::from(v))
                }
            }
        )*
    };
}

single_value_from!(bool, f64, i64, i32, &str, String, Uuid, DateTime<Utc>);
