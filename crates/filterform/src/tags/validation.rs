//! Tag entry validation.
//!
//! Text tags:
//! - Must not be empty (after trimming, when trimming is on)
//! - Must respect the optional minimum and maximum length
//! - Must fully match the optional pattern
//!
//! Number tags:
//! - Must parse as a finite number
//! - Must lie within the optional bounds

use crate::fields::{NumberConstraints, StringConstraints};
use crate::validation::Pattern;

/// Limits applied to text tag entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextTagRules {
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub pattern: Option<Pattern>,
}

impl TextTagRules {
    /// Require tags to fully match `source`.
    pub fn with_pattern(mut self, source: &str) -> Result<Self, TagValidationError> {
        let pattern =
            Pattern::new(source).map_err(|_| TagValidationError::InvalidPattern(source.to_string()))?;
        self.pattern = Some(pattern);
        Ok(self)
    }
}

impl TryFrom<&StringConstraints> for TextTagRules {
    type Error = TagValidationError;

    fn try_from(c: &StringConstraints) -> Result<Self, Self::Error> {
        let rules = Self {
            min_length: c.min_length,
            max_length: c.max_length,
            pattern: None,
        };
        match &c.pattern {
            Some(source) => rules.with_pattern(source),
            None => Ok(rules),
        }
    }
}

/// Limits applied to number tag entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NumberTagRules {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl From<&NumberConstraints> for NumberTagRules {
    fn from(c: &NumberConstraints) -> Self {
        Self {
            min: c.min,
            max: c.max,
        }
    }
}

/// Validates a text tag against `rules`.
///
/// # Examples
/// ```
/// use filterform::tags::validation::{validate_text_tag, TextTagRules};
///
/// let rules = TextTagRules { max_length: Some(5), ..Default::default() };
/// assert!(validate_text_tag("rust", &rules).is_ok());
/// assert!(validate_text_tag("", &rules).is_err());
/// assert!(validate_text_tag("golang", &rules).is_err());
/// ```
pub fn validate_text_tag(tag: &str, rules: &TextTagRules) -> Result<(), TagValidationError> {
    if tag.is_empty() {
        return Err(TagValidationError::Empty);
    }

    let len = tag.chars().count();
    if let Some(min) = rules.min_length {
        if len < min {
            return Err(TagValidationError::TooShort(min));
        }
    }
    if let Some(max) = rules.max_length {
        if len > max {
            return Err(TagValidationError::TooLong(max));
        }
    }

    if let Some(pattern) = &rules.pattern {
        if !pattern.is_match(tag) {
            return Err(TagValidationError::PatternMismatch(pattern.as_str().to_string()));
        }
    }

    Ok(())
}

/// Parses and validates a number tag entry.
pub fn parse_number_tag(input: &str, rules: &NumberTagRules) -> Result<f64, TagValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(TagValidationError::Empty);
    }
    let value: f64 = trimmed
        .parse()
        .ok()
        .filter(|n: &f64| n.is_finite())
        .ok_or_else(|| TagValidationError::NotANumber(trimmed.to_string()))?;

    if let Some(min) = rules.min {
        if value < min {
            return Err(TagValidationError::BelowMin(min));
        }
    }
    if let Some(max) = rules.max {
        if value > max {
            return Err(TagValidationError::AboveMax(max));
        }
    }
    Ok(value)
}

/// Error type for tag entry validation failures.
#[derive(Debug, Clone, PartialEq)]
pub enum TagValidationError {
    /// Entry is empty
    Empty,
    /// Entry is shorter than the minimum length
    TooShort(usize),
    /// Entry is longer than the maximum length
    TooLong(usize),
    /// Entry does not match the configured pattern
    PatternMismatch(String),
    /// A pattern given to the rules is not a valid regular expression
    InvalidPattern(String),
    /// Entry is not a number
    NotANumber(String),
    /// Number is below the minimum
    BelowMin(f64),
    /// Number is above the maximum
    AboveMax(f64),
}

impl std::fmt::Display for TagValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TagValidationError::Empty => write!(f, "tag cannot be empty"),
            TagValidationError::TooShort(min) => {
                write!(f, "tag must be at least {} characters", min)
            }
            TagValidationError::TooLong(max) => {
                write!(f, "tag must be at most {} characters", max)
            }
            TagValidationError::PatternMismatch(pattern) => {
                write!(f, "tag does not match pattern '{}'", pattern)
            }
            TagValidationError::InvalidPattern(pattern) => {
                write!(f, "invalid tag pattern '{}'", pattern)
            }
            TagValidationError::NotANumber(input) => write!(f, "'{}' is not a number", input),
            TagValidationError::BelowMin(min) => write!(f, "tag must be at least {}", min),
            TagValidationError::AboveMax(max) => write!(f, "tag must be at most {}", max),
        }
    }
}

impl std::error::Error for TagValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_tags() {
        let rules = TextTagRules::default();
        assert!(validate_text_tag("foo", &rules).is_ok());
        assert!(validate_text_tag("foo bar", &rules).is_ok());
        assert_eq!(validate_text_tag("", &rules), Err(TagValidationError::Empty));
    }

    #[test]
    fn test_length_limits_count_characters() {
        let rules = TextTagRules {
            min_length: Some(2),
            max_length: Some(3),
            ..Default::default()
        };
        assert_eq!(validate_text_tag("a", &rules), Err(TagValidationError::TooShort(2)));
        assert!(validate_text_tag("äöü", &rules).is_ok());
        assert_eq!(validate_text_tag("abcd", &rules), Err(TagValidationError::TooLong(3)));
    }

    #[test]
    fn test_pattern_must_match_whole_tag() {
        let rules = TextTagRules::default().with_pattern("[a-z]+").unwrap();
        assert!(validate_text_tag("abc", &rules).is_ok());
        assert!(matches!(
            validate_text_tag("abc1", &rules),
            Err(TagValidationError::PatternMismatch(_))
        ));
    }

    #[test]
    fn test_invalid_pattern() {
        assert_eq!(
            TextTagRules::default().with_pattern("("),
            Err(TagValidationError::InvalidPattern("(".into()))
        );
    }

    #[test]
    fn test_rules_from_field_constraints() {
        let constraints = StringConstraints {
            min_length: Some(1),
            max_length: None,
            pattern: Some("[0-9]+".into()),
        };
        let rules = TextTagRules::try_from(&constraints).unwrap();
        assert_eq!(rules.min_length, Some(1));
        assert!(validate_text_tag("42", &rules).is_ok());
        assert!(validate_text_tag("4a", &rules).is_err());
    }

    #[test]
    fn test_number_parsing() {
        let rules = NumberTagRules {
            min: Some(0.0),
            max: Some(10.0),
        };
        assert_eq!(parse_number_tag(" 4.5 ", &rules), Ok(4.5));
        assert_eq!(parse_number_tag("0", &rules), Ok(0.0));
        assert_eq!(parse_number_tag("", &rules), Err(TagValidationError::Empty));
        assert!(matches!(
            parse_number_tag("four", &rules),
            Err(TagValidationError::NotANumber(_))
        ));
        assert!(matches!(
            parse_number_tag("NaN", &rules),
            Err(TagValidationError::NotANumber(_))
        ));
        assert_eq!(parse_number_tag("-1", &rules), Err(TagValidationError::BelowMin(0.0)));
        assert_eq!(parse_number_tag("11", &rules), Err(TagValidationError::AboveMax(10.0)));
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(TagValidationError::Empty.to_string(), "tag cannot be empty");
        assert_eq!(
            TagValidationError::NotANumber("x".into()).to_string(),
            "'x' is not a number"
        );
    }
}
