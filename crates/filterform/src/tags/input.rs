//! Pending-entry glue between a text or number field and a tag collection.
//!
//! The entry keeps what the user is typing in a buffer. Two signals drive it:
//!
//! - **commit** (end-of-entry key): the buffer becomes a tag if it is
//!   non-empty, valid and not already present; the buffer is then cleared.
//! - **backspace** on an empty buffer: the last tag is removed. With text
//!   still in the buffer the keystroke only edits the text, so a tag is never
//!   deleted while the user is typing.
//!
//! A disabled entry ignores both signals.

use super::validation::{parse_number_tag, validate_text_tag, NumberTagRules, TagValidationError, TextTagRules};
use super::TagCollection;
use crate::config::BuilderConfig;

/// What a commit did.
#[derive(Debug, Clone, PartialEq)]
pub enum CommitOutcome {
    Added,
    /// The value was already in the collection; the buffer is kept.
    Duplicate,
    /// The buffer did not pass validation; the buffer is kept.
    Rejected(TagValidationError),
    Disabled,
}

#[derive(Debug, Clone, Default)]
pub struct TextTagEntry {
    buffer: String,
    rules: TextTagRules,
    trim: bool,
    disabled: bool,
}

impl TextTagEntry {
    pub fn new(rules: TextTagRules) -> Self {
        Self {
            buffer: String::new(),
            rules,
            trim: true,
            disabled: false,
        }
    }

    pub fn from_config(rules: TextTagRules, config: &BuilderConfig) -> Self {
        Self::new(rules).with_trim(config.trim_tags)
    }

    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn set_buffer(&mut self, text: impl Into<String>) {
        if !self.disabled {
            self.buffer = text.into();
        }
    }

    pub fn commit(&mut self, tags: &mut TagCollection<String>) -> CommitOutcome {
        if self.disabled {
            return CommitOutcome::Disabled;
        }
        let tag = if self.trim {
            self.buffer.trim().to_string()
        } else {
            self.buffer.clone()
        };
        if let Err(e) = validate_text_tag(&tag, &self.rules) {
            return CommitOutcome::Rejected(e);
        }
        if !tags.add_tag(tag) {
            return CommitOutcome::Duplicate;
        }
        self.buffer.clear();
        CommitOutcome::Added
    }

    /// Returns the removed tag, if the keystroke removed one.
    pub fn backspace(&mut self, tags: &mut TagCollection<String>) -> Option<String> {
        if self.disabled || !self.buffer.is_empty() {
            return None;
        }
        tags.remove_last_tag()
    }
}

#[derive(Debug, Clone, Default)]
pub struct NumberTagEntry {
    buffer: String,
    rules: NumberTagRules,
    disabled: bool,
}

impl NumberTagEntry {
    pub fn new(rules: NumberTagRules) -> Self {
        Self {
            buffer: String::new(),
            rules,
            disabled: false,
        }
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn set_buffer(&mut self, text: impl Into<String>) {
        if !self.disabled {
            self.buffer = text.into();
        }
    }

    pub fn commit(&mut self, tags: &mut TagCollection<f64>) -> CommitOutcome {
        if self.disabled {
            return CommitOutcome::Disabled;
        }
        let value = match parse_number_tag(&self.buffer, &self.rules) {
            Ok(v) => v,
            Err(e) => return CommitOutcome::Rejected(e),
        };
        if !tags.add_tag(value) {
            return CommitOutcome::Duplicate;
        }
        self.buffer.clear();
        CommitOutcome::Added
    }

    pub fn backspace(&mut self, tags: &mut TagCollection<f64>) -> Option<f64> {
        if self.disabled || !self.buffer.is_empty() {
            return None;
        }
        tags.remove_last_tag()
    }
}
