//! Tag collections.
//!
//! A tag collection is an ordered, duplicate-free list of scalar values
//! (text or numbers) edited one tag at a time. Hosts use it for free-form
//! multi-value entry, most notably the value of `in`/`nin` filters.
//!
//! ## Change Notification
//!
//! A listener registered with [`TagCollection::on_change`] is called
//! synchronously after every mutation that changes the collection. It
//! receives the full updated list, or `None` once the collection is empty.
//! Calls that change nothing (adding a duplicate, removing an absent tag,
//! removing the last tag of an empty collection) do not notify.
//!
//! ## Entry Glue
//!
//! See [`input`] for the pending-entry buffer that turns keystrokes into
//! collection edits, and [`validation`] for the entry rules.

pub mod input;
pub mod validation;

use crate::value::{FilterValue, Scalar};
use log::debug;

pub use input::{CommitOutcome, NumberTagEntry, TextTagEntry};
pub use validation::{NumberTagRules, TagValidationError, TextTagRules};

/// Receives the updated tag list, or `None` when the collection became empty.
pub type TagListener<T> = Box<dyn FnMut(Option<&[T]>)>;

pub struct TagCollection<T> {
    tags: Vec<T>,
    on_change: Option<TagListener<T>>,
}

pub type TextTags = TagCollection<String>;
pub type NumberTags = TagCollection<f64>;

impl<T: std::fmt::Debug> std::fmt::Debug for TagCollection<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TagCollection")
            .field("tags", &self.tags)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}

impl<T> Default for TagCollection<T> {
    fn default() -> Self {
        Self {
            tags: Vec::new(),
            on_change: None,
        }
    }
}

impl<T: PartialEq + Clone> TagCollection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from existing values, dropping later duplicates.
    pub fn with_tags(values: impl IntoIterator<Item = T>) -> Self {
        let mut tags: Vec<T> = Vec::new();
        for value in values {
            if !tags.contains(&value) {
                tags.push(value);
            }
        }
        Self {
            tags,
            on_change: None,
        }
    }

    pub fn on_change(&mut self, listener: impl FnMut(Option<&[T]>) + 'static) {
        self.on_change = Some(Box::new(listener));
    }

    pub fn tags(&self) -> &[T] {
        &self.tags
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn contains(&self, tag: &T) -> bool {
        self.tags.contains(tag)
    }

    /// Append `tag` unless an equal tag is already present.
    ///
    /// Returns `true` if the collection changed.
    pub fn add_tag(&mut self, tag: T) -> bool {
        if self.tags.contains(&tag) {
            return false;
        }
        self.tags.push(tag);
        debug!("tag added ({} total)", self.tags.len());
        self.notify();
        true
    }

    /// Remove every tag equal to `tag`.
    ///
    /// Returns `true` if the collection changed.
    pub fn remove_tag(&mut self, tag: &T) -> bool {
        let before = self.tags.len();
        self.tags.retain(|t| t != tag);
        if self.tags.len() == before {
            return false;
        }
        debug!("tag removed ({} left)", self.tags.len());
        self.notify();
        true
    }

    /// Remove and return the most recently added tag.
    pub fn remove_last_tag(&mut self) -> Option<T> {
        let removed = self.tags.pop()?;
        debug!("last tag removed ({} left)", self.tags.len());
        self.notify();
        Some(removed)
    }

    /// The collection as the value of an `in`/`nin` filter.
    pub fn to_filter_value(&self) -> FilterValue
    where
        T: Into<Scalar>,
    {
        FilterValue::Many(self.tags.iter().cloned().map(Into::into).collect())
    }

    fn notify(&mut self) {
        if let Some(listener) = self.on_change.as_mut() {
            if self.tags.is_empty() {
                listener(None);
            } else {
                listener(Some(&self.tags));
            }
        }
    }
}
