//! # Configuration
//!
//! Builder sessions are tuned by [`BuilderConfig`], loaded through [`confique`]
//! from, in priority order:
//!
//! 1. **Environment variables**: `FILTERFORM_MAX_DEPTH`, `FILTERFORM_SEED_NEW_FILTERS`,
//!    `FILTERFORM_TRIM_TAGS`
//! 2. **A TOML file** passed to [`BuilderConfig::load`]
//! 3. **Compiled defaults** via `#[config(default = ...)]`
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `max_depth` | `5` | Group levels allowed, counting the root |
//! | `seed_new_filters` | `false` | Pre-select the default field and operation on new filters |
//! | `trim_tags` | `true` | Trim whitespace from text tags before committing them |

use crate::error::{FilterError, Result};
use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for a builder session, stored in `filterform.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BuilderConfig {
    /// Maximum number of group levels, counting the root group.
    #[config(default = 5, env = "FILTERFORM_MAX_DEPTH")]
    pub max_depth: usize,

    /// Fill empty filters added by the builder with the first field and its
    /// first operation.
    #[config(default = false, env = "FILTERFORM_SEED_NEW_FILTERS")]
    pub seed_new_filters: bool,

    /// Trim surrounding whitespace from text tag entries.
    #[config(default = true, env = "FILTERFORM_TRIM_TAGS")]
    pub trim_tags: bool,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            max_depth: 5,
            seed_new_filters: false,
            trim_tags: true,
        }
    }
}

impl BuilderConfig {
    /// Load from the environment and, when given, a TOML file.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let mut builder = Self::builder().env();
        if let Some(path) = file {
            builder = builder.file(path);
        }
        builder.load()?.validated()
    }

    /// Reject settings the builder cannot honour.
    pub fn validated(self) -> Result<Self> {
        if self.max_depth == 0 {
            return Err(FilterError::InvalidConfig(
                "max_depth must be at least 1 (the root group)".to_string(),
            ));
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = BuilderConfig::default();
        assert_eq!(config.max_depth, 5);
        assert!(!config.seed_new_filters);
        assert!(config.trim_tags);
    }

    #[test]
    fn test_zero_depth_is_rejected() {
        let config = BuilderConfig {
            max_depth: 0,
            ..Default::default()
        };
        assert!(matches!(config.validated(), Err(FilterError::InvalidConfig(_))));
    }

    #[test]
    fn test_load_from_toml_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "max_depth = 3\nseed_new_filters = true").unwrap();

        let config = BuilderConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.max_depth, 3);
        assert!(config.seed_new_filters);
        assert!(config.trim_tags);
    }
}
