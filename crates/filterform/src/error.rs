use crate::path::NodePath;
use crate::validation::ValidationIssue;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Node at '{0}' is not a group")]
    NotAGroup(NodePath),

    #[error("Node at '{0}' is not a filter")]
    NotAFilter(NodePath),

    #[error("The root group cannot be removed")]
    RootNotRemovable,

    #[error("Node at '{0}' is the first of its group and cannot be removed")]
    NotRemovable(NodePath),

    #[error("Adding a group at '{path}' would exceed the maximum depth of {max_depth}")]
    DepthExceeded { path: NodePath, max_depth: usize },

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Duplicate field: {0}")]
    DuplicateField(String),

    #[error("Operation '{operation}' is not valid for field '{field}'")]
    InvalidOperationForField { field: String, operation: String },

    #[error("Field '{field}' has an invalid pattern '{pattern}'")]
    InvalidPattern { field: String, pattern: String },

    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    #[error("Filter tree has {} validation issue(s)", .0.len())]
    Invalid(Vec<ValidationIssue>),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Config error: {0}")]
    Config(#[from] confique::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FilterError>;

impl FilterError {
    /// True for every way a path can fail to address the expected node kind.
    pub fn is_invalid_path(&self) -> bool {
        matches!(
            self,
            FilterError::InvalidPath(_) | FilterError::NotAGroup(_) | FilterError::NotAFilter(_)
        )
    }
}
