//! # Filterform Architecture
//!
//! Filterform is a **UI-agnostic filter-expression builder**. A host application
//! renders the controls; this library owns the tree being edited, decides which
//! edits are legal and produces the serialized filter expression on submit.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Host / CLI (filterform-cli)                                │
//! │  - Renders controls, reads input, prints results            │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Session (builder.rs)                                       │
//! │  - One mutable tree, addressed by NodePath                  │
//! │  - Enforces depth, removal and field/operation rules        │
//! │  - Emits snapshots on submit                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Model (tree.rs, fields.rs, operations.rs, value.rs)        │
//! │  - Plain data plus pure catalog lookups                     │
//! │  - No listeners, no I/O                                     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Addressing
//!
//! Every node is reached by a [`path::NodePath`]: the child indices walked from
//! the root group. Paths print dotted (`1.0`), the root prints as `.`.
//! Removing a child shifts the paths of its later siblings, so hosts should
//! re-derive paths from the tree after structural edits.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! Nothing in this crate writes to stdout/stderr or assumes a terminal.
//! Diagnostics go through the [`log`] facade; the binary decides whether and
//! where they are printed.
//!
//! ## Module Overview
//!
//! - [`builder`]: The editing session, entry point for all mutations
//! - [`tree`]: Group and filter nodes
//! - [`path`]: Node addressing
//! - [`fields`]: Field descriptors and the field set
//! - [`operations`]: Operation catalog, arity and value-input selection
//! - [`value`]: Filter values
//! - [`validation`]: Submit-time checks against field constraints
//! - [`snapshot`]: The serialized filter expression
//! - [`tags`]: Tag collections and their entry glue
//! - [`config`]: Session configuration
//! - [`error`]: Error types

pub mod builder;
pub mod config;
pub mod error;
pub mod fields;
pub mod operations;
pub mod path;
pub mod snapshot;
pub mod tags;
pub mod tree;
pub mod validation;
pub mod value;

pub use builder::FilterBuilder;
pub use config::BuilderConfig;
pub use error::{FilterError, Result};
pub use fields::{FieldDescriptor, FieldSet, FieldType};
pub use operations::Operation;
pub use path::NodePath;
pub use snapshot::{GroupSnapshot, SnapshotNode};
pub use tree::{Conjunction, FilterNode, GroupNode, Node};
pub use value::{FilterValue, Scalar};
