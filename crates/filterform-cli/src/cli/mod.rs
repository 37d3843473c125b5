//! # CLI Behavior
//!
//! This is **one possible host** for a filterform session, not the builder
//! itself. The CLI is the only place that knows about terminal I/O, exit
//! codes and output formatting.
//!
//! ## Commands
//!
//! - `filterform ops <type>`: the operation catalog for a field type, default first.
//! - `filterform check <fields.json> <tree.json>`: load a submitted tree and
//!   report validation issues. Exits non-zero when there are any.
//! - `filterform replay <fields.json> <script>`: start a fresh session, apply
//!   an edit script (see [`script`]) and print the submitted snapshot.
//!
//! ## Logging
//!
//! Diagnostics go to stderr through `env_logger`. `--verbose` raises the
//! default level to `debug`; `RUST_LOG` overrides both.
//!
//! ## Module Structure
//!
//! - `commands`: Per-command handlers that drive the library and print results
//! - `script`: Edit script parsing
//! - `setup`: Argument parsing via clap, help text

mod commands;
pub mod script;
pub mod setup;

pub use commands::run;
