//! # Filterform CLI Architecture
//!
//! The `filterform` binary is a thin host harness around the `filterform`
//! library. It exists to exercise a builder session from the shell: inspect
//! operation catalogs, check stored filter trees against a field file and
//! replay scripted edits. This file only invokes `cli::run()` and handles
//! process termination.
//!
//! ## Workspace Structure
//!
//! - `crates/filterform/`: Core library, UI-agnostic builder session
//! - `crates/filterform-cli/`: This CLI tool, depends on the `filterform` library
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/filterform-cli/src/cli/)                 │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Edit script parsing (script.rs)                          │
//! │  - Command handlers + output (commands.rs)                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Session (crates/filterform/src/builder.rs)                 │
//! │  - Path-addressed edits, returns structured results         │
//! │  - No knowledge of stdout/stderr or process exits           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Testing Approach
//!
//! - **Library (`crates/filterform/`)**: unit tests next to each module plus
//!   session-level integration tests.
//! - **CLI (`tests/`)**: runs the built binary with `assert_cmd` and checks
//!   stdout, stderr and exit codes.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
