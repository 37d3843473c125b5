use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "filterform",
    bin_name = "filterform",
    version,
    disable_help_subcommand = true
)]
#[command(about = "Build, check and replay structured filter expressions", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Builder settings file (TOML)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the operations offered for a field type
    #[command(display_order = 1)]
    Ops {
        /// Field type: string, number, boolean, datetime or uuid
        field_type: String,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Validate a submitted filter tree against a field file
    #[command(display_order = 2)]
    Check {
        /// JSON array of field descriptors
        fields: PathBuf,
        /// JSON filter tree, as produced by submit
        tree: PathBuf,
    },
    /// Apply an edit script to a fresh session and print the result
    #[command(display_order = 3)]
    Replay {
        /// JSON array of field descriptors
        fields: PathBuf,
        /// Edit script, one edit per line
        script: PathBuf,

        /// Fail unless the final tree passes validation
        #[arg(long)]
        strict: bool,
    },
}
