//! # CLI Layer
//!
//! Parses arguments, installs the logger, loads builder settings and routes
//! each subcommand to its handler. Handlers print to stdout; failures bubble
//! up as `anyhow` errors and `main` turns them into exit code 1.

use super::script::parse_script;
use super::setup::{Cli, Commands};
use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use filterform::fields::{FieldSet, FieldType};
use filterform::operations::operations_for;
use filterform::{BuilderConfig, FilterBuilder, FilterError, GroupSnapshot};
use log::{debug, info};
use std::path::Path;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let config = BuilderConfig::load(cli.config.as_deref()).context("loading builder settings")?;
    debug!("builder settings: {:?}", config);

    match cli.command {
        Commands::Ops { field_type, json } => handle_ops(&field_type, json),
        Commands::Check { fields, tree } => handle_check(config, &fields, &tree),
        Commands::Replay {
            fields,
            script,
            strict,
        } => handle_replay(config, &fields, &script, strict),
    }
}

fn init_logger(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .try_init();
}

fn handle_ops(field_type: &str, json: bool) -> Result<()> {
    let field_type: FieldType = field_type.parse().map_err(|e: String| anyhow!(e))?;
    let ops = operations_for(field_type);

    if json {
        let entries: Vec<_> = ops
            .iter()
            .map(|op| serde_json::json!({ "operation": op, "title": op.title() }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        for op in ops {
            println!("{:<12}{}", op.as_str(), op.title());
        }
    }
    Ok(())
}

fn handle_check(config: BuilderConfig, fields: &Path, tree: &Path) -> Result<()> {
    let fields = load_fields(fields)?;
    let text = std::fs::read_to_string(tree)
        .with_context(|| format!("reading {}", tree.display()))?;
    let snapshot = GroupSnapshot::from_json(&text)
        .with_context(|| format!("parsing {}", tree.display()))?;

    let builder = FilterBuilder::from_snapshot(fields, config, snapshot)?;
    let issues = builder.validate();
    if issues.is_empty() {
        println!("ok");
        return Ok(());
    }
    for issue in &issues {
        println!("{}", issue);
    }
    bail!("{} validation issue(s)", issues.len())
}

fn handle_replay(config: BuilderConfig, fields: &Path, script: &Path, strict: bool) -> Result<()> {
    let fields = load_fields(fields)?;
    let text = std::fs::read_to_string(script)
        .with_context(|| format!("reading {}", script.display()))?;
    let edits = parse_script(&text).with_context(|| format!("parsing {}", script.display()))?;

    let mut builder = FilterBuilder::new(fields, config);
    for (n, edit) in edits.iter().enumerate() {
        edit.apply(&mut builder)
            .with_context(|| format!("edit {} ({:?})", n + 1, edit))?;
    }
    info!("replayed {} edit(s)", edits.len());

    let snapshot = if strict {
        match builder.submit_validated() {
            Ok(snapshot) => snapshot,
            Err(FilterError::Invalid(issues)) => {
                for issue in &issues {
                    eprintln!("{}", issue);
                }
                bail!("{} validation issue(s)", issues.len());
            }
            Err(e) => return Err(e.into()),
        }
    } else {
        builder.submit()
    };
    println!("{}", snapshot.to_json_pretty()?);
    Ok(())
}

fn load_fields(path: &Path) -> Result<FieldSet> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let fields = FieldSet::from_json(&text).with_context(|| format!("parsing {}", path.display()))?;
    if fields.is_empty() {
        bail!("{} declares no fields", path.display());
    }
    Ok(fields)
}
