//! partial-dot CLI
//!
//! Renders solver snapshots of partial interpretations as Graphviz DOT.
//!
//! Usage:
//!   partial-dot render model.json --policy policy.json -o model.dot
//!   partial-dot render model.json --show-non-existent --scopes | dot -Tsvg
//!   partial-dot relations model.json --policy policy.json
//!
//! Logs go to stderr. `RUST_LOG` takes precedence over `-v`.

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use partial_dot_graph::{default_visibility, render, VisibilityPolicy};
use partial_dot_semantics::{RelationDetail, SemanticModel};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "partial-dot")]
#[command(version, about = "Render four-valued partial interpretations as Graphviz DOT")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a snapshot to DOT
    Render(RenderArgs),

    /// List relations with their arity, kind and visibility
    Relations(RelationsArgs),
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Snapshot JSON file
    snapshot: PathBuf,

    #[command(flatten)]
    display: DisplayArgs,

    /// Write to this file instead of stdout
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,

    /// Emit `{"source": ..., "lineCount": ...}` instead of bare DOT
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct RelationsArgs {
    /// Snapshot JSON file
    snapshot: PathBuf,

    /// Visibility policy JSON file
    #[arg(long, short = 'p')]
    policy: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct DisplayArgs {
    /// Visibility policy JSON file
    #[arg(long, short = 'p')]
    policy: Option<PathBuf>,

    /// Also draw nodes whose `exists` fact is FALSE
    #[arg(long)]
    show_non_existent: bool,

    /// Append the count label to node names
    #[arg(long)]
    scopes: bool,

    /// Show qualified names instead of simple names
    #[arg(long)]
    no_abbreviate: bool,
}

impl DisplayArgs {
    /// Policy file (or the default policy) with the command-line flags applied.
    fn load(&self) -> Result<VisibilityPolicy> {
        let mut policy = load_policy(self.policy.as_deref())?;
        if self.show_non_existent {
            policy.show_non_existent = true;
        }
        if self.scopes {
            policy.scopes = true;
        }
        if self.no_abbreviate {
            policy.abbreviate = false;
        }
        Ok(policy)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Render(args) => run_render(&args),
        Command::Relations(args) => run_relations(&args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

// ============================================================================
// Loading
// ============================================================================

fn load_model(path: &Path) -> Result<SemanticModel> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read snapshot {}", path.display()))?;
    let model = SemanticModel::from_json(&json)
        .with_context(|| format!("Invalid snapshot {}", path.display()))?;
    debug!(
        nodes = model.node_count(),
        relations = model.relation_count(),
        "loaded snapshot"
    );
    Ok(model)
}

fn load_policy(path: Option<&Path>) -> Result<VisibilityPolicy> {
    let Some(path) = path else {
        return Ok(VisibilityPolicy::default());
    };
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read policy {}", path.display()))?;
    VisibilityPolicy::from_json(&json)
        .with_context(|| format!("Invalid policy {}", path.display()))
}

// ============================================================================
// Commands
// ============================================================================

fn run_render(args: &RenderArgs) -> Result<()> {
    let model = load_model(&args.snapshot)?;
    let policy = args.display.load()?;
    let source = render(&model, &policy);
    info!(lines = source.line_count(), "rendered {}", args.snapshot.display());

    let mut text = if args.json {
        serde_json::to_string_pretty(&source).context("Failed to serialize output")?
    } else {
        source.into_parts().0
    };
    text.push('\n');

    match &args.output {
        Some(path) => fs::write(path, text)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => print!("{text}"),
    }
    Ok(())
}

fn run_relations(args: &RelationsArgs) -> Result<()> {
    let model = load_model(&args.snapshot)?;
    let policy = load_policy(args.policy.as_deref())?;
    print!("{}", relation_table(&model, &policy));
    Ok(())
}

fn describe(detail: &RelationDetail) -> String {
    match detail {
        RelationDetail::Class {
            abstract_class: true,
        } => "abstract class".to_string(),
        RelationDetail::Class {
            abstract_class: false,
        } => "class".to_string(),
        RelationDetail::Reference { containment: true } => "containment".to_string(),
        RelationDetail::Reference { containment: false } => "reference".to_string(),
        RelationDetail::Opposite {
            container: true,
            opposite,
        } => format!("container of {opposite}"),
        RelationDetail::Opposite {
            container: false,
            opposite,
        } => format!("opposite of {opposite}"),
        RelationDetail::Predicate { error: true } => "error predicate".to_string(),
        RelationDetail::Predicate { error: false } => "predicate".to_string(),
        RelationDetail::Builtin => "builtin".to_string(),
    }
}

/// One line per relation: name, arity, kind, effective and default visibility.
fn relation_table(model: &SemanticModel, policy: &VisibilityPolicy) -> String {
    let width = model
        .relations()
        .map(|relation| relation.name.len())
        .max()
        .unwrap_or(0);
    model
        .relations()
        .map(|relation| {
            let visibility = policy.visibility_of(relation);
            let default = default_visibility(relation);
            let marker = if visibility == default { "" } else { " *" };
            format!(
                "{:<width$}  {}  {:<22}  {:<4} (default {}){marker}\n",
                relation.name,
                relation.arity,
                describe(&relation.detail),
                visibility.as_str(),
                default.as_str(),
            )
        })
        .collect()
}
