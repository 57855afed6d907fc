//! posthorn - Entry Point

use clap::{Args as ClapArgs, Parser, Subcommand};
use posthorn::collection::CollectionTree;
use posthorn::config::{self, KeyBindings, ResolvedConfig};
use posthorn::model::AppError;
use posthorn::state::AppState;
use posthorn::view::{self, DialogOptions};
use std::path::PathBuf;
use tracing::info;

/// posthorn - browse HTTP request collections and create new requests
#[derive(Parser, Debug)]
#[command(name = "posthorn")]
#[command(version)]
#[command(about = "TUI browser for HTTP request collections")]
#[command(args_conflicts_with_subcommands = true)]
pub struct Args {
    /// Collection directory (defaults to the configured collection or ".")
    pub collection: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Run a single tool instead of the browser
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Open only the new-request dialog and print the result as JSON
    New(NewArgs),
}

/// Options of `posthorn new`
#[derive(ClapArgs, Debug, Default)]
pub struct NewArgs {
    /// Initial directory, relative to the collection root
    #[arg(short, long)]
    pub directory: Option<String>,

    /// Initial title
    #[arg(short, long)]
    pub title: Option<String>,

    /// Initial description
    #[arg(long)]
    pub description: Option<String>,

    /// Collection root used to detect duplicate file names
    #[arg(long)]
    pub collection: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Load configuration with full precedence chain:
/// Defaults → Config File → Env Vars → CLI Args
fn resolve_config(
    config_path: Option<PathBuf>,
    collection_override: Option<PathBuf>,
) -> Result<ResolvedConfig, config::ConfigError> {
    let config_file = config::load_config_with_precedence(config_path)?;
    let merged = config::merge_config(config_file);
    let with_env = config::apply_env_overrides(merged);
    Ok(config::apply_cli_overrides(with_env, collection_override))
}

/// Configuration, logging and key bindings shared by both modes.
fn prepare(
    config_path: Option<PathBuf>,
    collection: Option<PathBuf>,
) -> Result<(ResolvedConfig, KeyBindings), AppError> {
    let resolved = resolve_config(config_path, collection)?;
    posthorn::logging::init(&resolved.log_file_path)?;
    info!(config = ?resolved, "Configuration loaded and resolved");

    let key_bindings = config::key_bindings(&resolved)?;
    Ok((resolved, key_bindings))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    match args.command {
        Some(Command::New(new_args)) => run_new(new_args),
        None => run_browser(args.config, args.collection),
    }
}

fn run_browser(
    config_path: Option<PathBuf>,
    collection: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let (resolved, key_bindings) = prepare(config_path, collection)?;
    let tree = CollectionTree::load(&resolved.collection).map_err(AppError::from)?;
    info!(requests = tree.request_count(), "Collection ready");

    view::run_app(AppState::new(tree), key_bindings, resolved.notification_timeout)?;
    Ok(())
}

fn run_new(args: NewArgs) -> Result<(), Box<dyn std::error::Error>> {
    let (resolved, key_bindings) = prepare(args.config, args.collection)?;
    let options = DialogOptions {
        collection: resolved.collection.clone(),
        directory: args.directory,
        title: args.title,
        description: args.description,
    };

    match view::run_new_request_dialog(options, key_bindings, resolved.notification_timeout)? {
        Some(data) => {
            println!("{}", serde_json::to_string(&data)?);
            Ok(())
        }
        None => {
            info!("New request dialog cancelled");
            std::process::exit(1);
        }
    }
}
