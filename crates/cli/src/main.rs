//! Enqueue Routes CLI - resolve a host manifest into the queue routing table

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use enqueue_routing_container::ContainerManifest;
use enqueue_routing_core::application::{BuildQueueMetaRegistryPass, PassOutcome};
use enqueue_routing_core::domain::QueueMetaRegistry;
use serde::Serialize;
use std::path::PathBuf;
use tabled::{Table, Tabled};
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "enqueue-routes")]
#[command(about = "Build the queue -> processors routing table", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Container manifest (JSON)
    #[arg(short, long, env = "ENQUEUE_MANIFEST")]
    manifest: PathBuf,

    /// Overrides the default queue name parameter of the manifest
    #[arg(long, env = "ENQUEUE_DEFAULT_QUEUE_NAME")]
    default_queue: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the whole routing table
    Resolve,

    /// Print processors bound to the given client queues
    Queue {
        /// Client queue names (all queues when omitted)
        queue_names: Vec<String>,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Serialize, Tabled)]
struct RouteRow {
    queue: String,
    position: usize,
    processor: String,
}

fn init_logging() -> Result<()> {
    let log_format = std::env::var("ENQUEUE_LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("enqueue_routing=info,enqueue_routes=info"))
        .context("Failed to create env filter")?;

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().pretty().with_writer(std::io::stderr))
                .init();
        }
    }

    Ok(())
}

fn rows(registry: &QueueMetaRegistry) -> Vec<RouteRow> {
    registry
        .iter()
        .flat_map(|(queue, meta)| {
            meta.processors
                .iter()
                .enumerate()
                .map(move |(position, processor)| RouteRow {
                    queue: queue.to_string(),
                    position,
                    processor: processor.clone(),
                })
        })
        .collect()
}

fn print_registry(registry: &QueueMetaRegistry, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(registry)?);
        }
        OutputFormat::Table => {
            if registry.is_empty() {
                println!("{}", "No queue bindings resolved".yellow());
                return Ok(());
            }
            println!(
                "{}",
                format!(
                    "✓ {} queue(s), {} binding(s)",
                    registry.len(),
                    registry.binding_count()
                )
                .green()
                .bold()
            );
            println!();
            println!("{}", Table::new(rows(registry)));
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging()?;

    info!("enqueue-routes v{} starting...", VERSION);

    let manifest = ContainerManifest::load(&cli.manifest)
        .with_context(|| format!("Failed to load manifest {}", cli.manifest.display()))?;
    let mut container = manifest.into_container();

    let mut pass = BuildQueueMetaRegistryPass::new();
    if let Some(default_queue) = cli.default_queue {
        container.set_parameter(pass.config().default_queue_parameter.clone(), default_queue);
    }

    let outcome = pass
        .process(&mut container)
        .context("Failed to build queue meta registry")?;

    let registry = match outcome {
        PassOutcome::Completed { registry } => registry,
        PassOutcome::Skipped => {
            println!(
                "{}",
                "No registry service configured, routing table not built".yellow()
            );
            return Ok(());
        }
    };

    match cli.command {
        Commands::Resolve => print_registry(&registry, cli.format)?,
        Commands::Queue { queue_names } => {
            let selected = registry
                .select(queue_names.as_slice())
                .context("Unknown client queue")?;
            print_registry(&selected, cli.format)?;
        }
    }

    Ok(())
}
