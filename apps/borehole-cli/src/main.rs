//! Borehole mesh command-line interface.
//!
//! Generates the peridynamic point cloud of a borehole and writes the node
//! and nodeset listings consumed by the solver.

mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Peridynamic mesh generator for borehole domains
#[derive(Parser)]
#[command(name = "borehole")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Peridynamic mesh generator for borehole domains", long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the mesh and write node/nodeset listings
    Generate(commands::generate::GenerateArgs),
    /// Validate a parameter file and print the resolved values
    Validate(commands::validate::ValidateArgs),
    /// Print the reference parameters as JSON
    Reference,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Generate(args) => commands::generate::execute(args),
        Commands::Validate(args) => commands::validate::execute(args),
        Commands::Reference => commands::reference::execute(),
    }
}
