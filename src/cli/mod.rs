use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

mod config;
mod serve;

pub use config::*;
pub use serve::*;

#[derive(Parser)]
#[command(name = "viewer-server")]
#[command(about = "Static content server for the DICOM viewer")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the viewer page and preprocessed assets
    Serve(ServeArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Args)]
pub struct ServeArgs {
    /// Port to bind the HTTP server
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Bind address
    #[arg(short, long)]
    pub bind: Option<String>,

    /// Directory containing index.html and the logo asset
    #[arg(long)]
    pub viewer_root: Option<PathBuf>,

    /// Directory populated by preprocess.py (metadata.json and images)
    #[arg(long)]
    pub processed_root: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the effective configuration
    Get,
    /// Show the configuration file location
    Path,
}

pub async fn run_cli() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .init();
    }

    match cli.command {
        Commands::Serve(args) => handle_serve_command(args, cli.config).await,
        Commands::Config { action } => handle_config_command(action, cli.config).await,
    }
}
