mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use scrapbook::Config;

#[derive(Parser)]
#[command(name = "scrapbook")]
#[command(version, about = "Scrapbook journal - render and browse the journal from the terminal", long_about = None)]
struct Cli {
    /// Configuration file
    #[arg(short, long, global = true, default_value = "scrapbook.toml")]
    config: PathBuf,

    /// Data directory holding the JSON collections (overrides the config file)
    #[arg(short, long, global = true)]
    data: Option<PathBuf>,

    /// Fixed seed for scrapbook decorations
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render one route and print its HTML
    Render {
        /// Location hash, e.g. "#/journal/abc-123"
        #[arg(default_value = "#/")]
        hash: String,

        /// Print the whole page instead of the content root
        #[arg(long)]
        full: bool,
    },

    /// Browse interactively; commands are read from stdin
    Browse,

    /// List registered route patterns
    Routes,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load(&cli.config)?.with_env_overrides()?;
    if let Some(dir) = &cli.data {
        config.data.dir = dir.clone();
    }
    if cli.seed.is_some() {
        config.decor.seed = cli.seed;
    }
    Ok(config)
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();
    init_tracing();
    let config = load_config(&cli)?;

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            match cli.command {
                Commands::Render { hash, full } => commands::render::execute(config, &hash, full).await,
                Commands::Browse => commands::browse::execute(config).await,
                Commands::Routes => commands::routes::execute(config),
            }
        })
}
