use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use scrollspy_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "scrollspy")]
#[command(version, about = "Scroll-synced section navigation for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of demo sections
    #[arg(short = 'n', long)]
    sections: Option<usize>,

    /// Items per demo section
    #[arg(short = 'i', long)]
    items: Option<usize>,

    /// Threshold adjustment in lines, compensating for fixed chrome
    #[arg(long)]
    offset_top: Option<f64>,

    /// Disable smooth scrolling
    #[arg(long)]
    no_smooth: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the demo TUI
    Run,
    /// Print the resolved configuration and its file path
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = AppConfig::load()?;

    // Initialize logging (RUST_LOG wins over the configured level)
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    // Command-line overrides
    if let Some(sections) = cli.sections {
        config.demo.sections = sections;
    }
    if let Some(items) = cli.items {
        config.demo.items_per_section = items;
    }
    if let Some(offset_top) = cli.offset_top {
        config.ui.offset_top = offset_top;
    }
    if cli.no_smooth {
        config.ui.scroll.smooth_enabled = false;
    }

    tracing::debug!(
        sections = config.demo.sections,
        items = config.demo.items_per_section,
        offset_top = config.ui.offset_top,
        smooth = config.ui.scroll.smooth_enabled,
        "starting with resolved configuration"
    );

    match cli.command {
        Some(Commands::Run) | None => commands::run::run(config),
        Some(Commands::Config) => commands::config::run(&config),
    }
}
