use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use connect_four::config::AppConfig;
use connect_four::game::GameEngine;
use connect_four::ui::ConsoleApp;

/// Play Connect Four on the console.
#[derive(Parser)]
#[command(name = "connect_four", about = "Two-player Connect Four on the console")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Tracing filter, overriding the config file (RUST_LOG still wins)
    #[arg(long)]
    log: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Parse the config before logging is up so its filter can apply; a
    // missing file is reported once the subscriber exists.
    let config_missing = !cli.config.exists();
    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    let filter = cli.log.as_deref().unwrap_or(&config.log_filter);
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    if config_missing {
        info!(path = %cli.config.display(), "config file not found, using defaults");
    }

    let (player_one, player_two) = config.players();
    info!(%player_one, %player_two, "starting game");

    let mut app = ConsoleApp::new(GameEngine::new(player_one, player_two));
    let stdin = io::stdin();
    app.run(stdin.lock(), &mut io::stdout())
        .context("running console game")?;

    info!(status = %app.engine().status(), "game over");
    Ok(())
}
