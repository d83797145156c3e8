mod cli;
mod context;
mod handlers;
mod output;

use anyhow::Context as _;
use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use context::CliContext;
use taskboard_core::AppConfig;
use taskboard_domain::IdGenerator;
use taskboard_persistence::{BoardRepository, FileKeyValueStore};
use taskboard_tui::{App, BoardController};

fn init_logging() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("TASKBOARD_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::WARN)
            .init();
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging()?;

    let cli = Cli::parse();

    if let Some(Commands::Completions { shell }) = cli.command {
        clap_complete::generate(shell, &mut Cli::command(), "taskboard", &mut std::io::stdout());
        return Ok(());
    }

    let config = AppConfig::load();
    let dir = cli
        .store
        .or_else(|| config.effective_data_dir())
        .context("no data directory available; pass --store")?;
    let key = cli
        .key
        .filter(|key| !key.trim().is_empty())
        .unwrap_or_else(|| config.effective_storage_key().to_string());
    FileKeyValueStore::new(&dir)
        .path_for(&key)
        .with_context(|| format!("cannot store board under key {key:?}"))?;
    let ids = IdGenerator::new(config.id_strategy);
    tracing::info!("Using board '{}' in {}", key, dir.display());

    match cli.command {
        None => {
            let repository = BoardRepository::new(FileKeyValueStore::new(&dir), key);
            let mut app = App::new(BoardController::startup(repository, ids));
            app.run().await?;
        }
        Some(command) => {
            let mut ctx = CliContext::load(&dir, &key, ids);
            handlers::handle(&mut ctx, command)?;
        }
    }

    Ok(())
}
