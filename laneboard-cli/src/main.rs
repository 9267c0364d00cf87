use clap::Parser;
use laneboard_config::{BoardConfig, ConfigProvider};
use laneboard_kanban::KanbanError;
use std::process::ExitCode;

mod cli;
mod commands;

use cli::Cli;
use commands::EXIT_ERROR;

fn main() -> ExitCode {
    let cli = Cli::parse();
    configure_logging(cli.verbose, cli.debug, cli.quiet);

    let code = match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{:#}", e);
            if is_retryable(&e) {
                eprintln!("The board is being written by another laneboard process, try again");
            }
            EXIT_ERROR
        }
    };
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}

fn is_retryable(error: &anyhow::Error) -> bool {
    error
        .chain()
        .filter_map(|cause| cause.downcast_ref::<KanbanError>())
        .any(KanbanError::is_retryable)
}

fn run(cli: &Cli) -> anyhow::Result<i32> {
    let config = load_config(cli)?;
    tracing::debug!(
        storage_dir = %config.storage_dir.display(),
        storage_key = %config.storage_key,
        "Opening board"
    );
    commands::run(&cli.command, &config, cli.format)
}

fn load_config(cli: &Cli) -> anyhow::Result<BoardConfig> {
    let mut provider = ConfigProvider::new();
    if let Some(path) = &cli.config {
        provider = provider.with_file(path);
    }
    let mut config = provider.load()?;
    if let Some(dir) = &cli.dir {
        config.storage_dir = dir.clone();
    }
    Ok(config)
}

fn configure_logging(verbose: bool, debug: bool, quiet: bool) {
    use tracing::Level;
    use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

    let log_level = if quiet {
        Level::ERROR
    } else if debug {
        Level::DEBUG
    } else if verbose {
        Level::TRACE
    } else {
        Level::WARN
    };

    registry()
        .with(EnvFilter::new(format!("figment=warn,{log_level}")))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
