//! Interactive Menu - multi-level console menu runner
//!
//! Runs one of the built-in menus or a TOML-defined one against the
//! terminal and reports the confirmed selections.

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use interactive_menu::{Cli, Demo, MenuDefinition, Selections, Terminal, flows};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use tracing::{Level, error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.sample_config {
        print!("{}", MenuDefinition::sample());
        return Ok(());
    }

    let _guard = setup_logging(&cli)?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "Interactive menu starting"
    );

    let use_color = !cli.no_color
        && std::env::var_os("NO_COLOR").is_none()
        && std::io::stdout().is_terminal();
    let terminal = Terminal::new(use_color);

    let outcome = match &cli.config {
        Some(path) => {
            info!(config_file = %path.display(), "Loading menu definition");
            let definition = MenuDefinition::load_from_file(path)?;
            flows::definition_menu(&definition, terminal)
        }
        None => match cli.demo {
            Demo::Fruit => flows::fruit_menu(terminal),
            Demo::Charts => flows::chart_menu(terminal),
        },
    };

    let selections = match outcome {
        Ok(selections) => selections,
        Err(e) => {
            error!(error = %e, "Menu session failed");
            return Err(e.into());
        }
    };

    report(&cli, selections.as_ref())
}

/// Print the confirmed selections in the requested format
fn report(cli: &Cli, selections: Option<&Selections>) -> Result<()> {
    let Some(selections) = selections else {
        info!("User cancelled the menu");
        return Ok(());
    };

    info!(entries = selections.len(), "Selections confirmed");
    if cli.json {
        println!("{}", serde_json::to_string_pretty(selections)?);
    }
    Ok(())
}

/// Log file path inside `log_dir`, named after the definition file when one is used
fn get_log_path(log_dir: &Path, cli: &Cli) -> PathBuf {
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    match cli.config_name() {
        Some(config_name) => log_dir.join(format!("{}_{}.log", config_name, timestamp)),
        None => log_dir.join(format!("Interactive_{}.log", timestamp)),
    }
}

/// Setup logging: a file when `--log-dir` is given, stderr otherwise
///
/// Prompts own stdout, so logs never go there.
fn setup_logging(cli: &Cli) -> Result<Option<WorkerGuard>> {
    let level = if cli.verbose {
        Level::DEBUG
    } else if cli.log_dir.is_some() {
        Level::INFO
    } else {
        Level::WARN
    };

    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let subscriber = tracing_subscriber::registry().with(env_filter);

    let Some(log_dir) = &cli.log_dir else {
        if cli.json_log {
            subscriber
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .init();
        } else {
            subscriber
                .with(fmt::layer().with_writer(std::io::stderr))
                .init();
        }
        return Ok(None);
    };

    let log_path = get_log_path(log_dir, cli);
    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&log_path)?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    if cli.json_log {
        subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_ansi(false)
                    .with_writer(non_blocking),
            )
            .init();
    } else {
        subscriber
            .with(fmt::layer().with_ansi(false).with_writer(non_blocking))
            .init();
    }

    info!(log_file = %log_path.display(), "Log file location");
    Ok(Some(guard))
}
