use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info, warn};

use quote_core::loader::load_from_file;
use quote_ui::config::{AppConfig, Overrides};
use quote_ui::export::QuoteExporter;
use quote_ui::state::AppState;
use quote_ui::{build_registry, logging, views};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Interactive quote calculator.
///
/// Loads a calculator schema, lets the user pick options in the terminal
/// with a running total, and exports the selection as a paginated quote.
#[derive(Debug, Parser)]
struct Cli {
    /// TOML config file. Defaults to `quote.toml` when it exists.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Calculator schema (JSON).
    #[arg(long)]
    schema: Option<PathBuf>,

    /// Directory exported quotes are written to.
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Log level or filter directive, e.g. `debug` or `quote_core=trace`.
    #[arg(long)]
    log_level: Option<String>,

    /// Append log output to this file while the UI is running.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            schema_path: self.schema.clone(),
            output_dir: self.output_dir.clone(),
            log_level: self.log_level.clone(),
            log_file: self.log_file.clone(),
        }
    }
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref()).context("failed to load configuration")?;
    config.apply_overrides(cli.overrides());

    logging::init_logging(&config.logging.level);
    debug!(?config, "configuration loaded");

    if let Some(path) = &config.logging.file {
        logging::enable_file_logging(path)?;
    }

    // A broken schema is shown in the UI rather than aborting startup.
    let schema = load_from_file(&config.schema_path);
    if let Err(e) = &schema {
        warn!(path = %config.schema_path.display(), error = %e, "no calculator available");
    }

    let exporter = QuoteExporter::new(build_registry(), &config);
    let mut siv = cursive::crossterm();
    siv.set_user_data(AppState::new(schema, exporter));
    views::show_root(&mut siv);

    // The terminal belongs to cursive from here on.
    logging::set_stdout_enabled(false)?;
    info!("starting quote calculator");
    siv.run();
    logging::set_stdout_enabled(true)?;

    info!("quote calculator closed");
    Ok(())
}
