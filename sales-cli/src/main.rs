use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use sales_cli::commands::{self, QuoteMode};
use sales_cli::{csv_loader, output};
use sales_core::calculations::FinancingTerms;
use sales_core::catalog::{DeviceCatalog, builtin_revenue_classes};
use sales_core::session::SalesSession;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Hardware sales quoting and commission calculator.
///
/// Computes financing installments or the full purchase price for a device
/// selection, and evaluates monthly revenue against the commission brackets.
#[derive(Debug, Parser)]
#[command(name = "salesdesk", version, about)]
struct Cli {
    /// CSV file replacing the built-in device catalog.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// CSV file replacing the built-in revenue class table.
    #[arg(long, global = true)]
    classes: Option<PathBuf>,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Quote a device selection under a payment model.
    Quote {
        /// Device selection as repeated NAME=QTY pairs
        /// (e.g. -d "Dobbelt Screen=1" -d "M20=2").
        #[arg(short = 'd', long = "device", value_name = "NAME=QTY")]
        devices: Vec<String>,

        /// Down payment in DKK; values below the 1000 minimum reset to it.
        #[arg(long, default_value = "1000")]
        down_payment: String,

        /// Payment model to quote.
        #[arg(long, value_enum, default_value = "with-down-payment")]
        mode: QuoteMode,
    },

    /// Evaluate a monthly revenue figure against the commission brackets.
    Commission {
        /// Monthly revenue in DKK.
        revenue: String,
    },

    /// List the device catalog and the revenue class table.
    Catalog,
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Strips timestamps and target names to keep CLI output clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

// ─── output ──────────────────────────────────────────────────────────────────

fn emit<T: Serialize>(
    format: OutputFormat,
    report: &T,
    render: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => print!("{}", render(report)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
    }
    Ok(())
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let catalog = match &cli.catalog {
        Some(path) => csv_loader::load_catalog_from_file(path)
            .with_context(|| format!("failed to load device catalog: {}", path.display()))?,
        None => DeviceCatalog::builtin(),
    };
    let classes = match &cli.classes {
        Some(path) => csv_loader::load_revenue_classes_from_file(path)
            .with_context(|| format!("failed to load revenue classes: {}", path.display()))?,
        None => builtin_revenue_classes(),
    };
    debug!(
        devices = catalog.devices().len(),
        classes = classes.len(),
        "reference tables loaded"
    );

    let mut session = SalesSession::new(catalog, classes, FinancingTerms::default());

    match &cli.command {
        Command::Quote {
            devices,
            down_payment,
            mode,
        } => {
            let report = commands::run_quote(&mut session, devices, down_payment, *mode)?;
            emit(cli.format, &report, output::render_quote)?;
        }
        Command::Commission { revenue } => {
            let report = commands::run_commission(&mut session, revenue)?;
            emit(cli.format, &report, output::render_commission)?;
        }
        Command::Catalog => {
            let report = commands::run_catalog(&session);
            emit(cli.format, &report, output::render_catalog)?;
        }
    }

    Ok(())
}
