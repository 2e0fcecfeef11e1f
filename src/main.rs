use chrono::Local;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use tripbill::billing::format::format_currency;
use tripbill::billing::BillDraft;
use tripbill::config::{
    self, config_dir, load_bill, load_config, Config, BILL_TEMPLATE, CONFIG_TEMPLATE,
};
use tripbill::error::{BillingError, Result};
use tripbill::invoice::{export_file_name, render_preview, InvoiceDocument};
use tripbill::pdf::{generate_invoice_pdf, PageLayout};

#[derive(Parser)]
#[command(name = "tripbill")]
#[command(version, about = "Travel agency billing tool", long_about = None)]
struct Cli {
    /// Path to config directory (default: ~/.tripbill or XDG config)
    #[arg(short = 'C', long, global = true)]
    config_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize config directory with template files
    Init,

    /// Validate a bill file and report every field issue
    Check {
        /// Path to the bill file (TOML)
        bill: PathBuf,
    },

    /// Recompute and show the derived totals for a bill file
    Totals {
        /// Path to the bill file (TOML)
        bill: PathBuf,
    },

    /// Render the invoice preview to the terminal
    Preview {
        /// Path to the bill file (TOML)
        bill: PathBuf,
    },

    /// Export the invoice as a PDF
    Export {
        /// Path to the bill file (TOML)
        bill: PathBuf,

        /// Custom output file path (default: output_dir/<generated name>.pdf)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Open generated PDF with system default viewer
        #[arg(long)]
        open: bool,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Determine config directory
    let cfg_dir = match cli.config_dir {
        Some(p) => p,
        None => config_dir()?,
    };

    match cli.command {
        Commands::Init => cmd_init(&cfg_dir),
        Commands::Check { bill } => cmd_check(&bill),
        Commands::Totals { bill } => cmd_totals(&cfg_dir, &bill),
        Commands::Preview { bill } => cmd_preview(&cfg_dir, &bill),
        Commands::Export { bill, output, open } => cmd_export(&cfg_dir, &bill, output, open),
    }
}

/// Initialize config directory with template files
fn cmd_init(cfg_dir: &Path) -> Result<()> {
    use std::fs;

    if cfg_dir.exists() {
        return Err(BillingError::AlreadyInitialized(cfg_dir.to_path_buf()));
    }

    fs::create_dir_all(cfg_dir)?;
    fs::create_dir_all(cfg_dir.join("output"))?;

    fs::write(cfg_dir.join("config.toml"), CONFIG_TEMPLATE)?;
    fs::write(cfg_dir.join("bill.toml"), BILL_TEMPLATE)?;

    println!("Initialized tripbill config at: {}", cfg_dir.display());
    println!();
    println!("Next steps:");
    println!(
        "  1. Edit your agency details:   $EDITOR {}/config.toml",
        cfg_dir.display()
    );
    println!(
        "  2. Fill in a bill:             $EDITOR {}/bill.toml",
        cfg_dir.display()
    );
    println!();
    println!("Then preview and export it:");
    println!("  tripbill preview {}/bill.toml", cfg_dir.display());
    println!("  tripbill export {}/bill.toml", cfg_dir.display());

    Ok(())
}

/// Validate a bill file
fn cmd_check(bill_path: &Path) -> Result<()> {
    let draft = BillDraft::from_file(load_bill(bill_path)?);

    let issues = draft.validate();
    if !issues.is_empty() {
        return Err(BillingError::Validation(issues));
    }

    println!("Bill is valid.");
    println!(
        "  Customer: {} {}",
        draft.first_name, draft.last_name
    );
    println!("  Services: {}", draft.services().len());

    Ok(())
}

/// Show the derived totals for a bill file. Works on drafts that do not
/// validate yet; every value is rederived from the full input state.
fn cmd_totals(cfg_dir: &Path, bill_path: &Path) -> Result<()> {
    let config = require_config(cfg_dir)?;
    let draft = BillDraft::from_file(load_bill(bill_path)?);

    let totals = draft.totals();
    let symbol = &config.invoice.currency_symbol;

    println!("Services Total:  {}", format_currency(totals.services_total, symbol));
    println!("Service Charge:  {}", format_currency(draft.service_charge, symbol));
    println!("Advanced Amount: {}", format_currency(draft.advanced_amount, symbol));
    println!("Due Amount:      {}", format_currency(totals.due_amount, symbol));
    println!("Total Cost:      {}", format_currency(totals.total_cost, symbol));

    Ok(())
}

/// Render the invoice preview to the terminal
fn cmd_preview(cfg_dir: &Path, bill_path: &Path) -> Result<()> {
    let config = require_config(cfg_dir)?;
    let record = BillDraft::from_file(load_bill(bill_path)?).finalize()?;

    let document = InvoiceDocument::build(&record, &config);
    println!("{}", render_preview(&document));

    Ok(())
}

/// Export the invoice PDF
fn cmd_export(
    cfg_dir: &Path,
    bill_path: &Path,
    output: Option<PathBuf>,
    open: bool,
) -> Result<()> {
    let config = require_config(cfg_dir)?;
    let record = BillDraft::from_file(load_bill(bill_path)?).finalize()?;

    let document = InvoiceDocument::build(&record, &config);

    let pdf_path = match output {
        Some(path) => path,
        None => {
            let output_dir = config::resolve_output_dir(&config.pdf.output_dir, cfg_dir);
            std::fs::create_dir_all(&output_dir)?;
            output_dir.join(export_file_name(&config.agency.name, &record, Local::now()))
        }
    };

    generate_invoice_pdf(&document, &PageLayout::default(), &pdf_path)?;

    println!("Exported invoice for {} {}", record.first_name, record.last_name);
    println!("  Customer ID: {}", record.customer_id);
    println!("  Services:    {}", record.services.len());
    println!(
        "  Total:       {}",
        format_currency(record.totals.total_cost, &config.invoice.currency_symbol)
    );
    println!("  Saved:       {}", pdf_path.display());

    if open {
        open_path(&pdf_path)?;
    }

    Ok(())
}

fn require_config(cfg_dir: &Path) -> Result<Config> {
    if !cfg_dir.exists() {
        return Err(BillingError::ConfigNotFound(cfg_dir.to_path_buf()));
    }
    load_config(cfg_dir)
}

fn open_path(pdf_path: &Path) -> Result<()> {
    // Open with system default viewer
    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open")
            .arg(pdf_path)
            .spawn()
            .map_err(BillingError::Io)?;
    }

    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open")
            .arg(pdf_path)
            .spawn()
            .map_err(BillingError::Io)?;
    }

    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("cmd")
            .args(["/C", "start", "", pdf_path.to_str().unwrap_or("")])
            .spawn()
            .map_err(BillingError::Io)?;
    }

    Ok(())
}
