mod agency;
mod bill;

pub use agency::{Agency, Config, InvoiceSettings, PdfSettings};
pub use bill::{BillFile, ChargesInput, CustomerInput, ServiceInput, TripInput};

use crate::error::{BillingError, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the config directory path (~/.tripbill/ or XDG config)
pub fn config_dir() -> Result<PathBuf> {
    // First try XDG-style directories
    if let Some(proj_dirs) = ProjectDirs::from("", "", "tripbill") {
        return Ok(proj_dirs.config_dir().to_path_buf());
    }

    // Fallback to ~/.tripbill/
    let home = dirs_home().ok_or_else(|| {
        BillingError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Could not determine home directory",
        ))
    })?;

    Ok(home.join(".tripbill"))
}

fn dirs_home() -> Option<PathBuf> {
    std::env::var_os("HOME").map(PathBuf::from)
}

/// Expand ~ in paths
pub fn expand_path(path: &str) -> PathBuf {
    if path.starts_with("~/") {
        if let Some(home) = dirs_home() {
            return home.join(&path[2..]);
        }
    }
    PathBuf::from(path)
}

/// Resolve the configured output directory against the config directory
pub fn resolve_output_dir(configured: &str, config_dir: &Path) -> PathBuf {
    let expanded = expand_path(configured);
    if expanded.is_absolute() {
        expanded
    } else {
        config_dir.join(expanded)
    }
}

/// Load the main config.toml
pub fn load_config(config_dir: &Path) -> Result<Config> {
    let path = config_dir.join("config.toml");
    if !path.exists() {
        return Err(BillingError::ConfigFileNotFound(path));
    }
    let content = fs::read_to_string(&path)?;
    toml::from_str(&content).map_err(|e| BillingError::Parse { path, source: e })
}

/// Load a bill file
pub fn load_bill(path: &Path) -> Result<BillFile> {
    if !path.exists() {
        return Err(BillingError::BillFileNotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| BillingError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Template content for config.toml
pub const CONFIG_TEMPLATE: &str = r#"[agency]
name = "Tripomaniac"
tagline = "Premium Travel Experiences"
footer_note = "Thank you for choosing Tripomaniac for your travel needs."
footer_fine_print = "This is a computer generated invoice and does not require signature."

[invoice]
title = "TRAVEL INVOICE"
currency_symbol = "₹"

[pdf]
output_dir = "~/.tripbill/output"
"#;

/// Template content for a bill file. Dates are YYYY-MM-DD strings.
pub const BILL_TEMPLATE: &str = r#"# One bill per file. Check it with 'tripbill check <file>', inspect it with
# 'tripbill preview <file>', and produce the PDF with 'tripbill export <file>'.

[customer]
first_name = "Asha"
last_name = "Rao"
contact_number = "9876543210"
email = "asha.rao@example.com"

[trip]
booking_date = "2026-01-05"
check_in_date = "2026-02-10"
# check_out_date = "2026-02-15"   # optional
hotel_name = "Lakeside Resort"    # optional
room_number = "204"               # optional
travel_security = true

[[services]]
name = "Flight"
details = "DEL-GOI round trip"
amount = 10000.0

[[services]]
name = "Hotel"
details = "3 nights deluxe"
amount = 12500.0

[charges]
service_charge = 500.0
advanced_amount = 3000.0
"#;
