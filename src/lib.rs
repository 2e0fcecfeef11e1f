pub mod billing;
pub mod config;
pub mod error;
pub mod invoice;
pub mod pdf;

pub use billing::{BillDraft, BillingRecord, ServiceLineItem, Totals};
pub use config::{BillFile, Config};
pub use error::{BillingError, Result};
pub use invoice::{export_file_name, render_preview, InvoiceDocument};
pub use pdf::{generate_invoice_pdf, PageLayout};
