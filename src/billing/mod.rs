pub mod calculator;
pub mod format;
pub mod record;

pub use calculator::{due_amount, services_total, total_cost, Totals};
pub use format::{format_currency, format_date};
pub use record::{BillDraft, BillingRecord, ServiceLineItem, ValidationIssue};
