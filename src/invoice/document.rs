use chrono::{DateTime, Local};
use serde::Serialize;

use crate::billing::format::{format_currency, format_date};
use crate::billing::record::BillingRecord;
use crate::config::Config;

/// The accommodation block surfaces the detail strings of the first five
/// services, one slot per service index, blank when absent. The duplication
/// against the services table is deliberate.
pub const ACCOMMODATION_DETAIL_SLOTS: usize = 5;

#[derive(Debug, Clone, Serialize)]
pub struct HeaderSection {
    pub brand: String,
    pub tagline: String,
    pub title: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CustomerSection {
    pub name: String,
    pub contact: String,
    pub email: String,
    pub travel_security: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct InvoiceInfoSection {
    pub customer_id: String,
    pub booking_date: String,
    pub check_in_date: String,
    pub check_out_date: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AccommodationSection {
    pub trip_name: String,
    pub room_number: String,
    pub detail_lines: Vec<String>,
    pub travel_security: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChargeRow {
    pub name: String,
    pub details: String,
    pub amount: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChargeSummary {
    pub service_charge: String,
    pub advanced_amount: String,
    pub due_amount: String,
    pub total_cost: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChargesSection {
    pub rows: Vec<ChargeRow>,
    pub summary: ChargeSummary,
}

#[derive(Debug, Clone, Serialize)]
pub struct FooterSection {
    pub note: String,
    pub fine_print: String,
}

/// Complete document description for one invoice. Built once from a
/// finalized record; the terminal preview and the PDF export both consume
/// these pre-formatted values, so the two renderings cannot diverge.
#[derive(Debug, Clone, Serialize)]
pub struct InvoiceDocument {
    pub header: HeaderSection,
    pub customer: CustomerSection,
    pub invoice_info: InvoiceInfoSection,
    pub accommodation: AccommodationSection,
    pub charges: ChargesSection,
    pub footer: FooterSection,
}

fn yes_no(flag: bool) -> String {
    if flag { "Yes" } else { "No" }.to_string()
}

impl InvoiceDocument {
    pub fn build(record: &BillingRecord, config: &Config) -> Self {
        let symbol = &config.invoice.currency_symbol;

        let trip_name = match record.hotel_name.as_deref() {
            Some(name) if !name.trim().is_empty() => name.to_string(),
            _ => "Not specified".to_string(),
        };

        let detail_lines = (0..ACCOMMODATION_DETAIL_SLOTS)
            .map(|i| {
                record
                    .services
                    .get(i)
                    .map(|s| s.details.clone())
                    .unwrap_or_default()
            })
            .collect();

        let rows = record
            .services
            .iter()
            .map(|s| ChargeRow {
                name: s.name.clone(),
                details: s.details.clone(),
                amount: format_currency(s.amount, symbol),
            })
            .collect();

        Self {
            header: HeaderSection {
                brand: config.agency.name.clone(),
                tagline: config.agency.tagline.clone(),
                title: config.invoice.title.clone(),
            },
            customer: CustomerSection {
                name: format!("{} {}", record.first_name, record.last_name),
                contact: record.contact_number.clone(),
                email: record.email.clone(),
                travel_security: yes_no(record.travel_security),
            },
            invoice_info: InvoiceInfoSection {
                customer_id: record.customer_id.clone(),
                booking_date: format_date(Some(record.booking_date)),
                check_in_date: format_date(Some(record.check_in_date)),
                check_out_date: format_date(record.check_out_date),
            },
            accommodation: AccommodationSection {
                trip_name,
                room_number: record.room_number.clone().unwrap_or_default(),
                detail_lines,
                travel_security: yes_no(record.travel_security),
            },
            charges: ChargesSection {
                rows,
                summary: ChargeSummary {
                    service_charge: format_currency(record.service_charge, symbol),
                    advanced_amount: format_currency(record.advanced_amount, symbol),
                    due_amount: format_currency(record.totals.due_amount, symbol),
                    total_cost: format_currency(record.totals.total_cost, symbol),
                },
            },
            footer: FooterSection {
                note: config.agency.footer_note.clone(),
                fine_print: config.agency.footer_fine_print.clone(),
            },
        }
    }
}

/// File name for the exported artifact: encodes the customer's first and
/// last name so files are identifiable without opening them; repeated
/// exports stay unique through the generation timestamp.
pub fn export_file_name(
    brand: &str,
    record: &BillingRecord,
    exported_at: DateTime<Local>,
) -> String {
    format!(
        "{}_Invoice_{}_{}_{}.pdf",
        sanitize_component(brand),
        sanitize_component(&record.first_name),
        sanitize_component(&record.last_name),
        exported_at.format("%Y%m%d-%H%M%S"),
    )
}

fn sanitize_component(part: &str) -> String {
    let mut out = String::with_capacity(part.len());
    let mut last_was_sep = true;

    for ch in part.chars() {
        if ch.is_ascii_alphanumeric() {
            out.push(ch);
            last_was_sep = false;
        } else if !last_was_sep {
            out.push('_');
            last_was_sep = true;
        }
    }

    out.trim_end_matches('_').to_string()
}
