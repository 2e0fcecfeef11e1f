use tabled::{settings::Style, Table, Tabled};

use super::document::InvoiceDocument;

#[derive(Tabled)]
struct ServiceTableRow {
    #[tabled(rename = "SERVICE")]
    name: String,
    #[tabled(rename = "DETAILS")]
    details: String,
    #[tabled(rename = "AMOUNT")]
    amount: String,
}

/// Render the document for the terminal. Sections appear in the same fixed
/// order as the export and show the same pre-formatted values.
pub fn render_preview(doc: &InvoiceDocument) -> String {
    let mut out = String::new();

    // Header
    out.push_str(&format!("{}\n", doc.header.brand));
    out.push_str(&format!("{}\n", doc.header.tagline));
    out.push_str(&format!("{}\n", "-".repeat(50)));
    out.push_str(&format!("{}\n\n", doc.header.title));

    // Customer & invoice info
    out.push_str("CUSTOMER DETAILS\n");
    out.push_str(&format!("  Name:            {}\n", doc.customer.name));
    out.push_str(&format!("  Contact:         {}\n", doc.customer.contact));
    out.push_str(&format!("  Email:           {}\n", doc.customer.email));
    out.push_str(&format!(
        "  Travel Security: {}\n\n",
        doc.customer.travel_security
    ));

    out.push_str("INVOICE INFORMATION\n");
    out.push_str(&format!(
        "  Customer ID:    {}\n",
        doc.invoice_info.customer_id
    ));
    out.push_str(&format!(
        "  Booking Date:   {}\n",
        doc.invoice_info.booking_date
    ));
    out.push_str(&format!(
        "  Check-in Date:  {}\n",
        doc.invoice_info.check_in_date
    ));
    out.push_str(&format!(
        "  Check-out Date: {}\n\n",
        doc.invoice_info.check_out_date
    ));

    // Accommodation
    out.push_str("ACCOMMODATION DETAILS\n");
    out.push_str(&format!("  Trip:            {}\n", doc.accommodation.trip_name));
    out.push_str(&format!(
        "  Room:            {}\n",
        doc.accommodation.room_number
    ));
    out.push_str(&format!(
        "  Travel Security: {}\n",
        doc.accommodation.travel_security
    ));
    for detail in doc.accommodation.detail_lines.iter() {
        if !detail.is_empty() {
            out.push_str(&format!("  {detail}\n"));
        }
    }
    out.push('\n');

    // Services & charges
    out.push_str("SERVICES & CHARGES\n");
    let rows: Vec<ServiceTableRow> = doc
        .charges
        .rows
        .iter()
        .map(|row| ServiceTableRow {
            name: row.name.clone(),
            details: row.details.clone(),
            amount: row.amount.clone(),
        })
        .collect();
    let table = Table::new(rows).with(Style::rounded()).to_string();
    out.push_str(&table);
    out.push_str("\n\n");

    let summary = &doc.charges.summary;
    let width = [
        summary.service_charge.chars().count(),
        summary.advanced_amount.chars().count(),
        summary.due_amount.chars().count(),
        summary.total_cost.chars().count(),
    ]
    .into_iter()
    .max()
    .unwrap_or(0);

    out.push_str(&format!(
        "  Service Charge:  {:>width$}\n",
        summary.service_charge
    ));
    out.push_str(&format!(
        "  Advanced Amount: {:>width$}\n",
        summary.advanced_amount
    ));
    out.push_str(&format!(
        "  Due Amount:      {:>width$}\n",
        summary.due_amount
    ));
    out.push_str(&format!("  {}\n", "-".repeat(19 + width)));
    out.push_str(&format!(
        "  TOTAL COST:      {:>width$}\n\n",
        summary.total_cost
    ));

    // Footer
    out.push_str(&format!("{}\n", doc.footer.note));
    out.push_str(&format!("{}\n", doc.footer.fine_print));

    out
}
