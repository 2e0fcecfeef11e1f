use chrono::TimeZone;

use tripbill::billing::{BillDraft, BillingRecord};
use tripbill::config::{Config, CONFIG_TEMPLATE};
use tripbill::invoice::{
    export_file_name, render_preview, InvoiceDocument, ACCOMMODATION_DETAIL_SLOTS,
};

fn test_config() -> Config {
    toml::from_str(CONFIG_TEMPLATE).unwrap()
}

fn record_from_toml(input: &str) -> BillingRecord {
    BillDraft::from_file(toml::from_str(input).unwrap())
        .finalize()
        .unwrap()
}

const FULL_BILL: &str = r#"
[customer]
first_name = "Asha"
last_name = "Rao"
contact_number = "9876543210"
email = "asha.rao@example.com"

[trip]
booking_date = "2026-01-05"
check_in_date = "2026-02-10"
check_out_date = "2026-02-15"
hotel_name = "Lakeside Resort"
room_number = "204"
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

#[test]
fn sections_carry_the_record_values() {
    let record = record_from_toml(FULL_BILL);
    let doc = InvoiceDocument::build(&record, &test_config());

    assert_eq!(doc.header.brand, "Tripomaniac");
    assert_eq!(doc.header.title, "TRAVEL INVOICE");
    assert_eq!(doc.customer.name, "Asha Rao");
    assert_eq!(doc.customer.travel_security, "Yes");
    assert_eq!(doc.invoice_info.customer_id, record.customer_id);
    assert_eq!(doc.invoice_info.booking_date, "05 Jan 2026");
    assert_eq!(doc.invoice_info.check_in_date, "10 Feb 2026");
    assert_eq!(doc.invoice_info.check_out_date, "15 Feb 2026");
    assert_eq!(doc.accommodation.trip_name, "Lakeside Resort");
    assert_eq!(doc.accommodation.room_number, "204");
}

#[test]
fn unset_check_out_renders_as_empty_string() {
    let record = record_from_toml(
        r#"
[customer]
first_name = "Asha"
last_name = "Rao"
contact_number = "9876543210"
email = "asha.rao@example.com"

[trip]
booking_date = "2026-01-05"
check_in_date = "2026-02-10"

[[services]]
name = "Flight"
amount = 10000.0
"#,
    );
    let doc = InvoiceDocument::build(&record, &test_config());
    assert_eq!(doc.invoice_info.check_out_date, "");
}

#[test]
fn missing_trip_name_renders_as_not_specified() {
    let record = record_from_toml(
        r#"
[customer]
first_name = "Asha"
last_name = "Rao"
contact_number = "9876543210"
email = "asha.rao@example.com"

[trip]
booking_date = "2026-01-05"
check_in_date = "2026-02-10"

[[services]]
name = "Flight"
amount = 10000.0
"#,
    );
    let doc = InvoiceDocument::build(&record, &test_config());
    assert_eq!(doc.accommodation.trip_name, "Not specified");
    assert_eq!(doc.accommodation.room_number, "");
}

#[test]
fn accommodation_surfaces_five_detail_slots() {
    let record = record_from_toml(FULL_BILL);
    let doc = InvoiceDocument::build(&record, &test_config());

    assert_eq!(doc.accommodation.detail_lines.len(), ACCOMMODATION_DETAIL_SLOTS);
    assert_eq!(doc.accommodation.detail_lines[0], "DEL-GOI round trip");
    assert_eq!(doc.accommodation.detail_lines[1], "3 nights deluxe");
    assert_eq!(doc.accommodation.detail_lines[2], "");
    assert_eq!(doc.accommodation.detail_lines[3], "");
    assert_eq!(doc.accommodation.detail_lines[4], "");
}

#[test]
fn detail_slots_stop_at_service_index_four() {
    let mut bill = String::from(
        r#"
[customer]
first_name = "Asha"
last_name = "Rao"
contact_number = "9876543210"
email = "asha.rao@example.com"

[trip]
booking_date = "2026-01-05"
check_in_date = "2026-02-10"
"#,
    );
    for i in 0..7 {
        bill.push_str(&format!(
            "\n[[services]]\nname = \"Service {i}\"\ndetails = \"Detail {i}\"\namount = 100.0\n"
        ));
    }

    let record = record_from_toml(&bill);
    let doc = InvoiceDocument::build(&record, &test_config());

    assert_eq!(doc.accommodation.detail_lines.len(), ACCOMMODATION_DETAIL_SLOTS);
    assert_eq!(doc.accommodation.detail_lines[4], "Detail 4");
    assert_eq!(doc.charges.rows.len(), 7);
}

#[test]
fn summary_shows_the_finalized_totals() {
    let record = record_from_toml(FULL_BILL);
    let doc = InvoiceDocument::build(&record, &test_config());

    assert_eq!(doc.charges.summary.service_charge, "₹500");
    assert_eq!(doc.charges.summary.advanced_amount, "₹3,000");
    assert_eq!(doc.charges.summary.due_amount, "₹20,000");
    assert_eq!(doc.charges.summary.total_cost, "₹23,000");
}

#[test]
fn table_rows_mirror_the_service_list() {
    let record = record_from_toml(FULL_BILL);
    let doc = InvoiceDocument::build(&record, &test_config());

    assert_eq!(doc.charges.rows.len(), 2);
    assert_eq!(doc.charges.rows[0].name, "Flight");
    assert_eq!(doc.charges.rows[0].amount, "₹10,000");
    assert_eq!(doc.charges.rows[1].name, "Hotel");
    assert_eq!(doc.charges.rows[1].amount, "₹12,500");
}

#[test]
fn export_name_encodes_customer_and_timestamp() {
    let record = record_from_toml(FULL_BILL);
    let exported_at = chrono::Local.with_ymd_and_hms(2026, 8, 7, 14, 25, 1).unwrap();

    assert_eq!(
        export_file_name("Tripomaniac", &record, exported_at),
        "Tripomaniac_Invoice_Asha_Rao_20260807-142501.pdf"
    );
}

#[test]
fn export_name_sanitizes_separators() {
    let mut record = record_from_toml(FULL_BILL);
    record.first_name = "Mary Jane".to_string();
    record.last_name = "O'Neil".to_string();
    let exported_at = chrono::Local.with_ymd_and_hms(2026, 8, 7, 14, 25, 1).unwrap();

    assert_eq!(
        export_file_name("Tripomaniac", &record, exported_at),
        "Tripomaniac_Invoice_Mary_Jane_O_Neil_20260807-142501.pdf"
    );
}

#[test]
fn preview_renders_every_section() {
    let record = record_from_toml(FULL_BILL);
    let doc = InvoiceDocument::build(&record, &test_config());
    let preview = render_preview(&doc);

    assert!(preview.contains("Tripomaniac"));
    assert!(preview.contains("TRAVEL INVOICE"));
    assert!(preview.contains("CUSTOMER DETAILS"));
    assert!(preview.contains("INVOICE INFORMATION"));
    assert!(preview.contains("ACCOMMODATION DETAILS"));
    assert!(preview.contains("SERVICES & CHARGES"));
    assert!(preview.contains("Flight"));
    assert!(preview.contains("₹23,000"));
    assert!(preview.contains("TOTAL COST:"));
    assert!(preview.contains("Thank you for choosing"));
}

#[test]
fn preview_skips_blank_detail_slots() {
    let record = record_from_toml(FULL_BILL);
    let doc = InvoiceDocument::build(&record, &test_config());
    let preview = render_preview(&doc);

    assert!(preview.contains("DEL-GOI round trip"));
    assert!(preview.contains("3 nights deluxe"));
}
