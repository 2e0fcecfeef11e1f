use std::path::Path;
use std::process::Command;

use serde::Serialize;

use crate::error::{BillingError, Result};
use crate::invoice::InvoiceDocument;

/// Named layout parameters for the exported page. The services table takes
/// the full text width split proportionally between its columns; the
/// payment summary sits in a rounded panel at the right margin, anchored
/// below wherever the table ends.
#[derive(Debug, Clone, Serialize)]
pub struct PageLayout {
    pub name_pct: u32,
    pub details_pct: u32,
    pub amount_pct: u32,
    pub box_width_pct: u32,
    pub box_inset_pt: u32,
    pub box_radius_pt: u32,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            name_pct: 30,
            details_pct: 50,
            amount_pct: 20,
            box_width_pct: 38,
            box_inset_pt: 10,
            box_radius_pt: 6,
        }
    }
}

#[derive(Serialize)]
struct PdfData<'a> {
    #[serde(flatten)]
    document: &'a InvoiceDocument,
    layout: &'a PageLayout,
}

/// Embedded Typst template for the travel invoice
/// Uses a placeholder that gets replaced with the actual JSON file path
const INVOICE_TEMPLATE: &str = r##"// Travel Invoice Template
// Data is loaded from JSON file

#let data = json("DATA_JSON_PATH")

#set page(
  paper: "a4",
  margin: (top: 1.8cm, bottom: 2.2cm, left: 1.5cm, right: 1.5cm),
  footer: [
    #align(center)[
      #text(size: 8pt, fill: rgb(150, 150, 150))[
        #data.footer.note \
        #data.footer.fine_print
      ]
    ]
  ],
)

#set text(font: "Helvetica", size: 10pt)

// Header: centered brand mark, tagline, rule, document title
#align(center)[
  #text(size: 24pt, weight: "bold", fill: rgb(14, 165, 233))[#data.header.brand]
  #v(0.2em)
  #text(size: 10pt, fill: rgb(100, 100, 100))[#data.header.tagline]
]

#v(0.8em)
#line(length: 100%, stroke: 0.5pt + rgb(220, 220, 220))
#v(0.8em)

#align(center)[
  #text(size: 16pt, weight: "bold")[#data.header.title]
]

#v(1.2em)

// Customer details and invoice information, two columns
#grid(
  columns: (1fr, 1fr),
  [
    #text(weight: "bold", size: 10pt)[CUSTOMER DETAILS]
    #v(0.4em)
    #text(size: 9pt)[
      Name: #data.customer.name \
      Contact: #data.customer.contact \
      Email: #data.customer.email \
      Travel Security: #data.customer.travel_security
    ]
  ],
  [
    #align(right)[
      #text(weight: "bold", size: 10pt)[INVOICE INFORMATION]
      #v(0.4em)
      #text(size: 9pt)[
        Customer ID: #data.invoice_info.customer_id \
        Booking Date: #data.invoice_info.booking_date \
        Check-in Date: #data.invoice_info.check_in_date \
        Check-out Date: #data.invoice_info.check_out_date
      ]
    ]
  ]
)

#v(1.2em)

// Accommodation
#text(weight: "bold", size: 10pt)[ACCOMMODATION DETAILS]
#v(0.4em)
#text(size: 9pt)[
  Trip: #data.accommodation.trip_name \
  Room: #data.accommodation.room_number \
  Travel Security: #data.accommodation.travel_security
]
#v(0.2em)
#for detail in data.accommodation.detail_lines.filter(d => d != "") [
  #text(size: 9pt)[#detail] \
]

#v(1.2em)

// Services table: proportional column widths, long text wraps
#text(weight: "bold", size: 10pt)[SERVICES]
#v(0.5em)

#let name-w = data.layout.name_pct * 1%
#let details-w = data.layout.details_pct * 1%
#let amount-w = data.layout.amount_pct * 1%

#table(
  columns: (name-w, details-w, amount-w),
  align: (left, left, right),
  stroke: (x, y) => if y == 0 { (bottom: 1pt + black) } else { (bottom: 0.5pt + rgb(220, 220, 220)) },
  inset: 8pt,
  fill: (x, y) => if y == 0 { rgb(224, 242, 254) } else { none },

  // Header
  [*Service*], [*Details*], [*Amount*],

  // Rows
  ..data.charges.rows.map(row => (
    row.name,
    row.details,
    row.amount,
  )).flatten()
)

#v(1em)

// Payment summary: rounded panel at the right margin, directly below the
// table's end position
#align(right)[
  #box(
    width: data.layout.box_width_pct * 1%,
    stroke: 0.5pt + rgb(220, 220, 220),
    radius: data.layout.box_radius_pt * 1pt,
    inset: data.layout.box_inset_pt * 1pt,
  )[
    #table(
      columns: (1fr, auto),
      stroke: none,
      align: (left, right),
      inset: 4pt,

      [Service Charge:], [#data.charges.summary.service_charge],
      [Advanced Amount:], [#data.charges.summary.advanced_amount],
      [Due Amount:], [#data.charges.summary.due_amount],

      table.hline(stroke: 0.5pt + rgb(14, 165, 233)),
      [#text(weight: "bold", fill: rgb(14, 165, 233))[TOTAL COST:]],
      [#text(weight: "bold", fill: rgb(14, 165, 233))[#data.charges.summary.total_cost]],
    )
  ]
]
"##;

/// Generate the invoice PDF using Typst CLI
pub fn generate_invoice_pdf(
    document: &InvoiceDocument,
    layout: &PageLayout,
    output_path: &Path,
) -> Result<()> {
    // Check if typst is available
    let typst_check = Command::new("typst").arg("--version").output();

    if typst_check.is_err() {
        return Err(BillingError::TypstNotFound);
    }

    // Create temp directory for template
    let temp_dir = std::env::temp_dir().join("tripbill");
    std::fs::create_dir_all(&temp_dir)?;

    // Serialize document data to JSON
    let payload = PdfData { document, layout };
    let json_data = serde_json::to_string(&payload)
        .map_err(|e| BillingError::PdfGeneration(e.to_string()))?;

    // Write JSON to temp file
    let json_path = temp_dir.join("data.json");
    std::fs::write(&json_path, &json_data)?;

    // Write template with relative JSON path (data.json is in same directory)
    let template_content = INVOICE_TEMPLATE.replace("DATA_JSON_PATH", "data.json");
    let template_path = temp_dir.join("invoice.typ");
    std::fs::write(&template_path, &template_content)?;

    // Run typst compile with root set to temp directory
    let output = Command::new("typst")
        .args([
            "compile",
            "--root",
            temp_dir.to_str().unwrap_or("."),
            template_path.to_str().unwrap_or("invoice.typ"),
            output_path.to_str().unwrap_or("invoice.pdf"),
        ])
        .output()?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(BillingError::PdfGeneration(stderr.to_string()));
    }

    // Clean up temp files
    let _ = std::fs::remove_file(&template_path);
    let _ = std::fs::remove_file(&json_path);

    Ok(())
}
