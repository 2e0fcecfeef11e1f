mod document;
mod preview;

pub use document::{
    export_file_name, AccommodationSection, ChargeRow, ChargeSummary, ChargesSection,
    CustomerSection, FooterSection, HeaderSection, InvoiceDocument, InvoiceInfoSection,
    ACCOMMODATION_DETAIL_SLOTS,
};
pub use preview::render_preview;
