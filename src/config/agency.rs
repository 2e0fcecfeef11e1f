use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    pub agency: Agency,
    pub invoice: InvoiceSettings,
    pub pdf: PdfSettings,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Agency {
    pub name: String,
    pub tagline: String,
    pub footer_note: String,
    pub footer_fine_print: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct InvoiceSettings {
    pub title: String,
    pub currency_symbol: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct PdfSettings {
    pub output_dir: String,
}
