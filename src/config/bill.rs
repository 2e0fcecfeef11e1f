use chrono::NaiveDate;
use serde::Deserialize;

/// Raw bill input as edited by the user. Every field is defaulted so that a
/// missing required value surfaces as a validation issue naming the field,
/// not as a parse error.
#[derive(Debug, Deserialize, Default)]
pub struct BillFile {
    #[serde(default)]
    pub customer: CustomerInput,
    #[serde(default)]
    pub trip: TripInput,
    #[serde(default)]
    pub services: Vec<ServiceInput>,
    #[serde(default)]
    pub charges: ChargesInput,
}

#[derive(Debug, Deserialize, Default)]
pub struct CustomerInput {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub contact_number: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Deserialize, Default)]
pub struct TripInput {
    #[serde(default)]
    pub booking_date: Option<NaiveDate>,
    #[serde(default)]
    pub check_in_date: Option<NaiveDate>,
    #[serde(default)]
    pub check_out_date: Option<NaiveDate>,
    #[serde(default)]
    pub hotel_name: Option<String>,
    #[serde(default)]
    pub room_number: Option<String>,
    #[serde(default)]
    pub travel_security: bool,
}

#[derive(Debug, Deserialize, Default)]
pub struct ServiceInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub details: String,
    /// An absent amount reads as 0.
    #[serde(default)]
    pub amount: f64,
}

#[derive(Debug, Deserialize, Default)]
pub struct ChargesInput {
    #[serde(default)]
    pub service_charge: f64,
    #[serde(default)]
    pub advanced_amount: f64,
}
