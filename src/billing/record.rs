use std::fmt;
use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;
use uuid::Uuid;

use super::calculator::Totals;
use crate::config::BillFile;
use crate::error::{BillingError, Result};

/// One billable service entry.
#[derive(Debug, Clone)]
pub struct ServiceLineItem {
    /// Opaque row identifier, stable for the row's lifetime in the draft.
    pub id: Uuid,
    pub name: String,
    pub details: String,
    pub amount: f64,
}

impl ServiceLineItem {
    pub fn blank() -> Self {
        Self {
            id: Uuid::new_v4(),
            name: String::new(),
            details: String::new(),
            amount: 0.0,
        }
    }
}

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub field: String,
    pub message: String,
}

impl ValidationIssue {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

fn email_regex() -> &'static Regex {
    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    EMAIL_RE.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap())
}

/// Display identifier for the customer, not derived from any other field.
pub fn generate_customer_id() -> String {
    let digits = 100_000 + (Uuid::new_v4().as_u128() % 900_000) as u32;
    format!("TM-{digits}")
}

/// Working state of a bill before finalization. Mirrors what the user is
/// still editing: services can be added, changed, and removed (never below
/// one row), and totals are rederived from the full state on every call.
#[derive(Debug, Clone)]
pub struct BillDraft {
    pub first_name: String,
    pub last_name: String,
    pub contact_number: String,
    pub email: String,
    pub booking_date: Option<NaiveDate>,
    pub check_in_date: Option<NaiveDate>,
    pub check_out_date: Option<NaiveDate>,
    pub hotel_name: Option<String>,
    pub room_number: Option<String>,
    pub travel_security: bool,
    services: Vec<ServiceLineItem>,
    pub service_charge: f64,
    pub advanced_amount: f64,
}

impl BillDraft {
    /// Fresh draft with one blank service row.
    pub fn new() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            contact_number: String::new(),
            email: String::new(),
            booking_date: Some(chrono::Local::now().date_naive()),
            check_in_date: None,
            check_out_date: None,
            hotel_name: None,
            room_number: None,
            travel_security: false,
            services: vec![ServiceLineItem::blank()],
            service_charge: 0.0,
            advanced_amount: 0.0,
        }
    }

    pub fn from_file(file: BillFile) -> Self {
        let services = file
            .services
            .into_iter()
            .map(|s| ServiceLineItem {
                id: Uuid::new_v4(),
                name: s.name,
                details: s.details,
                amount: s.amount,
            })
            .collect();

        Self {
            first_name: file.customer.first_name,
            last_name: file.customer.last_name,
            contact_number: file.customer.contact_number,
            email: file.customer.email,
            booking_date: file.trip.booking_date,
            check_in_date: file.trip.check_in_date,
            check_out_date: file.trip.check_out_date,
            hotel_name: file.trip.hotel_name,
            room_number: file.trip.room_number,
            travel_security: file.trip.travel_security,
            services,
            service_charge: file.charges.service_charge,
            advanced_amount: file.charges.advanced_amount,
        }
    }

    pub fn services(&self) -> &[ServiceLineItem] {
        &self.services
    }

    /// Append a blank service row and return its id.
    pub fn add_service(&mut self) -> Uuid {
        let item = ServiceLineItem::blank();
        let id = item.id;
        self.services.push(item);
        id
    }

    pub fn service_mut(&mut self, id: Uuid) -> Option<&mut ServiceLineItem> {
        self.services.iter_mut().find(|s| s.id == id)
    }

    /// Remove a service row. Removing the sole remaining row is rejected
    /// and the list is left unchanged.
    pub fn remove_service(&mut self, id: Uuid) -> Result<()> {
        let pos = self
            .services
            .iter()
            .position(|s| s.id == id)
            .ok_or(BillingError::ServiceNotFound(id))?;

        if self.services.len() <= 1 {
            return Err(BillingError::LastService);
        }

        self.services.remove(pos);
        Ok(())
    }

    /// Live totals, rederived from the full current input state.
    pub fn totals(&self) -> Totals {
        Totals::compute(&self.services, self.service_charge, self.advanced_amount)
    }

    pub fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        if self.first_name.trim().is_empty() {
            issues.push(ValidationIssue::new("first_name", "First name is required"));
        }
        if self.last_name.trim().is_empty() {
            issues.push(ValidationIssue::new("last_name", "Last name is required"));
        }
        if self.contact_number.chars().count() < 10 {
            issues.push(ValidationIssue::new(
                "contact_number",
                "Valid contact number required",
            ));
        }
        if !email_regex().is_match(&self.email) {
            issues.push(ValidationIssue::new("email", "Valid email required"));
        }
        if self.booking_date.is_none() {
            issues.push(ValidationIssue::new(
                "booking_date",
                "Booking date is required",
            ));
        }
        if self.check_in_date.is_none() {
            issues.push(ValidationIssue::new(
                "check_in_date",
                "Check-in date is required",
            ));
        }
        if self.service_charge < 0.0 {
            issues.push(ValidationIssue::new(
                "service_charge",
                "Amount cannot be negative",
            ));
        }
        if self.advanced_amount < 0.0 {
            issues.push(ValidationIssue::new(
                "advanced_amount",
                "Amount cannot be negative",
            ));
        }
        if self.services.is_empty() {
            issues.push(ValidationIssue::new(
                "services",
                "At least one service is required",
            ));
        }
        for (i, service) in self.services.iter().enumerate() {
            if service.name.trim().is_empty() {
                issues.push(ValidationIssue::new(
                    format!("services[{i}].name"),
                    "Service name is required",
                ));
            }
            if service.amount < 0.0 {
                issues.push(ValidationIssue::new(
                    format!("services[{i}].amount"),
                    "Amount cannot be negative",
                ));
            }
        }

        issues
    }

    /// Validate and freeze the draft into an immutable record. Derived
    /// totals are computed here, once, and travel with the record.
    pub fn finalize(self) -> Result<BillingRecord> {
        let issues = self.validate();

        match (self.booking_date, self.check_in_date) {
            (Some(booking_date), Some(check_in_date)) if issues.is_empty() => Ok(BillingRecord {
                customer_id: generate_customer_id(),
                totals: Totals::compute(
                    &self.services,
                    self.service_charge,
                    self.advanced_amount,
                ),
                first_name: self.first_name,
                last_name: self.last_name,
                contact_number: self.contact_number,
                email: self.email,
                booking_date,
                check_in_date,
                check_out_date: self.check_out_date,
                hotel_name: self.hotel_name,
                room_number: self.room_number,
                travel_security: self.travel_security,
                services: self.services,
                service_charge: self.service_charge,
                advanced_amount: self.advanced_amount,
            }),
            _ => Err(BillingError::Validation(issues)),
        }
    }
}

impl Default for BillDraft {
    fn default() -> Self {
        Self::new()
    }
}

/// Finalized, immutable snapshot of one bill's inputs and derived totals.
#[derive(Debug, Clone)]
pub struct BillingRecord {
    pub first_name: String,
    pub last_name: String,
    pub contact_number: String,
    pub email: String,
    pub customer_id: String,
    pub booking_date: NaiveDate,
    pub check_in_date: NaiveDate,
    pub check_out_date: Option<NaiveDate>,
    pub hotel_name: Option<String>,
    pub room_number: Option<String>,
    pub travel_security: bool,
    pub services: Vec<ServiceLineItem>,
    pub service_charge: f64,
    pub advanced_amount: f64,
    pub totals: Totals,
}
