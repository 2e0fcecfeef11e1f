//! The reusable formula set deriving the three monetary totals.

use super::record::ServiceLineItem;

/// Sum of all line item amounts.
pub fn services_total(services: &[ServiceLineItem]) -> f64 {
    services.iter().map(|s| s.amount).sum()
}

pub fn total_cost(services_total: f64, service_charge: f64) -> f64 {
    services_total + service_charge
}

/// Due amount is clamped at zero: an advance exceeding the total cost
/// produces zero due, not a negative number. Overpayment is not modeled
/// as a credit.
pub fn due_amount(total_cost: f64, advanced_amount: f64) -> f64 {
    (total_cost - advanced_amount).max(0.0)
}

/// The three derived values of a bill.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Totals {
    pub services_total: f64,
    pub total_cost: f64,
    pub due_amount: f64,
}

impl Totals {
    /// Recompute every derived value from the full current input state.
    /// Invariants: `total_cost == services_total + service_charge` and
    /// `due_amount == max(0, total_cost - advanced_amount)`.
    pub fn compute(
        services: &[ServiceLineItem],
        service_charge: f64,
        advanced_amount: f64,
    ) -> Self {
        let services_total = services_total(services);
        let total_cost = total_cost(services_total, service_charge);
        let due_amount = due_amount(total_cost, advanced_amount);

        Self {
            services_total,
            total_cost,
            due_amount,
        }
    }
}
