use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A sellable hardware item from the device catalog.
///
/// `cost` is the purchase cost to the dealer and `price` the customer-facing
/// sale price. Pricing computations only use `price`; `cost` is kept for
/// margin reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub name: String,
    pub cost: Decimal,
    pub price: Decimal,
}

impl Device {
    /// Profit on a single unit sold at list price.
    pub fn unit_margin(&self) -> Decimal {
        self.price - self.cost
    }
}
