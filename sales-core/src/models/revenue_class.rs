use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A named commission bracket defined by an inclusive modified-revenue range.
///
/// Brackets are matched first-match-wins against the *modified* (scaled)
/// monthly revenue. Both bounds are inclusive, so a value exactly on a shared
/// boundary resolves to the lower bracket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenueClass {
    pub name: String,
    pub min_revenue: Decimal,
    pub max_revenue: Decimal,
    pub base_commission: Decimal,
}

impl RevenueClass {
    /// Whether `modified_revenue` falls inside this bracket (inclusive bounds).
    pub fn contains(
        &self,
        modified_revenue: Decimal,
    ) -> bool {
        modified_revenue >= self.min_revenue && modified_revenue <= self.max_revenue
    }
}
