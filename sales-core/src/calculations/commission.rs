//! Commission evaluation over monthly revenue.
//!
//! This module scales a reported monthly revenue figure, annualises it, and
//! looks it up in the commission bracket table.
//!
//! # Calculation Steps
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Modified revenue: monthly revenue × 0.8 |
//! | 2    | Annual revenue: modified revenue × 12 |
//! | 3    | Bracket lookup: first class whose inclusive [min, max] contains the modified revenue |
//! | 4    | Position: (modified − min) / (max − min), in [0, 1] within the bracket |
//! | 5    | Commission: base × (1 + position), rounded half-up to 2 decimal places |
//!
//! Commission is continuous within a bracket: it runs from 1× the base at
//! the bracket floor to 2× the base at the bracket ceiling, a linear
//! incentive curve rather than a step function. A modified revenue outside
//! every bracket (including the fractional gaps between the integer bracket
//! bounds) evaluates to the category "Outside Range" with no commission.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use sales_core::calculations::CommissionSchedule;
//! use sales_core::catalog::builtin_revenue_classes;
//!
//! let classes = builtin_revenue_classes();
//! let schedule = CommissionSchedule::new(&classes);
//! let evaluation = schedule.evaluate(Some(dec!(500000)));
//!
//! // 500000 × 0.8 = 400000, the Nova ceiling: position 1.0, commission 2× base.
//! assert_eq!(evaluation.category, "Nova");
//! assert_eq!(evaluation.commission, Some(dec!(500.00)));
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::calculations::common::round_half_up;
use crate::models::RevenueClass;

/// Factor applied to reported monthly revenue before bracket lookup.
pub const REVENUE_ADJUSTMENT_FACTOR: Decimal = dec!(0.8);

/// Category name reported when no bracket contains the modified revenue.
pub const OUTSIDE_RANGE: &str = "Outside Range";

const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Result of a revenue evaluation.
///
/// The numeric fields are `None` when the revenue input could not be read as
/// a number; the evaluation still produces a category so the result can be
/// displayed as-is rather than flagged as an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenueEvaluation {
    /// Monthly revenue after the adjustment factor.
    pub modified_revenue: Option<Decimal>,

    /// Modified revenue annualised over twelve months.
    pub annual_revenue: Option<Decimal>,

    /// Matched bracket name, or [`OUTSIDE_RANGE`].
    pub category: String,

    /// Position-based commission; absent outside every bracket.
    pub commission: Option<Decimal>,
}

impl RevenueEvaluation {
    fn outside_range(
        modified_revenue: Option<Decimal>,
        annual_revenue: Option<Decimal>,
    ) -> Self {
        Self {
            modified_revenue,
            annual_revenue,
            category: OUTSIDE_RANGE.to_string(),
            commission: None,
        }
    }
}

/// Evaluator over an ordered commission bracket table.
#[derive(Debug, Clone)]
pub struct CommissionSchedule<'a> {
    classes: &'a [RevenueClass],
}

impl<'a> CommissionSchedule<'a> {
    /// Creates a schedule over `classes`.
    ///
    /// Classes should be ordered by `min_revenue` and non-overlapping (see
    /// [`crate::catalog::validate_revenue_classes`]); lookup is
    /// first-match-wins regardless.
    pub fn new(classes: &'a [RevenueClass]) -> Self {
        Self { classes }
    }

    /// Evaluates a monthly revenue figure against the bracket table.
    ///
    /// `None` represents revenue input that could not be parsed as a number;
    /// it evaluates to an all-empty "Outside Range" result.
    pub fn evaluate(
        &self,
        monthly_revenue: Option<Decimal>,
    ) -> RevenueEvaluation {
        let Some(monthly_revenue) = monthly_revenue else {
            return RevenueEvaluation::outside_range(None, None);
        };

        let modified = monthly_revenue * REVENUE_ADJUSTMENT_FACTOR;
        let annual = modified * MONTHS_PER_YEAR;

        match self.classes.iter().find(|c| c.contains(modified)) {
            Some(class) => {
                let commission = self.position_commission(class, modified);
                RevenueEvaluation {
                    modified_revenue: Some(modified),
                    annual_revenue: Some(annual),
                    category: class.name.clone(),
                    commission: Some(commission),
                }
            }
            None => RevenueEvaluation::outside_range(Some(modified), Some(annual)),
        }
    }

    /// Interpolates the commission linearly within the bracket.
    fn position_commission(
        &self,
        class: &RevenueClass,
        modified: Decimal,
    ) -> Decimal {
        let span = class.max_revenue - class.min_revenue;
        let position = if span.is_zero() {
            // Degenerate single-point bracket
            Decimal::ZERO
        } else {
            (modified - class.min_revenue) / span
        };
        round_half_up(class.base_commission * (Decimal::ONE + position))
    }
}
