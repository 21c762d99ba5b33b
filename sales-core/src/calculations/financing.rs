//! Financing installment calculations for hardware sales.
//!
//! This module computes the monthly installment for a financed purchase, or
//! rejects the computation when there is nothing to finance.
//!
//! # Calculation Steps
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Financed price: total price × markup (1.35 with a down payment, 1.45 without) |
//! | 2    | Amount to finance: financed price − down payment (only when a down payment applies) |
//! | 3    | Monthly installment: amount to finance ÷ term months, rounded up to the nearest increment |
//!
//! The rounding order in step 3 is deliberate: divide by the term first,
//! then round the per-month figure up to the nearest 50. Rounding the total
//! before dividing produces different results and is not equivalent.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use sales_core::calculations::{FinancingInput, FinancingTerms, FinancingWorksheet};
//!
//! let worksheet = FinancingWorksheet::new(FinancingTerms::default());
//! let result = worksheet
//!     .calculate(&FinancingInput {
//!         total_price: dec!(8000),
//!         down_payment: dec!(1000),
//!         with_down_payment: true,
//!     })
//!     .unwrap();
//!
//! assert_eq!(result.financed_price, dec!(10800.00));
//! assert_eq!(result.amount_to_finance, dec!(9800.00));
//! assert_eq!(result.monthly_installment, dec!(450));
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calculations::common::round_up_to_multiple;

/// Errors that can occur during financing calculations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FinancingError {
    /// A financing markup must be at least 1 (no discount through financing).
    #[error("financing markup must be at least 1, got {0}")]
    InvalidMarkup(Decimal),

    /// The financing term must be at least one month.
    #[error("financing term must be at least one month, got {0}")]
    InvalidTermMonths(u32),

    /// The installment rounding increment must be positive.
    #[error("installment increment must be positive, got {0}")]
    InvalidIncrement(Decimal),

    /// The minimum down payment must be non-negative.
    #[error("minimum down payment must be non-negative, got {0}")]
    InvalidMinDownPayment(Decimal),

    /// The total price was zero or negative, so there is nothing to finance.
    #[error("nothing to finance for total price {0}")]
    NothingToFinance(Decimal),
}

/// Financing terms: markups, term length, and rounding increment.
///
/// The default terms are the standard dealer terms: 35% markup with a down
/// payment, 45% without, 24 months, installments in 50 DKK increments, and a
/// 1000 DKK minimum down payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancingTerms {
    /// Multiplicative markup on the total price when a down payment applies.
    pub with_down_payment_markup: Decimal,

    /// Multiplicative markup on the total price without a down payment.
    pub no_down_payment_markup: Decimal,

    /// Number of monthly installments.
    pub term_months: u32,

    /// Installments are rounded up to a multiple of this amount.
    pub installment_increment: Decimal,

    /// Smallest accepted down payment. Inputs below this are reset to it.
    pub min_down_payment: Decimal,
}

impl Default for FinancingTerms {
    fn default() -> Self {
        Self {
            with_down_payment_markup: dec!(1.35),
            no_down_payment_markup: dec!(1.45),
            term_months: 24,
            installment_increment: dec!(50),
            min_down_payment: dec!(1000),
        }
    }
}

impl FinancingTerms {
    /// Checks the terms for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`FinancingError`] for a markup below 1, a zero-month term,
    /// a non-positive increment, or a negative minimum down payment.
    pub fn validate(&self) -> Result<(), FinancingError> {
        if self.with_down_payment_markup < Decimal::ONE {
            return Err(FinancingError::InvalidMarkup(self.with_down_payment_markup));
        }
        if self.no_down_payment_markup < Decimal::ONE {
            return Err(FinancingError::InvalidMarkup(self.no_down_payment_markup));
        }
        if self.term_months == 0 {
            return Err(FinancingError::InvalidTermMonths(self.term_months));
        }
        if self.installment_increment <= Decimal::ZERO {
            return Err(FinancingError::InvalidIncrement(self.installment_increment));
        }
        if self.min_down_payment < Decimal::ZERO {
            return Err(FinancingError::InvalidMinDownPayment(self.min_down_payment));
        }
        Ok(())
    }
}

/// Input values for a financing calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancingInput {
    /// Total list price of the selected devices.
    pub total_price: Decimal,

    /// Down payment amount. Ignored when `with_down_payment` is false.
    pub down_payment: Decimal,

    /// Whether the customer pays a down payment (selects the lower markup).
    pub with_down_payment: bool,
}

/// Result of a financing calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancingResult {
    /// Total price after the financing markup.
    pub financed_price: Decimal,

    /// Financed price minus the down payment (when one applies).
    pub amount_to_finance: Decimal,

    /// Monthly installment, rounded up to the increment.
    pub monthly_installment: Decimal,
}

/// Calculator for financing installments over a set of terms.
#[derive(Debug, Clone)]
pub struct FinancingWorksheet {
    terms: FinancingTerms,
}

impl FinancingWorksheet {
    pub fn new(terms: FinancingTerms) -> Self {
        Self { terms }
    }

    pub fn terms(&self) -> &FinancingTerms {
        &self.terms
    }

    /// Calculates the financing breakdown for `input`.
    ///
    /// # Errors
    ///
    /// Returns [`FinancingError::NothingToFinance`] when the total price is
    /// zero or negative, or a terms validation error for inconsistent terms.
    pub fn calculate(
        &self,
        input: &FinancingInput,
    ) -> Result<FinancingResult, FinancingError> {
        self.terms.validate()?;

        if input.total_price <= Decimal::ZERO {
            return Err(FinancingError::NothingToFinance(input.total_price));
        }

        let financed_price = self.financed_price(input.total_price, input.with_down_payment);
        let amount_to_finance =
            self.amount_to_finance(financed_price, input.down_payment, input.with_down_payment);
        let monthly_installment = self.monthly_installment(amount_to_finance);

        Ok(FinancingResult {
            financed_price,
            amount_to_finance,
            monthly_installment,
        })
    }

    /// Applies the financing markup to the total price.
    fn financed_price(
        &self,
        total_price: Decimal,
        with_down_payment: bool,
    ) -> Decimal {
        let markup = if with_down_payment {
            self.terms.with_down_payment_markup
        } else {
            self.terms.no_down_payment_markup
        };
        total_price * markup
    }

    /// Subtracts the down payment when one applies.
    fn amount_to_finance(
        &self,
        financed_price: Decimal,
        down_payment: Decimal,
        with_down_payment: bool,
    ) -> Decimal {
        if with_down_payment {
            financed_price - down_payment
        } else {
            financed_price
        }
    }

    /// Divides by the term, then rounds the per-month figure up to the
    /// increment.
    fn monthly_installment(
        &self,
        amount_to_finance: Decimal,
    ) -> Decimal {
        let per_month = amount_to_finance / Decimal::from(self.terms.term_months);
        round_up_to_multiple(per_month, self.terms.installment_increment)
    }
}
