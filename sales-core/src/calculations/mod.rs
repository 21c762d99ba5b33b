//! Pricing and commission calculation modules.
//!
//! This module provides the pure computation layer: financing installments
//! over the device total, and commission evaluation over monthly revenue.
//! Mutable interactive state lives in [`crate::session`].

pub mod commission;
pub mod common;
pub mod financing;

pub use commission::{CommissionSchedule, OUTSIDE_RANGE, RevenueEvaluation};
pub use financing::{
    FinancingError, FinancingInput, FinancingResult, FinancingTerms, FinancingWorksheet,
};
