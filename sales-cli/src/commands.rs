//! Command implementations: each builds a serialisable report from a
//! [`SalesSession`], leaving rendering to [`crate::output`].

use anyhow::{Result, bail};
use clap::ValueEnum;
use rust_decimal::Decimal;
use sales_core::calculations::RevenueEvaluation;
use sales_core::models::{PaymentQuote, RevenueClass};
use sales_core::session::SalesSession;
use serde::Serialize;

/// Which payment model a quote should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum QuoteMode {
    /// Finance over the term with a down payment (lower markup).
    WithDownPayment,
    /// Finance over the term without a down payment (higher markup).
    WithoutDownPayment,
    /// Pay the full amount up front (no markup).
    Full,
}

/// Result of the `quote` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteReport {
    /// Total list price of the selection.
    pub total_price: Decimal,

    /// The payment-panel outcome; `PaymentQuote::None` when the selection
    /// was empty and no quote was produced.
    pub quote: PaymentQuote,
}

/// Result of the `commission` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommissionReport {
    /// The raw revenue figure as entered.
    pub monthly_revenue: String,

    pub evaluation: RevenueEvaluation,
}

/// One row of the `catalog` command's device listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceRow {
    pub name: String,
    pub cost: Decimal,
    pub price: Decimal,
    pub unit_margin: Decimal,
}

/// Result of the `catalog` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogReport {
    pub devices: Vec<DeviceRow>,
    pub revenue_classes: Vec<RevenueClass>,
}

/// Splits a `NAME=QTY` device argument.
fn split_device_spec(spec: &str) -> Result<(&str, &str)> {
    match spec.split_once('=') {
        Some((name, quantity)) if !name.trim().is_empty() => {
            Ok((name.trim(), quantity.trim()))
        }
        _ => bail!("expected NAME=QTY, got '{spec}'"),
    }
}

/// Runs a payment quote: applies the device selection and down payment to
/// the session, triggers the requested payment model, and reports the
/// resulting panel state.
pub fn run_quote(
    session: &mut SalesSession,
    devices: &[String],
    down_payment: &str,
    mode: QuoteMode,
) -> Result<QuoteReport> {
    for spec in devices {
        let (name, quantity) = split_device_spec(spec)?;
        session.set_quantity(name, quantity);
    }

    session.set_down_payment_input(down_payment);
    session.commit_down_payment();

    match mode {
        QuoteMode::WithDownPayment => session.quote_installment(true),
        QuoteMode::WithoutDownPayment => session.quote_installment(false),
        QuoteMode::Full => session.quote_full_purchase(),
    }

    Ok(QuoteReport {
        total_price: session.total_price(),
        quote: session.payment().clone(),
    })
}

/// Runs a revenue evaluation and reports the resulting panel state.
pub fn run_commission(
    session: &mut SalesSession,
    monthly_revenue: &str,
) -> Result<CommissionReport> {
    let evaluation = session.evaluate_revenue(monthly_revenue).clone();

    Ok(CommissionReport {
        monthly_revenue: monthly_revenue.to_string(),
        evaluation,
    })
}

/// Lists the reference tables the session is working from.
pub fn run_catalog(session: &SalesSession) -> CatalogReport {
    let devices = session
        .catalog()
        .devices()
        .iter()
        .map(|d| DeviceRow {
            name: d.name.clone(),
            cost: d.cost,
            price: d.price,
            unit_margin: d.unit_margin(),
        })
        .collect();

    CatalogReport {
        devices,
        revenue_classes: session.revenue_classes().to_vec(),
    }
}
