//! Plain-text rendering for command reports.
//!
//! Amounts render as plain `<value> DKK` figures; absent values render as
//! "—". JSON output bypasses this module entirely.

use std::fmt::Write;

use rust_decimal::Decimal;
use sales_core::models::PaymentQuote;

use crate::commands::{CatalogReport, CommissionReport, QuoteReport};

/// Formats an amount as a DKK currency figure.
pub fn dkk(amount: Decimal) -> String {
    format!("{amount} DKK")
}

/// Formats an optional amount, using "—" when absent.
pub fn opt_dkk(amount: Option<Decimal>) -> String {
    amount.map(dkk).unwrap_or_else(|| "—".to_string())
}

pub fn render_quote(report: &QuoteReport) -> String {
    let mut out = String::new();

    writeln!(out, "Total price: {}", dkk(report.total_price)).unwrap();
    match &report.quote {
        PaymentQuote::None => {
            writeln!(out, "No devices selected; no quote produced.").unwrap();
        }
        PaymentQuote::Installment { monthly, .. } => {
            writeln!(
                out,
                "Payment option: {}",
                report.quote.mode_label().unwrap_or_default()
            )
            .unwrap();
            writeln!(out, "Monthly Installment: {}", dkk(*monthly)).unwrap();
        }
        PaymentQuote::FullPurchase { total } => {
            writeln!(
                out,
                "Payment option: {}",
                report.quote.mode_label().unwrap_or_default()
            )
            .unwrap();
            writeln!(out, "Total Price: {}", dkk(*total)).unwrap();
        }
    }

    out
}

pub fn render_commission(report: &CommissionReport) -> String {
    let evaluation = &report.evaluation;
    let mut out = String::new();

    writeln!(
        out,
        "Modified Monthly Revenue: {}",
        opt_dkk(evaluation.modified_revenue)
    )
    .unwrap();
    writeln!(out, "Annual Revenue: {}", opt_dkk(evaluation.annual_revenue)).unwrap();
    writeln!(out, "Category: {}", evaluation.category).unwrap();
    if let Some(commission) = evaluation.commission {
        writeln!(out, "Agent Commission: {}", dkk(commission)).unwrap();
    }

    out
}

pub fn render_catalog(report: &CatalogReport) -> String {
    let mut out = String::new();

    writeln!(out, "Devices:").unwrap();
    for device in &report.devices {
        writeln!(
            out,
            "  {}: cost {}, price {}, margin {}",
            device.name,
            dkk(device.cost),
            dkk(device.price),
            dkk(device.unit_margin)
        )
        .unwrap();
    }

    writeln!(out, "Revenue classes:").unwrap();
    for class in &report.revenue_classes {
        writeln!(
            out,
            "  {}: {} – {}, base commission {}",
            class.name,
            dkk(class.min_revenue),
            dkk(class.max_revenue),
            dkk(class.base_commission)
        )
        .unwrap();
    }

    out
}
