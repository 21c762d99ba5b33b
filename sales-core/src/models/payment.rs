use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The payment-panel result: at most one of installment or full purchase.
///
/// The two financing outcomes and the full-purchase outcome are mutually
/// exclusive in the display; modelling them as one variant makes
/// last-trigger-wins an enforced invariant rather than a convention over two
/// nullable fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentQuote {
    /// No payment computation has produced a result yet.
    #[default]
    None,

    /// A monthly financing installment.
    Installment {
        monthly: Decimal,
        with_down_payment: bool,
    },

    /// The full, unfinanced purchase price.
    FullPurchase { total: Decimal },
}

impl PaymentQuote {
    pub fn is_none(&self) -> bool {
        matches!(self, PaymentQuote::None)
    }

    /// Display label for the payment mode, when a result exists.
    pub fn mode_label(&self) -> Option<&'static str> {
        match self {
            PaymentQuote::None => None,
            PaymentQuote::Installment {
                with_down_payment: true,
                ..
            } => Some("With Down Payment"),
            PaymentQuote::Installment {
                with_down_payment: false,
                ..
            } => Some("Without Down Payment"),
            PaymentQuote::FullPurchase { .. } => Some("Purchasing Model"),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn default_is_none() {
        assert_eq!(PaymentQuote::default(), PaymentQuote::None);
        assert!(PaymentQuote::default().is_none());
    }

    #[test]
    fn mode_label_matches_variant() {
        let with_dp = PaymentQuote::Installment {
            monthly: dec!(450),
            with_down_payment: true,
        };
        let without_dp = PaymentQuote::Installment {
            monthly: dec!(500),
            with_down_payment: false,
        };
        let full = PaymentQuote::FullPurchase { total: dec!(8000) };

        assert_eq!(with_dp.mode_label(), Some("With Down Payment"));
        assert_eq!(without_dp.mode_label(), Some("Without Down Payment"));
        assert_eq!(full.mode_label(), Some("Purchasing Model"));
        assert_eq!(PaymentQuote::None.mode_label(), None);
    }
}
