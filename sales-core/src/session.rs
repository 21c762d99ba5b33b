//! Interactive session state for the pricing and commission engine.
//!
//! A [`SalesSession`] owns the mutable state of one interactive session: the
//! device selection, the down-payment field, and the last computed result of
//! each panel. All computation is delegated to the pure calculators in
//! [`crate::calculations`]; the session only wires user input to them and
//! holds the results. Nothing here is persisted; dropping the session
//! discards all of it.

use std::sync::OnceLock;

use regex::Regex;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::calculations::{
    CommissionSchedule, FinancingError, FinancingInput, FinancingTerms, FinancingWorksheet,
    RevenueEvaluation,
};
use crate::catalog::DeviceCatalog;
use crate::models::{DeviceSelection, PaymentQuote, RevenueClass};

/// Gate for the down-payment field: digits only, empty allowed.
fn digits_only() -> &'static Regex {
    static DIGITS_ONLY: OnceLock<Regex> = OnceLock::new();
    DIGITS_ONLY.get_or_init(|| Regex::new(r"^\d*$").unwrap())
}

/// State of one interactive sales session.
///
/// Invalid input never surfaces an error to the caller: quantities clamp,
/// the down payment resets to its minimum, unreadable revenue evaluates to
/// "Outside Range", and payment quotes over an empty selection leave the
/// previous quote untouched.
#[derive(Debug, Clone)]
pub struct SalesSession {
    catalog: DeviceCatalog,
    revenue_classes: Vec<RevenueClass>,
    terms: FinancingTerms,
    selection: DeviceSelection,
    down_payment: Decimal,
    payment: PaymentQuote,
    revenue: Option<RevenueEvaluation>,
}

impl Default for SalesSession {
    /// A session over the built-in tables and standard financing terms.
    fn default() -> Self {
        Self::new(
            DeviceCatalog::builtin(),
            crate::catalog::builtin_revenue_classes(),
            FinancingTerms::default(),
        )
    }
}

impl SalesSession {
    /// Creates a session with the given reference tables and terms.
    ///
    /// The down payment starts at the terms' minimum; the selection is empty
    /// and neither panel has a result.
    pub fn new(
        catalog: DeviceCatalog,
        revenue_classes: Vec<RevenueClass>,
        terms: FinancingTerms,
    ) -> Self {
        let down_payment = terms.min_down_payment;
        Self {
            catalog,
            revenue_classes,
            terms,
            selection: DeviceSelection::new(),
            down_payment,
            payment: PaymentQuote::None,
            revenue: None,
        }
    }

    pub fn catalog(&self) -> &DeviceCatalog {
        &self.catalog
    }

    pub fn revenue_classes(&self) -> &[RevenueClass] {
        &self.revenue_classes
    }

    pub fn selection(&self) -> &DeviceSelection {
        &self.selection
    }

    pub fn down_payment(&self) -> Decimal {
        self.down_payment
    }

    /// Last payment-panel result (installment or full purchase).
    pub fn payment(&self) -> &PaymentQuote {
        &self.payment
    }

    /// Last revenue-panel result, if the panel has been triggered.
    pub fn revenue(&self) -> Option<&RevenueEvaluation> {
        self.revenue.as_ref()
    }

    /// Sets a device quantity from a raw input string.
    ///
    /// Unreadable input counts as 0 (which unsets the device); negative and
    /// fractional values clamp and floor per
    /// [`DeviceSelection::set_quantity`]. Names not in the catalog are
    /// ignored.
    pub fn set_quantity(
        &mut self,
        device: &str,
        raw: &str,
    ) {
        if !self.catalog.contains(device) {
            warn!(device, "ignoring quantity for unknown device");
            return;
        }
        let quantity = raw.trim().parse::<Decimal>().unwrap_or(Decimal::ZERO);
        self.selection.set_quantity(device, quantity);
    }

    /// Total list price of the current selection.
    pub fn total_price(&self) -> Decimal {
        self.catalog.total_price(&self.selection)
    }

    /// Updates the down-payment field from a raw input string.
    ///
    /// Input with anything but digits is rejected outright (the field keeps
    /// its value). An empty string resets to the minimum. Values are not
    /// clamped here; the minimum is enforced by [`Self::commit_down_payment`].
    pub fn set_down_payment_input(
        &mut self,
        raw: &str,
    ) {
        if !digits_only().is_match(raw) {
            debug!(input = raw, "rejecting non-numeric down payment input");
            return;
        }
        if raw.is_empty() {
            self.down_payment = self.terms.min_down_payment;
            return;
        }
        match raw.parse::<Decimal>() {
            Ok(value) => self.down_payment = value,
            Err(e) => {
                warn!(input = raw, "unparseable down payment, resetting: {e}");
                self.down_payment = self.terms.min_down_payment;
            }
        }
    }

    /// Enforces the minimum down payment (the field's losing-focus rule).
    pub fn commit_down_payment(&mut self) {
        if self.down_payment < self.terms.min_down_payment {
            self.down_payment = self.terms.min_down_payment;
        }
    }

    /// Computes a financing installment quote for the current selection.
    ///
    /// With an empty selection this is a silent no-op and the previous
    /// payment result (of either kind) stays displayed. Otherwise the new
    /// installment replaces whatever the payment panel held.
    pub fn quote_installment(
        &mut self,
        with_down_payment: bool,
    ) {
        let input = FinancingInput {
            total_price: self.total_price(),
            down_payment: self.down_payment,
            with_down_payment,
        };
        let worksheet = FinancingWorksheet::new(self.terms.clone());

        match worksheet.calculate(&input) {
            Ok(result) => {
                self.payment = PaymentQuote::Installment {
                    monthly: result.monthly_installment,
                    with_down_payment,
                };
            }
            Err(FinancingError::NothingToFinance(_)) => {
                debug!("no devices selected, leaving payment panel unchanged");
            }
            Err(e) => {
                warn!("financing terms rejected: {e}");
            }
        }
    }

    /// Shows the full, unfinanced purchase price for the current selection.
    ///
    /// Same no-op rule as [`Self::quote_installment`] for an empty
    /// selection; otherwise replaces any installment result.
    pub fn quote_full_purchase(&mut self) {
        let total = self.total_price();
        if total <= Decimal::ZERO {
            debug!("no devices selected, leaving payment panel unchanged");
            return;
        }
        self.payment = PaymentQuote::FullPurchase { total };
    }

    /// Evaluates a monthly revenue figure and fills the revenue panel.
    ///
    /// Always produces a result, replacing the previous one; unreadable
    /// input yields the empty "Outside Range" evaluation. The payment panel
    /// is unaffected.
    pub fn evaluate_revenue(
        &mut self,
        raw: &str,
    ) -> &RevenueEvaluation {
        let parsed = match raw.trim() {
            "" => None,
            trimmed => trimmed.parse::<Decimal>().ok(),
        };
        if parsed.is_none() && !raw.trim().is_empty() {
            warn!(input = raw, "unreadable monthly revenue");
        }
        let evaluation = CommissionSchedule::new(&self.revenue_classes).evaluate(parsed);
        self.revenue.insert(evaluation)
    }

    /// Restores the session to its start-of-session defaults.
    pub fn reset(&mut self) {
        self.selection.clear();
        self.down_payment = self.terms.min_down_payment;
        self.payment = PaymentQuote::None;
        self.revenue = None;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // defaults
    // =========================================================================

    #[test]
    fn new_session_has_empty_state_and_minimum_down_payment() {
        let session = SalesSession::default();

        assert!(session.selection().is_empty());
        assert_eq!(session.down_payment(), dec!(1000));
        assert_eq!(session.payment(), &PaymentQuote::None);
        assert_eq!(session.revenue(), None);
    }

    // =========================================================================
    // quantity input
    // =========================================================================

    #[test]
    fn set_quantity_parses_and_floors() {
        let mut session = SalesSession::default();

        session.set_quantity("M20", "2.7");

        assert_eq!(session.selection().quantity("M20"), 2);
    }

    #[test]
    fn set_quantity_unreadable_input_unsets_the_device() {
        let mut session = SalesSession::default();
        session.set_quantity("M20", "3");

        session.set_quantity("M20", "abc");

        assert_eq!(session.selection().quantity("M20"), 0);
    }

    #[test]
    fn set_quantity_ignores_unknown_devices() {
        let mut session = SalesSession::default();

        session.set_quantity("Kasseapparat", "3");

        assert!(session.selection().is_empty());
        assert_eq!(session.total_price(), dec!(0));
    }

    #[test]
    fn total_price_sums_selected_devices() {
        let mut session = SalesSession::default();
        session.set_quantity("Dobbelt Screen", "2");
        session.set_quantity("Pengeskuffe", "1");

        assert_eq!(session.total_price(), dec!(17000));
    }

    // =========================================================================
    // down payment field
    // =========================================================================

    #[test]
    fn down_payment_rejects_non_digit_input() {
        let mut session = SalesSession::default();
        session.set_down_payment_input("2500");

        session.set_down_payment_input("25a0");

        assert_eq!(session.down_payment(), dec!(2500));
    }

    #[test]
    fn down_payment_empty_input_resets_to_minimum() {
        let mut session = SalesSession::default();
        session.set_down_payment_input("2500");

        session.set_down_payment_input("");

        assert_eq!(session.down_payment(), dec!(1000));
    }

    #[test]
    fn down_payment_below_minimum_is_kept_until_commit() {
        let mut session = SalesSession::default();

        session.set_down_payment_input("500");
        assert_eq!(session.down_payment(), dec!(500));

        session.commit_down_payment();
        assert_eq!(session.down_payment(), dec!(1000));
    }

    #[test]
    fn down_payment_at_or_above_minimum_survives_commit() {
        let mut session = SalesSession::default();

        session.set_down_payment_input("1000");
        session.commit_down_payment();

        assert_eq!(session.down_payment(), dec!(1000));

        session.set_down_payment_input("3000");
        session.commit_down_payment();

        assert_eq!(session.down_payment(), dec!(3000));
    }

    // =========================================================================
    // payment panel
    // =========================================================================

    #[test]
    fn quote_installment_with_down_payment() {
        let mut session = SalesSession::default();
        session.set_quantity("Dobbelt Screen", "1");

        session.quote_installment(true);

        assert_eq!(
            session.payment(),
            &PaymentQuote::Installment {
                monthly: dec!(450),
                with_down_payment: true,
            }
        );
    }

    #[test]
    fn quote_installment_without_down_payment() {
        let mut session = SalesSession::default();
        session.set_quantity("Dobbelt Screen", "1");

        session.quote_installment(false);

        assert_eq!(
            session.payment(),
            &PaymentQuote::Installment {
                monthly: dec!(500),
                with_down_payment: false,
            }
        );
    }

    #[test]
    fn quote_full_purchase_shows_unmodified_total() {
        let mut session = SalesSession::default();
        session.set_quantity("Dobbelt Screen", "1");

        session.quote_full_purchase();

        assert_eq!(
            session.payment(),
            &PaymentQuote::FullPurchase { total: dec!(8000) }
        );
    }

    #[test]
    fn payment_results_are_mutually_exclusive_last_trigger_wins() {
        let mut session = SalesSession::default();
        session.set_quantity("Dobbelt Screen", "1");

        session.quote_installment(true);
        session.quote_full_purchase();
        assert_eq!(
            session.payment(),
            &PaymentQuote::FullPurchase { total: dec!(8000) }
        );

        session.quote_installment(false);
        assert!(matches!(
            session.payment(),
            PaymentQuote::Installment {
                with_down_payment: false,
                ..
            }
        ));
    }

    #[test]
    fn quotes_over_empty_selection_leave_the_panel_unchanged() {
        let mut session = SalesSession::default();
        session.set_quantity("Dobbelt Screen", "1");
        session.quote_installment(true);
        let before = session.payment().clone();

        session.set_quantity("Dobbelt Screen", "0");
        session.quote_installment(false);
        assert_eq!(session.payment(), &before);

        session.quote_full_purchase();
        assert_eq!(session.payment(), &before);
    }

    // =========================================================================
    // revenue panel
    // =========================================================================

    #[test]
    fn evaluate_revenue_fills_the_revenue_panel() {
        let mut session = SalesSession::default();

        session.evaluate_revenue("500000");

        let evaluation = session.revenue().unwrap();
        assert_eq!(evaluation.category, "Nova");
        assert_eq!(evaluation.commission, Some(dec!(500.00)));
        assert_eq!(evaluation.annual_revenue, Some(dec!(4800000.0)));
    }

    #[test]
    fn evaluate_revenue_unreadable_input_is_outside_range() {
        let mut session = SalesSession::default();

        session.evaluate_revenue("not a number");

        let evaluation = session.revenue().unwrap();
        assert_eq!(evaluation.category, "Outside Range");
        assert_eq!(evaluation.modified_revenue, None);
        assert_eq!(evaluation.commission, None);
    }

    #[test]
    fn revenue_panel_is_independent_of_the_payment_panel() {
        let mut session = SalesSession::default();
        session.set_quantity("M20", "1");
        session.quote_full_purchase();

        session.evaluate_revenue("500000");

        assert_eq!(
            session.payment(),
            &PaymentQuote::FullPurchase { total: dec!(2500) }
        );
        assert!(session.revenue().is_some());
    }

    // =========================================================================
    // reset
    // =========================================================================

    #[test]
    fn reset_restores_session_defaults() {
        let mut session = SalesSession::default();
        session.set_quantity("M20", "2");
        session.set_down_payment_input("5000");
        session.quote_installment(true);
        session.evaluate_revenue("500000");

        session.reset();

        assert!(session.selection().is_empty());
        assert_eq!(session.down_payment(), dec!(1000));
        assert_eq!(session.payment(), &PaymentQuote::None);
        assert_eq!(session.revenue(), None);
    }
}
