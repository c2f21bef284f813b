//! Payment Engine.
//!
//! Pure, infallible functions from loan parameters to payments and
//! amortization schedules. Degenerate inputs (non-positive principal or
//! rate, zero term) never raise: they map to zero payments and empty
//! schedules so a live-updating UI always has something to render.

pub mod amortizing;
pub mod interest_only;
pub mod schedule;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::types::{with_metadata, ComputationOutput, LoanParameters, Money, Percent, Rate, Term};
use crate::MortgageCalcResult;

pub use amortizing::compute_amortizing_payment;
pub use interest_only::{compute_interest_only_payment, compute_interest_only_total};
pub use schedule::compute_amortization_schedule;

// ---------------------------------------------------------------------------
// Value records
// ---------------------------------------------------------------------------

/// Headline numbers for one set of loan parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentResult {
    pub monthly_payment: Money,
    /// Interest paid over the full term.
    pub total_interest: Money,
    /// Principal plus interest. Absent for interest-only loans, where the
    /// principal is never repaid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_paid: Option<Money>,
}

impl PaymentResult {
    pub(crate) fn zero(model: PaymentModel) -> Self {
        Self {
            monthly_payment: Decimal::ZERO,
            total_interest: Decimal::ZERO,
            total_paid: match model {
                PaymentModel::InterestOnly => None,
                PaymentModel::Amortizing => Some(Decimal::ZERO),
            },
        }
    }
}

/// One month of a level-payment amortization schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmortizationRow {
    /// 1-based payment number.
    pub month: u32,
    pub payment: Money,
    pub principal_portion: Money,
    pub interest_portion: Money,
    /// Balance after this payment, floored at zero.
    pub remaining_balance: Money,
}

/// Payment model, chosen by product variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentModel {
    /// Interest accrues and is paid monthly; principal never decreases.
    #[default]
    InterestOnly,
    /// Fixed monthly payment that retires the principal by the last month.
    Amortizing,
}

impl PaymentModel {
    pub fn compute(self, params: &LoanParameters) -> PaymentResult {
        match self {
            PaymentModel::InterestOnly => compute_interest_only_total(
                params.principal,
                params.annual_rate_percent,
                params.term_months,
            ),
            PaymentModel::Amortizing => compute_amortizing_payment(
                params.principal,
                params.annual_rate_percent,
                params.term_months,
            ),
        }
    }

    /// Amortization schedule; always empty for interest-only loans.
    pub fn schedule(self, params: &LoanParameters) -> Vec<AmortizationRow> {
        match self {
            PaymentModel::InterestOnly => Vec::new(),
            PaymentModel::Amortizing => compute_amortization_schedule(
                params.principal,
                params.annual_rate_percent,
                params.term_months,
            ),
        }
    }

    pub fn methodology(self) -> &'static str {
        match self {
            PaymentModel::InterestOnly => "Interest-only payment: principal × (rate / 100) / 12",
            PaymentModel::Amortizing => {
                "Level-payment amortization with monthly compounding: P × r × (1+r)^n / ((1+r)^n − 1)"
            }
        }
    }
}

/// Monthly periodic rate `r` for an annual percentage (5 → 0.0041666…).
pub fn monthly_rate(annual_rate_percent: Percent) -> Rate {
    annual_rate_percent / dec!(100) / dec!(12)
}

// ---------------------------------------------------------------------------
// Quote request / response
// ---------------------------------------------------------------------------

/// Quote request as received from the CLI or the JS bindings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanInput {
    pub principal: Money,
    pub annual_rate_percent: Percent,
    pub term: Term,
    #[serde(default)]
    pub model: PaymentModel,
    /// Attach the month-by-month schedule (amortizing model only).
    #[serde(default)]
    pub include_schedule: bool,
}

impl LoanInput {
    pub fn parameters(&self) -> LoanParameters {
        LoanParameters::from_term(self.principal, self.annual_rate_percent, self.term)
    }
}

impl Default for LoanInput {
    fn default() -> Self {
        let params = LoanParameters::default();
        Self {
            principal: params.principal,
            annual_rate_percent: params.annual_rate_percent,
            term: Term::default(),
            model: PaymentModel::default(),
            include_schedule: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanQuote {
    pub model: PaymentModel,
    pub principal: Money,
    pub annual_rate_percent: Percent,
    pub term_months: u32,
    pub term_label: String,
    #[serde(flatten)]
    pub payment: PaymentResult,
    /// Monthly payment × 12.
    pub annual_payment: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Vec<AmortizationRow>>,
}

/// Quote a loan under the requested model, wrapped in the standard envelope.
///
/// Never fails. Inputs that degrade to a zero payment are reported in
/// `warnings` rather than as errors.
pub fn quote_loan(input: &LoanInput) -> ComputationOutput<LoanQuote> {
    let start = Instant::now();
    let params = input.parameters();

    let payment = input.model.compute(&params);
    let warnings = degenerate_warnings(input, &params, &payment);

    let schedule = if input.include_schedule && input.model == PaymentModel::Amortizing {
        Some(input.model.schedule(&params))
    } else {
        None
    };

    let quote = LoanQuote {
        model: input.model,
        principal: params.principal,
        annual_rate_percent: params.annual_rate_percent,
        term_months: params.term_months,
        term_label: input.term.label(),
        annual_payment: payment.monthly_payment.saturating_mul(dec!(12)),
        payment,
        schedule,
    };

    tracing::trace!(
        model = ?input.model,
        monthly_payment = %quote.payment.monthly_payment,
        "computed loan quote"
    );

    let elapsed = start.elapsed().as_micros() as u64;
    with_metadata(input.model.methodology(), input, warnings, elapsed, quote)
}

/// JSON-in/JSON-out wrapper over [`quote_loan`] for foreign callers.
pub fn quote_loan_json(input_json: &str) -> MortgageCalcResult<String> {
    let input: LoanInput = serde_json::from_str(input_json)?;
    Ok(serde_json::to_string(&quote_loan(&input))?)
}

fn degenerate_warnings(
    input: &LoanInput,
    params: &LoanParameters,
    payment: &PaymentResult,
) -> Vec<String> {
    let mut warnings = Vec::new();

    if params.principal <= Decimal::ZERO {
        warnings.push(format!(
            "Principal {} is not positive; payment degrades to zero",
            params.principal
        ));
    }
    if params.annual_rate_percent <= Decimal::ZERO {
        let mut msg = format!(
            "Annual rate {}% is not positive; payment degrades to zero",
            params.annual_rate_percent
        );
        if input.model == PaymentModel::Amortizing {
            msg.push_str(" (zero-rate loans are not amortized as principal / term)");
        }
        warnings.push(msg);
    }
    if params.term_months == 0 {
        warnings.push("Term is zero months; nothing is paid over the term".to_string());
    }
    if warnings.is_empty() && payment.monthly_payment.is_zero() {
        warnings.push(
            "Intermediate result exceeded the decimal range; payment degraded to zero".to_string(),
        );
    }
    if input.include_schedule && input.model == PaymentModel::InterestOnly {
        warnings.push("Interest-only loans have no amortization schedule".to_string());
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amortizing_input() -> LoanInput {
        LoanInput {
            principal: dec!(500_000),
            annual_rate_percent: dec!(10),
            term: Term::Months(12),
            model: PaymentModel::Amortizing,
            include_schedule: true,
        }
    }

    #[test]
    fn test_monthly_rate() {
        assert_eq!(monthly_rate(dec!(12)), dec!(0.01));
        assert_eq!(monthly_rate(dec!(6)), dec!(0.005));
    }

    #[test]
    fn test_model_dispatch_matches_direct_calls() {
        let params = LoanParameters::new(dec!(250_000), dec!(4.5), 360);
        assert_eq!(
            PaymentModel::InterestOnly.compute(&params),
            compute_interest_only_total(dec!(250_000), dec!(4.5), 360)
        );
        assert_eq!(
            PaymentModel::Amortizing.compute(&params),
            compute_amortizing_payment(dec!(250_000), dec!(4.5), 360)
        );
        assert!(PaymentModel::InterestOnly.schedule(&params).is_empty());
        assert_eq!(PaymentModel::Amortizing.schedule(&params).len(), 360);
    }

    #[test]
    fn test_quote_includes_schedule_when_requested() {
        let out = quote_loan(&amortizing_input());
        let quote = &out.result;
        assert_eq!(quote.term_months, 12);
        assert_eq!(quote.term_label, "12 months");
        assert_eq!(quote.schedule.as_ref().map(Vec::len), Some(12));
        assert_eq!(quote.annual_payment, quote.payment.monthly_payment * dec!(12));
        assert!(out.warnings.is_empty(), "unexpected warnings: {:?}", out.warnings);
    }

    #[test]
    fn test_quote_interest_only_skips_schedule_with_warning() {
        let input = LoanInput {
            model: PaymentModel::InterestOnly,
            ..amortizing_input()
        };
        let out = quote_loan(&input);
        assert!(out.result.schedule.is_none());
        assert!(out.result.payment.total_paid.is_none());
        assert_eq!(out.warnings.len(), 1);
    }

    #[test]
    fn test_quote_zero_rate_warns_not_errors() {
        let input = LoanInput {
            annual_rate_percent: Decimal::ZERO,
            ..amortizing_input()
        };
        let out = quote_loan(&input);
        assert_eq!(out.result.payment.monthly_payment, Decimal::ZERO);
        assert_eq!(out.result.schedule, Some(Vec::new()));
        assert!(out.warnings[0].contains("not positive"));
        assert!(out.warnings[0].contains("principal / term"));
    }

    #[test]
    fn test_loan_input_defaults_from_json() {
        let input: LoanInput = serde_json::from_str(
            r#"{"principal":"500000","annual_rate_percent":"5","term":{"years":25}}"#,
        )
        .unwrap();
        assert_eq!(input, LoanInput::default());
    }

    #[test]
    fn test_quote_loan_json_round_trip_fields() {
        let json = quote_loan_json(
            r#"{"principal":"500000","annual_rate_percent":"5","term":{"months":300}}"#,
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["result"]["model"], "interest_only");
        assert_eq!(value["result"]["term_months"], 300);
        assert!(value["result"]["monthly_payment"]
            .as_str()
            .unwrap()
            .starts_with("2083.33"));
        assert!(value["result"].get("total_paid").is_none());
    }

    #[test]
    fn test_quote_loan_json_rejects_bad_payload() {
        let err = quote_loan_json(r#"{"principal":"abc"}"#).unwrap_err();
        assert!(matches!(err, crate::MortgageCalcError::SerializationError(_)));
    }
}
