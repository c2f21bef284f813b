//! Interest-only payment model. The balance never amortizes, so there is no
//! schedule: every month pays the same accrued interest.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::{PaymentModel, PaymentResult};
use crate::types::{Money, Percent};

/// Monthly interest-only payment: `principal × (rate / 100) / 12`.
///
/// Zero when `principal ≤ 0` or `annual_rate_percent ≤ 0`.
pub fn compute_interest_only_payment(principal: Money, annual_rate_percent: Percent) -> Money {
    if principal <= Decimal::ZERO || annual_rate_percent <= Decimal::ZERO {
        tracing::debug!(
            %principal,
            %annual_rate_percent,
            "non-positive input, interest-only payment is zero"
        );
        return Decimal::ZERO;
    }

    match principal.checked_mul(annual_rate_percent / dec!(100)) {
        Some(annual_interest) => annual_interest / dec!(12),
        None => {
            tracing::debug!(%principal, "annual interest overflows, payment is zero");
            Decimal::ZERO
        }
    }
}

/// Interest-only payment and the interest paid over `term_months`.
///
/// `total_interest == monthly_payment × term_months`; `total_paid` is `None`
/// since the principal is never repaid.
pub fn compute_interest_only_total(
    principal: Money,
    annual_rate_percent: Percent,
    term_months: u32,
) -> PaymentResult {
    let monthly_payment = compute_interest_only_payment(principal, annual_rate_percent);

    match monthly_payment.checked_mul(Decimal::from(term_months)) {
        Some(total_interest) => PaymentResult {
            monthly_payment,
            total_interest,
            total_paid: None,
        },
        None => {
            tracing::debug!(term_months, "total interest overflows, result is zero");
            PaymentResult::zero(PaymentModel::InterestOnly)
        }
    }
}
