use rust_decimal::Decimal;

use super::{monthly_rate, PaymentModel, PaymentResult};
use crate::time_value::level_payment;
use crate::types::{Money, Percent};

/// Level monthly payment, total paid and total interest for a fully
/// amortizing loan under monthly compounding.
///
/// A zero or negative rate yields a zero payment, not `principal / n`:
/// zero-rate loans are deliberately left unamortized. The same holds for
/// non-positive principal and a zero term.
pub fn compute_amortizing_payment(
    principal: Money,
    annual_rate_percent: Percent,
    term_months: u32,
) -> PaymentResult {
    let r = monthly_rate(annual_rate_percent);
    if principal <= Decimal::ZERO || r <= Decimal::ZERO {
        tracing::debug!(
            %principal,
            %annual_rate_percent,
            "non-positive input, amortizing payment is zero"
        );
        return PaymentResult::zero(PaymentModel::Amortizing);
    }

    let Some(monthly_payment) = level_payment(principal, r, term_months) else {
        tracing::debug!(term_months, "annuity undefined or out of range, payment is zero");
        return PaymentResult::zero(PaymentModel::Amortizing);
    };

    let Some(total_paid) = monthly_payment.checked_mul(Decimal::from(term_months)) else {
        tracing::debug!(term_months, "total paid overflows, result is zero");
        return PaymentResult::zero(PaymentModel::Amortizing);
    };

    PaymentResult {
        monthly_payment,
        total_interest: total_paid - principal,
        total_paid: Some(total_paid),
    }
}
