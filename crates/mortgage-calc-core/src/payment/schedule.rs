use rust_decimal::Decimal;

use super::{monthly_rate, AmortizationRow};
use crate::time_value::level_payment;
use crate::types::{Money, Percent};

/// Month-by-month breakdown of a level-payment loan.
///
/// One row per month from 1 to `term_months`; empty when the payment would
/// be zero (`principal ≤ 0`, rate ≤ 0, or a zero term). The balance is
/// floored at zero so cumulative decimal drift cannot turn it negative on
/// the last row. No rounding to cents is applied.
pub fn compute_amortization_schedule(
    principal: Money,
    annual_rate_percent: Percent,
    term_months: u32,
) -> Vec<AmortizationRow> {
    let r = monthly_rate(annual_rate_percent);
    if principal <= Decimal::ZERO || r <= Decimal::ZERO {
        tracing::debug!(%principal, %annual_rate_percent, "no schedule for degenerate loan");
        return Vec::new();
    }

    let Some(payment) = level_payment(principal, r, term_months) else {
        tracing::debug!(term_months, "no schedule, annuity undefined or out of range");
        return Vec::new();
    };

    let mut balance = principal;
    let mut rows = Vec::with_capacity(term_months as usize);

    for month in 1..=term_months {
        let interest_portion = balance * r;
        let principal_portion = payment - interest_portion;
        balance = (balance - principal_portion).max(Decimal::ZERO);

        rows.push(AmortizationRow {
            month,
            payment,
            principal_portion,
            interest_portion,
            remaining_balance: balance,
        });
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payment::compute_amortizing_payment;
    use rust_decimal_macros::dec;

    const ROW_TOL: Decimal = dec!(0.000001);

    #[test]
    fn test_one_year_schedule_shape() {
        let rows = compute_amortization_schedule(dec!(500_000), dec!(10), 12);
        assert_eq!(rows.len(), 12);
        assert_eq!(rows[0].month, 1);
        assert_eq!(rows[11].month, 12);
        assert!(rows[11].remaining_balance < ROW_TOL, "final balance {}", rows[11].remaining_balance);
    }

    #[test]
    fn test_first_row_split() {
        let rows = compute_amortization_schedule(dec!(120_000), dec!(12), 24);
        // First month interest is principal × 1%
        assert_eq!(rows[0].interest_portion, dec!(1200));
        assert_eq!(rows[0].principal_portion, rows[0].payment - dec!(1200));
        assert_eq!(
            rows[0].remaining_balance,
            dec!(120_000) - rows[0].principal_portion
        );
    }

    #[test]
    fn test_rows_sum_to_payment_and_payment_is_level() {
        let rows = compute_amortization_schedule(dec!(750_000), dec!(6.25), 360);
        let payment = compute_amortizing_payment(dec!(750_000), dec!(6.25), 360).monthly_payment;
        for row in &rows {
            assert_eq!(row.payment, payment, "month {}", row.month);
            let diff = (row.principal_portion + row.interest_portion - row.payment).abs();
            assert!(diff <= ROW_TOL, "month {} off by {}", row.month, diff);
        }
    }

    #[test]
    fn test_balance_non_increasing_and_never_negative() {
        let rows = compute_amortization_schedule(dec!(300_000), dec!(4.75), 300);
        let mut prev = dec!(300_000);
        for row in &rows {
            assert!(row.remaining_balance <= prev, "month {}", row.month);
            assert!(row.remaining_balance >= Decimal::ZERO);
            prev = row.remaining_balance;
        }
        assert!(prev < ROW_TOL);
    }

    #[test]
    fn test_principal_repaid_matches_loan() {
        let rows = compute_amortization_schedule(dec!(90_000), dec!(8), 60);
        let repaid: Decimal = rows.iter().map(|r| r.principal_portion).sum();
        assert!((repaid - dec!(90_000)).abs() < ROW_TOL, "repaid {repaid}");
    }

    #[test]
    fn test_degenerate_schedules_are_empty() {
        assert!(compute_amortization_schedule(Decimal::ZERO, dec!(5), 300).is_empty());
        assert!(compute_amortization_schedule(dec!(-10), dec!(5), 300).is_empty());
        assert!(compute_amortization_schedule(dec!(500_000), Decimal::ZERO, 12).is_empty());
        assert!(compute_amortization_schedule(dec!(500_000), dec!(5), 0).is_empty());
    }

    #[test]
    fn test_deterministic() {
        let a = compute_amortization_schedule(dec!(425_000), dec!(7.1), 180);
        let b = compute_amortization_schedule(dec!(425_000), dec!(7.1), 180);
        assert_eq!(a, b);
    }
}
