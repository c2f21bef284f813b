use mortgage_calc_core::payment::{
    compute_amortization_schedule, compute_amortizing_payment, compute_interest_only_payment,
    compute_interest_only_total, quote_loan, LoanInput, PaymentModel,
};
use mortgage_calc_core::{LoanParameters, Term};
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const ROW_TOL: Decimal = dec!(0.000001);
const MONEY_TOL: Decimal = dec!(0.01);

fn assert_close(actual: Decimal, expected: Decimal, tol: Decimal, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tol,
        "{}: expected ~{}, got {} (diff = {})",
        msg,
        expected,
        actual,
        diff
    );
}

/// Slider positions across the widget's ranges: 10k–5M, 1–15%, 1–40 years.
fn slider_grid() -> Vec<LoanParameters> {
    let principals = [dec!(10_000), dec!(250_000), dec!(500_000), dec!(5_000_000)];
    let rates = [dec!(1), dec!(3.05), dec!(5), dec!(8), dec!(15)];
    let years = [1, 5, 25, 40];

    let mut grid = Vec::new();
    for &p in &principals {
        for &r in &rates {
            for &y in &years {
                grid.push(LoanParameters::from_years(p, r, y));
            }
        }
    }
    grid
}

// ===========================================================================
// Properties
// ===========================================================================

#[test]
fn test_interest_only_payment_is_exact_over_grid() {
    for p in slider_grid() {
        let expected = p.principal * (p.annual_rate_percent / dec!(100)) / dec!(12);
        assert_eq!(
            compute_interest_only_payment(p.principal, p.annual_rate_percent),
            expected
        );
        let res = compute_interest_only_total(p.principal, p.annual_rate_percent, p.term_months);
        assert_eq!(res.total_interest, expected * Decimal::from(p.term_months));
    }
}

#[test]
fn test_non_positive_inputs_give_zero_in_both_models() {
    let cases = [
        (Decimal::ZERO, dec!(5)),
        (dec!(-100_000), dec!(5)),
        (dec!(500_000), Decimal::ZERO),
        (dec!(500_000), dec!(-3)),
        (dec!(-1), dec!(-1)),
    ];
    for (principal, rate) in cases {
        assert_eq!(compute_interest_only_payment(principal, rate), Decimal::ZERO);
        assert_eq!(
            compute_amortizing_payment(principal, rate, 300).monthly_payment,
            Decimal::ZERO
        );
        assert!(compute_amortization_schedule(principal, rate, 300).is_empty());
    }
}

#[test]
fn test_schedule_invariants_over_grid() {
    for p in slider_grid() {
        let rows = compute_amortization_schedule(p.principal, p.annual_rate_percent, p.term_months);
        assert_eq!(rows.len(), p.term_months as usize, "{p:?}");

        let payment = rows[0].payment;
        let mut prev_balance = p.principal;
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row.month as usize, i + 1);
            assert_eq!(row.payment, payment, "level payment broken at {p:?} month {}", row.month);
            assert_close(
                row.principal_portion + row.interest_portion,
                row.payment,
                ROW_TOL,
                "row identity",
            );
            assert!(row.remaining_balance <= prev_balance, "{p:?} month {}", row.month);
            assert!(row.remaining_balance >= Decimal::ZERO);
            prev_balance = row.remaining_balance;
        }
        assert_close(prev_balance, Decimal::ZERO, ROW_TOL, "final balance");
    }
}

#[test]
fn test_schedule_totals_agree_with_payment_result() {
    for p in slider_grid() {
        let res = compute_amortizing_payment(p.principal, p.annual_rate_percent, p.term_months);
        let rows = compute_amortization_schedule(p.principal, p.annual_rate_percent, p.term_months);
        let interest: Decimal = rows.iter().map(|r| r.interest_portion).sum();
        assert_close(interest, res.total_interest, MONEY_TOL, "schedule interest");
        let total_paid = res.total_paid.unwrap();
        assert_close(total_paid, p.principal + res.total_interest, ROW_TOL, "total paid");
    }
}

// ===========================================================================
// Concrete scenarios
// ===========================================================================

#[test]
fn test_scenario_interest_only_default_widget() {
    let res = compute_interest_only_total(dec!(500_000), dec!(5), 300);
    assert_close(res.monthly_payment, dec!(2083.33), MONEY_TOL, "monthly");
    assert_close(res.total_interest, dec!(625_000), MONEY_TOL, "total interest");
}

#[test]
fn test_scenario_one_year_amortizing() {
    let res = compute_amortizing_payment(dec!(500_000), dec!(10), 12);
    // r = 0.008333…; P × r × (1+r)^12 / ((1+r)^12 − 1)
    assert_close(res.monthly_payment, dec!(43957.94), MONEY_TOL, "monthly");

    let rows = compute_amortization_schedule(dec!(500_000), dec!(10), 12);
    assert_eq!(rows.len(), 12);
    assert_close(rows[11].remaining_balance, Decimal::ZERO, ROW_TOL, "row 12 balance");
}

#[test]
fn test_scenario_zero_principal() {
    let io = compute_interest_only_total(Decimal::ZERO, dec!(5), 300);
    assert_eq!(io.monthly_payment, Decimal::ZERO);
    assert_eq!(io.total_interest, Decimal::ZERO);

    let am = compute_amortizing_payment(Decimal::ZERO, dec!(5), 300);
    assert_eq!(am.monthly_payment, Decimal::ZERO);
    assert_eq!(am.total_interest, Decimal::ZERO);
    assert!(compute_amortization_schedule(Decimal::ZERO, dec!(5), 300).is_empty());
}

#[test]
fn test_scenario_zero_rate_amortizing_stays_zero() {
    let res = compute_amortizing_payment(dec!(500_000), Decimal::ZERO, 12);
    assert_eq!(res.monthly_payment, Decimal::ZERO);
    assert!(compute_amortization_schedule(dec!(500_000), Decimal::ZERO, 12).is_empty());
}

// ===========================================================================
// Dispatch
// ===========================================================================

#[test]
fn test_quote_loan_dispatches_on_model() {
    let base = LoanInput {
        principal: dec!(400_000),
        annual_rate_percent: dec!(6),
        term: Term::Years(30),
        model: PaymentModel::InterestOnly,
        include_schedule: true,
    };

    let io = quote_loan(&base).result;
    assert_eq!(io.payment.monthly_payment, dec!(2000));
    assert_eq!(io.schedule, None);

    let am = quote_loan(&LoanInput {
        model: PaymentModel::Amortizing,
        ..base
    })
    .result;
    assert_close(am.payment.monthly_payment, dec!(2398.20), MONEY_TOL, "amortizing");
    assert_eq!(am.schedule.map(|s| s.len()), Some(360));
    assert_eq!(am.term_label, "30 years");
}

#[test]
fn test_identical_inputs_identical_output() {
    let input = LoanInput {
        model: PaymentModel::Amortizing,
        include_schedule: true,
        ..LoanInput::default()
    };
    assert_eq!(quote_loan(&input).result, quote_loan(&input).result);
}
