use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;

use crate::types::{Money, Rate};

/// Compound growth factor (1 + r)^n. `None` if it leaves the decimal range.
pub fn compound_factor(rate: Rate, nper: u32) -> Option<Decimal> {
    (Decimal::ONE + rate).checked_powu(u64::from(nper))
}

/// Level payment that retires `present_value` over `nper` periods at `rate`:
///
/// PMT = PV × r × (1+r)^n / ((1+r)^n − 1)
///
/// Returns `None` when the annuity is undefined (a zero denominator, i.e.
/// `r == 0` or `n == 0`) or an intermediate overflows.
pub fn level_payment(present_value: Money, rate: Rate, nper: u32) -> Option<Money> {
    let factor = compound_factor(rate, nper)?;
    let denominator = factor - Decimal::ONE;
    if denominator.is_zero() {
        return None;
    }

    present_value
        .checked_mul(rate)?
        .checked_mul(factor)?
        .checked_div(denominator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_compound_factor_basic() {
        assert_eq!(compound_factor(dec!(0.1), 2), Some(dec!(1.21)));
        assert_eq!(compound_factor(dec!(0.05), 0), Some(Decimal::ONE));
    }

    #[test]
    fn test_level_payment_matches_closed_form() {
        // 100k at 6%/12 over 360 months: the textbook 599.55
        let pmt = level_payment(dec!(100_000), dec!(0.005), 360).unwrap();
        assert!((pmt - dec!(599.55)).abs() < dec!(0.01), "got {pmt}");
    }

    #[test]
    fn test_level_payment_undefined_cases() {
        assert_eq!(level_payment(dec!(100_000), Decimal::ZERO, 360), None);
        assert_eq!(level_payment(dec!(100_000), dec!(0.005), 0), None);
    }

    #[test]
    fn test_level_payment_overflow_is_none() {
        assert_eq!(level_payment(Decimal::MAX, dec!(0.5), 400), None);
    }
}
