//! Display formatting for report values. Single currency (CAD, en-CA
//! digit grouping), as the calculator only ever quotes Canadian dollars.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::types::{Money, Percent};

/// Whole-dollar currency, e.g. `$500,000`.
pub fn format_currency(value: Money) -> String {
    format_money(value, 0)
}

/// Currency with cents, e.g. `$2,083.33`.
pub fn format_currency_detailed(value: Money) -> String {
    format_money(value, 2)
}

/// Percentage with two decimals, e.g. `5.00%`.
pub fn format_percent(value: Percent) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.2}%")
}

fn format_money(value: Money, dp: u32) -> String {
    let rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    let digits = format!("{:.*}", dp as usize, rounded.abs());

    let (whole, cents) = match digits.split_once('.') {
        Some((w, c)) => (w, Some(c)),
        None => (digits.as_str(), None),
    };

    let mut out = format!("{sign}${}", group_thousands(whole));
    if let Some(c) = cents {
        out.push('.');
        out.push_str(c);
    }
    out
}

fn group_thousands(whole: &str) -> String {
    let len = whole.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
