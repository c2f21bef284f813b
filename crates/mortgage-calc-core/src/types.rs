use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::MortgageCalcError;
use crate::MortgageCalcResult;

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Annual nominal rates as entered by the user (5 = 5%). Never as decimals.
pub type Percent = Decimal;

/// Periodic rates expressed as decimals (0.0041667 = 5% / 12).
pub type Rate = Decimal;

/// Loan term. Some product variants take months, others years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Term {
    Months(u32),
    Years(u32),
}

impl Term {
    /// Longest year term whose month count fits in a `u32`.
    pub const MAX_YEARS: u32 = u32::MAX / 12;

    /// Term length in monthly periods. `Years` beyond [`Term::MAX_YEARS`]
    /// clamps to `u32::MAX` months; `FromStr` rejects such terms.
    pub fn months(self) -> u32 {
        match self {
            Term::Months(m) => m,
            Term::Years(y) => y.saturating_mul(12),
        }
    }

    /// Display label used in results and reports ("25 years", "1 month").
    pub fn label(self) -> String {
        match self {
            Term::Years(1) => "1 year".to_string(),
            Term::Years(y) => format!("{y} years"),
            Term::Months(1) => "1 month".to_string(),
            Term::Months(m) => format!("{m} months"),
        }
    }
}

impl Default for Term {
    fn default() -> Self {
        Term::Years(25)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl FromStr for Term {
    type Err = MortgageCalcError;

    /// Accepts `25y`, `25 years`, `300m`, `300 months`, or a bare month count.
    fn from_str(s: &str) -> MortgageCalcResult<Self> {
        let text = s.trim().to_ascii_lowercase();
        let split = text
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(text.len());
        let (digits, unit) = text.split_at(split);

        let count: u32 = digits.parse().map_err(|_| invalid_term(s))?;
        match unit.trim() {
            "" | "m" | "mo" | "month" | "months" => Ok(Term::Months(count)),
            "y" | "yr" | "yrs" | "year" | "years" if count > Term::MAX_YEARS => {
                Err(MortgageCalcError::InvalidInput {
                    field: "term".into(),
                    reason: format!(
                        "{count} years exceeds the maximum of {} years",
                        Term::MAX_YEARS
                    ),
                })
            }
            "y" | "yr" | "yrs" | "year" | "years" => Ok(Term::Years(count)),
            _ => Err(invalid_term(s)),
        }
    }
}

fn invalid_term(raw: &str) -> MortgageCalcError {
    MortgageCalcError::InvalidInput {
        field: "term".into(),
        reason: format!("cannot parse '{raw}' as a term (expected e.g. 25y or 300m)"),
    }
}

/// The three numbers every engine operation is keyed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LoanParameters {
    /// Loan amount.
    pub principal: Money,
    /// Annual nominal rate as a percentage (8 = 8%).
    pub annual_rate_percent: Percent,
    /// Number of monthly payments.
    pub term_months: u32,
}

impl LoanParameters {
    pub fn new(principal: Money, annual_rate_percent: Percent, term_months: u32) -> Self {
        Self {
            principal,
            annual_rate_percent,
            term_months,
        }
    }

    pub fn from_years(principal: Money, annual_rate_percent: Percent, term_years: u32) -> Self {
        Self::new(
            principal,
            annual_rate_percent,
            Term::Years(term_years).months(),
        )
    }

    pub fn from_term(principal: Money, annual_rate_percent: Percent, term: Term) -> Self {
        Self::new(principal, annual_rate_percent, term.months())
    }
}

impl Default for LoanParameters {
    fn default() -> Self {
        Self::from_term(dec!(500_000), dec!(5), Term::default())
    }
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}
