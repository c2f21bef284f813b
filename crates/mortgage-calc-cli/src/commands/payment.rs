use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use mortgage_calc_core::payment::{self, LoanInput, PaymentModel};
use mortgage_calc_core::Term;

use super::ModelArg;
use crate::input;

/// Loan flags shared by `quote` and `schedule`. Missing flags fall back to
/// the calculator defaults (500,000 at 5% over 25 years).
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct LoanFlags {
    /// Loan amount (e.g. 500000)
    #[arg(long, alias = "loan-amount")]
    pub principal: Option<Decimal>,

    /// Annual interest rate in percent (e.g. 5 for 5%)
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Term: 25y, 300m, or a bare month count
    #[arg(long)]
    pub term: Option<Term>,

    /// Path to JSON/YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for a payment quote
#[derive(Args)]
pub struct QuoteArgs {
    #[command(flatten)]
    pub loan: LoanFlags,

    /// Payment model
    #[arg(long, value_enum, default_value = "interest-only")]
    pub model: ModelArg,

    /// Attach the month-by-month schedule (amortizing only)
    #[arg(long)]
    pub schedule: bool,
}

/// Arguments for an amortization schedule
#[derive(Args)]
pub struct ScheduleArgs {
    #[command(flatten)]
    pub loan: LoanFlags,
}

pub fn run_quote(args: QuoteArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let loan_input = resolve_loan_input(&args.loan, args.model.into(), args.schedule)?;
    let result = payment::quote_loan(&loan_input);
    Ok(serde_json::to_value(result)?)
}

pub fn run_schedule(args: ScheduleArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let loan_input = resolve_loan_input(&args.loan, PaymentModel::Amortizing, true)?;
    let params = loan_input.parameters();
    let rows = payment::compute_amortization_schedule(
        params.principal,
        params.annual_rate_percent,
        params.term_months,
    );
    if rows.is_empty() {
        tracing::warn!(
            principal = %params.principal,
            rate = %params.annual_rate_percent,
            term_months = params.term_months,
            "no amortization schedule for these inputs"
        );
    }
    Ok(serde_json::to_value(rows)?)
}

fn resolve_loan_input(
    flags: &LoanFlags,
    model: PaymentModel,
    include_schedule: bool,
) -> Result<LoanInput, Box<dyn std::error::Error>> {
    if let Some(ref path) = flags.input {
        return input::file::read_input(path);
    }
    if let Some(data) = input::stdin::read_stdin()? {
        return Ok(serde_json::from_value(data)?);
    }

    let defaults = LoanInput::default();
    Ok(LoanInput {
        principal: flags.principal.unwrap_or(defaults.principal),
        annual_rate_percent: flags.rate.unwrap_or(defaults.annual_rate_percent),
        term: flags.term.unwrap_or(defaults.term),
        model,
        include_schedule,
    })
}
