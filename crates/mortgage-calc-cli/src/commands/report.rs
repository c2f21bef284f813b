use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;
use std::fs;

use mortgage_calc_core::report::{self, ReportInput, ScenarioTerms};
use mortgage_calc_core::{LoanParameters, Term};

use super::ModelArg;
use crate::input;

/// Arguments for report generation
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct ReportArgs {
    /// Loan amount shared by both scenarios
    #[arg(long, alias = "loan-amount")]
    pub principal: Option<Decimal>,

    /// Annual interest rate in percent for scenario A
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Term for scenario A: 25y, 300m, or a bare month count
    #[arg(long)]
    pub term: Option<Term>,

    /// Annual interest rate for comparison scenario B
    #[arg(long)]
    pub compare_rate: Option<Decimal>,

    /// Term for comparison scenario B (defaults to scenario A's term)
    #[arg(long)]
    pub compare_term: Option<Term>,

    /// Payment model
    #[arg(long, value_enum, default_value = "interest-only")]
    pub model: ModelArg,

    /// Also write the plain-text report to this path
    #[arg(long)]
    pub out: Option<String>,

    /// Path to JSON/YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_report(args: ReportArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let report_input: ReportInput = if let Some(ref path) = args.input {
        input::file::read_input(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        report_input_from_flags(&args)?
    };

    let result = report::generate_report(&report_input);

    if let Some(ref path) = args.out {
        fs::write(path, result.result.render_text())
            .map_err(|e| format!("Failed to write '{}': {}", path, e))?;
        tracing::info!(path = %path, "wrote text report");
    }

    Ok(serde_json::to_value(result)?)
}

fn report_input_from_flags(args: &ReportArgs) -> Result<ReportInput, Box<dyn std::error::Error>> {
    let defaults = LoanParameters::default();
    let term_a = args.term.unwrap_or_default();

    if args.compare_term.is_some() && args.compare_rate.is_none() {
        return Err("--compare-term requires --compare-rate".into());
    }

    Ok(ReportInput {
        loan_amount: args.principal.unwrap_or(defaults.principal),
        model: args.model.into(),
        scenario_a: ScenarioTerms {
            annual_rate_percent: args.rate.unwrap_or(defaults.annual_rate_percent),
            term: term_a,
        },
        scenario_b: args.compare_rate.map(|rate| ScenarioTerms {
            annual_rate_percent: rate,
            term: args.compare_term.unwrap_or(term_a),
        }),
    })
}
