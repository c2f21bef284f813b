use chrono::NaiveDate;
use napi::Result as NapiResult;
use napi_derive::napi;

use mortgage_calc_core::payment::{self, LoanInput};
use mortgage_calc_core::report::{self, ReportInput};

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Payment Engine
// ---------------------------------------------------------------------------

#[napi]
pub fn quote_loan(input_json: String) -> NapiResult<String> {
    payment::quote_loan_json(&input_json).map_err(to_napi_error)
}

#[napi]
pub fn amortization_schedule(input_json: String) -> NapiResult<String> {
    let input: LoanInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let params = input.parameters();
    let rows = payment::compute_amortization_schedule(
        params.principal,
        params.annual_rate_percent,
        params.term_months,
    );
    serde_json::to_string(&rows).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Reports
// ---------------------------------------------------------------------------

#[napi]
pub fn generate_report(input_json: String) -> NapiResult<String> {
    let input: ReportInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = report::generate_report(&input);
    serde_json::to_string(&output).map_err(to_napi_error)
}

/// Plain-text report for a fixed date (`YYYY-MM-DD`), so the JS side can
/// render reproducible exports.
#[napi]
pub fn render_report_text(input_json: String, generated_on: String) -> NapiResult<String> {
    let input: ReportInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let date = NaiveDate::parse_from_str(&generated_on, "%Y-%m-%d").map_err(to_napi_error)?;
    Ok(report::build_report(&input, date).render_text())
}
