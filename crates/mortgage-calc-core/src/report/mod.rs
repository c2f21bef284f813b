//! Report content for the export feature.
//!
//! Builds the labelled sections of a mortgage report from one or two
//! scenarios. Page layout and styling belong to the renderer; this module
//! only decides what is said and in what order.

pub mod format;

use chrono::{Datelike, Local, NaiveDate};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::payment::{PaymentModel, PaymentResult};
use crate::types::{with_metadata, ComputationOutput, LoanParameters, Money, Percent, Term};

use format::{format_currency, format_currency_detailed, format_percent};

const BRAND: &str = "MortgageCalc";
const TEXT_WIDTH: usize = 78;

const AMORTIZING_DISCLAIMER: &str = "This report provides hypothetical estimates for \
informational purposes only. Results are not guaranteed and do not constitute financial \
advice. Calculations assume monthly compounding. Please consult a licensed mortgage broker \
or financial advisor before making any financial decisions.";

const CONTACT_LINE: &str = "Questions? Contact your mortgage advisor or visit our website.";

const INTEREST_ONLY_DISCLAIMER: &str = "This report provides hypothetical estimates for \
informational purposes only. Payments are interest-only: the principal balance does not \
decrease. Results are not guaranteed and do not constitute financial advice.";

// ---------------------------------------------------------------------------
// Input types
// ---------------------------------------------------------------------------

/// Rate and term of one scenario; the loan amount is shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioTerms {
    pub annual_rate_percent: Percent,
    pub term: Term,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportInput {
    pub loan_amount: Money,
    #[serde(default)]
    pub model: PaymentModel,
    pub scenario_a: ScenarioTerms,
    /// Optional comparison scenario.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scenario_b: Option<ScenarioTerms>,
}

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSection {
    pub heading: String,
    pub rows: Vec<ReportRow>,
}

/// Unformatted figures behind a scenario, for renderers that chart them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioFigures {
    pub label: String,
    pub params: LoanParameters,
    pub result: PaymentResult,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub title: String,
    pub subtitle: String,
    pub generated_on: NaiveDate,
    pub sections: Vec<ReportSection>,
    pub figures: Vec<ScenarioFigures>,
    pub disclaimer: String,
    pub contact: String,
    pub footer: String,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Build the report dated today, wrapped in the standard envelope.
pub fn generate_report(input: &ReportInput) -> ComputationOutput<Report> {
    let start = Instant::now();
    let report = build_report(input, Local::now().date_naive());

    let mut warnings = Vec::new();
    for fig in &report.figures {
        if fig.result.monthly_payment.is_zero() {
            warnings.push(format!("{}: monthly payment is zero", fig.label));
        }
    }

    let elapsed = start.elapsed().as_micros() as u64;
    with_metadata(input.model.methodology(), input, warnings, elapsed, report)
}

/// Build the report for a fixed date.
pub fn build_report(input: &ReportInput, generated_on: NaiveDate) -> Report {
    let subtitle = match input.model {
        PaymentModel::InterestOnly => "Interest-Only Mortgage Report",
        PaymentModel::Amortizing => "Mortgage Report",
    };
    let disclaimer = match input.model {
        PaymentModel::InterestOnly => INTEREST_ONLY_DISCLAIMER,
        PaymentModel::Amortizing => AMORTIZING_DISCLAIMER,
    };

    let (sections, figures) = match input.scenario_b {
        None => single_scenario(input),
        Some(terms_b) => {
            let a = scenario_figures("Scenario A", input, input.scenario_a);
            let b = scenario_figures("Scenario B", input, terms_b);
            let sections = vec![
                comparison_section(&a, input.scenario_a.term),
                comparison_section(&b, terms_b.term),
            ];
            (sections, vec![a, b])
        }
    };

    Report {
        title: BRAND.to_string(),
        subtitle: subtitle.to_string(),
        generated_on,
        sections,
        figures,
        disclaimer: disclaimer.to_string(),
        contact: CONTACT_LINE.to_string(),
        footer: format!("© {} {BRAND}. All rights reserved", generated_on.year()),
    }
}

impl Report {
    /// Plain-text rendering: header, aligned label/value sections, then the
    /// wrapped disclaimer, contact line and footer.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.title);
        out.push('\n');
        out.push_str(&self.subtitle);
        out.push('\n');
        out.push_str(&format!("Generated: {}\n", self.generated_on));

        for section in &self.sections {
            out.push('\n');
            out.push_str(&section.heading);
            out.push('\n');
            let width = section
                .rows
                .iter()
                .map(|r| r.label.chars().count())
                .max()
                .unwrap_or(0);
            for row in &section.rows {
                out.push_str(&format!("  {:<width$}  {}\n", row.label, row.value));
            }
        }

        out.push_str("\nDISCLAIMER\n");
        for line in wrap(&self.disclaimer, TEXT_WIDTH) {
            out.push_str(&line);
            out.push('\n');
        }
        out.push('\n');
        out.push_str(&self.contact);
        out.push('\n');
        out.push_str(&self.footer);
        out.push('\n');
        out
    }
}

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

fn single_scenario(input: &ReportInput) -> (Vec<ReportSection>, Vec<ScenarioFigures>) {
    let terms = input.scenario_a;
    let fig = scenario_figures("Loan Summary", input, terms);
    let res = &fig.result;

    let summary = ReportSection {
        heading: "Input Summary".into(),
        rows: vec![
            row("Loan Amount", format_currency(input.loan_amount)),
            row("Interest Rate", format_percent(terms.annual_rate_percent)),
            row("Term", terms.term.label()),
        ],
    };

    let (cost_label, total_cost) = match input.model {
        PaymentModel::InterestOnly => ("Total Cost (Interest Only)", res.total_interest),
        PaymentModel::Amortizing => (
            "Total Cost (Principal + Interest)",
            input.loan_amount + res.total_interest,
        ),
    };

    let results = ReportSection {
        heading: "Calculation Results".into(),
        rows: vec![
            row("Monthly Payment", format_currency_detailed(res.monthly_payment)),
            row(
                "Annual Payment",
                format_currency_detailed(res.monthly_payment.saturating_mul(dec!(12))),
            ),
            row(
                &format!("Total Interest Over {}", title_case(&terms.term.label())),
                format_currency_detailed(res.total_interest),
            ),
            row(cost_label, format_currency_detailed(total_cost)),
        ],
    };

    (vec![summary, results], vec![fig])
}

fn comparison_section(fig: &ScenarioFigures, term: Term) -> ReportSection {
    ReportSection {
        heading: fig.label.clone(),
        rows: vec![
            row("Loan Amount", format_currency(fig.params.principal)),
            row("Interest Rate", format_percent(fig.params.annual_rate_percent)),
            row("Term", term.label()),
            row("Monthly Payment", format_currency_detailed(fig.result.monthly_payment)),
            row("Total Interest", format_currency_detailed(fig.result.total_interest)),
        ],
    }
}

fn scenario_figures(label: &str, input: &ReportInput, terms: ScenarioTerms) -> ScenarioFigures {
    let params =
        LoanParameters::from_term(input.loan_amount, terms.annual_rate_percent, terms.term);
    ScenarioFigures {
        label: label.to_string(),
        params,
        result: input.model.compute(&params),
    }
}

fn row(label: &str, value: String) -> ReportRow {
    ReportRow {
        label: label.to_string(),
        value,
    }
}

/// "25 years" -> "25 Years".
fn title_case(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if !line.is_empty() && line.len() + 1 + word.len() > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}
