//! Stateful front for the Payment Engine, for callers that hold loan
//! parameters as mutable UI state (sliders, inputs).
//!
//! Every setter recomputes the snapshot before returning, so a caller can
//! never observe results that belong to an older parameter tuple. Setting
//! a value equal to the current one is a no-op.

use serde::Serialize;

use crate::payment::{AmortizationRow, PaymentModel, PaymentResult};
use crate::types::{LoanParameters, Money, Percent, Term};

/// Derived results for one `(parameters, model)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Quote {
    pub params: LoanParameters,
    pub model: PaymentModel,
    pub result: PaymentResult,
    /// Empty for interest-only loans and degenerate inputs.
    pub schedule: Vec<AmortizationRow>,
}

impl Quote {
    fn compute(params: LoanParameters, model: PaymentModel) -> Self {
        Self {
            params,
            model,
            result: model.compute(&params),
            schedule: model.schedule(&params),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MortgageCalculator {
    term: Term,
    quote: Quote,
    recomputations: u64,
}

impl MortgageCalculator {
    pub fn new(params: LoanParameters, model: PaymentModel) -> Self {
        Self {
            term: Term::Months(params.term_months),
            quote: Quote::compute(params, model),
            recomputations: 1,
        }
    }

    pub fn with_term(
        principal: Money,
        annual_rate_percent: Percent,
        term: Term,
        model: PaymentModel,
    ) -> Self {
        let params = LoanParameters::from_term(principal, annual_rate_percent, term);
        let mut calc = Self::new(params, model);
        calc.term = term;
        calc
    }

    pub fn params(&self) -> LoanParameters {
        self.quote.params
    }

    pub fn model(&self) -> PaymentModel {
        self.quote.model
    }

    /// Term as last set, keeping the caller's unit for display.
    pub fn term(&self) -> Term {
        self.term
    }

    pub fn quote(&self) -> &Quote {
        &self.quote
    }

    /// Number of times the snapshot has been computed, including construction.
    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }

    pub fn set_principal(&mut self, principal: Money) -> &Quote {
        let params = LoanParameters {
            principal,
            ..self.quote.params
        };
        self.update(params, self.quote.model)
    }

    pub fn set_annual_rate_percent(&mut self, annual_rate_percent: Percent) -> &Quote {
        let params = LoanParameters {
            annual_rate_percent,
            ..self.quote.params
        };
        self.update(params, self.quote.model)
    }

    pub fn set_term(&mut self, term: Term) -> &Quote {
        self.term = term;
        let params = LoanParameters {
            term_months: term.months(),
            ..self.quote.params
        };
        self.update(params, self.quote.model)
    }

    pub fn set_model(&mut self, model: PaymentModel) -> &Quote {
        self.update(self.quote.params, model)
    }

    fn update(&mut self, params: LoanParameters, model: PaymentModel) -> &Quote {
        if params != self.quote.params || model != self.quote.model {
            self.quote = Quote::compute(params, model);
            self.recomputations += 1;
            tracing::trace!(?params, ?model, "recomputed quote");
        }
        &self.quote
    }
}

impl Default for MortgageCalculator {
    fn default() -> Self {
        let params = LoanParameters::default();
        Self::with_term(
            params.principal,
            params.annual_rate_percent,
            Term::default(),
            PaymentModel::default(),
        )
    }
}
