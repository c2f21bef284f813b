pub mod calculator;
pub mod error;
pub mod payment;
pub mod time_value;
pub mod types;

#[cfg(feature = "report")]
pub mod report;

pub use error::MortgageCalcError;
pub use types::*;

/// Standard result type for the fallible boundaries (parsing, JSON)
pub type MortgageCalcResult<T> = Result<T, MortgageCalcError>;
