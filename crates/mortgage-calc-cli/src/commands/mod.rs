pub mod payment;
pub mod report;

use clap::ValueEnum;
use mortgage_calc_core::payment::PaymentModel;

/// Payment model as spelled on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ModelArg {
    InterestOnly,
    Amortizing,
}

impl From<ModelArg> for PaymentModel {
    fn from(arg: ModelArg) -> Self {
        match arg {
            ModelArg::InterestOnly => PaymentModel::InterestOnly,
            ModelArg::Amortizing => PaymentModel::Amortizing,
        }
    }
}
