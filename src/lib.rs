pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::toml_config::TomlConfig;
pub use crate::core::annuity::{
    calculate_annuity_payment, calculate_default_mortgage_payment, calculate_mortgage_payment_with,
    monthly_payment_exact,
};
pub use crate::core::display::{format_amount, format_with_currency};
pub use crate::core::schedule::{amortization_schedule, write_schedule_csv};
pub use crate::domain::model::{LoanQuote, MortgageDefaults, ScheduleRow};
pub use crate::domain::ports::DefaultsProvider;
pub use crate::utils::error::{CalcError, Result};
