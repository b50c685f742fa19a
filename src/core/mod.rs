pub mod annuity;
pub mod display;
pub mod schedule;

pub use crate::domain::model::{LoanQuote, MortgageDefaults, ScheduleRow};
pub use crate::domain::ports::DefaultsProvider;
pub use crate::utils::error::Result;
