use crate::core::schedule::{schedule_months, MAX_SCHEDULE_MONTHS};
use crate::domain::model::{LoanQuote, MortgageDefaults};
use crate::utils::error::{CalcError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_finite(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(CalcError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a finite number".to_string(),
        });
    }
    Ok(())
}

pub fn validate_positive(field_name: &str, value: f64) -> Result<()> {
    validate_finite(field_name, value)?;
    if value <= 0.0 {
        return Err(CalcError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be greater than 0".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_negative(field_name: &str, value: f64) -> Result<()> {
    validate_finite(field_name, value)?;
    if value < 0.0 {
        return Err(CalcError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be negative".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    // NaN 不在任何區間內
    if !(value >= min && value <= max) {
        return Err(CalcError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

impl Validate for MortgageDefaults {
    fn validate(&self) -> Result<()> {
        validate_range("down_payment_percent", self.down_payment_percent, 0.0, 100.0)?;
        validate_positive("term_years", self.term_years)?;
        validate_non_negative("annual_rate_percent", self.annual_rate_percent)?;
        Ok(())
    }
}

/// CLI input check. The calculator itself accepts anything; this only rejects
/// values a user almost certainly mistyped.
impl Validate for LoanQuote {
    fn validate(&self) -> Result<()> {
        let fields = [
            ("principal", self.principal),
            ("rate", self.annual_rate_percent),
            ("term", self.term_years),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(CalcError::ValidationError {
                    message: format!("{} must be a non-negative number, got {}", name, value),
                });
            }
        }
        Ok(())
    }
}

/// Rejects a schedule request whose term exceeds [`MAX_SCHEDULE_MONTHS`].
pub fn validate_schedule_term(quote: &LoanQuote) -> Result<()> {
    if schedule_months(quote).is_none() {
        return Err(CalcError::ValidationError {
            message: format!(
                "term of {} years is longer than the {}-month schedule limit",
                quote.term_years, MAX_SCHEDULE_MONTHS
            ),
        });
    }
    Ok(())
}
