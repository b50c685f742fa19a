use crate::domain::model::MortgageDefaults;

/// Source of the preset mortgage parameters (built-in constants, a TOML file, ...).
pub trait DefaultsProvider: Send + Sync {
    fn mortgage_defaults(&self) -> MortgageDefaults;
}

impl DefaultsProvider for MortgageDefaults {
    fn mortgage_defaults(&self) -> MortgageDefaults {
        *self
    }
}
