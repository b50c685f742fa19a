use serde::{Serialize, Serializer};

/// 預設頭期款百分比
pub const DEFAULT_DOWN_PAYMENT_PERCENT: f64 = 20.0;
/// 預設貸款年限
pub const DEFAULT_TERM_YEARS: f64 = 20.0;
/// 預設年利率 (百分比)
pub const DEFAULT_ANNUAL_RATE_PERCENT: f64 = 28.0;

/// A single loan request: principal, annual rate in percent, term in years.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoanQuote {
    pub principal: f64,
    pub annual_rate_percent: f64,
    pub term_years: f64,
}

impl LoanQuote {
    pub fn new(principal: f64, annual_rate_percent: f64, term_years: f64) -> Self {
        Self {
            principal,
            annual_rate_percent,
            term_years,
        }
    }

    /// Monthly decimal rate, `28` -> `0.02333..`.
    pub fn monthly_rate(&self) -> f64 {
        self.annual_rate_percent / 100.0 / 12.0
    }

    /// Number of monthly installments.
    pub fn installments(&self) -> f64 {
        self.term_years * 12.0
    }

    /// 無效輸入視為「沒有貸款」
    pub fn is_degenerate(&self) -> bool {
        !self.principal.is_finite()
            || !self.annual_rate_percent.is_finite()
            || !self.term_years.is_finite()
            || self.principal <= 0.0
            || self.term_years <= 0.0
    }
}

/// Preset parameters used where only a sale price is known.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MortgageDefaults {
    pub down_payment_percent: f64,
    pub term_years: f64,
    pub annual_rate_percent: f64,
}

impl Default for MortgageDefaults {
    fn default() -> Self {
        Self {
            down_payment_percent: DEFAULT_DOWN_PAYMENT_PERCENT,
            term_years: DEFAULT_TERM_YEARS,
            annual_rate_percent: DEFAULT_ANNUAL_RATE_PERCENT,
        }
    }
}

impl MortgageDefaults {
    /// Builds the quote for `price` after taking the down payment off.
    pub fn quote_for_price(&self, price: f64) -> LoanQuote {
        let down_payment = price * self.down_payment_percent / 100.0;
        LoanQuote::new(
            price - down_payment,
            self.annual_rate_percent,
            self.term_years,
        )
    }
}

/// One month of an amortization schedule. Amounts serialize with two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScheduleRow {
    pub month: u32,
    #[serde(serialize_with = "two_decimals")]
    pub payment: f64,
    #[serde(serialize_with = "two_decimals")]
    pub interest: f64,
    #[serde(serialize_with = "two_decimals")]
    pub principal: f64,
    #[serde(serialize_with = "two_decimals")]
    pub balance: f64,
}

fn two_decimals<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format!("{:.2}", value))
}
