use crate::domain::model::{LoanQuote, MortgageDefaults};
use crate::domain::ports::DefaultsProvider;

/// Fixed monthly payment that amortizes `principal` over `months` at monthly rate `r`.
///
/// Written as `P * r / (1 - (1+r)^-n)` through `ln_1p`/`exp_m1` so that tiny
/// rates converge to `P / n` and huge rates converge to `P * r` instead of
/// collapsing to `inf` or `NaN`.
/// 利率為 0 時公式分母為 0，直接平均攤還本金。
pub(crate) fn annuity_payment(principal: f64, r: f64, months: f64) -> f64 {
    if r == 0.0 {
        return principal / months;
    }
    let discount = -(-months * r.ln_1p()).exp_m1();
    principal * r / discount
}

/// Unrounded monthly payment for `quote`; `0.0` for a degenerate quote.
pub fn monthly_payment_exact(quote: &LoanQuote) -> f64 {
    if quote.is_degenerate() {
        tracing::debug!(?quote, "degenerate loan quote, payment is zero");
        return 0.0;
    }

    let payment = annuity_payment(
        quote.principal,
        quote.monthly_rate(),
        quote.installments(),
    );

    if payment.is_finite() {
        payment
    } else {
        tracing::debug!(?quote, payment, "annuity formula gave a non-finite value");
        0.0
    }
}

/// Monthly annuity payment rounded to whole currency units.
///
/// Non-positive `principal` or `term_years` is the "no loan" case and yields `0`.
/// A zero rate spreads the principal evenly over the term.
///
/// ```
/// use mortgage_calc::calculate_annuity_payment;
///
/// assert_eq!(calculate_annuity_payment(1_200_000.0, 0.0, 10.0), 10_000.0);
/// assert_eq!(calculate_annuity_payment(0.0, 28.0, 20.0), 0.0);
/// ```
pub fn calculate_annuity_payment(principal: f64, annual_rate_percent: f64, term_years: f64) -> f64 {
    let quote = LoanQuote::new(principal, annual_rate_percent, term_years);
    monthly_payment_exact(&quote).round()
}

/// Payment for a sale price using the built-in 20% down / 20 years / 28% preset.
pub fn calculate_default_mortgage_payment(price: f64) -> f64 {
    calculate_mortgage_payment_with(price, &MortgageDefaults::default())
}

/// Payment for a sale price using whatever preset `provider` supplies.
pub fn calculate_mortgage_payment_with<D: DefaultsProvider + ?Sized>(price: f64, provider: &D) -> f64 {
    let quote = provider.mortgage_defaults().quote_for_price(price);
    calculate_annuity_payment(quote.principal, quote.annual_rate_percent, quote.term_years)
}

impl LoanQuote {
    pub fn monthly_payment(&self) -> f64 {
        monthly_payment_exact(self).round()
    }

    /// Sum of all installments over the term.
    pub fn total_paid(&self) -> f64 {
        if self.is_degenerate() {
            return 0.0;
        }
        monthly_payment_exact(self) * self.installments()
    }

    /// Interest paid on top of the principal.
    pub fn overpayment(&self) -> f64 {
        if self.is_degenerate() {
            return 0.0;
        }
        self.total_paid() - self.principal
    }
}
