use mortgage_calc::{
    amortization_schedule, calculate_annuity_payment, calculate_default_mortgage_payment,
    calculate_mortgage_payment_with, format_amount, LoanQuote, MortgageDefaults,
};

fn formula(principal: f64, annual_rate_percent: f64, term_years: f64) -> f64 {
    let r = annual_rate_percent / 100.0 / 12.0;
    let n = term_years * 12.0;
    let growth = (1.0 + r).powf(n);
    principal * (r * growth) / (growth - 1.0)
}

/// 8,000,000 at 28% over 20 years
#[test]
fn test_reference_mortgage_matches_formula() {
    let payment = calculate_annuity_payment(8_000_000.0, 28.0, 20.0);

    assert_eq!(payment, formula(8_000_000.0, 28.0, 20.0).round());
    assert!(payment > 187_000.0 && payment < 188_000.0, "got {}", payment);
    assert_eq!(payment.fract(), 0.0);
}

#[test]
fn test_zero_principal_is_zero_for_any_rate_and_term() {
    for rate in [0.0, 5.0, 28.0, 100.0] {
        for term in [1.0, 10.0, 30.0] {
            assert_eq!(calculate_annuity_payment(0.0, rate, term), 0.0);
        }
    }
}

#[test]
fn test_non_positive_term_is_zero() {
    assert_eq!(calculate_annuity_payment(5_000_000.0, 12.0, 0.0), 0.0);
    assert_eq!(calculate_annuity_payment(5_000_000.0, 12.0, -1.0), 0.0);
}

#[test]
fn test_zero_rate_guard() {
    let payment = calculate_annuity_payment(1_200_000.0, 0.0, 10.0);
    assert!(payment.is_finite());
    assert_eq!(payment, 10_000.0);
}

#[test]
fn test_positive_inputs_give_positive_finite_payment() {
    for principal in [10_000.0, 1_000_000.0, 25_000_000.0] {
        for rate in [1e-15, 1e-12, 0.5, 7.0, 28.0, 60.0, 1_000.0, 1e6] {
            for term in [1.0, 5.0, 20.0, 30.0, 100.0] {
                let payment = calculate_annuity_payment(principal, rate, term);
                assert!(payment.is_finite() && payment > 0.0, "{principal} {rate} {term}");
            }
        }
    }
}

#[test]
fn test_tiny_rate_converges_to_zero_rate_payment() {
    let zero_rate = calculate_annuity_payment(1_000_000.0, 0.0, 10.0);
    assert_eq!(zero_rate, 8_333.0);

    for rate in [1e-15, 1e-12, 1e-9] {
        assert_eq!(calculate_annuity_payment(1_000_000.0, rate, 10.0), zero_rate, "rate {rate}");
    }
    assert!(calculate_annuity_payment(1_000_000.0, 1.0, 10.0) > zero_rate);
}

#[test]
fn test_huge_rate_converges_to_interest_only_payment() {
    // 1000% a year over 100 years: the principal is never meaningfully repaid
    let r: f64 = 1_000.0 / 100.0 / 12.0;
    let payment = calculate_annuity_payment(1_000_000.0, 1_000.0, 100.0);

    assert!(payment.is_finite());
    assert_eq!(payment, (1_000_000.0 * r).round());
}

#[test]
fn test_payment_grows_with_rate_from_zero() {
    let rates = [0.0, 1e-6, 0.01, 1.0, 28.0, 500.0];
    let payments: Vec<f64> = rates
        .iter()
        .map(|rate| calculate_annuity_payment(1_000_000.0, *rate, 10.0))
        .collect();
    assert!(payments.windows(2).all(|w| w[1] >= w[0]), "{payments:?}");
    assert!(payments.iter().all(|p| *p > 0.0));
}

#[test]
fn test_payment_grows_with_rate() {
    let mut previous = calculate_annuity_payment(8_000_000.0, 1.0, 20.0);
    for rate in 2..=40 {
        let payment = calculate_annuity_payment(8_000_000.0, f64::from(rate), 20.0);
        assert!(payment > previous, "rate {rate}: {payment} <= {previous}");
        previous = payment;
    }
}

#[test]
fn test_payment_shrinks_with_term() {
    let mut previous = calculate_annuity_payment(8_000_000.0, 12.0, 1.0);
    for term in 2..=30 {
        let payment = calculate_annuity_payment(8_000_000.0, 12.0, f64::from(term));
        assert!(payment < previous, "term {term}: {payment} >= {previous}");
        previous = payment;
    }
}

#[test]
fn test_total_paid_covers_principal() {
    for (principal, rate, term) in [
        (8_000_000.0, 28.0, 20.0),
        (1_000_000.0, 0.5, 30.0),
        (300_000.0, 9.9, 3.0),
    ] {
        let payment = calculate_annuity_payment(principal, rate, term);
        assert!(payment * term * 12.0 >= principal);

        let quote = LoanQuote::new(principal, rate, term);
        assert!(quote.total_paid() >= principal);
    }
}

#[test]
fn test_default_payment_uses_preset() {
    assert_eq!(
        calculate_default_mortgage_payment(10_000_000.0),
        calculate_annuity_payment(8_000_000.0, 28.0, 20.0)
    );
    assert_eq!(
        MortgageDefaults::default().quote_for_price(10_000_000.0).principal,
        8_000_000.0
    );
}

#[test]
fn test_default_payment_zero_price() {
    assert_eq!(calculate_default_mortgage_payment(0.0), 0.0);
}

#[test]
fn test_custom_defaults() {
    let defaults = MortgageDefaults {
        down_payment_percent: 50.0,
        term_years: 10.0,
        annual_rate_percent: 0.0,
    };
    // 2,400,000 - 50% = 1,200,000 over 120 months
    assert_eq!(calculate_mortgage_payment_with(2_400_000.0, &defaults), 10_000.0);
}

#[test]
fn test_full_down_payment_means_no_loan() {
    let defaults = MortgageDefaults {
        down_payment_percent: 100.0,
        ..MortgageDefaults::default()
    };
    assert_eq!(calculate_mortgage_payment_with(5_000_000.0, &defaults), 0.0);
}

#[test]
fn test_schedule_payment_matches_calculator() {
    let quote = LoanQuote::new(8_000_000.0, 28.0, 20.0);
    let rows = amortization_schedule(&quote);

    assert_eq!(rows.len(), 240);
    assert_eq!(rows[0].payment.round(), quote.monthly_payment());
    assert!(rows.windows(2).all(|w| w[1].balance < w[0].balance));
    assert!(rows.windows(2).all(|w| w[1].interest < w[0].interest));
}

#[test]
fn test_compact_display() {
    let payment = calculate_default_mortgage_payment(10_000_000.0);
    let text = format_amount(payment);

    assert_eq!(text.replace(' ', "").parse::<f64>().ok(), Some(payment));
    assert_eq!(text.split(' ').count(), 2);
}
