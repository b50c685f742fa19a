use crate::core::annuity::annuity_payment;
use crate::domain::model::{LoanQuote, ScheduleRow};
use crate::utils::error::Result;
use std::io::Write;

/// Longest schedule that will be built: 100 years of monthly installments.
pub const MAX_SCHEDULE_MONTHS: u32 = 1200;

/// Month-by-month breakdown of an annuity loan.
///
/// The term is rounded to whole months, with at least one month for any
/// positive term, and the last row settles whatever balance remains, so the
/// schedule always ends at zero. Because of that rounding, a term that is not
/// a whole number of months gets a slightly different installment than
/// `calculate_annuity_payment`. Terms longer than [`MAX_SCHEDULE_MONTHS`]
/// give an empty schedule.
pub fn amortization_schedule(quote: &LoanQuote) -> Vec<ScheduleRow> {
    if quote.is_degenerate() {
        return Vec::new();
    }

    let Some(months) = schedule_months(quote) else {
        tracing::debug!(?quote, max = MAX_SCHEDULE_MONTHS, "term too long for a schedule");
        return Vec::new();
    };

    let r = quote.monthly_rate();
    let payment = annuity_payment(quote.principal, r, f64::from(months));
    if !payment.is_finite() {
        tracing::debug!(?quote, "cannot build schedule for non-finite payment");
        return Vec::new();
    }

    let mut rows = Vec::with_capacity(months as usize);
    let mut balance = quote.principal;

    for month in 1..=months {
        let interest = balance * r;
        let (payment, principal) = if month == months {
            (balance + interest, balance)
        } else {
            (payment, payment - interest)
        };
        balance = if month == months { 0.0 } else { balance - principal };

        rows.push(ScheduleRow {
            month,
            payment,
            interest,
            principal,
            balance,
        });
    }

    tracing::debug!(months, payment, "built amortization schedule");
    rows
}

/// Number of rows `amortization_schedule` builds for `quote`, or `None` when
/// the term exceeds [`MAX_SCHEDULE_MONTHS`].
pub fn schedule_months(quote: &LoanQuote) -> Option<u32> {
    let months = quote.installments().round().max(1.0);
    if !(months <= f64::from(MAX_SCHEDULE_MONTHS)) {
        return None;
    }
    Some(months as u32)
}

/// 以 CSV 格式輸出還款計劃，金額保留兩位小數
pub fn write_schedule_csv<W: Write>(rows: &[ScheduleRow], writer: W) -> Result<()> {
    // 表頭手動寫入，空的還款計劃也有表頭
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    wtr.write_record(["month", "payment", "interest", "principal", "balance"])?;

    for row in rows {
        wtr.serialize(row)?;
    }

    wtr.flush()?;
    Ok(())
}
