use serde::Deserialize;
use tracing::debug;

use crate::format::format_currency;

/// Upper bound (inclusive) of the short-term tier, in months.
pub const SHORT_TERM_MONTHS: f64 = 12.0;
/// Upper bound (inclusive) of the medium-term tier, in months.
pub const MEDIUM_TERM_MONTHS: f64 = 24.0;

/// Flat interest rates by loan duration.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct RateSchedule {
    /// Up to 12 months.
    pub short_term: f64,
    /// 13 to 24 months.
    pub medium_term: f64,
    /// Longer than 24 months.
    pub long_term: f64,
}

impl Default for RateSchedule {
    fn default() -> Self {
        Self {
            short_term: 0.12,
            medium_term: 0.14,
            long_term: 0.165,
        }
    }
}

impl RateSchedule {
    /// First matching tier wins, so a zero duration lands in the short term.
    pub fn rate_for(&self, duration_months: f64) -> f64 {
        if duration_months <= SHORT_TERM_MONTHS {
            self.short_term
        } else if duration_months <= MEDIUM_TERM_MONTHS {
            self.medium_term
        } else {
            self.long_term
        }
    }
}

/// One calculation with its intermediate figures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Installment {
    pub price: f64,
    pub down_payment_percent: f64,
    pub duration_months: f64,
    pub down_payment_amount: f64,
    pub loan_amount: f64,
    pub rate: f64,
    pub monthly: f64,
}

impl Installment {
    pub fn formatted(&self) -> String {
        format_currency(self.monthly)
    }
}

/// Remove the `.` thousands separators the OTR field is displayed with.
pub fn strip_grouping(text: &str) -> String {
    text.replace('.', "")
}

/// Lenient whole-number parse: anything but a non-empty run of ASCII
/// digits is zero.
pub fn parse_whole_number(text: &str) -> f64 {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return 0.0;
    }
    text.parse().unwrap_or(0.0)
}

/// Run the installment formula on raw field text.
///
/// Never fails. A down payment above 100% gives a negative loan and
/// installment, and a zero duration divides by zero into an infinite or
/// NaN monthly amount; both are kept as-is.
pub fn compute(
    price_text: &str,
    down_payment_text: &str,
    duration_text: &str,
    rates: &RateSchedule,
) -> Installment {
    let price = parse_whole_number(&strip_grouping(price_text));
    let down_payment_percent = parse_whole_number(down_payment_text);
    let duration_months = parse_whole_number(duration_text);

    let down_payment_amount = price * (down_payment_percent / 100.0);
    let loan_amount = price - down_payment_amount;
    let rate = rates.rate_for(duration_months);
    let monthly = (loan_amount + loan_amount * rate) / duration_months;

    debug!(
        price,
        down_payment_percent,
        duration_months,
        loan_amount,
        rate,
        monthly,
        "computed installment"
    );

    Installment {
        price,
        down_payment_percent,
        duration_months,
        down_payment_amount,
        loan_amount,
        rate,
        monthly,
    }
}

pub fn calculate_with(
    price_text: &str,
    down_payment_text: &str,
    duration_text: &str,
    rates: &RateSchedule,
) -> String {
    compute(price_text, down_payment_text, duration_text, rates).formatted()
}

/// Monthly installment as `Rp 12.160.000,00`, using the standard rate tiers.
pub fn calculate(price_text: &str, down_payment_text: &str, duration_text: &str) -> String {
    calculate_with(
        price_text,
        down_payment_text,
        duration_text,
        &RateSchedule::default(),
    )
}
