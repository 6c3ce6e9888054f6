//! Money representation and display formatting.
//!
//! Amounts travel to and from the backend as integer minor units (hundredths).
//! [`Amount::to_major`] is the only place that converts them to major units;
//! the formatters below always take major units.
use anyhow::{Result, anyhow};
use chrono::DateTime;
use rust_decimal::{Decimal, RoundingStrategy, prelude::*};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// A monetary amount in minor currency units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(i64);

impl Amount {
    pub const ZERO: Amount = Amount(0);

    pub fn from_minor(minor: i64) -> Self {
        Amount(minor)
    }

    pub fn minor(self) -> i64 {
        self.0
    }

    /// Converts a major-unit value, dropping fractions of a minor unit.
    pub fn from_major(major: Decimal) -> Result<Self> {
        major
            .checked_mul(Decimal::ONE_HUNDRED)
            .and_then(|minor| minor.floor().to_i64())
            .map(Amount)
            .ok_or_else(|| anyhow!("Amount out of range: {major}"))
    }

    pub fn to_major(self) -> Decimal {
        Decimal::new(self.0, 2)
    }

    pub fn is_positive(self) -> bool {
        self.0 > 0
    }
}

impl FromStr for Amount {
    type Err = anyhow::Error;

    /// Parses a major-unit string such as `1250.75`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let major = Decimal::from_str(s.trim().trim_start_matches('$').replace(',', "").as_str())
            .map_err(|_| anyhow!("Please enter a valid amount"))?;
        Amount::from_major(major)
    }
}

impl Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.to_major())
    }
}

fn currency_prefix(currency: &str) -> String {
    match currency.to_uppercase().as_str() {
        "USD" => "$".to_string(),
        "EUR" => "€".to_string(),
        "GBP" => "£".to_string(),
        "INR" => "₹".to_string(),
        "JPY" => "¥".to_string(),
        other => format!("{other} "),
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

fn split_sign(value: Decimal, dp: u32) -> (bool, String) {
    let rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let text = format!("{:.*}", dp as usize, rounded.abs());
    (negative, text)
}

/// Sign and digits of an `f64`, going through `Decimal` when it fits.
/// Non-finite values render as zero.
fn split_sign_f64(value: f64, dp: u32) -> (bool, String) {
    if !value.is_finite() {
        return split_sign(Decimal::ZERO, dp);
    }
    match Decimal::from_f64(value) {
        Some(decimal) => split_sign(decimal, dp),
        None => {
            let text = format!("{:.*}", dp as usize, value.abs());
            let negative = value < 0.0 && text.bytes().any(|b| matches!(b, b'1'..=b'9'));
            (negative, text)
        }
    }
}

fn currency_text(negative: bool, text: &str, currency: &str) -> String {
    let (whole, frac) = text.split_once('.').unwrap_or((text, "00"));
    format!(
        "{}{}{}.{}",
        if negative { "-" } else { "" },
        currency_prefix(currency),
        group_thousands(whole),
        frac
    )
}

fn number_text(negative: bool, text: &str) -> String {
    let (whole, frac) = text.split_once('.').unwrap_or((text, ""));
    let frac = frac.trim_end_matches('0');
    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&group_thousands(whole));
    if !frac.is_empty() {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Formats a major-unit amount with grouped thousands and two decimals,
/// e.g. `$1,234.56` or `-€12.00`.
pub fn format_currency(amount: Decimal, currency: &str) -> String {
    let (negative, text) = split_sign(amount, 2);
    currency_text(negative, &text, currency)
}

/// Formats a calculator output (major units as `f64`).
pub fn format_currency_f64(amount: f64, currency: &str) -> String {
    let (negative, text) = split_sign_f64(amount, 2);
    currency_text(negative, &text, currency)
}

pub fn format_amount(amount: Amount, currency: &str) -> String {
    format_currency(amount.to_major(), currency)
}

/// Formats a number with grouped thousands, keeping up to three decimals.
pub fn format_number(value: Decimal) -> String {
    let (negative, text) = split_sign(value, 3);
    number_text(negative, &text)
}

pub fn format_number_f64(value: f64) -> String {
    let (negative, text) = split_sign_f64(value, 3);
    number_text(negative, &text)
}

/// Formats a nanosecond Unix timestamp as `Oct 19, 2026, 02:30 PM` (UTC).
pub fn format_date(timestamp_nanos: i64) -> String {
    DateTime::from_timestamp_millis(timestamp_nanos / 1_000_000)
        .map(|dt| dt.format("%b %-d, %Y, %I:%M %p").to_string())
        .unwrap_or_else(|| "Invalid Date".to_string())
}
