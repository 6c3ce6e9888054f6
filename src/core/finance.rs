//! Closed-form calculators for compound interest and loan installments.
//!
//! Both calculators are pure: identical inputs always produce identical
//! outputs, and no field of a result is ever `NaN` or infinite. Input range
//! checks are the caller's job (see [`crate::core::requests`]); out-of-range
//! input yields a finite, possibly meaningless, result instead of an error.
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

const MONTHS_PER_YEAR: f64 = 12.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompoundInterestInput {
    pub principal: f64,
    pub annual_rate_percent: f64,
    pub years: f64,
    pub compounding_frequency: u32,
    pub monthly_contribution: f64,
}

impl CompoundInterestInput {
    /// Input without recurring contributions.
    pub fn new(principal: f64, annual_rate_percent: f64, years: f64, frequency: u32) -> Self {
        Self {
            principal,
            annual_rate_percent,
            years,
            compounding_frequency: frequency,
            monthly_contribution: 0.0,
        }
    }

    pub fn with_monthly_contribution(mut self, contribution: f64) -> Self {
        self.monthly_contribution = contribution;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompoundInterestResult {
    pub future_value: f64,
    pub total_interest: f64,
    pub total_contributions: f64,
}

/// Future value of a lump sum plus an optional monthly contribution.
///
/// The principal compounds `compounding_frequency` times a year. The
/// contributions are valued as an ordinary annuity that always compounds
/// monthly, whatever frequency was chosen for the principal.
pub fn compound_interest(input: &CompoundInterestInput) -> CompoundInterestResult {
    let r = input.annual_rate_percent / 100.0;
    let n = f64::from(input.compounding_frequency);
    let t = input.years;

    let fv_principal = input.principal * (1.0 + r / n).powf(n * t);

    let fv_contributions = if input.monthly_contribution > 0.0 {
        let monthly_rate = r / MONTHS_PER_YEAR;
        let months = t * MONTHS_PER_YEAR;
        if monthly_rate == 0.0 {
            input.monthly_contribution * months
        } else {
            input.monthly_contribution * (((1.0 + monthly_rate).powf(months) - 1.0) / monthly_rate)
        }
    } else {
        0.0
    };

    let future_value = fv_principal + fv_contributions;
    let total_contributions = input.monthly_contribution * t * MONTHS_PER_YEAR;
    let total_interest = future_value - input.principal - total_contributions;

    CompoundInterestResult {
        future_value: finite_or_zero(future_value),
        total_interest: finite_or_zero(total_interest),
        total_contributions: finite_or_zero(total_contributions),
    }
}

/// How an EMI is computed when the interest rate is zero.
///
/// The amortization formula degenerates to `0/0` at a zero rate.
/// `Amortize` uses the limit of the formula (`principal / tenure`), `Zero`
/// keeps the older behaviour of reporting every field as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZeroRateEmi {
    #[default]
    Amortize,
    Zero,
}

impl Display for ZeroRateEmi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ZeroRateEmi::Amortize => write!(f, "amortize"),
            ZeroRateEmi::Zero => write!(f, "zero"),
        }
    }
}

impl FromStr for ZeroRateEmi {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "amortize" => Ok(ZeroRateEmi::Amortize),
            "zero" => Ok(ZeroRateEmi::Zero),
            _ => Err(anyhow::anyhow!("Invalid zero-rate EMI policy: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmiInput {
    pub principal: f64,
    pub annual_rate_percent: f64,
    pub tenure_months: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmiResult {
    pub emi: f64,
    pub total_payment: f64,
    pub total_interest: f64,
}

/// Whether an entered rate is per annum or per month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RateBasis {
    #[default]
    Annual,
    Monthly,
}

impl RateBasis {
    /// Converts a rate on this basis into an annual percentage.
    pub fn to_annual(self, rate_percent: f64) -> f64 {
        match self {
            RateBasis::Annual => rate_percent,
            RateBasis::Monthly => rate_percent * MONTHS_PER_YEAR,
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            RateBasis::Annual => "p.a.",
            RateBasis::Monthly => "p.m.",
        }
    }
}

/// Equated monthly installment for a fully amortizing loan.
pub fn emi(input: &EmiInput, zero_rate: ZeroRateEmi) -> EmiResult {
    let monthly_rate = input.annual_rate_percent / 100.0 / MONTHS_PER_YEAR;
    let tenure = f64::from(input.tenure_months);

    let installment = if monthly_rate == 0.0 && zero_rate == ZeroRateEmi::Amortize {
        input.principal / tenure
    } else {
        let growth = (1.0 + monthly_rate).powf(tenure);
        input.principal * monthly_rate * growth / (growth - 1.0)
    };
    let total_payment = installment * tenure;
    let total_interest = total_payment - input.principal;

    EmiResult {
        emi: finite_or_zero(installment),
        total_payment: finite_or_zero(total_payment),
        total_interest: finite_or_zero(total_interest),
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}
