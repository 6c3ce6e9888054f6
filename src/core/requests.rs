//! Validated inputs for backend operations.
//!
//! Every constructor trims free-text fields and rejects what the forms used
//! to reject before a call reached the backend.
use crate::core::finance::{EmiInput, EmiResult, RateBasis};
use crate::core::format::Amount;
use crate::core::records::{CardType, InsuranceCategory, LoanType, TransferType, UserProfile};
use anyhow::{Result, bail};

fn required(value: &str, message: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        bail!("{message}");
    }
    Ok(trimmed.to_string())
}

fn is_digits(value: &str, len: usize) -> bool {
    value.len() == len && value.bytes().all(|b| b.is_ascii_digit())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTransfer {
    pub from_account: String,
    pub beneficiary: String,
    pub amount: Amount,
    pub note: String,
    pub transfer_type: TransferType,
}

impl NewTransfer {
    pub fn new(
        from_account: &str,
        beneficiary: &str,
        amount: Amount,
        note: &str,
        transfer_type: TransferType,
    ) -> Result<Self> {
        if !amount.is_positive() {
            bail!("Please enter a valid amount");
        }
        let missing = "Please fill in all required fields";
        Ok(Self {
            from_account: required(from_account, missing)?,
            beneficiary: required(beneficiary, missing)?,
            amount,
            note: note.trim().to_string(),
            transfer_type,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCard {
    pub nickname: String,
    pub card_type: CardType,
    pub issuer: String,
    pub last4: String,
    pub expiry: String,
}

impl NewCard {
    pub fn new(
        nickname: &str,
        card_type: CardType,
        issuer: &str,
        last4: &str,
        expiry: &str,
    ) -> Result<Self> {
        let last4 = last4.trim();
        if !is_digits(last4, 4) {
            bail!("Last 4 digits must be exactly 4 numbers");
        }
        let expiry = expiry.trim();
        let valid_expiry = matches!(
            expiry.split_once('/'),
            Some((mm, yy)) if is_digits(mm, 2) && is_digits(yy, 2)
        );
        if !valid_expiry {
            bail!("Expiry must be in MM/YY format");
        }
        Ok(Self {
            nickname: required(nickname, "Card nickname is required")?,
            card_type,
            issuer: required(issuer, "Card issuer is required")?,
            last4: last4.to_string(),
            expiry: expiry.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoanRequest {
    pub loan_type: LoanType,
    pub name: String,
    pub amount: Amount,
    pub tenure: u32,
    pub income: Amount,
    pub purpose: String,
    pub documents: String,
}

impl LoanRequest {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        loan_type: LoanType,
        name: &str,
        amount: Amount,
        tenure: u32,
        income: Amount,
        purpose: &str,
        documents: &str,
    ) -> Result<Self> {
        if !amount.is_positive() {
            bail!("Please enter a valid loan amount");
        }
        if tenure < 1 {
            bail!("Please enter a valid tenure");
        }
        if !income.is_positive() {
            bail!("Please enter a valid income");
        }
        Ok(Self {
            loan_type,
            name: required(name, "Please enter the applicant name")?,
            amount,
            tenure,
            income,
            purpose: purpose.trim().to_string(),
            documents: documents.trim().to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsuranceRequest {
    pub category: InsuranceCategory,
    pub coverage_amount: Amount,
    pub notes: String,
    pub contact_preference: String,
}

impl InsuranceRequest {
    pub fn new(
        category: InsuranceCategory,
        coverage_amount: Amount,
        notes: &str,
        contact_preference: &str,
    ) -> Result<Self> {
        if !coverage_amount.is_positive() {
            bail!("Please enter a valid coverage amount");
        }
        Ok(Self {
            category,
            coverage_amount,
            notes: notes.trim().to_string(),
            contact_preference: contact_preference.trim().to_string(),
        })
    }
}

/// Loan terms as entered on the EMI form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmiRequest {
    pub principal: f64,
    pub rate: f64,
    pub basis: RateBasis,
    pub tenure_months: u32,
}

impl EmiRequest {
    pub fn new(principal: f64, rate: f64, basis: RateBasis, tenure_months: u32) -> Result<Self> {
        if !principal.is_finite() || principal <= 0.0 || !rate.is_finite() || rate < 0.0 || tenure_months == 0 {
            bail!("Please enter valid values");
        }
        Ok(Self {
            principal,
            rate,
            basis,
            tenure_months,
        })
    }

    pub fn annual_rate(&self) -> f64 {
        self.basis.to_annual(self.rate)
    }

    pub fn calculator_input(&self) -> EmiInput {
        EmiInput {
            principal: self.principal,
            annual_rate_percent: self.annual_rate(),
            tenure_months: self.tenure_months,
        }
    }
}

/// A computed EMI ready to be saved as a plan.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEmiPlan {
    pub principal: Amount,
    pub rate: f64,
    pub tenure_months: u32,
    pub result: EmiResult,
}

impl NewEmiPlan {
    pub fn new(request: &EmiRequest, result: EmiResult) -> Result<Self> {
        let principal = rust_decimal::Decimal::try_from(request.principal)
            .map_err(|_| anyhow::anyhow!("Please enter valid values"))
            .and_then(Amount::from_major)?;
        Ok(Self {
            principal,
            rate: request.annual_rate(),
            tenure_months: request.tenure_months,
            result,
        })
    }
}

pub fn validate_profile(name: &str, email: &str, phone: &str) -> Result<UserProfile> {
    Ok(UserProfile {
        name: required(name, "Please enter your name")?,
        email: email.trim().to_string(),
        phone: phone.trim().to_string(),
    })
}
