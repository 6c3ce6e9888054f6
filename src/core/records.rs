//! Records held by the banking backend for each caller.
use crate::core::format::Amount;
use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Nanoseconds since the Unix epoch.
pub type Time = i64;

/// Opaque identity of a backend caller.
pub type Principal = String;

/// Implements `Display` and case-insensitive `FromStr` for a field-less enum.
macro_rules! keyword_enum {
    ($name:ident, $label:literal, { $($variant:ident => $text:literal),+ $(,)? }) => {
        impl Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(
                    f,
                    "{}",
                    match self {
                        $($name::$variant => $text,)+
                    }
                )
            }
        }

        impl FromStr for $name {
            type Err = anyhow::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $(
                    if s.eq_ignore_ascii_case($text) {
                        return Ok($name::$variant);
                    }
                )+
                Err(anyhow!("Invalid {}: {}", $label, s))
            }
        }
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TransferType {
    Imps,
    Neft,
    Rtgs,
}

keyword_enum!(TransferType, "transfer type", {
    Imps => "imps",
    Neft => "neft",
    Rtgs => "rtgs",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TransferStatus {
    Submitted,
    Completed,
    Failed,
}

keyword_enum!(TransferStatus, "transfer status", {
    Submitted => "submitted",
    Completed => "completed",
    Failed => "failed",
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoneyTransfer {
    pub from_account: String,
    pub beneficiary: String,
    pub amount: Amount,
    pub note: String,
    pub transfer_type: TransferType,
    pub status: TransferStatus,
    pub timestamp: Time,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CardType {
    Credit,
    Debit,
}

keyword_enum!(CardType, "card type", {
    Credit => "credit",
    Debit => "debit",
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub nickname: String,
    pub card_type: CardType,
    pub issuer: String,
    pub last4: String,
    pub expiry: String,
}

impl Card {
    pub fn masked_number(&self) -> String {
        format!("•••• •••• •••• {}", self.last4)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LoanType {
    Home,
    Business,
    Vehicle,
}

keyword_enum!(LoanType, "loan type", {
    Home => "home",
    Business => "business",
    Vehicle => "vehicle",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LoanStatus {
    Submitted,
    UnderReview,
}

keyword_enum!(LoanStatus, "loan status", {
    Submitted => "submitted",
    UnderReview => "underReview",
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanApplication {
    pub loan_type: LoanType,
    pub name: String,
    pub amount: Amount,
    /// Months.
    pub tenure: u32,
    pub income: Amount,
    pub purpose: String,
    pub documents: String,
    pub status: LoanStatus,
    pub timestamp: Time,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InsuranceCategory {
    Home,
    Life,
    Vehicle,
    Health,
}

keyword_enum!(InsuranceCategory, "insurance category", {
    Home => "home",
    Life => "life",
    Vehicle => "vehicle",
    Health => "health",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InquiryStatus {
    Submitted,
    Reviewed,
}

keyword_enum!(InquiryStatus, "inquiry status", {
    Submitted => "submitted",
    Reviewed => "reviewed",
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsuranceInquiry {
    pub category: InsuranceCategory,
    pub coverage_amount: Amount,
    pub notes: String,
    pub contact_preference: String,
    pub status: InquiryStatus,
    pub timestamp: Time,
}

/// A saved EMI calculation. The computed fields are in major units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmiPlan {
    pub principal: Amount,
    /// Annual rate in percent.
    pub rate: f64,
    pub tenure_months: u32,
    pub emi: f64,
    pub total_payment: f64,
    pub total_interest: f64,
    pub created_at: Time,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UserRole {
    Admin,
    User,
    Guest,
}

keyword_enum!(UserRole, "role", {
    Admin => "admin",
    User => "user",
    Guest => "guest",
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub recent_transfers: Vec<MoneyTransfer>,
    pub card_count: u64,
    pub loan_count: u64,
    pub emi_plans_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_enums_parse_case_insensitively() {
        assert_eq!("NEFT".parse::<TransferType>().unwrap(), TransferType::Neft);
        assert_eq!("underreview".parse::<LoanStatus>().unwrap(), LoanStatus::UnderReview);
        assert_eq!("Health".parse::<InsuranceCategory>().unwrap(), InsuranceCategory::Health);
        assert_eq!(LoanStatus::UnderReview.to_string(), "underReview");

        let err = "swift".parse::<TransferType>().unwrap_err();
        assert_eq!(err.to_string(), "Invalid transfer type: swift");
    }

    #[test]
    fn test_records_use_camel_case_wire_names() {
        let transfer = MoneyTransfer {
            from_account: "Savings".to_string(),
            beneficiary: "Alice".to_string(),
            amount: Amount::from_minor(1050),
            note: String::new(),
            transfer_type: TransferType::Rtgs,
            status: TransferStatus::Submitted,
            timestamp: 42,
        };
        let json = serde_json::to_value(&transfer).unwrap();
        assert_eq!(json["fromAccount"], "Savings");
        assert_eq!(json["amount"], 1050);
        assert_eq!(json["transferType"], "rtgs");

        let back: MoneyTransfer = serde_json::from_value(json).unwrap();
        assert_eq!(back, transfer);

        let status = serde_json::to_string(&LoanStatus::UnderReview).unwrap();
        assert_eq!(status, "\"underReview\"");
    }

    #[test]
    fn test_card_masking() {
        let card = Card {
            nickname: "Travel".to_string(),
            card_type: CardType::Credit,
            issuer: "Rust Bank".to_string(),
            last4: "4242".to_string(),
            expiry: "09/29".to_string(),
        };
        assert!(card.masked_number().ends_with(" 4242"));
    }
}
