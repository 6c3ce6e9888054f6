//! Banking backend abstraction
//!
//! Every call acts on behalf of the caller the backend was bound to.

use crate::core::records::{
    Card, DashboardSummary, EmiPlan, InsuranceInquiry, LoanApplication, MoneyTransfer, Principal,
    UserProfile, UserRole,
};
use crate::core::requests::{InsuranceRequest, LoanRequest, NewCard, NewEmiPlan, NewTransfer};
use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait BankBackend: Send + Sync {
    fn caller(&self) -> &Principal;

    async fn get_caller_user_profile(&self) -> Result<Option<UserProfile>>;
    async fn save_caller_user_profile(&self, profile: UserProfile) -> Result<()>;
    async fn get_user_profile(&self, user: &Principal) -> Result<Option<UserProfile>>;

    async fn get_caller_user_role(&self) -> Result<UserRole>;
    async fn is_caller_admin(&self) -> Result<bool>;
    async fn assign_caller_user_role(&self, user: &Principal, role: UserRole) -> Result<()>;

    async fn create_transfer(&self, transfer: NewTransfer) -> Result<()>;
    /// Newest first.
    async fn get_transfer_history(&self) -> Result<Vec<MoneyTransfer>>;

    async fn add_card(&self, card: NewCard) -> Result<()>;
    async fn get_all_cards(&self) -> Result<Vec<Card>>;
    async fn remove_card(&self, nickname: &str) -> Result<()>;

    async fn apply_loan(&self, application: LoanRequest) -> Result<()>;
    async fn get_loan_applications(&self) -> Result<Vec<LoanApplication>>;

    async fn submit_insurance_inquiry(&self, inquiry: InsuranceRequest) -> Result<()>;
    async fn get_insurance_inquiries(&self) -> Result<Vec<InsuranceInquiry>>;

    async fn save_emi_plan(&self, plan: NewEmiPlan) -> Result<()>;
    async fn get_emi_plans(&self) -> Result<Vec<EmiPlan>>;

    async fn get_dashboard_summary(&self) -> Result<DashboardSummary>;
}
