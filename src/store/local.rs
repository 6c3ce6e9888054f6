//! A [`BankBackend`] kept in a local [`KeyValueStore`].
//!
//! Records are stored as JSON. List records are keyed by
//! `caller NUL timestamp NUL sequence`, so a prefix scan over `caller NUL`
//! yields one caller's records oldest first. Cards are keyed by
//! `caller NUL nickname`, which makes nicknames unique per caller.
use super::{KeyValueCollection, KeyValueStore};
use crate::core::BankBackend;
use crate::core::records::{
    Card, DashboardSummary, EmiPlan, InquiryStatus, InsuranceInquiry, LoanApplication, LoanStatus,
    MoneyTransfer, Principal, Time, TransferStatus, UserProfile, UserRole,
};
use crate::core::requests::{InsuranceRequest, LoanRequest, NewCard, NewEmiPlan, NewTransfer};
use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use chrono::Utc;
use serde::{Serialize, de::DeserializeOwned};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, info};

const PROFILES: &str = "profiles";
const ROLES: &str = "roles";
const TRANSFERS: &str = "transfers";
const CARDS: &str = "cards";
const LOANS: &str = "loans";
const INSURANCE: &str = "insurance";
const EMI_PLANS: &str = "emi_plans";

fn now_nanos() -> Time {
    Utc::now().timestamp_nanos_opt().unwrap_or(Time::MAX)
}

fn caller_prefix(caller: &str) -> Vec<u8> {
    let mut key = caller.as_bytes().to_vec();
    key.push(0);
    key
}

fn decode<T: DeserializeOwned>(collection: &str, bytes: &[u8]) -> Result<T> {
    serde_json::from_slice(bytes).with_context(|| format!("Corrupt record in {collection}"))
}

#[derive(Clone)]
pub struct LocalBackend {
    store: Arc<KeyValueStore>,
    caller: Principal,
    recent_transfers: usize,
    sequence: Arc<AtomicU64>,
}

impl LocalBackend {
    pub fn new(store: Arc<KeyValueStore>, caller: &str, recent_transfers: usize) -> Self {
        Self {
            store,
            caller: caller.to_string(),
            recent_transfers,
            sequence: Arc::new(AtomicU64::new(0)),
        }
    }

    /// The same store, acting for another caller.
    pub fn with_caller(&self, caller: &str) -> Self {
        Self {
            caller: caller.to_string(),
            ..self.clone()
        }
    }

    fn collection(&self, name: &str) -> Result<Arc<dyn KeyValueCollection>> {
        self.store.collection(name)
    }

    fn record_key(&self, timestamp: Time) -> Vec<u8> {
        let sequence = self.sequence.fetch_add(1, Ordering::Relaxed);
        let mut key = caller_prefix(&self.caller);
        key.extend_from_slice(format!("{:020}", timestamp.max(0)).as_bytes());
        key.push(0);
        key.extend_from_slice(format!("{sequence:020}").as_bytes());
        key
    }

    fn card_key(&self, nickname: &str) -> Vec<u8> {
        let mut key = caller_prefix(&self.caller);
        key.extend_from_slice(nickname.as_bytes());
        key
    }

    async fn append<T: Serialize + Sync>(&self, name: &str, timestamp: Time, record: &T) -> Result<()> {
        let value = serde_json::to_vec(record)?;
        self.collection(name)?
            .put(&self.record_key(timestamp), &value)
            .await
    }

    async fn list<T: DeserializeOwned>(&self, name: &str) -> Result<Vec<T>> {
        self.collection(name)?
            .scan_prefix(&caller_prefix(&self.caller))
            .await?
            .iter()
            .map(|(_, value)| decode(name, value))
            .collect()
    }

    async fn count(&self, name: &str) -> Result<u64> {
        let pairs = self
            .collection(name)?
            .scan_prefix(&caller_prefix(&self.caller))
            .await?;
        Ok(pairs.len() as u64)
    }

    async fn role_of(&self, user: &str) -> Result<UserRole> {
        match self.collection(ROLES)?.get(user.as_bytes()).await? {
            Some(bytes) => decode(ROLES, &bytes),
            None => Ok(UserRole::Guest),
        }
    }

    async fn set_role(&self, user: &str, role: UserRole) -> Result<()> {
        let value = serde_json::to_vec(&role)?;
        self.collection(ROLES)?.put(user.as_bytes(), &value).await
    }

    async fn require_user(&self, action: &str) -> Result<()> {
        match self.role_of(&self.caller).await? {
            UserRole::Admin | UserRole::User => Ok(()),
            UserRole::Guest => bail!("Unauthorized: Only users can {action}"),
        }
    }
}

#[async_trait]
impl BankBackend for LocalBackend {
    fn caller(&self) -> &Principal {
        &self.caller
    }

    async fn get_caller_user_profile(&self) -> Result<Option<UserProfile>> {
        self.get_user_profile(&self.caller).await
    }

    async fn save_caller_user_profile(&self, profile: UserProfile) -> Result<()> {
        let value = serde_json::to_vec(&profile)?;
        self.collection(PROFILES)?
            .put(self.caller.as_bytes(), &value)
            .await?;

        let roles = self.collection(ROLES)?;
        // Only unregistered callers get a role; an assigned one is kept
        if roles.get(self.caller.as_bytes()).await?.is_none() {
            let first_user = roles.scan_prefix(b"").await?.is_empty();
            let role = if first_user {
                UserRole::Admin
            } else {
                UserRole::User
            };
            self.set_role(&self.caller, role).await?;
            info!("Registered {} as {role}", self.caller);
        }
        debug!("Saved profile for {}", self.caller);
        Ok(())
    }

    async fn get_user_profile(&self, user: &Principal) -> Result<Option<UserProfile>> {
        if *user != self.caller && !self.is_caller_admin().await? {
            bail!("Unauthorized: Can only view your own profile");
        }
        match self.collection(PROFILES)?.get(user.as_bytes()).await? {
            Some(bytes) => Ok(Some(decode(PROFILES, &bytes)?)),
            None => Ok(None),
        }
    }

    async fn get_caller_user_role(&self) -> Result<UserRole> {
        self.role_of(&self.caller).await
    }

    async fn is_caller_admin(&self) -> Result<bool> {
        Ok(self.role_of(&self.caller).await? == UserRole::Admin)
    }

    async fn assign_caller_user_role(&self, user: &Principal, role: UserRole) -> Result<()> {
        if !self.is_caller_admin().await? {
            bail!("Unauthorized: Only admins can assign user roles");
        }
        self.set_role(user, role).await?;
        info!("{} assigned role {role} to {user}", self.caller);
        Ok(())
    }

    async fn create_transfer(&self, transfer: NewTransfer) -> Result<()> {
        self.require_user("create transfers").await?;
        let timestamp = now_nanos();
        let record = MoneyTransfer {
            from_account: transfer.from_account,
            beneficiary: transfer.beneficiary,
            amount: transfer.amount,
            note: transfer.note,
            transfer_type: transfer.transfer_type,
            status: TransferStatus::Submitted,
            timestamp,
        };
        self.append(TRANSFERS, timestamp, &record).await?;
        info!(
            "Transfer of {} minor units to {} submitted",
            record.amount.minor(),
            record.beneficiary
        );
        Ok(())
    }

    async fn get_transfer_history(&self) -> Result<Vec<MoneyTransfer>> {
        let mut transfers: Vec<MoneyTransfer> = self.list(TRANSFERS).await?;
        transfers.reverse();
        Ok(transfers)
    }

    async fn add_card(&self, card: NewCard) -> Result<()> {
        self.require_user("add cards").await?;
        let collection = self.collection(CARDS)?;
        let key = self.card_key(&card.nickname);
        if collection.get(&key).await?.is_some() {
            bail!("A card named '{}' already exists", card.nickname);
        }
        let record = Card {
            nickname: card.nickname,
            card_type: card.card_type,
            issuer: card.issuer,
            last4: card.last4,
            expiry: card.expiry,
        };
        collection.put(&key, &serde_json::to_vec(&record)?).await?;
        info!("Card '{}' added", record.nickname);
        Ok(())
    }

    async fn get_all_cards(&self) -> Result<Vec<Card>> {
        self.list(CARDS).await
    }

    async fn remove_card(&self, nickname: &str) -> Result<()> {
        self.require_user("remove cards").await?;
        let collection = self.collection(CARDS)?;
        let key = self.card_key(nickname.trim());
        if collection.get(&key).await?.is_none() {
            bail!("Card not found: {}", nickname.trim());
        }
        collection.remove(&key).await?;
        info!("Card '{}' removed", nickname.trim());
        Ok(())
    }

    async fn apply_loan(&self, application: LoanRequest) -> Result<()> {
        self.require_user("apply for loans").await?;
        let timestamp = now_nanos();
        let record = LoanApplication {
            loan_type: application.loan_type,
            name: application.name,
            amount: application.amount,
            tenure: application.tenure,
            income: application.income,
            purpose: application.purpose,
            documents: application.documents,
            status: LoanStatus::Submitted,
            timestamp,
        };
        self.append(LOANS, timestamp, &record).await?;
        info!("{} loan application submitted", record.loan_type);
        Ok(())
    }

    async fn get_loan_applications(&self) -> Result<Vec<LoanApplication>> {
        self.list(LOANS).await
    }

    async fn submit_insurance_inquiry(&self, inquiry: InsuranceRequest) -> Result<()> {
        self.require_user("submit insurance inquiries").await?;
        let timestamp = now_nanos();
        let record = InsuranceInquiry {
            category: inquiry.category,
            coverage_amount: inquiry.coverage_amount,
            notes: inquiry.notes,
            contact_preference: inquiry.contact_preference,
            status: InquiryStatus::Submitted,
            timestamp,
        };
        self.append(INSURANCE, timestamp, &record).await?;
        info!("{} insurance inquiry submitted", record.category);
        Ok(())
    }

    async fn get_insurance_inquiries(&self) -> Result<Vec<InsuranceInquiry>> {
        self.list(INSURANCE).await
    }

    async fn save_emi_plan(&self, plan: NewEmiPlan) -> Result<()> {
        self.require_user("save EMI plans").await?;
        let created_at = now_nanos();
        let record = EmiPlan {
            principal: plan.principal,
            rate: plan.rate,
            tenure_months: plan.tenure_months,
            emi: plan.result.emi,
            total_payment: plan.result.total_payment,
            total_interest: plan.result.total_interest,
            created_at,
        };
        self.append(EMI_PLANS, created_at, &record).await?;
        info!("EMI plan saved");
        Ok(())
    }

    async fn get_emi_plans(&self) -> Result<Vec<EmiPlan>> {
        self.list(EMI_PLANS).await
    }

    async fn get_dashboard_summary(&self) -> Result<DashboardSummary> {
        let mut recent_transfers = self.get_transfer_history().await?;
        recent_transfers.truncate(self.recent_transfers);
        Ok(DashboardSummary {
            recent_transfers,
            card_count: self.count(CARDS).await?,
            loan_count: self.count(LOANS).await?,
            emi_plans_count: self.count(EMI_PLANS).await?,
        })
    }
}
