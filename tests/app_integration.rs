use anyhow::Result;
use bankdesk::cli::{
    CardCommand, EmiCommand, InsuranceCommand, InterestArgs, LoanCommand, ProfileCommand,
    RoleCommand, TransferCommand,
};
use bankdesk::core::BankBackend;
use bankdesk::core::records::{CardType, InsuranceCategory, LoanType, TransferType, UserRole};
use bankdesk::{AppCommand, RunOptions, load_config, open_backend, run_command};
use std::fs;
use tempfile::{NamedTempFile, TempDir};
use tracing::info;

mod test_utils {
    use super::*;

    pub struct TestEnv {
        pub config_file: NamedTempFile,
        // Keeps the ledger directory alive for the whole test
        pub _data_dir: TempDir,
    }

    impl TestEnv {
        pub fn config_path(&self) -> &str {
            self.config_file
                .path()
                .to_str()
                .expect("temp path is valid utf-8")
        }

        pub fn options(&self) -> RunOptions<'_> {
            RunOptions {
                config_path: Some(self.config_path()),
                caller: None,
            }
        }

        pub fn as_caller<'a>(&'a self, caller: &'a str) -> RunOptions<'a> {
            RunOptions {
                config_path: Some(self.config_path()),
                caller: Some(caller),
            }
        }
    }

    pub fn create_env() -> TestEnv {
        let data_dir = TempDir::new().expect("Failed to create temp dir");
        let config_file = NamedTempFile::new().expect("Failed to create temp file");
        let config_content = format!(
            r#"
caller: "alice"
currency: "USD"
data_path: "{}"
calculators:
  zero_rate_emi: amortize
  compounding_frequency: 12
dashboard:
  recent_transfers: 2
"#,
            data_dir.path().display()
        );
        fs::write(config_file.path(), config_content).expect("Failed to write config file");
        TestEnv {
            config_file,
            _data_dir: data_dir,
        }
    }

    pub async fn save_profile(options: RunOptions<'_>, name: &str) -> Result<()> {
        run_command(
            AppCommand::Profile(ProfileCommand::Save {
                name: name.to_string(),
                email: format!("{}@example.com", name.to_lowercase()),
                phone: String::new(),
            }),
            options,
        )
        .await
    }

    pub fn send(beneficiary: &str, amount: &str) -> AppCommand {
        AppCommand::Transfer(TransferCommand::Send {
            from_account: "Savings 0042".to_string(),
            beneficiary: beneficiary.to_string(),
            amount: amount.parse().expect("valid amount"),
            note: String::new(),
            transfer_type: TransferType::Neft,
        })
    }
}

use test_utils::*;

#[test_log::test(tokio::test)]
async fn test_full_banking_flow() -> Result<()> {
    let env = create_env();

    save_profile(env.options(), "Alice").await?;
    run_command(send("Bob", "1,250.50"), env.options()).await?;
    run_command(send("Carol", "99"), env.options()).await?;
    run_command(send("Dave", "10"), env.options()).await?;
    run_command(AppCommand::Transfer(TransferCommand::History), env.options()).await?;

    run_command(
        AppCommand::Card(CardCommand::Add {
            nickname: "travel".to_string(),
            issuer: "First Bank".to_string(),
            last4: "4242".to_string(),
            expiry: "09/28".to_string(),
            card_type: CardType::Credit,
        }),
        env.options(),
    )
    .await?;
    run_command(AppCommand::Card(CardCommand::List), env.options()).await?;

    run_command(
        AppCommand::Loan(LoanCommand::Apply {
            loan_type: LoanType::Home,
            name: "Alice".to_string(),
            amount: "250000".parse()?,
            tenure: 240,
            income: "90000".parse()?,
            purpose: "First home".to_string(),
            documents: String::new(),
        }),
        env.options(),
    )
    .await?;
    run_command(
        AppCommand::Insurance(InsuranceCommand::Inquire {
            category: InsuranceCategory::Health,
            coverage: "50000".parse()?,
            notes: String::new(),
            contact: "email".to_string(),
        }),
        env.options(),
    )
    .await?;
    run_command(
        AppCommand::Emi(EmiCommand::Calc {
            principal: 100000.0,
            rate: 8.5,
            tenure: 60,
            monthly_rate: false,
            save: true,
        }),
        env.options(),
    )
    .await?;
    run_command(AppCommand::Emi(EmiCommand::Plans), env.options()).await?;
    run_command(AppCommand::Dashboard, env.options()).await?;

    let config = load_config(&env.options())?;
    let backend = open_backend(&config)?;

    let history = backend.get_transfer_history().await?;
    info!(count = history.len(), "Transfer history loaded");
    assert_eq!(history.len(), 3);
    assert_eq!(history[0].beneficiary, "Dave");
    assert_eq!(history[2].amount.minor(), 125_050);

    let plans = backend.get_emi_plans().await?;
    assert_eq!(plans.len(), 1);
    assert_eq!(plans[0].tenure_months, 60);
    assert!((plans[0].emi - 2051.65).abs() < 0.01);

    let summary = backend.get_dashboard_summary().await?;
    assert_eq!(summary.recent_transfers.len(), 2);
    assert_eq!(summary.card_count, 1);
    assert_eq!(summary.loan_count, 1);
    assert_eq!(summary.emi_plans_count, 1);
    assert_eq!(backend.get_insurance_inquiries().await?.len(), 1);
    drop(backend);

    run_command(
        AppCommand::Card(CardCommand::Remove {
            nickname: "travel".to_string(),
        }),
        env.options(),
    )
    .await?;
    let backend = open_backend(&config)?;
    assert!(backend.get_all_cards().await?.is_empty());

    Ok(())
}

#[test_log::test(tokio::test)]
async fn test_guest_cannot_send_money() {
    let env = create_env();

    let result = run_command(send("Bob", "10"), env.options()).await;

    let err = result.expect_err("guest transfer should be rejected");
    assert!(
        err.to_string().contains("Unauthorized"),
        "unexpected error: {err}"
    );
}

#[test_log::test(tokio::test)]
async fn test_invalid_card_is_rejected() -> Result<()> {
    let env = create_env();
    save_profile(env.options(), "Alice").await?;

    let result = run_command(
        AppCommand::Card(CardCommand::Add {
            nickname: "bad".to_string(),
            issuer: "First Bank".to_string(),
            last4: "42".to_string(),
            expiry: "09/28".to_string(),
            card_type: CardType::Debit,
        }),
        env.options(),
    )
    .await;

    let err = result.expect_err("short last4 should be rejected");
    assert!(err.to_string().contains("exactly 4 numbers"));

    let backend = open_backend(&load_config(&env.options())?)?;
    assert!(backend.get_all_cards().await?.is_empty());
    Ok(())
}

#[test_log::test(tokio::test)]
async fn test_records_are_scoped_to_caller() -> Result<()> {
    let env = create_env();

    save_profile(env.options(), "Alice").await?;
    save_profile(env.as_caller("bob"), "Bob").await?;
    run_command(send("Carol", "5"), env.as_caller("bob")).await?;

    let alice = open_backend(&load_config(&env.options())?)?;
    assert!(alice.get_transfer_history().await?.is_empty());
    assert_eq!(alice.get_caller_user_role().await?, UserRole::Admin);

    let bob = alice.with_caller("bob");
    assert_eq!(bob.get_transfer_history().await?.len(), 1);
    assert_eq!(bob.get_caller_user_role().await?, UserRole::User);
    drop(bob);
    drop(alice);

    let denied = run_command(
        AppCommand::Role(RoleCommand::Assign {
            user: "alice".to_string(),
            role: UserRole::Guest,
        }),
        env.as_caller("bob"),
    )
    .await;
    assert!(denied.is_err());
    Ok(())
}

#[test_log::test(tokio::test)]
async fn test_interest_runs_without_store() -> Result<()> {
    let env = create_env();

    run_command(
        AppCommand::Interest(InterestArgs {
            principal: 10000.0,
            rate: 5.0,
            years: 10.0,
            frequency: None,
            monthly_contribution: 0.0,
        }),
        env.options(),
    )
    .await?;

    let invalid = run_command(
        AppCommand::Interest(InterestArgs {
            principal: -1.0,
            rate: 5.0,
            years: 10.0,
            frequency: Some(4),
            monthly_contribution: 0.0,
        }),
        env.options(),
    )
    .await;
    assert!(invalid.is_err());
    Ok(())
}

#[test_log::test(tokio::test)]
async fn test_empty_caller_override_is_rejected() {
    let env = create_env();
    let result = run_command(AppCommand::Dashboard, env.as_caller("  ")).await;
    assert!(result.is_err());

    let result = run_command(AppCommand::Dashboard, env.as_caller("alice\0x")).await;
    let err = result.expect_err("caller with NUL should be rejected");
    assert!(err.to_string().contains("control characters"));
}
