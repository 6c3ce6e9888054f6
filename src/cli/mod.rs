//! Terminal commands, one per banking page.

pub mod card;
pub mod dashboard;
pub mod emi;
pub mod insurance;
pub mod interest;
pub mod loan;
pub mod profile;
pub mod setup;
pub mod transfer;
pub mod ui;

use clap::Subcommand;

pub use card::CardCommand;
pub use emi::EmiCommand;
pub use insurance::InsuranceCommand;
pub use interest::InterestArgs;
pub use loan::LoanCommand;
pub use profile::{ProfileCommand, RoleCommand};
pub use transfer::TransferCommand;

#[derive(Debug, Subcommand)]
pub enum AppCommand {
    /// Overview of transfers, cards, loans and EMI plans
    Dashboard,
    /// View or update your profile
    #[command(subcommand)]
    Profile(ProfileCommand),
    /// Send money and view transfer history
    #[command(subcommand)]
    Transfer(TransferCommand),
    /// Manage saved cards
    #[command(subcommand)]
    Card(CardCommand),
    /// Apply for loans and track applications
    #[command(subcommand)]
    Loan(LoanCommand),
    /// Submit and track insurance inquiries
    #[command(subcommand)]
    Insurance(InsuranceCommand),
    /// EMI calculator and saved plans
    #[command(subcommand)]
    Emi(EmiCommand),
    /// Compound interest calculator
    Interest(InterestArgs),
    /// Show or assign user roles
    #[command(subcommand)]
    Role(RoleCommand),
}
