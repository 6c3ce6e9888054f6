use super::ui;
use crate::core::BankBackend;
use crate::core::records::{UserProfile, UserRole};
use crate::core::requests::validate_profile;
use anyhow::Result;
use clap::Subcommand;
use comfy_table::Cell;

#[derive(Debug, Subcommand)]
pub enum ProfileCommand {
    /// Show your profile
    Show,
    /// Create or update your profile
    Save {
        #[arg(short, long)]
        name: String,
        #[arg(short, long, default_value = "")]
        email: String,
        #[arg(short, long, default_value = "")]
        phone: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum RoleCommand {
    /// Show your role
    Show,
    /// Assign a role to another user (admins only)
    Assign { user: String, role: UserRole },
}

pub async fn run(cmd: &ProfileCommand, backend: &dyn BankBackend) -> Result<()> {
    match cmd {
        ProfileCommand::Show => match backend.get_caller_user_profile().await? {
            Some(profile) => {
                let role = backend.get_caller_user_role().await?;
                print_profile(&profile, role);
            }
            None => ui::print_empty(&format!(
                "No profile for '{}'. Create one with `bankdesk profile save --name <NAME>`.",
                backend.caller()
            )),
        },
        ProfileCommand::Save { name, email, phone } => {
            let profile = validate_profile(name, email, phone)?;
            backend.save_caller_user_profile(profile).await?;
            ui::print_success("Profile saved successfully");
        }
    }
    Ok(())
}

pub async fn run_role(cmd: &RoleCommand, backend: &dyn BankBackend) -> Result<()> {
    match cmd {
        RoleCommand::Show => {
            let role = backend.get_caller_user_role().await?;
            println!("{}: {role}", backend.caller());
        }
        RoleCommand::Assign { user, role } => {
            backend.assign_caller_user_role(user, *role).await?;
            ui::print_success(&format!("Assigned role {role} to {user}"));
        }
    }
    Ok(())
}

fn print_profile(profile: &UserProfile, role: UserRole) {
    println!(
        "{}",
        ui::breakdown_table(vec![
            ("Name", Cell::new(&profile.name)),
            ("Email", ui::text_cell(&profile.email)),
            ("Phone", ui::text_cell(&profile.phone)),
            ("Role", Cell::new(role.to_string())),
        ])
    );
}
