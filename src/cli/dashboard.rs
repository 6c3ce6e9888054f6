use super::{transfer, ui};
use crate::core::BankBackend;
use crate::core::records::{DashboardSummary, UserProfile};
use anyhow::Result;
use comfy_table::{Cell, Table};
use tracing::debug;

pub async fn run(backend: &dyn BankBackend, currency: &str) -> Result<()> {
    let (profile, summary) = futures::try_join!(
        backend.get_caller_user_profile(),
        backend.get_dashboard_summary()
    )?;
    debug!("Dashboard summary: {summary:?}");

    println!("{}", ui::style_text(&greeting(profile.as_ref()), ui::StyleType::Title));
    println!("{}", render_stats(&summary));

    println!(
        "\n{}",
        ui::style_text("Recent Transfers", ui::StyleType::Heading)
    );
    if summary.recent_transfers.is_empty() {
        ui::print_empty("No transfers yet. Send one with `bankdesk transfer send`.");
    } else {
        println!("{}", transfer::render(&summary.recent_transfers, currency));
    }
    Ok(())
}

fn greeting(profile: Option<&UserProfile>) -> String {
    match profile {
        Some(profile) => format!("Welcome back, {}!", profile.name),
        None => "Welcome! Set up your profile with `bankdesk profile save`.".to_string(),
    }
}

pub fn render_stats(summary: &DashboardSummary) -> Table {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Recent Transfers"),
        ui::header_cell("Saved Cards"),
        ui::header_cell("Loan Applications"),
        ui::header_cell("EMI Plans"),
    ]);
    table.add_row(vec![
        Cell::new(summary.recent_transfers.len()),
        Cell::new(summary.card_count),
        Cell::new(summary.loan_count),
        Cell::new(summary.emi_plans_count),
    ]);
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting() {
        let profile = UserProfile {
            name: "Ana".to_string(),
            email: String::new(),
            phone: String::new(),
        };
        assert_eq!(greeting(Some(&profile)), "Welcome back, Ana!");
        assert!(greeting(None).starts_with("Welcome!"));
    }

    #[test]
    fn test_render_stats() {
        let summary = DashboardSummary {
            recent_transfers: Vec::new(),
            card_count: 2,
            loan_count: 1,
            emi_plans_count: 7,
        };
        let rendered = render_stats(&summary).to_string();
        assert!(rendered.contains("Saved Cards"));
        assert!(rendered.contains('7'));
    }
}
