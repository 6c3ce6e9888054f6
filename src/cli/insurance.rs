use super::ui;
use crate::core::BankBackend;
use crate::core::format::{Amount, format_amount, format_date};
use crate::core::records::{InsuranceCategory, InsuranceInquiry};
use crate::core::requests::InsuranceRequest;
use anyhow::Result;
use clap::Subcommand;
use comfy_table::{Cell, Table};

#[derive(Debug, Subcommand)]
pub enum InsuranceCommand {
    /// Ask for a quote on home, life, vehicle or health cover
    Inquire {
        category: InsuranceCategory,
        /// Desired coverage amount
        coverage: Amount,
        #[arg(short, long, default_value = "")]
        notes: String,
        /// How you would like to be contacted
        #[arg(long, default_value = "")]
        contact: String,
    },
    /// List insurance inquiries
    List,
}

pub async fn run(cmd: &InsuranceCommand, backend: &dyn BankBackend, currency: &str) -> Result<()> {
    match cmd {
        InsuranceCommand::Inquire {
            category,
            coverage,
            notes,
            contact,
        } => {
            let request = InsuranceRequest::new(*category, *coverage, notes, contact)?;
            backend.submit_insurance_inquiry(request).await?;
            ui::print_success("Insurance inquiry submitted successfully");
        }
        InsuranceCommand::List => {
            let inquiries = backend.get_insurance_inquiries().await?;
            if inquiries.is_empty() {
                ui::print_empty("No insurance inquiries yet.");
            } else {
                println!("{}", render(&inquiries, currency));
            }
        }
    }
    Ok(())
}

pub fn render(inquiries: &[InsuranceInquiry], currency: &str) -> Table {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Date"),
        ui::header_cell("Category"),
        ui::header_cell("Coverage"),
        ui::header_cell("Contact"),
        ui::header_cell("Status"),
        ui::header_cell("Notes"),
    ]);
    for inquiry in inquiries {
        table.add_row(vec![
            Cell::new(format_date(inquiry.timestamp)),
            Cell::new(inquiry.category.to_string()),
            ui::money_cell(format_amount(inquiry.coverage_amount, currency)),
            ui::text_cell(&inquiry.contact_preference),
            ui::status_cell(&inquiry.status.to_string()),
            ui::text_cell(&inquiry.notes),
        ]);
    }
    table
}
