use super::ui;
use crate::core::BankBackend;
use crate::core::format::{Amount, format_amount, format_date};
use crate::core::records::{LoanApplication, LoanType};
use crate::core::requests::LoanRequest;
use anyhow::Result;
use clap::Subcommand;
use comfy_table::{Cell, Table};

#[derive(Debug, Subcommand)]
pub enum LoanCommand {
    /// Apply for a home, business or vehicle loan
    Apply {
        loan_type: LoanType,
        /// Applicant name
        name: String,
        /// Requested amount
        amount: Amount,
        /// Tenure in months
        tenure: u32,
        /// Annual income
        income: Amount,
        #[arg(short, long, default_value = "")]
        purpose: String,
        /// Description of supporting documents
        #[arg(short, long, default_value = "")]
        documents: String,
    },
    /// List loan applications
    List,
}

pub async fn run(cmd: &LoanCommand, backend: &dyn BankBackend, currency: &str) -> Result<()> {
    match cmd {
        LoanCommand::Apply {
            loan_type,
            name,
            amount,
            tenure,
            income,
            purpose,
            documents,
        } => {
            let request =
                LoanRequest::new(*loan_type, name, *amount, *tenure, *income, purpose, documents)?;
            backend.apply_loan(request).await?;
            ui::print_success("Loan application submitted successfully");
        }
        LoanCommand::List => {
            let applications = backend.get_loan_applications().await?;
            if applications.is_empty() {
                ui::print_empty("No loan applications yet.");
            } else {
                println!("{}", render(&applications, currency));
            }
        }
    }
    Ok(())
}

pub fn render(applications: &[LoanApplication], currency: &str) -> Table {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Date"),
        ui::header_cell("Type"),
        ui::header_cell("Applicant"),
        ui::header_cell("Amount"),
        ui::header_cell("Tenure"),
        ui::header_cell("Income"),
        ui::header_cell("Status"),
        ui::header_cell("Purpose"),
    ]);
    for application in applications {
        table.add_row(vec![
            Cell::new(format_date(application.timestamp)),
            Cell::new(application.loan_type.to_string()),
            Cell::new(&application.name),
            ui::money_cell(format_amount(application.amount, currency)),
            ui::money_cell(format!("{} mo", application.tenure)),
            ui::money_cell(format_amount(application.income, currency)),
            ui::status_cell(&application.status.to_string()),
            ui::text_cell(&application.purpose),
        ]);
    }
    table
}
