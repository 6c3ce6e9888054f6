use super::ui;
use crate::core::BankBackend;
use crate::core::format::{Amount, format_amount, format_date};
use crate::core::records::{MoneyTransfer, TransferType};
use crate::core::requests::NewTransfer;
use anyhow::Result;
use clap::Subcommand;
use comfy_table::{Cell, Table};

#[derive(Debug, Subcommand)]
pub enum TransferCommand {
    /// Send money to a beneficiary
    Send {
        /// Account to debit
        from_account: String,
        /// Beneficiary name or account
        beneficiary: String,
        /// Amount, e.g. 1250.50
        amount: Amount,
        /// Optional note
        #[arg(short, long, default_value = "")]
        note: String,
        /// Transfer rail: imps, neft or rtgs
        #[arg(short = 't', long = "type", default_value = "imps")]
        transfer_type: TransferType,
    },
    /// Show transfer history
    History,
}

pub async fn run(cmd: &TransferCommand, backend: &dyn BankBackend, currency: &str) -> Result<()> {
    match cmd {
        TransferCommand::Send {
            from_account,
            beneficiary,
            amount,
            note,
            transfer_type,
        } => {
            let transfer =
                NewTransfer::new(from_account, beneficiary, *amount, note, *transfer_type)?;
            backend.create_transfer(transfer).await?;
            ui::print_success("Transfer submitted successfully");
        }
        TransferCommand::History => {
            let transfers = backend.get_transfer_history().await?;
            if transfers.is_empty() {
                ui::print_empty("No transfers yet.");
            } else {
                println!("{}", render(&transfers, currency));
            }
        }
    }
    Ok(())
}

pub fn render(transfers: &[MoneyTransfer], currency: &str) -> Table {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Date"),
        ui::header_cell("From"),
        ui::header_cell("Beneficiary"),
        ui::header_cell("Type"),
        ui::header_cell("Amount"),
        ui::header_cell("Status"),
        ui::header_cell("Note"),
    ]);
    for transfer in transfers {
        table.add_row(vec![
            Cell::new(format_date(transfer.timestamp)),
            Cell::new(&transfer.from_account),
            Cell::new(&transfer.beneficiary),
            Cell::new(transfer.transfer_type.to_string().to_uppercase()),
            ui::money_cell(format_amount(transfer.amount, currency)),
            ui::status_cell(&transfer.status.to_string()),
            ui::text_cell(&transfer.note),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::records::TransferStatus;

    #[test]
    fn test_render_transfers() {
        let transfers = vec![MoneyTransfer {
            from_account: "Savings".to_string(),
            beneficiary: "Alice".to_string(),
            amount: Amount::from_minor(125050),
            note: String::new(),
            transfer_type: TransferType::Neft,
            status: TransferStatus::Submitted,
            timestamp: 1_704_467_040_000_000_000,
        }];
        let rendered = render(&transfers, "INR").to_string();
        assert!(rendered.contains("₹1,250.50"));
        assert!(rendered.contains("NEFT"));
        assert!(rendered.contains("submitted"));
        assert!(rendered.contains("Jan 5, 2024"));
    }
}
