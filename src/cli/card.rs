use super::ui;
use crate::core::BankBackend;
use crate::core::records::{Card, CardType};
use crate::core::requests::NewCard;
use anyhow::Result;
use clap::Subcommand;
use comfy_table::{Cell, Table};

#[derive(Debug, Subcommand)]
pub enum CardCommand {
    /// Save a card
    Add {
        /// Name to identify the card by
        nickname: String,
        /// Issuing bank
        issuer: String,
        /// Last four digits of the card number
        last4: String,
        /// Expiry as MM/YY
        expiry: String,
        /// credit or debit
        #[arg(short = 't', long = "type", default_value = "debit")]
        card_type: CardType,
    },
    /// List saved cards
    List,
    /// Remove a saved card
    Remove {
        nickname: String,
    },
}

pub async fn run(cmd: &CardCommand, backend: &dyn BankBackend) -> Result<()> {
    match cmd {
        CardCommand::Add {
            nickname,
            issuer,
            last4,
            expiry,
            card_type,
        } => {
            let card = NewCard::new(nickname, *card_type, issuer, last4, expiry)?;
            backend.add_card(card).await?;
            ui::print_success("Card added successfully");
        }
        CardCommand::List => {
            let cards = backend.get_all_cards().await?;
            if cards.is_empty() {
                ui::print_empty("No saved cards yet.");
            } else {
                println!("{}", render(&cards));
            }
        }
        CardCommand::Remove { nickname } => {
            backend.remove_card(nickname).await?;
            ui::print_success("Card removed successfully");
        }
    }
    Ok(())
}

pub fn render(cards: &[Card]) -> Table {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Nickname"),
        ui::header_cell("Type"),
        ui::header_cell("Issuer"),
        ui::header_cell("Number"),
        ui::header_cell("Expiry"),
    ]);
    for card in cards {
        table.add_row(vec![
            Cell::new(&card.nickname),
            Cell::new(card.card_type.to_string()),
            Cell::new(&card.issuer),
            Cell::new(card.masked_number()),
            Cell::new(&card.expiry),
        ]);
    }
    table
}
