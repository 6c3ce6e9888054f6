use super::ui;
use crate::core::BankBackend;
use crate::core::config::AppConfig;
use crate::core::finance::{self, EmiResult, RateBasis};
use crate::core::format::{format_amount, format_currency_f64, format_date};
use crate::core::records::EmiPlan;
use crate::core::requests::{EmiRequest, NewEmiPlan};
use anyhow::Result;
use clap::Subcommand;
use comfy_table::{Cell, Table};
use tracing::debug;

#[derive(Debug, Subcommand)]
pub enum EmiCommand {
    /// Calculate the monthly installment for a loan
    Calc {
        /// Loan amount
        principal: f64,
        /// Interest rate in percent (per annum unless --monthly-rate)
        rate: f64,
        /// Tenure in months
        tenure: u32,
        /// Treat the rate as a monthly rate
        #[arg(long)]
        monthly_rate: bool,
        /// Save the result as an EMI plan
        #[arg(short, long)]
        save: bool,
    },
    /// List saved EMI plans
    Plans,
}

pub async fn run(cmd: &EmiCommand, backend: &dyn BankBackend, config: &AppConfig) -> Result<()> {
    match cmd {
        EmiCommand::Calc {
            principal,
            rate,
            tenure,
            monthly_rate,
            save,
        } => {
            let basis = if *monthly_rate {
                RateBasis::Monthly
            } else {
                RateBasis::Annual
            };
            let request = EmiRequest::new(*principal, *rate, basis, *tenure)?;
            let result = finance::emi(&request.calculator_input(), config.calculators.zero_rate_emi);
            debug!("EMI for {request:?}: {result:?}");

            println!("\n{}", ui::style_text("EMI Breakdown", ui::StyleType::Title));
            println!("{}", render_result(&request, &result, &config.currency));

            if *save {
                backend
                    .save_emi_plan(NewEmiPlan::new(&request, result)?)
                    .await?;
                ui::print_success("EMI plan saved successfully");
            }
            Ok(())
        }
        EmiCommand::Plans => {
            let plans = backend.get_emi_plans().await?;
            if plans.is_empty() {
                ui::print_empty("No saved EMI plans yet.");
            } else {
                println!("{}", render_plans(&plans, &config.currency));
            }
            Ok(())
        }
    }
}

pub fn render_result(request: &EmiRequest, result: &EmiResult, currency: &str) -> Table {
    ui::breakdown_table(vec![
        (
            "Monthly EMI",
            ui::highlight_cell(format_currency_f64(result.emi, currency)),
        ),
        (
            "Total Payment",
            ui::money_cell(format_currency_f64(result.total_payment, currency)),
        ),
        (
            "Total Interest",
            ui::money_cell(format_currency_f64(result.total_interest, currency)),
        ),
        (
            "Principal Amount",
            ui::money_cell(format_currency_f64(request.principal, currency)),
        ),
        (
            "Interest Rate",
            ui::money_cell(format!("{}% {}", request.rate, request.basis.suffix())),
        ),
        (
            "Tenure",
            ui::money_cell(format!("{} months", request.tenure_months)),
        ),
    ])
}

pub fn render_plans(plans: &[EmiPlan], currency: &str) -> Table {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Principal"),
        ui::header_cell("Rate"),
        ui::header_cell("Tenure"),
        ui::header_cell("EMI"),
        ui::header_cell("Total Interest"),
        ui::header_cell("Saved"),
    ]);
    for plan in plans {
        table.add_row(vec![
            ui::money_cell(format_amount(plan.principal, currency)),
            ui::money_cell(format!("{}%", plan.rate)),
            ui::money_cell(format!("{} mo", plan.tenure_months)),
            ui::highlight_cell(format_currency_f64(plan.emi, currency)),
            ui::money_cell(format_currency_f64(plan.total_interest, currency)),
            Cell::new(format_date(plan.created_at)),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::finance::ZeroRateEmi;
    use crate::core::format::Amount;

    #[test]
    fn test_render_result_for_monthly_rate() {
        let request = EmiRequest::new(12000.0, 0.0, RateBasis::Monthly, 12).unwrap();
        let result = finance::emi(&request.calculator_input(), ZeroRateEmi::Amortize);
        let rendered = render_result(&request, &result, "USD").to_string();
        assert!(rendered.contains("$1,000.00"));
        assert!(rendered.contains("0% p.m."));
        assert!(rendered.contains("12 months"));
    }

    #[test]
    fn test_render_plans_converts_principal_from_minor_units() {
        let plans = vec![EmiPlan {
            principal: Amount::from_minor(10_000_000),
            rate: 8.5,
            tenure_months: 60,
            emi: 2051.65,
            total_payment: 123099.19,
            total_interest: 23099.19,
            created_at: 0,
        }];
        let rendered = render_plans(&plans, "USD").to_string();
        assert!(rendered.contains("$100,000.00"));
        assert!(rendered.contains("$2,051.65"));
        assert!(rendered.contains("Jan 1, 1970"));
    }
}
