use super::ui;
use crate::core::config::AppConfig;
use crate::core::finance::{self, CompoundInterestInput, CompoundInterestResult};
use crate::core::format::{format_currency_f64, format_number_f64};
use anyhow::{Result, bail};
use clap::Args;
use comfy_table::Table;
use tracing::debug;

#[derive(Debug, Args)]
pub struct InterestArgs {
    /// Initial investment
    pub principal: f64,
    /// Annual interest rate in percent
    pub rate: f64,
    /// Investment period in years
    pub years: f64,
    /// Times per year interest is compounded (defaults to the configured value)
    #[arg(short, long)]
    pub frequency: Option<u32>,
    /// Amount added at the end of every month
    #[arg(short, long, default_value_t = 0.0)]
    pub monthly_contribution: f64,
}

impl InterestArgs {
    fn to_input(&self, default_frequency: u32) -> Result<CompoundInterestInput> {
        let frequency = self.frequency.unwrap_or(default_frequency);
        let finite = [self.principal, self.rate, self.years, self.monthly_contribution]
            .iter()
            .all(|v| v.is_finite());
        if !finite
            || self.principal < 0.0
            || self.rate < 0.0
            || self.years <= 0.0
            || frequency < 1
            || self.monthly_contribution < 0.0
        {
            bail!("Please enter valid values");
        }
        Ok(CompoundInterestInput::new(self.principal, self.rate, self.years, frequency)
            .with_monthly_contribution(self.monthly_contribution))
    }
}

pub fn run(args: &InterestArgs, config: &AppConfig) -> Result<()> {
    let input = args.to_input(config.calculators.compounding_frequency)?;
    let result = finance::compound_interest(&input);
    debug!("Compound interest for {input:?}: {result:?}");

    println!(
        "\n{}",
        ui::style_text("Compound Interest", ui::StyleType::Title)
    );
    println!("{}", render(&input, &result, &config.currency));
    Ok(())
}

fn frequency_label(frequency: u32) -> String {
    match frequency {
        1 => "Annually".to_string(),
        2 => "Semi-annually".to_string(),
        4 => "Quarterly".to_string(),
        12 => "Monthly".to_string(),
        365 => "Daily".to_string(),
        n => format!("{n} times a year"),
    }
}

pub fn render(input: &CompoundInterestInput, result: &CompoundInterestResult, currency: &str) -> Table {
    let money = |v: f64| format_currency_f64(v, currency);
    let mut rows = vec![
        ("Future Value", ui::highlight_cell(money(result.future_value))),
        ("Total Interest", ui::money_cell(money(result.total_interest))),
        ("Principal", ui::money_cell(money(input.principal))),
    ];
    if input.monthly_contribution > 0.0 {
        rows.push((
            "Total Contributions",
            ui::money_cell(money(result.total_contributions)),
        ));
    }
    rows.push((
        "Interest Rate",
        ui::money_cell(format!("{}% p.a.", format_number_f64(input.annual_rate_percent))),
    ));
    rows.push((
        "Period",
        ui::money_cell(format!("{} years", format_number_f64(input.years))),
    ));
    rows.push((
        "Compounding",
        ui::money_cell(frequency_label(input.compounding_frequency)),
    ));
    ui::breakdown_table(rows)
}
