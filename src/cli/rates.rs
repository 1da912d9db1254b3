use super::ui;
use crate::core::{Currency, RateResponse, RatesRequest};
use crate::providers::FixerClient;
use anyhow::Result;
use chrono::NaiveDate;
use comfy_table::Cell;
use tracing::warn;

/// Command line adjustments layered over the configured request.
#[derive(Debug, Clone, Default)]
pub struct RequestOverrides {
    pub base: Option<Currency>,
    pub symbols: Option<Vec<Currency>>,
    pub date: Option<NaiveDate>,
    pub insecure: bool,
}

impl RequestOverrides {
    pub fn apply(self, mut request: RatesRequest) -> RatesRequest {
        if let Some(base) = self.base {
            request = request.base(base);
        }
        if let Some(symbols) = self.symbols {
            request = request.symbols(symbols);
        }
        if let Some(date) = self.date {
            request = request.historical(date);
        }
        if self.insecure {
            request = request.secure(false);
        }
        request
    }
}

impl RateResponse {
    pub fn display_as_table(&self) -> String {
        if self.rates.is_empty() {
            return ui::style_text("No rates returned", ui::StyleType::Subtle);
        }

        let mut table = ui::new_styled_table();
        table.set_header(vec![
            ui::header_cell("Currency"),
            ui::header_cell(&format!("Rate (1 {})", self.base)),
        ]);

        let mut rates: Vec<_> = self.rates.iter().collect();
        rates.sort_by(|a, b| a.0.cmp(b.0));
        for (currency, rate) in rates {
            table.add_row(vec![Cell::new(currency), ui::rate_cell(*rate)]);
        }

        let mut output = format!(
            "Base: {}  Date: {}\n\n",
            ui::style_text(&self.base, ui::StyleType::Title),
            ui::style_text(&self.date, ui::StyleType::Title)
        );
        output.push_str(&table.to_string());
        output
    }
}

pub async fn run(client: &FixerClient, request: &RatesRequest) -> Result<()> {
    if !request.base_currency().is_published() {
        warn!(base = %request.base_currency(), "Base currency is not published by fixer.io");
    }

    let pb = ui::new_spinner("Fetching rates...");
    let result = client.get_response(request).await;
    pb.finish_and_clear();

    println!("{}", result?.display_as_table());
    Ok(())
}
