use super::ui;
use crate::core::QuoteProvider;
use crate::core::holding::{Holding, HoldingValuation, PriceSource, value_holding};
use crate::providers::catalog;
use anyhow::Result;
use comfy_table::{Cell, Color};
use futures::future::join_all;
use rust_decimal::Decimal;
use tracing::warn;

pub struct HoldingsSummary {
    pub rows: Vec<(Holding, HoldingValuation)>,
    pub total_invested: Decimal,
    pub total_value: Decimal,
}

impl HoldingsSummary {
    pub fn profit_loss(&self) -> Decimal {
        self.total_value.saturating_sub(self.total_invested)
    }

    pub fn display_as_table(&self) -> String {
        let mut table = ui::new_styled_table();
        table.set_header(vec![
            ui::header_cell("Symbol"),
            ui::header_cell("Type"),
            ui::header_cell("Platform"),
            ui::header_cell("Quantity"),
            ui::header_cell("Purchase"),
            ui::header_cell("Current"),
            ui::header_cell("Invested"),
            ui::header_cell("Value"),
            ui::header_cell("P/L"),
            ui::header_cell("P/L (%)"),
        ]);

        for (holding, valuation) in &self.rows {
            let current = match valuation.price_source {
                PriceSource::Live => ui::number_cell(valuation.current_price.round_dp(2)),
                PriceSource::Purchase => ui::number_cell(format!(
                    "{} ({})",
                    valuation.current_price.round_dp(2),
                    valuation.price_source
                ))
                .fg(Color::DarkGrey),
            };
            let negative = valuation.profit_loss.is_sign_negative();

            table.add_row(vec![
                Cell::new(holding.symbol.to_uppercase()),
                Cell::new(holding.asset_type),
                platform_cell(holding.platform.as_deref()),
                ui::number_cell(holding.quantity.normalize()),
                ui::number_cell(holding.purchase_price.round_dp(2)),
                current,
                ui::number_cell(valuation.total_invested.round_dp(2)),
                ui::number_cell(valuation.current_value.round_dp(2)),
                ui::change_cell(format!("{:+.2}", valuation.profit_loss), negative),
                ui::change_cell(
                    format!("{:+.2}%", valuation.profit_loss_percent),
                    negative,
                ),
            ]);
        }

        let mut output = table.to_string();
        output.push_str(&format!(
            "\n\n{}: {}\n{}: {}\n{}: {}",
            ui::style_text("Total Invested", ui::StyleType::TotalLabel),
            self.total_invested.round_dp(2),
            ui::style_text("Total Value", ui::StyleType::TotalLabel),
            ui::style_text(
                &self.total_value.round_dp(2).to_string(),
                ui::StyleType::TotalValue
            ),
            ui::style_text("Profit/Loss", ui::StyleType::TotalLabel),
            self.profit_loss().round_dp(2),
        ));
        output
    }
}

/// Platform display name; ids missing from the catalog are shown as given, dimmed.
fn platform_cell(platform: Option<&str>) -> Cell {
    match platform {
        None => Cell::new("-"),
        Some(id) => match catalog::find_platform(id) {
            Some(known) => Cell::new(known.name),
            None => Cell::new(id).fg(Color::DarkGrey),
        },
    }
}

/// Values every holding, using the purchase price where no quote is available.
pub async fn value_holdings(
    holdings: &[Holding],
    provider: &dyn QuoteProvider,
) -> HoldingsSummary {
    let pb = ui::new_progress_bar(holdings.len() as u64, "Fetching prices...");
    let futures = holdings.iter().map(|holding| {
        let pb = pb.clone();
        async move {
            let quote = match provider
                .fetch_quote(&holding.symbol, holding.asset_type)
                .await
            {
                Ok(quote) => Some(quote),
                Err(e) => {
                    warn!(symbol = %holding.symbol, error = %e, "Using purchase price");
                    None
                }
            };
            pb.inc(1);
            (holding.clone(), value_holding(holding, quote.as_ref()))
        }
    });
    let rows = join_all(futures).await;
    pb.finish_and_clear();

    let total_invested = rows
        .iter()
        .fold(Decimal::ZERO, |acc, (_, v)| acc.saturating_add(v.total_invested));
    let total_value = rows
        .iter()
        .fold(Decimal::ZERO, |acc, (_, v)| acc.saturating_add(v.current_value));

    HoldingsSummary {
        rows,
        total_invested,
        total_value,
    }
}

pub async fn run(holdings: &[Holding], provider: &dyn QuoteProvider) -> Result<()> {
    if holdings.is_empty() {
        println!("No holdings configured.");
        return Ok(());
    }

    let summary = value_holdings(holdings, provider).await;
    println!("{}", summary.display_as_table());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AssetType, QuoteError, QuoteRecord};
    use async_trait::async_trait;
    use std::str::FromStr;

    struct MockQuoteProvider;

    #[async_trait]
    impl QuoteProvider for MockQuoteProvider {
        async fn fetch_quote(
            &self,
            symbol: &str,
            _asset_type: AssetType,
        ) -> Result<QuoteRecord, QuoteError> {
            match symbol {
                "AAPL" => Ok(QuoteRecord::new(symbol, 200.0, 190.0)),
                _ => Err(QuoteError::Upstream("HTTP error: 503".to_string())),
            }
        }
    }

    fn holding(symbol: &str, asset_type: AssetType, quantity: &str, price: &str) -> Holding {
        Holding {
            symbol: symbol.to_string(),
            asset_type,
            quantity: Decimal::from_str(quantity).unwrap(),
            purchase_price: Decimal::from_str(price).unwrap(),
            platform: None,
        }
    }

    fn on_platform(mut holding: Holding, platform: &str) -> Holding {
        holding.platform = Some(platform.to_string());
        holding
    }

    #[tokio::test]
    async fn test_value_holdings_with_fallback() {
        let holdings = vec![
            holding("AAPL", AssetType::Stock, "10", "150"),
            on_platform(holding("BTC", AssetType::Crypto, "0.5", "30000"), "binance"),
        ];

        let summary = value_holdings(&holdings, &MockQuoteProvider).await;

        assert_eq!(summary.rows.len(), 2);
        assert_eq!(summary.rows[0].1.price_source, PriceSource::Live);
        assert_eq!(summary.rows[1].1.price_source, PriceSource::Purchase);
        assert_eq!(summary.total_invested, Decimal::from(16500));
        assert_eq!(summary.total_value, Decimal::from(17000));
        assert_eq!(summary.profit_loss(), Decimal::from(500));

        let output = summary.display_as_table();
        assert!(output.contains("AAPL"));
        assert!(output.contains("(purchase)"));
        assert!(output.contains("+500.00"));
        assert!(output.contains("Binance"));
    }

    #[tokio::test]
    async fn test_unknown_platform_is_shown_as_given() {
        let holdings = vec![on_platform(
            holding("AAPL", AssetType::Stock, "1", "100"),
            "my_bank",
        )];

        let output = value_holdings(&holdings, &MockQuoteProvider)
            .await
            .display_as_table();

        assert!(output.contains("my_bank"));
    }
}
