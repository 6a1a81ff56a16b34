use super::ui;
use crate::core::{AssetType, QuoteProvider, QuoteRecord};
use anyhow::{Result, bail};
use comfy_table::Cell;

pub fn render_quotes(quotes: &[QuoteRecord]) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Symbol"),
        ui::header_cell("Price"),
        ui::header_cell("Change"),
        ui::header_cell("Change (%)"),
        ui::header_cell("Fetched"),
    ]);

    for quote in quotes {
        let negative = quote.absolute_change < 0.0;
        table.add_row(vec![
            Cell::new(&quote.display_name),
            ui::number_cell(format!("{:.2}", quote.price)),
            ui::change_cell(format!("{:+.2}", quote.absolute_change), negative),
            ui::change_cell(format!("{:+.2}%", quote.percent_change), negative),
            Cell::new(quote.fetched_at.format("%Y-%m-%d %H:%M:%S UTC")),
        ]);
    }

    table.to_string()
}

/// Symbols from `requested` with no matching quote, uppercased.
pub fn missing_symbols(requested: &[String], quotes: &[QuoteRecord]) -> Vec<String> {
    requested
        .iter()
        .map(|s| s.trim().to_uppercase())
        .filter(|s| !quotes.iter().any(|q| &q.symbol == s))
        .collect()
}

pub async fn run(
    provider: &dyn QuoteProvider,
    symbols: &[String],
    asset_type: AssetType,
) -> Result<()> {
    if let [symbol] = symbols {
        let quote = provider.fetch_quote(symbol, asset_type).await?;
        println!("{}", render_quotes(std::slice::from_ref(&quote)));
        return Ok(());
    }

    let requests: Vec<_> = symbols.iter().map(|s| (s.clone(), asset_type)).collect();
    let pb = ui::new_spinner("Fetching quotes...");
    let quotes = provider.fetch_quotes(&requests).await;
    pb.finish_and_clear();

    let missing = missing_symbols(symbols, &quotes);
    if quotes.is_empty() {
        bail!("No quotes available for {}", missing.join(", "));
    }

    println!("{}", render_quotes(&quotes));
    if !missing.is_empty() {
        println!(
            "\n{}",
            ui::style_text(
                &format!("Unavailable: {}", missing.join(", ")),
                ui::StyleType::Error
            )
        );
    }
    Ok(())
}
