use super::{search::render_symbols, ui};
use crate::core::{AssetType, SymbolDescriptor, SymbolProvider};
use crate::providers::catalog::POPULAR_CRYPTOS;
use anyhow::Result;

/// Stocks shown when listing one exchange.
pub const STOCK_LISTING_LIMIT: usize = 100;
/// Stocks shown next to the crypto list when no asset type is given.
pub const MIXED_LISTING_STOCK_LIMIT: usize = 50;

pub fn available_cryptos() -> Vec<SymbolDescriptor> {
    POPULAR_CRYPTOS
        .iter()
        .copied()
        .map(SymbolDescriptor::crypto)
        .collect()
}

/// Symbols to offer in a picker: curated cryptos, listed stocks, or both.
pub async fn collect_listing(
    provider: &dyn SymbolProvider,
    asset_type: Option<AssetType>,
    exchange: &str,
) -> Vec<SymbolDescriptor> {
    match asset_type {
        Some(AssetType::Crypto) => available_cryptos(),
        Some(AssetType::Stock) => provider
            .available_stocks(exchange)
            .await
            .into_iter()
            .take(STOCK_LISTING_LIMIT)
            .collect(),
        None => {
            let mut listing = available_cryptos();
            listing.extend(
                provider
                    .available_stocks(exchange)
                    .await
                    .into_iter()
                    .take(MIXED_LISTING_STOCK_LIMIT),
            );
            listing
        }
    }
}

pub async fn run(
    provider: &dyn SymbolProvider,
    asset_type: Option<AssetType>,
    exchange: &str,
) -> Result<()> {
    let listing = collect_listing(provider, asset_type, exchange).await;
    if listing.is_empty() {
        println!(
            "{}",
            ui::style_text(
                &format!("No symbols available for exchange {exchange}"),
                ui::StyleType::Subtle
            )
        );
        return Ok(());
    }

    println!("{}", render_symbols(&listing));
    Ok(())
}
