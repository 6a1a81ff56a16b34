pub mod cli;
pub mod core;
pub mod providers;
pub mod store;

use crate::core::AssetType;
use crate::core::cache::{QuoteCache, SymbolCache};
use crate::core::config::AppConfig;
use crate::providers::FinnhubProvider;
use crate::store::MemoryCache;
use anyhow::Result;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub enum AppCommand {
    Quote {
        symbols: Vec<String>,
        asset_type: AssetType,
    },
    Search {
        query: String,
        asset_type: AssetType,
    },
    Symbols {
        asset_type: Option<AssetType>,
        exchange: String,
    },
    Profile {
        symbol: String,
        asset_type: AssetType,
    },
    Platforms,
    Holdings,
}

/// Builds the upstream provider with fresh in-memory caches sized by `config.cache`.
pub fn build_provider(config: &AppConfig) -> Result<FinnhubProvider> {
    let quote_cache: Arc<QuoteCache> = Arc::new(MemoryCache::new(config.cache.quote_ttl()));
    let symbol_cache: Arc<SymbolCache> = Arc::new(MemoryCache::new(config.cache.symbol_ttl()));
    FinnhubProvider::new(&config.provider, quote_cache, symbol_cache)
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("quotedesk starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!(
        base_url = %config.provider.base_url,
        holdings = config.holdings.len(),
        "Loaded config"
    );

    if config.provider.api_key.trim().is_empty() {
        warn!("No API key configured, upstream requests will likely be rejected");
    }
    let provider = build_provider(&config)?;

    match command {
        AppCommand::Quote {
            symbols,
            asset_type,
        } => cli::quote::run(&provider, &symbols, asset_type).await,
        AppCommand::Search { query, asset_type } => {
            cli::search::run(&provider, &query, asset_type).await
        }
        AppCommand::Symbols {
            asset_type,
            exchange,
        } => cli::symbols::run(&provider, asset_type, &exchange).await,
        AppCommand::Profile { symbol, asset_type } => {
            cli::profile::run(&provider, &symbol, asset_type).await
        }
        AppCommand::Holdings => cli::holdings::run(&config.holdings, &provider).await,
        AppCommand::Platforms => {
            cli::platforms::run();
            Ok(())
        }
    }
}
