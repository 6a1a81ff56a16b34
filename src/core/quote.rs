//! Quote abstractions and core types

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::future::join_all;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    Stock,
    Crypto,
}

impl Display for AssetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                AssetType::Stock => "stock",
                AssetType::Crypto => "crypto",
            }
        )
    }
}

/// Snapshot of a symbol's price and its change against the previous close.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRecord {
    pub symbol: String,
    pub display_name: String,
    pub price: f64,
    pub absolute_change: f64,
    pub percent_change: f64,
    pub fetched_at: DateTime<Utc>,
}

impl QuoteRecord {
    /// Builds a record from the current price and the previous close.
    ///
    /// The percent change is zero when there is no usable previous close.
    pub fn new(symbol: &str, price: f64, previous_close: f64) -> Self {
        let symbol = symbol.to_uppercase();
        let absolute_change = price - previous_close;
        let percent_change = if previous_close > 0.0 {
            absolute_change / previous_close * 100.0
        } else {
            0.0
        };

        QuoteRecord {
            display_name: symbol.clone(),
            symbol,
            price,
            absolute_change,
            percent_change,
            fetched_at: Utc::now(),
        }
    }
}

/// Key under which a quote is cached, e.g. `crypto:BTC`.
pub fn cache_key(symbol: &str, asset_type: AssetType) -> String {
    format!("{}:{}", asset_type, symbol.trim().to_uppercase())
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuoteError {
    /// Upstream answered but had no usable price for the symbol.
    #[error("No price data found for {symbol}")]
    NotFound { symbol: String },

    /// Transport failure, unsuccessful status or an unreadable payload.
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// Upstream refused the request because of missing or invalid credentials.
    #[error("Upstream rejected credentials: {0}")]
    Unconfigured(String),
}

impl QuoteError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, QuoteError::NotFound { .. })
    }

    pub fn is_upstream(&self) -> bool {
        matches!(self, QuoteError::Upstream(_) | QuoteError::Unconfigured(_))
    }
}

#[async_trait]
pub trait QuoteProvider: Send + Sync {
    async fn fetch_quote(
        &self,
        symbol: &str,
        asset_type: AssetType,
    ) -> Result<QuoteRecord, QuoteError>;

    /// Fetches all quotes concurrently and keeps the successful ones in input order.
    async fn fetch_quotes(&self, requests: &[(String, AssetType)]) -> Vec<QuoteRecord> {
        let futures = requests.iter().map(|(symbol, asset_type)| async move {
            (symbol, self.fetch_quote(symbol, *asset_type).await)
        });

        join_all(futures)
            .await
            .into_iter()
            .filter_map(|(symbol, result)| match result {
                Ok(quote) => Some(quote),
                Err(e) => {
                    warn!(symbol = %symbol, error = %e, "Failed to get price");
                    None
                }
            })
            .collect()
    }
}
