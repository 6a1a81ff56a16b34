//! Symbol directory and search abstractions

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::core::AssetType;

/// Identifies a tradable instrument as returned by listing or search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolDescriptor {
    #[serde(default)]
    pub symbol: String,
    #[serde(default, rename = "displaySymbol")]
    pub display_symbol: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, rename = "type")]
    pub asset_type: String,
}

impl SymbolDescriptor {
    pub fn crypto(ticker: &str) -> Self {
        SymbolDescriptor {
            symbol: ticker.to_string(),
            display_symbol: ticker.to_string(),
            description: format!("{ticker} (Cryptocurrency)"),
            asset_type: "crypto".to_string(),
        }
    }
}

#[async_trait]
pub trait SymbolProvider: Send + Sync {
    /// Symbols matching `query`. Empty on blank queries or upstream failure.
    async fn search(&self, query: &str, asset_type: AssetType) -> Vec<SymbolDescriptor>;

    /// Common stocks listed on `exchange`, in upstream order.
    async fn available_stocks(&self, exchange: &str) -> Vec<SymbolDescriptor>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_wire_names() {
        let json = r#"{"description":"APPLE INC","displaySymbol":"AAPL","symbol":"AAPL","type":"Common Stock"}"#;
        let descriptor: SymbolDescriptor = serde_json::from_str(json).unwrap();

        assert_eq!(descriptor.display_symbol, "AAPL");
        assert_eq!(descriptor.asset_type, "Common Stock");
        assert_eq!(descriptor.description, "APPLE INC");
    }

    #[test]
    fn test_crypto_descriptor() {
        let descriptor = SymbolDescriptor::crypto("SOL");

        assert_eq!(descriptor.symbol, "SOL");
        assert_eq!(descriptor.display_symbol, "SOL");
        assert_eq!(descriptor.description, "SOL (Cryptocurrency)");
        assert_eq!(descriptor.asset_type, "crypto");
    }
}
