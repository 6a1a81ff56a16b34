use anyhow::Result;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

use crate::core::cache::{QuoteCache, SymbolCache};
use crate::core::config::ProviderConfig;
use crate::core::quote::cache_key;
use crate::core::{
    AssetType, CompanyProfile, ProfileProvider, QuoteError, QuoteProvider, QuoteRecord,
    SymbolDescriptor, SymbolProvider,
};
use crate::providers::catalog::{self, CRYPTO_EXCHANGE};
use crate::providers::util::{build_client, with_retry};

/// Most symbols kept from one exchange listing.
pub const MAX_DIRECTORY_SYMBOLS: usize = 1000;
pub const MAX_LOCAL_CRYPTO_RESULTS: usize = 10;
pub const MAX_UPSTREAM_CRYPTO_RESULTS: usize = 15;

const RETRY_DELAY_MS: u64 = 250;

/// Keeps common stocks with a description and a plain ticker, capped at
/// [`MAX_DIRECTORY_SYMBOLS`], in upstream order.
pub fn filter_common_stocks(symbols: Vec<SymbolDescriptor>) -> Vec<SymbolDescriptor> {
    symbols
        .into_iter()
        .filter(|s| {
            s.asset_type == "Common Stock" && !s.symbol.contains('.') && !s.description.is_empty()
        })
        .take(MAX_DIRECTORY_SYMBOLS)
        .collect()
}

// FinnhubProvider serves quotes, symbol listings and profiles from one upstream
pub struct FinnhubProvider {
    base_url: String,
    api_key: String,
    logo_base_url: String,
    placeholder_logo_url: String,
    retries: usize,
    client: reqwest::Client,
    quote_cache: Arc<QuoteCache>,
    symbol_cache: Arc<SymbolCache>,
}

impl FinnhubProvider {
    pub fn new(
        config: &ProviderConfig,
        quote_cache: Arc<QuoteCache>,
        symbol_cache: Arc<SymbolCache>,
    ) -> Result<Self> {
        let client = build_client(config.timeout())?;
        Ok(FinnhubProvider {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            logo_base_url: config.logo_base_url.clone(),
            placeholder_logo_url: config.placeholder_logo_url.clone(),
            retries: config.retries,
            client,
            quote_cache,
            symbol_cache,
        })
    }

    /// Drops every cached quote and symbol listing.
    pub async fn clear_cache(&self) {
        self.quote_cache.clear().await;
        self.symbol_cache.clear().await;
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<T, QuoteError> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!(?params, "Requesting {}", url);

        let mut query = params.to_vec();
        query.push(("token", self.api_key.as_str()));

        let response = with_retry(
            || self.client.get(&url).query(&query).send(),
            self.retries,
            RETRY_DELAY_MS,
        )
        .await
        .map_err(|e| {
            QuoteError::Upstream(format!("Request error: {} for URL: {url}", e.without_url()))
        })?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(QuoteError::Unconfigured(status.to_string()));
        }
        if !status.is_success() {
            return Err(QuoteError::Upstream(format!(
                "HTTP error: {status} for URL: {url}"
            )));
        }

        let text = response
            .text()
            .await
            .map_err(|e| {
                QuoteError::Upstream(format!(
                    "Failed to read response from {url}: {}",
                    e.without_url()
                ))
            })?;

        serde_json::from_str(&text).map_err(|e| {
            QuoteError::Upstream(format!("Failed to parse JSON response from {url}: {e}"))
        })
    }

    async fn search_crypto(&self, query: &str) -> Vec<SymbolDescriptor> {
        let local = catalog::match_popular_cryptos(query);
        if !local.is_empty() {
            debug!(query, matches = local.len(), "Crypto search served from curated list");
            return local
                .into_iter()
                .take(MAX_LOCAL_CRYPTO_RESULTS)
                .map(SymbolDescriptor::crypto)
                .collect();
        }

        let listing: Vec<CryptoSymbol> = match self
            .get_json("/crypto/symbol", &[("exchange", CRYPTO_EXCHANGE)])
            .await
        {
            Ok(listing) => listing,
            Err(e) => {
                warn!(query, error = %e, "Crypto symbol listing failed");
                return Vec::new();
            }
        };

        // Upstream order is kept as is
        listing
            .iter()
            .filter_map(|pair| {
                let display = pair.display_symbol.as_deref().unwrap_or(&pair.symbol);
                catalog::listed_base_ticker(display, query)
            })
            .take(MAX_UPSTREAM_CRYPTO_RESULTS)
            .map(SymbolDescriptor::crypto)
            .collect()
    }

    async fn search_stocks(&self, query: &str) -> Vec<SymbolDescriptor> {
        match self
            .get_json::<SearchResponse>("/search", &[("q", query)])
            .await
        {
            Ok(response) => response.result,
            Err(e) => {
                warn!(query, error = %e, "Symbol search failed");
                Vec::new()
            }
        }
    }

    fn crypto_profile(&self, symbol: &str) -> CompanyProfile {
        CompanyProfile {
            logo: catalog::crypto_logo(symbol, &self.logo_base_url, &self.placeholder_logo_url),
            name: symbol.trim().to_uppercase(),
            country: "Global".to_string(),
            currency: "USD".to_string(),
            exchange: "Crypto".to_string(),
            industry: "Cryptocurrency".to_string(),
        }
    }
}

#[derive(Deserialize, Debug)]
struct FinnhubQuote {
    /// Current price; zero for symbols upstream does not know
    #[serde(default)]
    c: Option<f64>,
    /// Previous close
    #[serde(default)]
    pc: Option<f64>,
}

#[derive(Deserialize, Debug)]
struct SearchResponse {
    #[serde(default)]
    result: Vec<SymbolDescriptor>,
}

#[derive(Deserialize, Debug)]
struct CryptoSymbol {
    #[serde(default, rename = "displaySymbol")]
    display_symbol: Option<String>,
    #[serde(default)]
    symbol: String,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
struct FinnhubProfile {
    logo: Option<String>,
    name: Option<String>,
    country: Option<String>,
    currency: Option<String>,
    exchange: Option<String>,
    #[serde(rename = "finnhubIndustry")]
    industry: Option<String>,
}

#[async_trait]
impl QuoteProvider for FinnhubProvider {
    #[instrument(
        name = "FinnhubQuoteFetch",
        skip(self),
        fields(symbol = %symbol, asset_type = %asset_type)
    )]
    async fn fetch_quote(
        &self,
        symbol: &str,
        asset_type: AssetType,
    ) -> Result<QuoteRecord, QuoteError> {
        let key = cache_key(symbol, asset_type);
        if let Some(cached) = self.quote_cache.get(&key).await {
            return Ok(cached);
        }

        let symbol = symbol.trim();
        let upstream_symbol = match asset_type {
            AssetType::Stock => symbol.to_uppercase(),
            AssetType::Crypto => catalog::crypto_quote_symbol(symbol),
        };
        debug!("Resolved {} to upstream symbol {}", symbol, upstream_symbol);

        let quote: FinnhubQuote = self
            .get_json("/quote", &[("symbol", upstream_symbol.as_str())])
            .await
            .inspect_err(|e| warn!(error = %e, "Quote request failed"))?;
        debug!(?quote, "Received quote");

        let price = quote
            .c
            .filter(|c| c.is_finite() && *c > 0.0)
            .ok_or_else(|| QuoteError::NotFound {
                symbol: symbol.to_uppercase(),
            })?;

        let record = QuoteRecord::new(symbol, price, quote.pc.unwrap_or(0.0));
        self.quote_cache.put(key, record.clone()).await;

        Ok(record)
    }
}

#[async_trait]
impl SymbolProvider for FinnhubProvider {
    async fn search(&self, query: &str, asset_type: AssetType) -> Vec<SymbolDescriptor> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }

        match asset_type {
            AssetType::Crypto => self.search_crypto(query).await,
            AssetType::Stock => self.search_stocks(query).await,
        }
    }

    async fn available_stocks(&self, exchange: &str) -> Vec<SymbolDescriptor> {
        let exchange = exchange.trim().to_uppercase();
        if let Some(cached) = self.symbol_cache.get(&exchange).await {
            return cached;
        }

        match self
            .get_json::<Vec<SymbolDescriptor>>("/stock/symbol", &[("exchange", exchange.as_str())])
            .await
        {
            Ok(symbols) => {
                let filtered = filter_common_stocks(symbols);
                debug!(exchange = %exchange, count = filtered.len(), "Caching symbol listing");
                self.symbol_cache.put(exchange, filtered.clone()).await;
                filtered
            }
            Err(e) => {
                warn!(exchange = %exchange, error = %e, "Stock symbol listing failed");
                Vec::new()
            }
        }
    }
}

#[async_trait]
impl ProfileProvider for FinnhubProvider {
    async fn get_profile(&self, symbol: &str, asset_type: AssetType) -> Option<CompanyProfile> {
        if asset_type == AssetType::Crypto {
            return Some(self.crypto_profile(symbol));
        }

        let symbol = symbol.trim().to_uppercase();
        let profile: FinnhubProfile = match self
            .get_json("/stock/profile2", &[("symbol", symbol.as_str())])
            .await
        {
            Ok(profile) => profile,
            Err(e) => {
                warn!(symbol = %symbol, error = %e, "Profile request failed");
                return None;
            }
        };

        let logo = profile.logo.filter(|l| !l.is_empty())?;
        let or_unknown = |field: Option<String>| {
            field
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| "Unknown".to_string())
        };

        Some(CompanyProfile {
            logo,
            name: profile
                .name
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| symbol.clone()),
            country: or_unknown(profile.country),
            currency: profile
                .currency
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| "USD".to_string()),
            exchange: or_unknown(profile.exchange),
            industry: or_unknown(profile.industry),
        })
    }
}
