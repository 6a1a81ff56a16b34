//! Static lookup tables for crypto tickers, logos and trading platforms.

use serde::Serialize;
use std::fmt::Display;

/// Exchange prefix used for crypto quotes.
pub const CRYPTO_EXCHANGE: &str = "BINANCE";

/// Quote currency appended to tickers missing from [`CRYPTO_PAIRS`].
pub const DEFAULT_QUOTE_CURRENCY: &str = "USDT";

/// Quote currencies accepted when listing crypto pairs from upstream.
pub const ACCEPTED_QUOTE_CURRENCIES: &[&str] = &["USDT", "USD", "BUSD", "FDUSD"];

/// Longest base ticker kept from the upstream crypto listing.
pub const MAX_BASE_TICKER_LEN: usize = 6;

pub const CRYPTO_PAIRS: &[(&str, &str)] = &[
    ("BTC", "BTCUSDT"),
    ("ETH", "ETHUSDT"),
    ("ADA", "ADAUSDT"),
    ("DOT", "DOTUSDT"),
    ("XRP", "XRPUSDT"),
    ("LTC", "LTCUSDT"),
    ("BCH", "BCHUSDT"),
    ("LINK", "LINKUSDT"),
    ("BNB", "BNBUSDT"),
    ("SOL", "SOLUSDT"),
    ("MATIC", "MATICUSDT"),
    ("AVAX", "AVAXUSDT"),
    ("ATOM", "ATOMUSDT"),
    ("UNI", "UNIUSDT"),
    ("DOGE", "DOGEUSDT"),
];

/// Curated well-known crypto tickers, alphabetical.
pub const POPULAR_CRYPTOS: &[&str] = &[
    "AAVE", "ADA", "ALGO", "ATOM", "AVAX", "AXS", "BAT", "BCH", "BNB", "BTC", "BUSD", "CAKE",
    "CHZ", "COMP", "CRO", "CRV", "DOGE", "DOT", "EGLD", "ENJ", "EOS", "ETC", "ETH", "FIL", "FTM",
    "GRT", "HBAR", "ICP", "KSM", "LINK", "LTC", "LUNA", "MANA", "MATIC", "MKR", "NEAR", "OMG",
    "ONE", "SAND", "SHIB", "SNX", "SOL", "SUSHI", "TRX", "UNI", "USDC", "USDT", "VET", "XLM",
    "XMR", "XRP", "XTZ", "YFI", "ZEC", "ZIL",
];

/// Tickers with a known logo under the configured logo base URL.
pub const CRYPTO_LOGOS: &[&str] = &[
    "BTC", "ETH", "BNB", "ADA", "SOL", "DOGE", "DOT", "MATIC", "LTC", "LINK", "UNI", "AVAX", "XRP",
    "USDC", "USDT",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformKind {
    Crypto,
    Traditional,
    Both,
}

impl Display for PlatformKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                PlatformKind::Crypto => "crypto",
                PlatformKind::Traditional => "traditional",
                PlatformKind::Both => "both",
            }
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Platform {
    pub id: &'static str,
    pub name: &'static str,
    pub kind: PlatformKind,
}

/// Brokerages and exchanges a holding can be kept on.
pub const PLATFORMS: &[Platform] = &[
    Platform {
        id: "binance",
        name: "Binance",
        kind: PlatformKind::Crypto,
    },
    Platform {
        id: "coinbase",
        name: "Coinbase",
        kind: PlatformKind::Crypto,
    },
    Platform {
        id: "kraken",
        name: "Kraken",
        kind: PlatformKind::Crypto,
    },
    Platform {
        id: "cocos_capital",
        name: "Cocos Capital",
        kind: PlatformKind::Traditional,
    },
    Platform {
        id: "etoro",
        name: "eToro",
        kind: PlatformKind::Both,
    },
    Platform {
        id: "interactive_brokers",
        name: "Interactive Brokers",
        kind: PlatformKind::Traditional,
    },
    Platform {
        id: "td_ameritrade",
        name: "TD Ameritrade",
        kind: PlatformKind::Traditional,
    },
    Platform {
        id: "robinhood",
        name: "Robinhood",
        kind: PlatformKind::Both,
    },
    Platform {
        id: "fidelity",
        name: "Fidelity",
        kind: PlatformKind::Traditional,
    },
    Platform {
        id: "charles_schwab",
        name: "Charles Schwab",
        kind: PlatformKind::Traditional,
    },
    Platform {
        id: "bitso",
        name: "Bitso",
        kind: PlatformKind::Crypto,
    },
    Platform {
        id: "buda",
        name: "Buda.com",
        kind: PlatformKind::Crypto,
    },
    Platform {
        id: "other",
        name: "Other",
        kind: PlatformKind::Both,
    },
];

/// Platform with the given id, ignoring case and surrounding whitespace.
pub fn find_platform(id: &str) -> Option<&'static Platform> {
    let id = id.trim();
    PLATFORMS.iter().find(|p| p.id.eq_ignore_ascii_case(id))
}

/// Strips pair separators and whitespace, then uppercases: `btc/usdt` -> `BTCUSDT`.
pub fn normalize_crypto_symbol(symbol: &str) -> String {
    symbol
        .chars()
        .filter(|c| !matches!(c, '/' | '-' | '_') && !c.is_whitespace())
        .collect::<String>()
        .to_uppercase()
}

/// Upstream quote symbol for a crypto ticker, e.g. `BINANCE:BTCUSDT`.
pub fn crypto_quote_symbol(symbol: &str) -> String {
    let normalized = normalize_crypto_symbol(symbol);
    let pair = CRYPTO_PAIRS
        .iter()
        .find(|(ticker, _)| *ticker == normalized)
        .map(|(_, pair)| pair.to_string())
        .unwrap_or_else(|| format!("{normalized}{DEFAULT_QUOTE_CURRENCY}"));
    format!("{CRYPTO_EXCHANGE}:{pair}")
}

/// Curated tickers containing `query`, case-insensitively, in list order.
pub fn match_popular_cryptos(query: &str) -> Vec<&'static str> {
    let needle = query.trim().to_lowercase();
    POPULAR_CRYPTOS
        .iter()
        .copied()
        .filter(|ticker| ticker.to_lowercase().contains(&needle))
        .collect()
}

/// Logo URL for a crypto ticker, or a placeholder keyed by its first character.
pub fn crypto_logo(symbol: &str, logo_base_url: &str, placeholder_url: &str) -> String {
    let upper = symbol.trim().to_uppercase();
    if CRYPTO_LOGOS.contains(&upper.as_str()) {
        return format!("{}/{}.png", logo_base_url.trim_end_matches('/'), upper);
    }
    let initial = symbol.trim().chars().next().map(String::from).unwrap_or_default();
    format!(
        "{}/32/6366f1/ffffff?text={}",
        placeholder_url.trim_end_matches('/'),
        initial
    )
}

/// Base ticker of an upstream `BASE/QUOTE` pair when it passes the listing filter.
pub fn listed_base_ticker<'a>(display_symbol: &'a str, query: &str) -> Option<&'a str> {
    let (base, quote) = display_symbol.split_once('/')?;
    let accepted = ACCEPTED_QUOTE_CURRENCIES.contains(&quote)
        && base.len() <= MAX_BASE_TICKER_LEN
        && base.to_lowercase().contains(&query.trim().to_lowercase());
    accepted.then_some(base)
}
