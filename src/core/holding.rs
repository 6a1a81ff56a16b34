//! Valuation of a position against its latest quote

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

use crate::core::{AssetType, QuoteRecord};

/// Bound applied to the profit/loss percentage in both directions.
pub const MAX_PROFIT_LOSS_PERCENT: Decimal = Decimal::from_parts(999, 0, 0, false, 0);

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Holding {
    pub symbol: String,
    #[serde(rename = "type")]
    pub asset_type: AssetType,
    pub quantity: Decimal,
    pub purchase_price: Decimal,
    #[serde(default)]
    pub platform: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceSource {
    Live,
    Purchase,
}

impl Display for PriceSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                PriceSource::Live => "live",
                PriceSource::Purchase => "purchase",
            }
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HoldingValuation {
    pub current_price: Decimal,
    pub price_source: PriceSource,
    pub total_invested: Decimal,
    pub current_value: Decimal,
    pub profit_loss: Decimal,
    pub profit_loss_percent: Decimal,
}

/// Values `holding` at the quoted price, falling back to its purchase price
/// when there is no quote or the quoted price cannot be represented.
///
/// Amounts saturate at the `Decimal` range instead of overflowing.
pub fn value_holding(holding: &Holding, quote: Option<&QuoteRecord>) -> HoldingValuation {
    let live_price = quote
        .filter(|q| q.price > 0.0)
        .and_then(|q| Decimal::from_f64(q.price));

    let (current_price, price_source) = match live_price {
        Some(price) => (price, PriceSource::Live),
        None => (holding.purchase_price, PriceSource::Purchase),
    };

    let total_invested = holding.quantity.saturating_mul(holding.purchase_price);
    let current_value = holding.quantity.saturating_mul(current_price);
    let profit_loss = current_value.saturating_sub(total_invested);
    let profit_loss_percent = if total_invested > Decimal::ZERO {
        profit_loss
            .checked_div(total_invested)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
            .unwrap_or(if profit_loss.is_sign_negative() {
                -MAX_PROFIT_LOSS_PERCENT
            } else {
                MAX_PROFIT_LOSS_PERCENT
            })
            .clamp(-MAX_PROFIT_LOSS_PERCENT, MAX_PROFIT_LOSS_PERCENT)
    } else {
        Decimal::ZERO
    };

    HoldingValuation {
        current_price,
        price_source,
        total_invested,
        current_value,
        profit_loss,
        profit_loss_percent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn holding(quantity: &str, purchase_price: &str) -> Holding {
        Holding {
            symbol: "AAPL".to_string(),
            asset_type: AssetType::Stock,
            quantity: dec(quantity),
            purchase_price: dec(purchase_price),
            platform: None,
        }
    }

    #[test]
    fn test_value_with_live_quote() {
        let quote = QuoteRecord::new("AAPL", 200.0, 190.0);
        let valuation = value_holding(&holding("10", "150"), Some(&quote));

        assert_eq!(valuation.price_source, PriceSource::Live);
        assert_eq!(valuation.current_price, dec("200"));
        assert_eq!(valuation.total_invested, dec("1500"));
        assert_eq!(valuation.current_value, dec("2000"));
        assert_eq!(valuation.profit_loss, dec("500"));
        assert_eq!(valuation.profit_loss_percent.round_dp(4), dec("33.3333"));
    }

    #[test]
    fn test_value_falls_back_to_purchase_price() {
        let valuation = value_holding(&holding("2.5", "40"), None);

        assert_eq!(valuation.price_source, PriceSource::Purchase);
        assert_eq!(valuation.current_price, dec("40"));
        assert_eq!(valuation.current_value, valuation.total_invested);
        assert_eq!(valuation.profit_loss, Decimal::ZERO);
        assert_eq!(valuation.profit_loss_percent, Decimal::ZERO);
    }

    #[test]
    fn test_zero_price_quote_is_ignored() {
        let quote = QuoteRecord::new("AAPL", 0.0, 150.0);
        let valuation = value_holding(&holding("1", "150"), Some(&quote));

        assert_eq!(valuation.price_source, PriceSource::Purchase);
        assert_eq!(valuation.current_price, dec("150"));
    }

    #[test]
    fn test_percent_is_clamped() {
        let quote = QuoteRecord::new("AAPL", 1000.0, 900.0);
        let valuation = value_holding(&holding("1", "0.01"), Some(&quote));

        assert_eq!(valuation.profit_loss_percent, MAX_PROFIT_LOSS_PERCENT);
    }

    #[test]
    fn test_tiny_purchase_price_saturates_percent() {
        let quote = QuoteRecord::new("AAPL", 100000.0, 90000.0);
        let valuation = value_holding(
            &holding("1", "0.0000000000000000000000000001"),
            Some(&quote),
        );

        assert_eq!(valuation.price_source, PriceSource::Live);
        assert_eq!(valuation.current_value, dec("100000"));
        assert_eq!(valuation.profit_loss_percent, MAX_PROFIT_LOSS_PERCENT);
    }

    #[test]
    fn test_huge_quantity_saturates_value() {
        let quote = QuoteRecord::new("AAPL", 100000.0, 90000.0);
        let valuation = value_holding(&holding("10000000000000000000000000", "1"), Some(&quote));

        assert_eq!(valuation.current_value, Decimal::MAX);
        assert!(valuation.profit_loss > Decimal::ZERO);
        assert_eq!(valuation.profit_loss_percent, MAX_PROFIT_LOSS_PERCENT);
    }

    #[test]
    fn test_zero_investment_has_zero_percent() {
        let quote = QuoteRecord::new("AAPL", 10.0, 9.0);
        let valuation = value_holding(&holding("3", "0"), Some(&quote));

        assert_eq!(valuation.total_invested, Decimal::ZERO);
        assert_eq!(valuation.current_value, dec("30"));
        assert_eq!(valuation.profit_loss_percent, Decimal::ZERO);
    }
}
