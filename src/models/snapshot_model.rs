use serde::{Deserialize, Serialize};

use crate::utils::error::DomainError;
use crate::utils::market_cap::estimate_market_cap_with_supply;
use crate::utils::price_calcs::price_to_tick;

/// One evaluation of both estimators against the same price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceSnapshot {
    pub price: f64,
    pub tick: i32,
    pub supply: f64,
    pub market_cap: f64,
}

impl PriceSnapshot {
    pub fn new(price: f64, supply: f64) -> Result<Self, DomainError> {
        Ok(Self {
            price,
            tick: price_to_tick(price)?,
            supply,
            market_cap: estimate_market_cap_with_supply(price, supply),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::market_cap::DEFAULT_SUPPLY;

    #[test]
    fn test_snapshot_from_default_inputs() {
        let snapshot = PriceSnapshot::new(0.01, DEFAULT_SUPPLY).unwrap();
        assert_eq!(snapshot.tick, -46054);
        assert_eq!(snapshot.market_cap, 10_000_000.0);
        assert_eq!(snapshot.supply, DEFAULT_SUPPLY);
    }

    #[test]
    fn test_snapshot_rejects_invalid_price() {
        assert_eq!(
            PriceSnapshot::new(-5.0, DEFAULT_SUPPLY),
            Err(DomainError(-5.0))
        );
    }

    #[test]
    fn test_snapshot_serializes_to_json() {
        let snapshot = PriceSnapshot::new(1.0, 10.0).unwrap();
        let json = serde_json::to_value(snapshot).unwrap();
        assert_eq!(json["tick"], 0);
        assert_eq!(json["market_cap"], 10.0);

        let parsed: PriceSnapshot = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, snapshot);
    }
}
