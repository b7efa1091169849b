/// Fixed token supply used for the quick market cap estimate.
pub const DEFAULT_SUPPLY: f64 = 1_000_000_000.0;

/// Naive valuation: supply times price, no circulating supply adjustment.
pub fn estimate_market_cap(price: f64) -> f64 {
    estimate_market_cap_with_supply(price, DEFAULT_SUPPLY)
}

pub fn estimate_market_cap_with_supply(price: f64, supply: f64) -> f64 {
    supply * price
}
