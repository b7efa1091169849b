use log::{debug, warn};

use super::error::DomainError;

/// Price ratio between two adjacent ticks.
pub const TICK_BASE: f64 = 1.0001;

// ln(f64::MAX) / ln(1.0001) is about 7.1e6, so every finite positive price lands well
// inside i32.
pub fn price_to_tick(price: f64) -> Result<i32, DomainError> {
    if !price.is_finite() || price <= 0.0 {
        warn!("Rejecting price {} for tick conversion", price);
        return Err(DomainError(price));
    }

    let numerator = price.ln();
    let denominator = TICK_BASE.ln();

    // f64::round breaks .5 ties away from zero.
    let tick = (numerator / denominator).round() as i32;
    debug!("price {} -> tick {}", price, tick);

    Ok(tick)
}

/// Converts a human readable price into raw token units before taking the tick,
/// `decimal_diff` being the token decimals difference of the pair.
pub fn price_to_tick_with_decimals(price: f64, decimal_diff: i16) -> Result<i32, DomainError> {
    price_to_tick(price / 10_f64.powi(decimal_diff as i32))
}

pub fn tick_to_price(tick: i32) -> f64 {
    TICK_BASE.powi(tick)
}
