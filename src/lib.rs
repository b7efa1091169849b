pub mod config;
pub mod models;
pub mod utils;

pub use models::snapshot_model::PriceSnapshot;
pub use utils::error::DomainError;
pub use utils::market_cap::{
    estimate_market_cap, estimate_market_cap_with_supply, DEFAULT_SUPPLY,
};
pub use utils::price_calcs::{price_to_tick, price_to_tick_with_decimals, tick_to_price};
