pub mod data_logger;
pub mod error;
pub mod market_cap;
pub mod price_calcs;
