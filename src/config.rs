use anyhow::{anyhow, Context, Result};
use std::env;

use crate::utils::market_cap::DEFAULT_SUPPLY;

pub const DEFAULT_PRICE: f64 = 0.01;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub price: f64,
    pub supply: f64,
    pub report_path: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let price = match lookup("PRICE") {
            Some(raw) => raw.trim().parse().context("Failed to parse PRICE")?,
            None => DEFAULT_PRICE,
        };
        let supply: f64 = match lookup("SUPPLY") {
            Some(raw) => raw.trim().parse().context("Failed to parse SUPPLY")?,
            None => DEFAULT_SUPPLY,
        };
        if !supply.is_finite() {
            return Err(anyhow!("Invalid SUPPLY: {}", supply));
        }

        Ok(Self {
            price,
            supply,
            report_path: lookup("REPORT_PATH").filter(|path| !path.trim().is_empty()),
        })
    }
}
