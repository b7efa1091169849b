use anyhow::{Context, Result};
use dotenv::dotenv;
use log::{error, info};

use price_tick_estimator::config::AppConfig;
use price_tick_estimator::utils::data_logger::DataLogger;
use price_tick_estimator::PriceSnapshot;

fn main() -> Result<()> {
    dotenv().ok(); // Load .env file if present
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env()?;
    info!("Price: {}, supply: {}", config.price, config.supply);

    let mut data_logger = DataLogger::new();
    let outcome = PriceSnapshot::new(config.price, config.supply);
    match &outcome {
        Ok(snapshot) => {
            info!("Tick: {}", snapshot.tick);
            info!("Market cap estimate: {}", snapshot.market_cap);
            data_logger.log_estimate(snapshot);
        }
        Err(err) => {
            error!("{}", err);
            data_logger.log_rejected_price(config.price, err.to_string());
        }
    }

    println!("{}", data_logger.to_json()?);
    if let Some(path) = &config.report_path {
        data_logger
            .export_to_json(path)
            .with_context(|| format!("Failed to write report to {}", path))?;
        info!("Report written to {}", path);
    }

    outcome?;
    Ok(())
}
