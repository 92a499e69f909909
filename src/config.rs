use ccsm::{CardPolicy, Result};

use std::env;

use log::LevelFilter;
use simple_logger::SimpleLogger;

use thiserror::Error;

pub const MAX_UNPAID_TRANSACTIONS_VAR: &str = "CCSM_MAX_UNPAID_TRANSACTIONS";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} must be a positive integer, found: {1:?}")]
    InvalidMaxUnpaidTransactions(&'static str, String),
}

#[derive(Debug, Clone, Copy)]
pub struct AppConfig {
    pub policy: CardPolicy,
}

pub fn configure_app() -> Result<AppConfig> {
    SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .env()
        .init()?;

    let policy = match env::var(MAX_UNPAID_TRANSACTIONS_VAR) {
        Ok(value) => CardPolicy::new(parse_max_unpaid_transactions(&value)?),
        Err(_) => CardPolicy::default(),
    };

    return Ok(AppConfig { policy });
}

fn parse_max_unpaid_transactions(value: &str) -> Result<usize> {
    let invalid =
        || ConfigError::InvalidMaxUnpaidTransactions(MAX_UNPAID_TRANSACTIONS_VAR, value.to_string());

    let max: usize = value.trim().parse().map_err(|_| invalid())?;

    if max == 0 {
        Err(invalid())?
    }

    return Ok(max);
}
