use rust_decimal::Decimal;
use thiserror::Error;

use crate::pricing::BillingCycle;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("site.json is not valid: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("tier catalog is empty")]
    EmptyCatalog,

    #[error("duplicate tier name: {0}")]
    DuplicateTier(String),

    #[error("tier {tier:?} has a non-positive monthly price ({price})")]
    InvalidPrice { tier: String, price: Decimal },

    #[error("tier {tier:?} price {price} is too large to annualize")]
    PriceTooLarge { tier: String, price: Decimal },

    #[error("annual discount must be within 0..=100, got {0}")]
    DiscountOutOfRange(Decimal),

    #[error("no billing cycles configured")]
    NoBillingCycles,

    #[error("billing cycle listed twice: {0}")]
    DuplicateBillingCycle(BillingCycle),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
