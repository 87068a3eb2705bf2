//! Error types for the mining economy.

use thiserror::Error;

/// Reasons a player action is rejected. The state is left untouched apart from the
/// event log line describing the rejection.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ActionError {
    /// Balance does not cover the tier price.
    #[error("not enough coins: need {price}, have {balance}")]
    InsufficientFunds {
        /// Price of the requested tier.
        price: u32,
        /// Balance at the time of the attempt.
        balance: f64,
    },

    /// Tiers can only be bought upwards; repurchase and downgrade are refused.
    #[error("tier {index} is not above the current tier {current}")]
    TierNotAbove { index: usize, current: usize },

    #[error("no tier at index {0}")]
    UnknownTier(usize),

    /// Liquidation found no ore worth anything.
    #[error("nothing to sell")]
    NothingToSell,

    /// Liquidation is unavailable when ore already pays out on mining.
    #[error("selling is disabled under the mine-to-earn policy")]
    SellingDisabled,
}

/// Problems with a static ore catalog.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("ore catalog is empty")]
    Empty,

    #[error("ore {0} has a negative or non-finite drop chance")]
    InvalidChance(&'static str),

    #[error("ore chances sum to {0}, expected a positive total")]
    NoWeight(f64),
}
