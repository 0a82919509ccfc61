//! Universal parameters for requesting bar data from a provider.

use serde::{Deserialize, Serialize};

use crate::models::interval::Interval;

/// Vendor-agnostic parameters for a single bars request.
///
/// Providers translate these into their own query parameters; validation
/// of allowed values (e.g. maximum `limit`) is performed by each provider
/// according to its API rules.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BarsRequest {
    /// The symbol to request (e.g., "BTCUSDT").
    pub symbol: String,

    /// The time interval for each bar.
    pub interval: Interval,

    /// How many of the most recent bars to return.
    pub limit: u32,
}
