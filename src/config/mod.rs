use std::path::PathBuf;
use std::time::Duration;

use crate::third_party::blockchair::api_path::BLOCKCHAIR_STATS_API;
use crate::third_party::chain_tip::api_path::CHAIN_TIP_API;
use crate::third_party::coinmarketcap::api_path::CMC_DETAIL_API;

pub const REQUEST_TIMEOUT_SECS: u64 = 10;
pub const USER_AGENT: &str = "zcash-radio-scripts/1.0";
pub const PRIMARY_ACCEPT: &str = "application/json, text/plain, */*";
pub const JSON_ACCEPT: &str = "application/json";
pub const OUTPUT_PATH: &str = "public/data/zec-stats.json";

pub const DEFAULT_NAME: &str = "Zcash";
pub const DEFAULT_SYMBOL: &str = "ZEC";

/// Everything a run needs to know about the outside world.
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    pub primary_url: String,
    /// Chain statistics enrichment; `None` skips the request entirely.
    pub stats_url: Option<String>,
    pub fallback_height_url: String,
    pub timeout: Duration,
    pub user_agent: String,
    pub output_path: PathBuf,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            primary_url: CMC_DETAIL_API.to_string(),
            stats_url: Some(BLOCKCHAIR_STATS_API.to_string()),
            fallback_height_url: CHAIN_TIP_API.to_string(),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            user_agent: USER_AGENT.to_string(),
            output_path: PathBuf::from(OUTPUT_PATH),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_points_at_public_endpoints() {
        let config = FetcherConfig::default();
        assert_eq!(
            config.primary_url,
            "https://api.coinmarketcap.com/data-api/v3/cryptocurrency/detail?id=1437"
        );
        assert_eq!(
            config.stats_url.as_deref(),
            Some("https://api.blockchair.com/zcash/stats")
        );
        assert_eq!(
            config.fallback_height_url,
            "https://zcash.blockchain.saltlending.com/blocks/tip"
        );
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.output_path, PathBuf::from("public/data/zec-stats.json"));
    }
}
