use std::collections::BTreeMap;
use std::future::Future;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};

use crate::config::{DEFAULT_NAME, DEFAULT_SYMBOL, FetcherConfig};
use crate::third_party::blockchair::data::ChainStats;
use crate::third_party::coinmarketcap::data::{AssetDetail, DetailPayload};

pub const SOURCE_COINMARKETCAP: &str = "coinmarketcap";
pub const SOURCE_BLOCKCHAIR: &str = "blockchair";
pub const SOURCE_CHAIN_TIP: &str = "chain_tip";

/// The document written for the front-end. Absent values serialize as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsRecord {
    pub name: String,
    pub symbol: String,
    pub rank: Option<i64>,
    pub usd_zec: Option<f64>,
    pub btc_zec: Option<f64>,
    pub mbtc_usd: Option<f64>,
    pub market_cap_usd: Option<f64>,
    pub height: Option<u64>,
    pub source: String,
    pub sources: BTreeMap<String, String>,
    #[serde(serialize_with = "serialize_timestamp")]
    pub fetched_at: DateTime<Utc>,
}

fn serialize_timestamp<S: Serializer>(
    at: &DateTime<Utc>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&at.to_rfc3339_opts(SecondsFormat::Micros, false))
}

/// USD value of one thousandth of a BTC.
pub fn milli_btc_price(usd_zec: Option<f64>, btc_zec: Option<f64>) -> Option<f64> {
    let (usd, btc) = (usd_zec?, btc_zec?);
    if btc <= 0.0 {
        return None;
    }
    let usd_per_btc = usd / btc;
    usd_per_btc.is_finite().then_some(usd_per_btc * 0.001)
}

/// Merges the detail payload with the optional chain statistics.
///
/// Chain statistics win over the detail payload for prices, market cap and
/// height. `fallback_height` is only awaited when neither source has a height.
pub async fn build_record<F, Fut>(
    payload: &DetailPayload,
    chain_stats: Option<&ChainStats>,
    config: &FetcherConfig,
    fallback_height: F,
) -> StatsRecord
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Option<u64>>,
{
    let detail = AssetDetail::from_payload(payload);
    let stats = chain_stats.copied().unwrap_or_default();

    let mut sources = BTreeMap::new();
    sources.insert(SOURCE_COINMARKETCAP.to_string(), config.primary_url.clone());
    if let (Some(_), Some(url)) = (chain_stats, &config.stats_url) {
        sources.insert(SOURCE_BLOCKCHAIR.to_string(), url.clone());
    }

    let usd_zec = stats.usd_zec.or(detail.price.usd);
    let btc_zec = stats.btc_zec.or(detail.price.btc);
    let market_cap_usd = stats.market_cap_usd.or(detail.market_cap_usd);

    let height = match stats.height.or(detail.height) {
        Some(height) => Some(height),
        None => {
            let tip = fallback_height().await;
            if tip.is_some() {
                sources.insert(
                    SOURCE_CHAIN_TIP.to_string(),
                    config.fallback_height_url.clone(),
                );
            }
            tip
        }
    };

    StatsRecord {
        name: detail.name.unwrap_or_else(|| DEFAULT_NAME.to_string()),
        symbol: detail.symbol.unwrap_or_else(|| DEFAULT_SYMBOL.to_string()),
        rank: detail.rank,
        usd_zec,
        btc_zec,
        mbtc_usd: milli_btc_price(usd_zec, btc_zec),
        market_cap_usd,
        height,
        source: config.primary_url.clone(),
        sources,
        fetched_at: Utc::now(),
    }
}
