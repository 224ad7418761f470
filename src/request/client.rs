use log::{debug, warn};
use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use thiserror::Error;

use crate::config::{FetcherConfig, JSON_ACCEPT, PRIMARY_ACCEPT};
use crate::third_party::blockchair::data::ChainStats;
use crate::third_party::chain_tip::data::tip_height;
use crate::third_party::coinmarketcap::data::DetailPayload;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to reach {url}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("unexpected status code {status} from {url}")]
    Status { url: String, status: StatusCode },
    #[error("invalid JSON response from {url}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("response from {url} is not a JSON object")]
    NotAnObject { url: String },
}

/// One HTTP client per run, shared by every request the run makes.
#[derive(Debug, Clone)]
pub struct StatsClient {
    http: Client,
    config: FetcherConfig,
}

impl StatsClient {
    pub fn new(config: FetcherConfig) -> Result<Self, reqwest::Error> {
        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &FetcherConfig {
        &self.config
    }

    async fn get_json(&self, url: &str, accept: &str) -> Result<Value, FetchError> {
        let network = |source: reqwest::Error| FetchError::Network {
            url: url.to_string(),
            source,
        };

        let response = self
            .http
            .get(url)
            .header(ACCEPT, accept)
            .send()
            .await
            .map_err(network)?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }
        let body = response.text().await.map_err(network)?;
        serde_json::from_str(&body).map_err(|source| FetchError::Decode {
            url: url.to_string(),
            source,
        })
    }

    /// The market detail payload. Every failure here is fatal for the run.
    pub async fn fetch_primary(&self) -> Result<DetailPayload, FetchError> {
        let url = &self.config.primary_url;
        match self.get_json(url, PRIMARY_ACCEPT).await? {
            Value::Object(payload) => Ok(payload),
            _ => Err(FetchError::NotAnObject { url: url.clone() }),
        }
    }

    /// Chain statistics enrichment, `None` when disabled or unavailable.
    pub async fn fetch_chain_stats(&self) -> Option<ChainStats> {
        let url = self.config.stats_url.as_deref()?;
        let stats = match self.get_json(url, JSON_ACCEPT).await {
            Ok(Value::Object(payload)) => ChainStats::from_payload(&payload),
            Ok(_) => None,
            Err(err) => {
                debug!("chain stats request failed: {err:?}");
                None
            }
        };
        if stats.is_none() {
            warn!("Blockchair stats unavailable; falling back to CoinMarketCap-only data");
        }
        stats
    }

    /// Best-effort chain tip height; failures only show up in debug logs.
    pub async fn fetch_fallback_height(&self) -> Option<u64> {
        let url = &self.config.fallback_height_url;
        match self.get_json(url, JSON_ACCEPT).await {
            Ok(payload) => tip_height(&payload),
            Err(err) => {
                debug!("fallback height unavailable: {err:?}");
                None
            }
        }
    }
}
