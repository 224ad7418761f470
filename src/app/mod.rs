use crate::config::FetcherConfig;
use crate::data::build_record;
use crate::output::persist;
use crate::request::StatsClient;
use color_eyre::Result;
use color_eyre::eyre::WrapErr;
use log::info;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct App {
    config: FetcherConfig,
}

impl App {
    pub fn new() -> Self {
        Self::with_config(FetcherConfig::default())
    }

    pub fn with_config(config: FetcherConfig) -> Self {
        Self { config }
    }

    /// Fetch, merge and write the stats file, returning where it was written.
    ///
    /// Nothing is written unless the primary fetch succeeds.
    pub async fn run(&self) -> Result<PathBuf> {
        let client =
            StatsClient::new(self.config.clone()).wrap_err("failed to build HTTP client")?;

        info!("Fetching asset detail from {}", self.config.primary_url);
        let payload = client
            .fetch_primary()
            .await
            .wrap_err("failed to fetch CoinMarketCap detail")?;

        let chain_stats = client.fetch_chain_stats().await;
        let record = build_record(&payload, chain_stats.as_ref(), client.config(), || {
            info!("No block height in market data, asking the chain tip endpoint");
            client.fetch_fallback_height()
        })
        .await;
        info!(
            "Built stats: usd_zec={:?} btc_zec={:?} height={:?}",
            record.usd_zec, record.btc_zec, record.height
        );

        let path = self.config.output_path.clone();
        persist(&record, &path).wrap_err("failed to write stats file")?;
        Ok(path)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
