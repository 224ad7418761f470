//! Zcash market stats snapshot
//!
//! Pulls asset detail from CoinMarketCap, enriches it with Blockchair chain
//! statistics and a chain tip height, and writes one JSON file for the site.

pub mod app;
pub mod config;
pub mod data;
pub mod output;
pub mod request;
pub mod third_party;

use crate::app::App;
use crate::output::display_path;
use color_eyre::Result;
use env_logger::Env;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let app = App::new();
    let path = app.run().await?;
    println!("Saved Zcash stats to {}", display_path(&path).display());
    Ok(())
}
