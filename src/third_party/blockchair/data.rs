use serde_json::{Map, Value};

use crate::data::shape::{
    Shape, coerce_height, coerce_number, first_filled, first_present,
};

/// Chain statistics reported by the Blockchair `stats` endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ChainStats {
    pub height: Option<u64>,
    pub usd_zec: Option<f64>,
    pub btc_zec: Option<f64>,
    pub market_cap_usd: Option<f64>,
}

impl ChainStats {
    /// `None` when the payload has no `data` object.
    pub fn from_payload(payload: &Map<String, Value>) -> Option<Self> {
        let data = Shape::field(payload, "data").as_object()?;

        Some(Self {
            height: coerce_height(first_filled(data, &["best_block_height", "blocks"])),
            usd_zec: coerce_number(Shape::field(data, "market_price_usd")),
            btc_zec: coerce_number(Shape::field(data, "market_price_btc")),
            market_cap_usd: coerce_number(first_present(data, &["market_cap", "market_cap_usd"])),
        })
    }
}
