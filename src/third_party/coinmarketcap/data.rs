use serde_json::{Map, Value};

use crate::data::shape::{
    Shape, coerce_height, coerce_integer, coerce_number, first_filled, object_or_empty,
};

/// Decoded body of the detail endpoint, already checked to be a JSON object.
pub type DetailPayload = Map<String, Value>;

/// USD and BTC quotes as reported by the detail endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PriceQuote {
    pub usd: Option<f64>,
    pub btc: Option<f64>,
}

/// Fields of the detail payload the record is built from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssetDetail {
    pub name: Option<String>,
    pub symbol: Option<String>,
    pub rank: Option<i64>,
    pub price: PriceQuote,
    pub market_cap_usd: Option<f64>,
    pub height: Option<u64>,
}

impl AssetDetail {
    pub fn from_payload(payload: &DetailPayload) -> Self {
        let empty = Map::new();
        let data = object_or_empty(payload.get("data"), &empty);
        let statistics = object_or_empty(data.get("statistics"), &empty);

        Self {
            name: non_empty_text(data, "name"),
            symbol: non_empty_text(data, "symbol"),
            rank: extract_rank(payload),
            price: parse_price(statistics),
            market_cap_usd: parse_market_cap(statistics),
            height: parse_height(statistics),
        }
    }
}

fn non_empty_text(map: &Map<String, Value>, key: &str) -> Option<String> {
    Shape::field(map, key)
        .as_text()
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Rank from `data.rank`, else `data.statistics.rank`, else
/// `data.statistics.marketPairs.rank`. The first candidate that is present
/// decides; it has to be an integral number.
pub fn extract_rank(payload: &DetailPayload) -> Option<i64> {
    let empty = Map::new();
    let data = object_or_empty(payload.get("data"), &empty);
    let statistics = object_or_empty(data.get("statistics"), &empty);
    let market_pairs = object_or_empty(statistics.get("marketPairs"), &empty);

    let candidate = [
        Shape::field(data, "rank"),
        Shape::field(statistics, "rank"),
        Shape::field(market_pairs, "rank"),
    ]
    .into_iter()
    .find(Shape::is_present)?;
    coerce_integer(candidate)
}

pub fn parse_price(statistics: &Map<String, Value>) -> PriceQuote {
    match Shape::field(statistics, "price") {
        Shape::Object(quote) => PriceQuote {
            usd: coerce_number(first_filled(quote, &["current", "usd"])),
            btc: coerce_number(Shape::field(quote, "btc")),
        },
        bare @ Shape::Number(_) => PriceQuote {
            usd: coerce_number(bare),
            btc: None,
        },
        _ => PriceQuote::default(),
    }
}

pub fn parse_market_cap(statistics: &Map<String, Value>) -> Option<f64> {
    match Shape::field(statistics, "marketCap") {
        Shape::Object(cap) => coerce_number(first_filled(
            cap,
            &["current", "marketCap", "usd", "value"],
        )),
        bare @ Shape::Number(_) => coerce_number(bare),
        _ => None,
    }
}

pub fn parse_height(statistics: &Map<String, Value>) -> Option<u64> {
    coerce_height(first_filled(statistics, &["blockHeight", "height", "blocks"]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn rank_prefers_top_level_value() {
        let payload = object(json!({
            "data": {"rank": 5, "statistics": {"rank": 10}}
        }));
        assert_eq!(extract_rank(&payload), Some(5));
    }

    #[test]
    fn rank_falls_through_to_nested_candidates() {
        let payload = object(json!({
            "data": {"rank": null, "statistics": {"rank": 10}}
        }));
        assert_eq!(extract_rank(&payload), Some(10));

        let payload = object(json!({
            "data": {"statistics": {"marketPairs": {"rank": 77}}}
        }));
        assert_eq!(extract_rank(&payload), Some(77));

        let payload = object(json!({"data": "unexpected"}));
        assert_eq!(extract_rank(&payload), None);
    }

    #[test]
    fn price_object_reads_current_then_usd() {
        let stats = object(json!({"price": {"current": "45.5", "btc": 0.002}}));
        assert_eq!(
            parse_price(&stats),
            PriceQuote {
                usd: Some(45.5),
                btc: Some(0.002)
            }
        );

        let stats = object(json!({"price": {"usd": 30, "btc": "bad"}}));
        assert_eq!(
            parse_price(&stats),
            PriceQuote {
                usd: Some(30.0),
                btc: None
            }
        );
    }

    #[test]
    fn bare_price_is_usd_only() {
        let stats = object(json!({"price": 44.1}));
        assert_eq!(
            parse_price(&stats),
            PriceQuote {
                usd: Some(44.1),
                btc: None
            }
        );

        let stats = object(json!({"price": "44.1"}));
        assert_eq!(parse_price(&stats), PriceQuote::default());

        let stats = object(json!({"price": true}));
        assert_eq!(parse_price(&stats), PriceQuote::default());
    }

    #[test]
    fn market_cap_checks_candidates_in_order() {
        let stats = object(json!({"marketCap": {"marketCap": 1.0, "usd": 2.0}}));
        assert_eq!(parse_market_cap(&stats), Some(1.0));

        let stats = object(json!({"marketCap": {"value": "3.5e8"}}));
        assert_eq!(parse_market_cap(&stats), Some(3.5e8));

        let stats = object(json!({"marketCap": 600000000}));
        assert_eq!(parse_market_cap(&stats), Some(6.0e8));

        let stats = object(json!({"marketCap": "600000000"}));
        assert_eq!(parse_market_cap(&stats), None);
    }

    #[test]
    fn height_is_clamped_and_numeric_only() {
        assert_eq!(parse_height(&object(json!({"height": -5}))), Some(0));
        assert_eq!(parse_height(&object(json!({"height": "100"}))), None);
        assert_eq!(
            parse_height(&object(json!({"blockHeight": null, "blocks": 2_400_000}))),
            Some(2_400_000)
        );
        assert_eq!(parse_height(&object(json!({}))), None);
    }

    #[test]
    fn zero_candidates_fall_through_to_later_keys() {
        let stats = object(json!({
            "blockHeight": 0,
            "height": 2_500_000,
            "price": {"current": 0, "usd": 45.5},
            "marketCap": {"current": 0, "usd": "7.4e8"}
        }));
        assert_eq!(parse_height(&stats), Some(2_500_000));
        assert_eq!(parse_price(&stats).usd, Some(45.5));
        assert_eq!(parse_market_cap(&stats), Some(7.4e8));

        let stats = object(json!({"blocks": 0, "price": {"usd": 0}}));
        assert_eq!(parse_height(&stats), Some(0));
        assert_eq!(parse_price(&stats).usd, Some(0.0));

        let stats = object(json!({"height": 0, "price": {"current": 0}}));
        assert_eq!(parse_height(&stats), None);
        assert_eq!(parse_price(&stats).usd, None);
    }

    #[test]
    fn detail_defaults_when_data_is_missing() {
        let detail = AssetDetail::from_payload(&object(json!({"status": {}})));
        assert_eq!(detail, AssetDetail::default());
    }

    #[test]
    fn detail_collects_every_field() {
        let payload = object(json!({
            "data": {
                "name": "Zcash",
                "symbol": "ZEC",
                "statistics": {
                    "rank": 60,
                    "price": {"current": 41.25, "btc": 0.00065},
                    "marketCap": {"current": 6.7e8},
                    "blockHeight": 2_712_345
                }
            }
        }));
        let detail = AssetDetail::from_payload(&payload);
        assert_eq!(detail.name.as_deref(), Some("Zcash"));
        assert_eq!(detail.symbol.as_deref(), Some("ZEC"));
        assert_eq!(detail.rank, Some(60));
        assert_eq!(detail.price.usd, Some(41.25));
        assert_eq!(detail.price.btc, Some(0.00065));
        assert_eq!(detail.market_cap_usd, Some(6.7e8));
        assert_eq!(detail.height, Some(2_712_345));
    }
}
