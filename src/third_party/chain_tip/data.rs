use serde_json::Value;

use crate::data::shape::{Shape, coerce_height};

/// Height of the chain tip, from a `{"height": N}` body.
pub fn tip_height(payload: &Value) -> Option<u64> {
    let tip = payload.as_object()?;
    coerce_height(Shape::field(tip, "height"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_numeric_height() {
        assert_eq!(tip_height(&json!({"height": 2_500_000, "hash": "00ab"})), Some(2_500_000));
        assert_eq!(tip_height(&json!({"height": -1})), Some(0));
    }

    #[test]
    fn rejects_other_shapes() {
        assert_eq!(tip_height(&json!({"height": "2500000"})), None);
        assert_eq!(tip_height(&json!({"height": false})), None);
        assert_eq!(tip_height(&json!([{"height": 1}])), None);
        assert_eq!(tip_height(&json!(2_500_000)), None);
    }
}
