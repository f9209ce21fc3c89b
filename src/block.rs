use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One block exactly as the explorer API returned it.
///
/// The store never inspects or validates the payload; it is kept as raw JSON
/// so that re-serialising gives back the server's object untouched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Block(Value);

impl Block {
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    // the API has served both a flat block and a `{ header, txs }` block,
    // so look at the top level first and then inside `header`
    fn field(&self, name: &str) -> Option<&Value> {
        self.0
            .get(name)
            .or_else(|| self.0.get("header").and_then(|h| h.get(name)))
    }

    /// Height of the block, if the payload carries one.
    pub fn height(&self) -> Option<u64> {
        self.field("height").and_then(Value::as_u64)
    }

    /// Hex hash of the block, if the payload carries one.
    pub fn hash(&self) -> Option<&str> {
        self.field("hash").and_then(Value::as_str)
    }
}

impl From<Value> for Block {
    fn from(raw: Value) -> Self {
        Block(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_flat_block_fields() {
        let blk = Block::from(json!({ "hash": "00ab", "height": 7, "prev_block": "00aa" }));
        assert_eq!(blk.height(), Some(7));
        assert_eq!(blk.hash(), Some("00ab"));
    }

    #[test]
    fn reads_header_block_fields() {
        let blk = Block::from(json!({
            "header": { "hash": "00cd", "height": 12 },
            "txs": []
        }));
        assert_eq!(blk.height(), Some(12));
        assert_eq!(blk.hash(), Some("00cd"));
    }

    #[test]
    fn missing_fields_are_none() {
        let blk = Block::from(json!({ "height": "not-a-number" }));
        assert_eq!(blk.height(), None);
        assert_eq!(blk.hash(), None);

        let scalar = Block::from(json!(3));
        assert_eq!(scalar.height(), None);
    }

    #[test]
    fn payload_passes_through_unchanged() {
        let raw = json!({ "hash": "ff", "height": 1, "flags": ["a"], "extra": { "x": null } });
        let blk: Block = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(serde_json::to_value(&blk).unwrap(), raw);
        assert_eq!(blk.into_value(), raw);
    }
}
