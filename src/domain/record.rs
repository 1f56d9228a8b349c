use super::severity::Severity;
use serde::Serialize;
use serde_json::{Map, Value};

/// The structured mapping produced for every logging call.
///
/// Always carries `root` (the logger's namespace label) and `level` (the
/// severity tag) as its first two keys; caller-supplied fields are merged on
/// top with last-write-wins semantics. Keys keep insertion order, so the
/// serialized form is stable.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct LogRecord(Map<String, Value>);

impl LogRecord {
    /// Base record holding `root` and `level`; caller data is layered on via
    /// [`merge`](Self::merge).
    pub fn base(root: &str, level: Severity) -> Self {
        let mut fields = Map::new();
        fields.insert("root".to_owned(), Value::String(root.to_owned()));
        fields.insert(
            "level".to_owned(),
            Value::String(level.as_tag().to_owned()),
        );
        Self(fields)
    }

    /// Merges `data` on top of the record. A colliding key keeps its original
    /// position but takes the incoming value.
    pub fn merge(&mut self, data: Map<String, Value>) {
        for (key, value) in data {
            self.0.insert(key, value);
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_base_carries_root_and_level() {
        let record = LogRecord::base("svc", Severity::Error);
        assert_eq!(record.get("root"), Some(&json!("svc")));
        assert_eq!(record.get("level"), Some(&json!("error")));
        assert_eq!(record.len(), 2);
    }

    #[test]
    fn test_merge_preserves_insertion_order() {
        let mut record = LogRecord::base("root", Severity::Info);
        let data = json!({"user": "a", "request_id": "r-1"});
        let Value::Object(fields) = data else {
            panic!("fixture must be an object");
        };
        record.merge(fields);

        let keys: Vec<&str> = record.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["root", "level", "user", "request_id"]);
    }

    #[test]
    fn test_merge_collision_keeps_position_takes_value() {
        let mut record = LogRecord::base("root", Severity::Info);
        let data = json!({"level": "overridden", "extra": 1});
        let Value::Object(fields) = data else {
            panic!("fixture must be an object");
        };
        record.merge(fields);

        assert_eq!(record.get("level"), Some(&json!("overridden")));
        let keys: Vec<&str> = record.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["root", "level", "extra"]);
    }
}
