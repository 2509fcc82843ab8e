use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A JSON body field forwarded to the store as text.
///
/// Any scalar is accepted (`"1"`, `1`, `true`); the SQL statement casts it to
/// the column type, so coercion and rejection both happen in the store.
/// `null` and an absent key both bind as SQL `NULL`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StoreText(pub Option<String>);

impl StoreText {
    pub fn into_inner(self) -> Option<String> {
        self.0
    }
}

impl<'de> Deserialize<'de> for StoreText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = match Value::deserialize(deserializer)? {
            Value::Null => None,
            Value::String(s) => Some(s),
            Value::Bool(b) => Some(b.to_string()),
            Value::Number(n) => Some(n.to_string()),
            other => Some(other.to_string()),
        };
        Ok(StoreText(text))
    }
}
