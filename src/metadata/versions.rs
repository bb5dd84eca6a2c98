use serde_derive::Deserialize;
use serde_json::Value;

/// Contents of `versions.json`, newest release first. Only the first entry
/// has to be a string; the rest are kept as they came.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct VersionList(Vec<Value>);

impl VersionList {
    pub fn latest(&self) -> Option<&str> {
        self.0.first().and_then(Value::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
