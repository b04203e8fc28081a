//! Record store configuration.

use serde::{Deserialize, Serialize};

/// Key the collection is stored under unless configured otherwise.
pub const DEFAULT_COLLECTION_KEY: &str = "user-form-data";

/// Configuration for a [`RecordStore`](crate::RecordStore).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookConfig {
    /// The single key the whole collection is persisted under.
    pub collection_key: String,
    /// Write indented JSON instead of compact JSON.
    pub pretty: bool,
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            collection_key: DEFAULT_COLLECTION_KEY.to_string(),
            pretty: false,
        }
    }
}

impl BookConfig {
    pub fn with_collection_key(mut self, key: impl Into<String>) -> Self {
        self.collection_key = key.into();
        self
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_key() {
        assert_eq!(BookConfig::default().collection_key, "user-form-data");
        assert!(!BookConfig::default().pretty);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: BookConfig = serde_json::from_str(r#"{"pretty":true}"#).unwrap();
        assert_eq!(config.collection_key, DEFAULT_COLLECTION_KEY);
        assert!(config.pretty);
    }
}
