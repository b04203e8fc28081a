//! Medium trait: the abstract interface for key-value persistence.
//!
//! This trait keeps the record store backend-agnostic. Implementations
//! include SQLite (primary) and in-memory (for tests).

use async_trait::async_trait;

use crate::error::Result;

/// The Medium trait: async interface over an opaque key-value store.
///
/// Values are whole strings. There is no partial update, no listing, and no
/// transaction spanning calls; callers that need read-check-write atomicity
/// provide their own exclusion.
#[async_trait]
pub trait Medium: Send + Sync {
    /// Get the value stored under `key`, or `None` if the key is absent.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// On error the previous value, if any, is left untouched.
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing an absent key succeeds.
    async fn remove(&self, key: &str) -> Result<()>;

    /// Check if a value is stored under `key`.
    async fn contains(&self, key: &str) -> Result<bool> {
        Ok(self.get(key).await?.is_some())
    }
}

#[async_trait]
impl<M: Medium + ?Sized> Medium for std::sync::Arc<M> {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value).await
    }

    async fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key).await
    }

    async fn contains(&self, key: &str) -> Result<bool> {
        (**self).contains(key).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::error::StoreError;

    /// Answers `contains` without ever serving a value.
    struct KeysOnly;

    #[async_trait]
    impl Medium for KeysOnly {
        async fn get(&self, key: &str) -> Result<Option<String>> {
            Err(StoreError::ReadRejected(key.to_string()))
        }

        async fn set(&self, key: &str, _value: &str) -> Result<()> {
            Err(StoreError::WriteRejected(key.to_string()))
        }

        async fn remove(&self, _key: &str) -> Result<()> {
            Ok(())
        }

        async fn contains(&self, key: &str) -> Result<bool> {
            Ok(key == "present")
        }
    }

    #[tokio::test]
    async fn test_arc_forwards_contains_override() {
        let medium = Arc::new(KeysOnly);

        assert!(medium.contains("present").await.unwrap());
        assert!(!medium.contains("absent").await.unwrap());
        assert!(medium.get("present").await.is_err());
    }
}
