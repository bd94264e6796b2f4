use crate::ApiResult;

/// Persisted string key-value storage backing a [`Session`](crate::Session).
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> ApiResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> ApiResult<()>;

    /// Removing a missing key is not an error
    fn remove(&self, key: &str) -> ApiResult<()>;
}
