use async_trait::async_trait;
use serde_json::Value;

#[async_trait]
pub trait NoticeSource: Send + Sync {
    /// Fetch one 1-based page of raw notice data. Failures are logged by the
    /// source and reported as `None`.
    async fn fetch(&self, page: u32) -> Option<Value>;
}
