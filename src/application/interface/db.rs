use async_trait::async_trait;

use crate::application::app_error::AppResult;

/// Unit of work shared by every gateway built on the same session. Nothing a
/// gateway writes is visible to other requests until `commit`.
#[async_trait]
pub trait DBSession: Send + Sync {
    async fn commit(&self) -> AppResult<()>;
    async fn rollback(&self) -> AppResult<()>;
}
