use async_trait::async_trait;

use crate::application::app_error::AppResult;
use crate::domain::entities::profile::Profile;

#[async_trait]
pub trait ProfileWriter: Send + Sync {
    /// Inserts the profile unless one already exists. Returns `false` when the
    /// singleton slot was taken.
    async fn insert_if_absent(&self, profile: Profile) -> AppResult<bool>;
    async fn update(&self, profile: Profile) -> AppResult<()>;
}

#[async_trait]
pub trait ProfileReader: Send + Sync {
    async fn get(&self) -> AppResult<Option<Profile>>;
    /// Same as `get`, but locks the row until the session commits.
    async fn get_for_update(&self) -> AppResult<Option<Profile>>;
}
