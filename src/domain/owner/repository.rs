use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use crate::{domain::owner::model::Owner, utils::errors::ApiError};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OwnerRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Owner>, ApiError>;
    /// Case-insensitive prefix match on the last name.
    async fn find_by_last_name(&self, last_name: String) -> Result<Vec<Owner>, ApiError>;
    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Owner>, ApiError>;
    /// Inserts when `owner.id` is empty, replaces otherwise. The returned
    /// owner always carries its id.
    async fn save(&self, owner: Owner) -> Result<Owner, ApiError>;
}
