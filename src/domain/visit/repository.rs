use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use crate::{domain::visit::model::Visit, utils::errors::ApiError};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VisitRepository: Send + Sync {
    async fn find_by_pet(&self, pet_id: ObjectId) -> Result<Vec<Visit>, ApiError>;
    async fn find_by_pets(&self, pet_ids: Vec<ObjectId>) -> Result<Vec<Visit>, ApiError>;
    async fn save(&self, visit: Visit) -> Result<Visit, ApiError>;
}
