use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use crate::{domain::pet::model::{Pet, PetType}, utils::errors::ApiError};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PetRepository: Send + Sync {
    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Pet>, ApiError>;
    async fn find_by_owner(&self, owner_id: ObjectId) -> Result<Vec<Pet>, ApiError>;
    async fn save(&self, pet: Pet) -> Result<Pet, ApiError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PetTypeRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<PetType>, ApiError>;
    async fn find_by_id(&self, id: ObjectId) -> Result<Option<PetType>, ApiError>;
}
