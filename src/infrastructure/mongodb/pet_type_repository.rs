use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;

use crate::infrastructure::database::mongo_context::{MongoContext, PET_TYPES};
use crate::domain::pet::repository::PetTypeRepository;
use crate::domain::pet::model::PetType;
use crate::utils::errors::ApiError;

pub struct MongoPetTypeRepository {
    pet_types: mongodb::Collection<PetType>
}

impl MongoPetTypeRepository {
    pub fn new(context: &MongoContext) -> Self {
        Self {
            pet_types: context.collection(PET_TYPES)
        }
    }
}

#[async_trait]
impl PetTypeRepository for MongoPetTypeRepository {

    async fn find_all(&self) -> Result<Vec<PetType>, ApiError> {
        let cursor = self.pet_types
            .find(doc! {})
            .sort(doc! { "name": 1 })
            .await?;
        Ok(cursor.try_collect().await?)
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<PetType>, ApiError> {
        Ok(self.pet_types.find_one(doc! { "_id": id }).await?)
    }
}
