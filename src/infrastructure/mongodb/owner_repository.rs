use async_trait::async_trait;
use futures::StreamExt;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;

use crate::infrastructure::database::mongo_context::{MongoContext, OWNERS};
use crate::infrastructure::mongodb::inserted_object_id;
use crate::domain::owner::repository::OwnerRepository;
use crate::domain::owner::model::Owner;
use crate::utils::errors::ApiError;

pub struct MongoOwnerRepository {
    owners: mongodb::Collection<Owner>
}

impl MongoOwnerRepository {
    pub fn new(context: &MongoContext) -> Self {
        Self {
            owners: context.collection(OWNERS)
        }
    }

    async fn collect(&self, filter: mongodb::bson::Document) -> Result<Vec<Owner>, ApiError> {
        let mut cursor = self.owners
            .find(filter)
            .sort(doc! { "last_name": 1, "first_name": 1 })
            .await?;
        let mut owners = Vec::new();

        while let Some(doc) = cursor.next().await {
            match doc {
                Ok(owner) => owners.push(owner),
                Err(e) => return Err(ApiError::MongoError(e)),
            }
        }
        Ok(owners)
    }
}

#[async_trait]
impl OwnerRepository for MongoOwnerRepository {

    async fn find_all(&self) -> Result<Vec<Owner>, ApiError> {
        self.collect(doc! {}).await
    }

    async fn find_by_last_name(&self, last_name: String) -> Result<Vec<Owner>, ApiError> {
        let pattern = format!("^{}", regex::escape(last_name.trim()));
        self.collect(doc! { "last_name": { "$regex": pattern, "$options": "i" } }).await
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Owner>, ApiError> {
        match self.owners.find_one(doc! { "_id": id }).await {
            Ok(owner) => Ok(owner),
            Err(e) => Err(ApiError::MongoError(e))
        }
    }

    async fn save(&self, mut owner: Owner) -> Result<Owner, ApiError> {
        match owner.id {
            Some(id) => {
                self.owners
                    .replace_one(doc! { "_id": id }, &owner)
                    .upsert(true)
                    .await?;
            }
            None => {
                let result = self.owners.insert_one(&owner).await?;
                owner.id = Some(inserted_object_id(result.inserted_id)?);
            }
        }
        log::debug!("Saved owner {:?}", owner.id);
        Ok(owner)
    }
}
