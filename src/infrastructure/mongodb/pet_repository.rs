use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;

use crate::infrastructure::database::mongo_context::{MongoContext, PETS};
use crate::infrastructure::mongodb::inserted_object_id;
use crate::domain::pet::repository::PetRepository;
use crate::domain::pet::model::Pet;
use crate::utils::errors::ApiError;

pub struct MongoPetRepository {
    pets: mongodb::Collection<Pet>
}

impl MongoPetRepository {
    pub fn new(context: &MongoContext) -> Self {
        Self {
            pets: context.collection(PETS)
        }
    }
}

#[async_trait]
impl PetRepository for MongoPetRepository {

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Pet>, ApiError> {
        Ok(self.pets.find_one(doc! { "_id": id }).await?)
    }

    async fn find_by_owner(&self, owner_id: ObjectId) -> Result<Vec<Pet>, ApiError> {
        let cursor = self.pets
            .find(doc! { "owner_id": owner_id })
            .sort(doc! { "name": 1 })
            .await?;
        Ok(cursor.try_collect().await?)
    }

    async fn save(&self, mut pet: Pet) -> Result<Pet, ApiError> {
        match pet.id {
            Some(id) => {
                self.pets
                    .replace_one(doc! { "_id": id }, &pet)
                    .upsert(true)
                    .await?;
            }
            None => {
                let result = self.pets.insert_one(&pet).await?;
                pet.id = Some(inserted_object_id(result.inserted_id)?);
            }
        }
        log::debug!("Saved pet {:?} of owner {}", pet.id, pet.owner_id);
        Ok(pet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crate::infrastructure::mongodb::testing;

    fn pet(name: &str, owner_id: ObjectId) -> Pet {
        Pet {
            id: None,
            name: name.to_string(),
            birth_date: NaiveDate::from_ymd_opt(2010, 9, 7).unwrap(),
            owner_id,
            type_id: ObjectId::new(),
        }
    }

    #[tokio::test]
    #[ignore = "requires MongoDB at localhost:27017"]
    async fn test_saved_pet_is_found_by_id() {
        let context = testing::context().await;
        let repo = MongoPetRepository::new(&context);

        let saved = repo.save(pet("Leo", ObjectId::new())).await.unwrap();
        let found = repo.find_by_id(saved.id.unwrap()).await.unwrap();

        assert_eq!(found, Some(saved));

        testing::drop_database(context).await;
    }

    #[tokio::test]
    #[ignore = "requires MongoDB at localhost:27017"]
    async fn test_find_by_owner_only_returns_their_pets() {
        let context = testing::context().await;
        let repo = MongoPetRepository::new(&context);
        let owner_id = ObjectId::new();

        repo.save(pet("Samantha", owner_id)).await.unwrap();
        repo.save(pet("Max", owner_id)).await.unwrap();
        repo.save(pet("Basil", ObjectId::new())).await.unwrap();

        let pets = repo.find_by_owner(owner_id).await.unwrap();
        let names: Vec<&str> = pets.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Max", "Samantha"]);

        testing::drop_database(context).await;
    }
}
