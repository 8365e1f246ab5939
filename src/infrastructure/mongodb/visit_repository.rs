use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;

use crate::infrastructure::database::mongo_context::{MongoContext, VISITS};
use crate::infrastructure::mongodb::inserted_object_id;
use crate::domain::visit::repository::VisitRepository;
use crate::domain::visit::model::Visit;
use crate::utils::errors::ApiError;

pub struct MongoVisitRepository {
    visits: mongodb::Collection<Visit>
}

impl MongoVisitRepository {
    pub fn new(context: &MongoContext) -> Self {
        Self {
            visits: context.collection(VISITS)
        }
    }
}

#[async_trait]
impl VisitRepository for MongoVisitRepository {

    async fn find_by_pet(&self, pet_id: ObjectId) -> Result<Vec<Visit>, ApiError> {
        self.find_by_pets(vec![pet_id]).await
    }

    async fn find_by_pets(&self, pet_ids: Vec<ObjectId>) -> Result<Vec<Visit>, ApiError> {
        if pet_ids.is_empty() {
            return Ok(Vec::new());
        }

        let cursor = self.visits
            .find(doc! { "pet_id": { "$in": pet_ids } })
            .sort(doc! { "date": -1 })
            .await?;
        Ok(cursor.try_collect().await?)
    }

    async fn save(&self, mut visit: Visit) -> Result<Visit, ApiError> {
        match visit.id {
            Some(id) => {
                self.visits
                    .replace_one(doc! { "_id": id }, &visit)
                    .upsert(true)
                    .await?;
            }
            None => {
                let result = self.visits.insert_one(&visit).await?;
                visit.id = Some(inserted_object_id(result.inserted_id)?);
            }
        }
        Ok(visit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crate::infrastructure::mongodb::testing;

    fn visit(pet_id: ObjectId, day: u32, description: &str) -> Visit {
        Visit {
            id: None,
            pet_id,
            date: NaiveDate::from_ymd_opt(2013, 1, day).unwrap(),
            description: description.to_string(),
        }
    }

    #[tokio::test]
    #[ignore = "requires MongoDB at localhost:27017"]
    async fn test_visits_round_trip_newest_first() {
        let context = testing::context().await;
        let repo = MongoVisitRepository::new(&context);
        let samantha = ObjectId::new();
        let max = ObjectId::new();

        repo.save(visit(samantha, 1, "rabies shot")).await.unwrap();
        repo.save(visit(samantha, 4, "spayed")).await.unwrap();
        repo.save(visit(max, 2, "neutered")).await.unwrap();

        let visits = repo.find_by_pet(samantha).await.unwrap();
        let descriptions: Vec<&str> = visits.iter().map(|v| v.description.as_str()).collect();
        assert_eq!(descriptions, vec!["spayed", "rabies shot"]);

        let both = repo.find_by_pets(vec![samantha, max]).await.unwrap();
        assert_eq!(both.len(), 3);

        assert!(repo.find_by_pets(Vec::new()).await.unwrap().is_empty());

        testing::drop_database(context).await;
    }
}
