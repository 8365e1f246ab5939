use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::doc;

use crate::infrastructure::database::mongo_context::{MongoContext, VETS};
use crate::domain::vet::repository::VetRepository;
use crate::domain::vet::model::Vet;
use crate::utils::errors::ApiError;

pub struct MongoVetRepository {
    vets: mongodb::Collection<Vet>
}

impl MongoVetRepository {
    pub fn new(context: &MongoContext) -> Self {
        Self {
            vets: context.collection(VETS)
        }
    }
}

#[async_trait]
impl VetRepository for MongoVetRepository {
    async fn find_all(&self) -> Result<Vec<Vet>, ApiError> {
        let cursor = self.vets
            .find(doc! {})
            .sort(doc! { "last_name": 1, "first_name": 1 })
            .await?;
        Ok(cursor.try_collect().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::database::seed;
    use crate::infrastructure::mongodb::testing;

    #[tokio::test]
    #[ignore = "requires MongoDB at localhost:27017"]
    async fn test_seeded_vets_are_sorted_by_last_name() {
        let context = testing::context().await;
        seed::seed_reference_data(&context).await.unwrap();
        let repo = MongoVetRepository::new(&context);

        let vets = repo.find_all().await.unwrap();
        let last_names: Vec<&str> = vets.iter().map(|v| v.last_name.as_str()).collect();
        assert_eq!(last_names, vec!["Carter", "Douglas", "Jenkins", "Leary", "Ortega", "Stevens"]);

        let douglas = &vets[1];
        assert_eq!(douglas.specialties, vec!["dentistry", "surgery"]);

        testing::drop_database(context).await;
    }
}
