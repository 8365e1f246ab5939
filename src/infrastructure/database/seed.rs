//! Reference data every clinic starts with. Collections that already hold
//! documents are left alone, so restarting never duplicates anything.

use mongodb::bson::doc;
use serde::Serialize;

use crate::domain::pet::model::PetType;
use crate::domain::vet::model::Vet;
use crate::infrastructure::database::mongo_context::{MongoContext, PET_TYPES, VETS};
use crate::utils::errors::ApiError;

pub fn default_pet_types() -> Vec<PetType> {
    ["cat", "dog", "lizard", "snake", "bird", "hamster"]
        .into_iter()
        .map(PetType::new)
        .collect()
}

pub fn default_vets() -> Vec<Vet> {
    vec![
        Vet::new("James", "Carter", &[]),
        Vet::new("Helen", "Leary", &["radiology"]),
        Vet::new("Linda", "Douglas", &["dentistry", "surgery"]),
        Vet::new("Rafael", "Ortega", &["surgery"]),
        Vet::new("Henry", "Stevens", &["radiology"]),
        Vet::new("Sharon", "Jenkins", &[]),
    ]
}

pub async fn seed_reference_data(context: &MongoContext) -> Result<(), ApiError> {
    seed_collection(context, PET_TYPES, default_pet_types()).await?;
    seed_collection(context, VETS, default_vets()).await?;
    Ok(())
}

async fn seed_collection<T>(context: &MongoContext, name: &str, documents: Vec<T>) -> Result<(), ApiError>
where
    T: Serialize + Send + Sync,
{
    let collection = context.collection::<T>(name);
    let existing = collection.count_documents(doc! {}).await?;
    if existing > 0 {
        log::debug!("Collection '{}' already holds {} documents, not seeding", name, existing);
        return Ok(());
    }

    let result = collection.insert_many(&documents).await?;
    log::info!("Seeded {} documents into '{}'", result.inserted_ids.len(), name);
    Ok(())
}
