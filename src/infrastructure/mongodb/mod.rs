pub mod owner_repository;
pub mod pet_repository;
pub mod pet_type_repository;
pub mod visit_repository;
pub mod vet_repository;

pub use owner_repository::MongoOwnerRepository;
pub use pet_repository::MongoPetRepository;
pub use pet_type_repository::MongoPetTypeRepository;
pub use visit_repository::MongoVisitRepository;
pub use vet_repository::MongoVetRepository;

use mongodb::bson::{oid::ObjectId, Bson};
use crate::utils::errors::ApiError;

/// Id assigned by the server to a freshly inserted document.
fn inserted_object_id(id: Bson) -> Result<ObjectId, ApiError> {
    id.as_object_id()
        .ok_or_else(|| ApiError::InternalServerError(format!("Unexpected inserted id: {}", id)))
}

#[cfg(test)]
pub(crate) mod testing {
    use std::time::Duration;
    use mongodb::bson::oid::ObjectId;
    use crate::infrastructure::database::mongo_context::MongoContext;

    /// A throwaway database on the local test server.
    pub async fn context() -> MongoContext {
        let name = format!("petclinic_test_{}", ObjectId::new().to_hex());
        MongoContext::init("mongodb://localhost:27017", &name, Duration::from_secs(2))
            .await
            .expect("MongoDB must be running on localhost:27017")
    }

    pub async fn drop_database(context: MongoContext) {
        context.get_db().drop().await.expect("failed to drop test database");
    }
}
