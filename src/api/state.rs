use std::sync::Arc;

use crate::domain::{
    owner::repository::OwnerRepository,
    pet::repository::{PetRepository, PetTypeRepository},
    vet::repository::VetRepository,
    visit::repository::VisitRepository,
};
use crate::infrastructure::{
    database::mongo_context::MongoContext,
    mongodb::{MongoOwnerRepository, MongoPetRepository, MongoPetTypeRepository, MongoVetRepository, MongoVisitRepository},
};

#[derive(Clone)]
pub struct AppState {
    pub owners: Arc<dyn OwnerRepository>,
    pub pets: Arc<dyn PetRepository>,
    pub pet_types: Arc<dyn PetTypeRepository>,
    pub visits: Arc<dyn VisitRepository>,
    pub vets: Arc<dyn VetRepository>,
}

impl AppState {
    pub fn from_mongo(context: &MongoContext) -> Self {
        AppState {
            owners: Arc::new(MongoOwnerRepository::new(context)),
            pets: Arc::new(MongoPetRepository::new(context)),
            pet_types: Arc::new(MongoPetTypeRepository::new(context)),
            visits: Arc::new(MongoVisitRepository::new(context)),
            vets: Arc::new(MongoVetRepository::new(context)),
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use crate::domain::{
        owner::repository::MockOwnerRepository,
        pet::repository::{MockPetRepository, MockPetTypeRepository},
        vet::repository::MockVetRepository,
        visit::repository::MockVisitRepository,
    };

    /// Repository mocks for handler tests. Anything left without
    /// expectations panics when a handler touches it.
    #[derive(Default)]
    pub struct MockRepositories {
        pub owners: MockOwnerRepository,
        pub pets: MockPetRepository,
        pub pet_types: MockPetTypeRepository,
        pub visits: MockVisitRepository,
        pub vets: MockVetRepository,
    }

    impl MockRepositories {
        pub fn into_state(self) -> AppState {
            AppState {
                owners: Arc::new(self.owners),
                pets: Arc::new(self.pets),
                pet_types: Arc::new(self.pet_types),
                visits: Arc::new(self.visits),
                vets: Arc::new(self.vets),
            }
        }
    }
}
