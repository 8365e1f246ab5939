use async_trait::async_trait;
use crate::{domain::vet::model::Vet, utils::errors::ApiError};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VetRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Vet>, ApiError>;
}
