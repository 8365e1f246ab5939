pub mod owner;
pub mod pet;
pub mod visit;
pub mod vet;

pub use owner::model::Owner;
pub use pet::model::{Pet, PetType};
pub use visit::model::Visit;
pub use vet::model::Vet;
