//! Template-facing shapes of the stored documents. Ids become hex strings
//! and dates become `dd/mm/yyyy` text.

use mongodb::bson::oid::ObjectId;
use serde::Serialize;

use crate::domain::{Owner, Pet, PetType, Vet, Visit};
use crate::utils::date_format::format_date;

const UNKNOWN_TYPE: &str = "unknown";

fn hex(id: Option<ObjectId>) -> String {
    id.map(|id| id.to_hex()).unwrap_or_default()
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct OwnerView {
    pub id: String,
    pub full_name: String,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub telephone: String,
}

impl From<&Owner> for OwnerView {
    fn from(owner: &Owner) -> Self {
        OwnerView {
            id: hex(owner.id),
            full_name: owner.full_name(),
            first_name: owner.first_name.clone(),
            last_name: owner.last_name.clone(),
            address: owner.address.clone(),
            city: owner.city.clone(),
            telephone: owner.telephone.clone(),
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct VisitView {
    pub date: String,
    pub description: String,
}

impl From<&Visit> for VisitView {
    fn from(visit: &Visit) -> Self {
        VisitView {
            date: format_date(visit.date),
            description: visit.description.clone(),
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PetView {
    pub id: String,
    pub name: String,
    pub birth_date: String,
    pub type_name: String,
    pub visits: Vec<VisitView>,
}

impl PetView {

    /// `visits` may hold other pets' visits; only this pet's are kept,
    /// newest first.
    pub fn new(pet: &Pet, pet_types: &[PetType], visits: &[Visit]) -> Self {
        let type_name = pet_types
            .iter()
            .find(|t| t.id == Some(pet.type_id))
            .map(|t| t.name.clone())
            .unwrap_or_else(|| UNKNOWN_TYPE.to_string());

        let mut own: Vec<&Visit> = visits
            .iter()
            .filter(|visit| Some(visit.pet_id) == pet.id)
            .collect();
        own.sort_by(|a, b| b.date.cmp(&a.date));

        PetView {
            id: hex(pet.id),
            name: pet.name.clone(),
            birth_date: format_date(pet.birth_date),
            type_name,
            visits: own.into_iter().map(VisitView::from).collect(),
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct OwnerDetailsView {
    pub owner: OwnerView,
    pub pets: Vec<PetView>,
}

impl OwnerDetailsView {

    pub fn assemble(owner: &Owner, mut pets: Vec<Pet>, pet_types: &[PetType], visits: &[Visit]) -> Self {
        pets.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));

        OwnerDetailsView {
            owner: OwnerView::from(owner),
            pets: pets.iter().map(|pet| PetView::new(pet, pet_types, visits)).collect(),
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PetTypeOption {
    pub id: String,
    pub name: String,
}

impl From<&PetType> for PetTypeOption {
    fn from(pet_type: &PetType) -> Self {
        PetTypeOption {
            id: hex(pet_type.id),
            name: pet_type.name.clone(),
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct VetView {
    pub full_name: String,
    pub specialties: Vec<String>,
}

impl From<&Vet> for VetView {
    fn from(vet: &Vet) -> Self {
        let mut specialties = vet.specialties.clone();
        specialties.sort();
        VetView {
            full_name: format!("{} {}", vet.first_name, vet.last_name),
            specialties,
        }
    }
}
