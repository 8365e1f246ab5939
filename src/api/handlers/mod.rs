pub mod owner_handlers;
pub mod pet_handlers;
pub mod visit_handlers;
pub mod vet_handlers;
pub mod welcome_handlers;

use actix_web::{http::header, HttpResponse};
use chrono::{Local, NaiveDate};
use mongodb::bson::oid::ObjectId;

use crate::api::state::AppState;
use crate::domain::{Owner, Pet};
use crate::utils::{errors::ApiError, ids::parse_object_id};

pub(crate) fn owner_location(owner_id: ObjectId) -> String {
    format!("/owners/{}", owner_id.to_hex())
}

pub(crate) fn redirect(location: String) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}

pub(crate) fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Loads the owner named in the path, or fails with `NotFound`.
pub(crate) async fn find_owner(state: &AppState, raw_id: &str) -> Result<(ObjectId, Owner), ApiError> {
    let owner_id = parse_object_id(raw_id, "Owner")?;
    let owner = state.owners
        .find_by_id(owner_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Owner {} not found", raw_id)))?;
    Ok((owner_id, owner))
}

/// Loads a pet, treating a pet of some other owner as missing.
pub(crate) async fn find_owned_pet(state: &AppState, owner_id: ObjectId, raw_id: &str) -> Result<(ObjectId, Pet), ApiError> {
    let pet_id = parse_object_id(raw_id, "Pet")?;
    let pet = state.pets
        .find_by_id(pet_id)
        .await?
        .filter(|pet| pet.owner_id == owner_id)
        .ok_or_else(|| ApiError::NotFound(format!("Pet {} not found", raw_id)))?;
    Ok((pet_id, pet))
}
