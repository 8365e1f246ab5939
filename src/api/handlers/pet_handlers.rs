use actix_web::{web, HttpResponse};
use minijinja::context;
use mongodb::bson::oid::ObjectId;

use crate::api::handlers::{find_owned_pet, find_owner, owner_location, redirect, today};
use crate::api::state::AppState;
use crate::api::views::{OwnerView, PetTypeOption};
use crate::domain::{pet::model::PetForm, Owner, PetType};
use crate::infrastructure::rendering::templates::render_page;
use crate::utils::{errors::ApiError, validation::FieldErrors};

struct PetFormPage<'a> {
    owner: &'a Owner,
    pet_types: &'a [PetType],
    action: String,
    is_new: bool,
}

impl PetFormPage<'_> {
    fn render(&self, form: &PetForm, errors: &FieldErrors) -> Result<HttpResponse, ApiError> {
        let pet_types: Vec<PetTypeOption> = self.pet_types.iter().map(PetTypeOption::from).collect();
        render_page("pets/form.html", context! {
            owner => OwnerView::from(self.owner),
            pet_types => pet_types,
            form => form,
            errors => errors,
            action => &self.action,
            is_new => self.is_new,
        })
    }
}

fn pet_action(owner_id: ObjectId, pet_id: Option<ObjectId>) -> String {
    match pet_id {
        Some(pet_id) => format!("{}/pets/{}/edit", owner_location(owner_id), pet_id.to_hex()),
        None => format!("{}/pets/add", owner_location(owner_id)),
    }
}

pub async fn init_creation_form(
    state: web::Data<AppState>,
    path: web::Path<String>
) -> Result<HttpResponse, ApiError> {
    let (owner_id, owner) = find_owner(&state, &path).await?;
    let pet_types = state.pet_types.find_all().await?;

    let page = PetFormPage { owner: &owner, pet_types: &pet_types, action: pet_action(owner_id, None), is_new: true };
    page.render(&PetForm::default(), &FieldErrors::new())
}

pub async fn process_creation_form(
    state: web::Data<AppState>,
    path: web::Path<String>,
    form: web::Form<PetForm>
) -> Result<HttpResponse, ApiError> {
    let (owner_id, owner) = find_owner(&state, &path).await?;
    let (siblings, pet_types) = futures::try_join!(
        state.pets.find_by_owner(owner_id),
        state.pet_types.find_all()
    )?;
    let form = form.into_inner();

    match form.clone().into_pet(None, owner_id, &siblings, &pet_types, today()) {
        Ok(pet) => {
            let pet = state.pets.save(pet).await?;
            log::info!("Added pet {:?} to owner {}", pet.id, owner_id);
            Ok(redirect(owner_location(owner_id)))
        }
        Err(errors) => {
            let page = PetFormPage { owner: &owner, pet_types: &pet_types, action: pet_action(owner_id, None), is_new: true };
            page.render(&form, &errors)
        }
    }
}

pub async fn init_update_form(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>
) -> Result<HttpResponse, ApiError> {
    let (raw_owner_id, raw_pet_id) = path.into_inner();
    let (owner_id, owner) = find_owner(&state, &raw_owner_id).await?;
    let (pet_id, pet) = find_owned_pet(&state, owner_id, &raw_pet_id).await?;
    let pet_types = state.pet_types.find_all().await?;

    let page = PetFormPage { owner: &owner, pet_types: &pet_types, action: pet_action(owner_id, Some(pet_id)), is_new: false };
    page.render(&PetForm::from_pet(&pet), &FieldErrors::new())
}

pub async fn process_update_form(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
    form: web::Form<PetForm>
) -> Result<HttpResponse, ApiError> {
    let (raw_owner_id, raw_pet_id) = path.into_inner();
    let (owner_id, owner) = find_owner(&state, &raw_owner_id).await?;
    let (pet_id, _) = find_owned_pet(&state, owner_id, &raw_pet_id).await?;
    let (siblings, pet_types) = futures::try_join!(
        state.pets.find_by_owner(owner_id),
        state.pet_types.find_all()
    )?;
    let form = form.into_inner();

    match form.clone().into_pet(Some(pet_id), owner_id, &siblings, &pet_types, today()) {
        Ok(pet) => {
            state.pets.save(pet).await?;
            Ok(redirect(owner_location(owner_id)))
        }
        Err(errors) => {
            let page = PetFormPage { owner: &owner, pet_types: &pet_types, action: pet_action(owner_id, Some(pet_id)), is_new: false };
            page.render(&form, &errors)
        }
    }
}
