use actix_web::{web, HttpResponse};
use minijinja::context;
use mongodb::bson::oid::ObjectId;

use crate::api::handlers::{find_owned_pet, find_owner, owner_location, redirect, today};
use crate::api::state::AppState;
use crate::api::views::{OwnerView, PetView};
use crate::domain::{visit::model::VisitForm, Owner, Pet, PetType};
use crate::infrastructure::rendering::templates::render_page;
use crate::utils::{errors::ApiError, validation::FieldErrors};

/// Everything the visit page shows besides the form itself.
struct VisitPage {
    owner: OwnerView,
    pet: PetView,
    action: String,
}

impl VisitPage {

    async fn load(state: &AppState, owner_id: ObjectId, owner: &Owner, pet_id: ObjectId, pet: &Pet) -> Result<Self, ApiError> {
        let (visits, pet_type) = futures::try_join!(
            state.visits.find_by_pet(pet_id),
            state.pet_types.find_by_id(pet.type_id)
        )?;
        let pet_types: Vec<PetType> = pet_type.into_iter().collect();

        Ok(VisitPage {
            owner: OwnerView::from(owner),
            pet: PetView::new(pet, &pet_types, &visits),
            action: format!("{}/pets/{}/visits/add", owner_location(owner_id), pet_id.to_hex()),
        })
    }

    fn render(&self, form: &VisitForm, errors: &FieldErrors) -> Result<HttpResponse, ApiError> {
        render_page("visits/form.html", context! {
            owner => &self.owner,
            pet => &self.pet,
            action => &self.action,
            form => form,
            errors => errors,
        })
    }
}

pub async fn init_new_visit_form(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>
) -> Result<HttpResponse, ApiError> {
    let (raw_owner_id, raw_pet_id) = path.into_inner();
    let (owner_id, owner) = find_owner(&state, &raw_owner_id).await?;
    let (pet_id, pet) = find_owned_pet(&state, owner_id, &raw_pet_id).await?;

    let page = VisitPage::load(&state, owner_id, &owner, pet_id, &pet).await?;
    page.render(&VisitForm::new(today()), &FieldErrors::new())
}

pub async fn process_new_visit_form(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
    form: web::Form<VisitForm>
) -> Result<HttpResponse, ApiError> {
    let (raw_owner_id, raw_pet_id) = path.into_inner();
    let (owner_id, owner) = find_owner(&state, &raw_owner_id).await?;
    let (pet_id, pet) = find_owned_pet(&state, owner_id, &raw_pet_id).await?;
    let form = form.into_inner();

    match form.clone().into_visit(pet_id) {
        Ok(visit) => {
            state.visits.save(visit).await?;
            log::info!("Recorded a visit for pet {}", pet_id);
            Ok(redirect(owner_location(owner_id)))
        }
        Err(errors) => {
            let page = VisitPage::load(&state, owner_id, &owner, pet_id, &pet).await?;
            page.render(&form, &errors)
        }
    }
}
