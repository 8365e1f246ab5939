use actix_web::{web, HttpResponse};
use minijinja::context;

use crate::api::handlers::{find_owner, owner_location, redirect};
use crate::api::state::AppState;
use crate::api::views::{OwnerDetailsView, OwnerView};
use crate::domain::owner::model::{OwnerForm, OwnerSearch};
use crate::infrastructure::rendering::templates::render_page;
use crate::utils::{errors::ApiError, validation::FieldErrors};

fn render_form(form: &OwnerForm, errors: &FieldErrors, action: &str, is_new: bool) -> Result<HttpResponse, ApiError> {
    render_page("owners/form.html", context! {
        form => form,
        errors => errors,
        action => action,
        is_new => is_new,
    })
}

pub async fn list_owners(
    state: web::Data<AppState>,
    query: web::Query<OwnerSearch>
) -> Result<HttpResponse, ApiError> {
    let last_name = query.last_name();

    let owners = match last_name {
        Some(last_name) => state.owners.find_by_last_name(last_name.to_string()).await?,
        None => state.owners.find_all().await?,
    };

    // A search that pins down one owner goes straight to them.
    if last_name.is_some() && owners.len() == 1 {
        if let Some(id) = owners[0].id {
            return Ok(redirect(owner_location(id)));
        }
    }

    let views: Vec<OwnerView> = owners.iter().map(OwnerView::from).collect();
    render_page("owners/list.html", context! {
        owners => views,
        last_name => last_name.unwrap_or_default(),
        not_found => last_name.is_some() && owners.is_empty(),
    })
}

pub async fn init_creation_form() -> Result<HttpResponse, ApiError> {
    render_form(&OwnerForm::default(), &FieldErrors::new(), "/owners/add", true)
}

pub async fn process_creation_form(
    state: web::Data<AppState>,
    form: web::Form<OwnerForm>
) -> Result<HttpResponse, ApiError> {
    let form = form.into_inner();

    match form.clone().into_owner(None) {
        Ok(owner) => {
            let owner = state.owners.save(owner).await?;
            let id = owner.id
                .ok_or_else(|| ApiError::InternalServerError("Saved owner has no id".to_string()))?;
            log::info!("Created owner {}", id);
            Ok(redirect(owner_location(id)))
        }
        Err(errors) => render_form(&form, &errors, "/owners/add", true),
    }
}

pub async fn init_update_form(
    state: web::Data<AppState>,
    path: web::Path<String>
) -> Result<HttpResponse, ApiError> {
    let (owner_id, owner) = find_owner(&state, &path).await?;
    let action = format!("{}/edit", owner_location(owner_id));

    render_form(&OwnerForm::from_owner(&owner), &FieldErrors::new(), &action, false)
}

pub async fn process_update_form(
    state: web::Data<AppState>,
    path: web::Path<String>,
    form: web::Form<OwnerForm>
) -> Result<HttpResponse, ApiError> {
    let (owner_id, _) = find_owner(&state, &path).await?;
    let form = form.into_inner();

    match form.clone().into_owner(Some(owner_id)) {
        Ok(owner) => {
            state.owners.save(owner).await?;
            Ok(redirect(owner_location(owner_id)))
        }
        Err(errors) => {
            let action = format!("{}/edit", owner_location(owner_id));
            render_form(&form, &errors, &action, false)
        }
    }
}

pub async fn show_owner(
    state: web::Data<AppState>,
    path: web::Path<String>
) -> Result<HttpResponse, ApiError> {
    let (owner_id, owner) = find_owner(&state, &path).await?;

    let (pets, pet_types) = futures::try_join!(
        state.pets.find_by_owner(owner_id),
        state.pet_types.find_all()
    )?;
    let pet_ids = pets.iter().filter_map(|pet| pet.id).collect();
    let visits = state.visits.find_by_pets(pet_ids).await?;

    let details = OwnerDetailsView::assemble(&owner, pets, &pet_types, &visits);
    render_page("owners/details.html", context! { details => details })
}
