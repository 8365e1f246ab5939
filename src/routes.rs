use actix_web::web;

use crate::api::handlers::{owner_handlers, pet_handlers, vet_handlers, visit_handlers, welcome_handlers};
use crate::utils::errors::ApiError;

pub fn configure(cfg: &mut web::ServiceConfig) {
    // Rejected form bodies get the same error page as everything else.
    cfg.app_data(
        web::FormConfig::default()
            .error_handler(|err, _req| ApiError::BadRequest(err.to_string()).into())
    );

    welcome_routes(cfg);
    owner_routes(cfg);
    pet_routes(cfg);
    visit_routes(cfg);
    vet_routes(cfg);

    cfg.default_service(web::to(welcome_handlers::not_found));
}

fn welcome_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/")
            .route(web::get().to(welcome_handlers::welcome))
    );
}

fn owner_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/owners")
            .route(web::get().to(owner_handlers::list_owners))
    );

    // Registered ahead of "/owners/{owner_id}" so "add" is never taken for an id.
    cfg.service(
        web::resource("/owners/add")
            .route(web::get().to(owner_handlers::init_creation_form))
            .route(web::post().to(owner_handlers::process_creation_form))
    );

    cfg.service(
        web::resource("/owners/{owner_id}")
            .route(web::get().to(owner_handlers::show_owner))
    );

    cfg.service(
        web::resource("/owners/{owner_id}/edit")
            .route(web::get().to(owner_handlers::init_update_form))
            .route(web::post().to(owner_handlers::process_update_form))
    );
}

fn pet_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/owners/{owner_id}/pets/add")
            .route(web::get().to(pet_handlers::init_creation_form))
            .route(web::post().to(pet_handlers::process_creation_form))
    );

    cfg.service(
        web::resource("/owners/{owner_id}/pets/{pet_id}/edit")
            .route(web::get().to(pet_handlers::init_update_form))
            .route(web::post().to(pet_handlers::process_update_form))
    );
}

fn visit_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/owners/{owner_id}/pets/{pet_id}/visits/add")
            .route(web::get().to(visit_handlers::init_new_visit_form))
            .route(web::post().to(visit_handlers::process_new_visit_form))
    );
}

fn vet_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/vets")
            .route(web::get().to(vet_handlers::list_vets))
    );
}
