use actix_web::{web, HttpResponse};
use minijinja::context;

use crate::api::state::AppState;
use crate::api::views::VetView;
use crate::infrastructure::rendering::templates::render_page;
use crate::utils::errors::ApiError;

pub async fn list_vets(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let vets = state.vets.find_all().await?;
    let vets: Vec<VetView> = vets.iter().map(VetView::from).collect();

    render_page("vets/list.html", context! { vets => vets })
}
