use std::sync::OnceLock;

use actix_web::{http::header::ContentType, HttpResponse};
use minijinja::Environment;
use serde::Serialize;

use crate::utils::errors::ApiError;

static TEMPLATES: OnceLock<Templates> = OnceLock::new();

/// Page templates, compiled into the binary. Names ending in `.html` get
/// HTML auto-escaping.
const SOURCES: &[(&str, &str)] = &[
    ("layout.html", include_str!("../../../templates/layout.html")),
    ("macros.html", include_str!("../../../templates/macros.html")),
    ("welcome.html", include_str!("../../../templates/welcome.html")),
    ("error.html", include_str!("../../../templates/error.html")),
    ("owners/list.html", include_str!("../../../templates/owners/list.html")),
    ("owners/form.html", include_str!("../../../templates/owners/form.html")),
    ("owners/details.html", include_str!("../../../templates/owners/details.html")),
    ("pets/form.html", include_str!("../../../templates/pets/form.html")),
    ("visits/form.html", include_str!("../../../templates/visits/form.html")),
    ("vets/list.html", include_str!("../../../templates/vets/list.html")),
];

pub struct Templates {
    env: Environment<'static>,
}

impl Templates {

    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        for &(name, source) in SOURCES {
            env.add_template(name, source)?;
        }
        Ok(Templates { env })
    }

    /// The process-wide template set, built on first use.
    pub fn shared() -> Result<&'static Templates, ApiError> {
        if let Some(templates) = TEMPLATES.get() {
            return Ok(templates);
        }
        let templates = Templates::new()?;
        Ok(TEMPLATES.get_or_init(|| templates))
    }

    pub fn render<S: Serialize>(&self, name: &str, context: S) -> Result<String, ApiError> {
        let template = self.env.get_template(name)?;
        Ok(template.render(context)?)
    }
}

/// Renders `name` into a `200 OK` HTML response.
pub fn render_page<S: Serialize>(name: &str, context: S) -> Result<HttpResponse, ApiError> {
    let html = Templates::shared()?.render(name, context)?;
    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(html))
}
