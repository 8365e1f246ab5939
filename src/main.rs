use actix_web::{middleware::Logger, web, App, HttpServer};
use petclinic::{
    api::state::AppState,
    infrastructure::{database::{mongo_context::MongoContext, seed}, rendering::templates::Templates},
    routes,
    utils::config::AppConfig,
};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match AppConfig::global() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    let mongo_context = match MongoContext::init(&config.database_url, &config.database_name, config.database_timeout).await {
        Ok(context) => context,
        Err(e) => {
            log::error!("Failed to connect to MongoDB: {}", e);
            std::process::exit(1);
        }
    };

    if config.seed_data {
        if let Err(e) = seed::seed_reference_data(&mongo_context).await {
            log::error!("Failed to seed reference data: {}", e);
            std::process::exit(1);
        }
    }

    if let Err(e) = Templates::shared() {
        log::error!("Failed to load templates: {}", e);
        std::process::exit(1);
    }

    let app_state = AppState::from_mongo(&mongo_context);

    log::info!("Server running at http://{}:{}", config.server_host, config.server_port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(app_state.clone()))
            .configure(routes::configure)
    })
    .bind((config.server_host.as_str(), config.server_port))?
    .run()
    .await
}
