pub mod errors;
pub mod config;
pub mod date_format;
pub mod ids;
pub mod validation;

pub use errors::ApiError;
pub use config::AppConfig;
pub use validation::FieldErrors;
