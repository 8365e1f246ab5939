pub mod database;
pub mod mongodb;
pub mod rendering;

pub use database::mongo_context;
pub use database::seed;
