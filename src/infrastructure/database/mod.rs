pub mod mongo_context;
pub mod seed;
