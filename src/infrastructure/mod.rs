//! Infrastructure layer - external concerns

pub mod database;
pub mod postal;

pub use database::{init_database, DatabaseConfig};
pub use postal::ViaCepClient;
