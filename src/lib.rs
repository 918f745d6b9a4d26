//! # User API
//!
//! REST service for managing user records with Brazilian addresses, plus a
//! pass-through lookup against the ViaCEP postal-code service.
//!
//! ## Architecture
//!
//! - **domain**: User model, DTOs and the repository / postal-lookup ports
//! - **application**: User use cases on top of the repository port
//! - **infrastructure**: SQLite persistence (SeaORM) and the ViaCEP client
//! - **interfaces**: REST API with Swagger documentation
//! - **server**: Runtime lifecycle and graceful shutdown

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod support;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig};

// Re-export API router
pub use interfaces::http::create_api_router;

pub use server::{init_tracing, ServerHandle, ServerOptions};
