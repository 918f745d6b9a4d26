//! Users module: User CRUD over `/api/User`

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
