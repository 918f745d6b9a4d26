//! Users module: CRUD use-cases over the User aggregate

pub mod service;

pub use service::UserService;
