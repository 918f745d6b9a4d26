//! Postal module: CEP lookup relayed from the upstream service

pub mod handlers;

pub use handlers::*;
