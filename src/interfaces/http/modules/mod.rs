pub mod health;
pub mod metrics;
pub mod postal;
pub mod request_id;
pub mod users;
