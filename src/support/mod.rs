pub mod errors;
pub mod shutdown;
