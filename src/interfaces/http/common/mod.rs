//! Shared HTTP building blocks

mod response;
mod validated_json;

pub use response::{error_response, ApiError, ApiResponse};
pub use validated_json::{ValidatedJson, ValidatedJsonRejection};
