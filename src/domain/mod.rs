pub mod postal;
pub mod user;

// Re-export commonly used types
pub use postal::{PostalCodeLookup, PostalLookupResponse};
pub use user::{
    AddressType, CreateUserDto, Region, UpdateUserDto, User, UserRepositoryInterface,
};

// Re-export DomainError from support for convenience
pub use crate::support::errors::DomainError;

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
