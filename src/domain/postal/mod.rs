//! Postal-code (CEP) lookup port
//!
//! The service does not interpret address data; it relays whatever the
//! upstream returns.

use async_trait::async_trait;

use crate::domain::DomainResult;

/// Raw upstream response, relayed to the caller as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostalLookupResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl PostalLookupResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait PostalCodeLookup: Send + Sync {
    /// Query the upstream for `code`.
    ///
    /// A non-2xx upstream status is NOT an error: it comes back in
    /// `PostalLookupResponse::status`. Errors are reserved for transport
    /// failures (`DomainError::Unavailable`).
    async fn lookup(&self, code: &str) -> DomainResult<PostalLookupResponse>;
}
