use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Path id {path} does not match body id {body}")]
    IdMismatch { path: i32, body: i32 },

    #[error("Validation: {0}")]
    Validation(String),

    #[error("API call failed")]
    Upstream { status: u16 },

    #[error("Upstream service unavailable: {0}")]
    Unavailable(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl DomainError {
    pub fn user_not_found(id: i32) -> Self {
        Self::NotFound {
            entity: "User",
            field: "id",
            value: id.to_string(),
        }
    }

    /// Whether this error is likely transient (e.g. DB connection lost)
    /// and the operation may succeed if retried.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Database(_) | Self::Unavailable(_))
    }
}

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        Self::Database(e.to_string())
    }
}

#[derive(Debug, Error)]
pub enum InfraError {
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid upstream URL: {0}")]
    Url(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_entity_and_id() {
        let err = DomainError::user_not_found(42);
        assert_eq!(err.to_string(), "Not found: User with id=42");
        assert!(!err.is_transient());
    }

    #[test]
    fn database_errors_are_transient() {
        let err: DomainError = sea_orm::DbErr::Custom("connection reset".into()).into();
        assert!(err.is_transient());
        assert!(err.to_string().starts_with("Database error:"));
    }
}
