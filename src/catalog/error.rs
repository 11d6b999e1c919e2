use crate::validation::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Duplicate product ID {0}! Please choose a unique product ID.")]
    DuplicateId(u64),

    #[error("Failed to add product {0}.")]
    AddFailed(u64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl CatalogError {
    /// Errors that are reported to the operator without ending the session.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            CatalogError::Validation(_)
                | CatalogError::DuplicateId(_)
                | CatalogError::AddFailed(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Validator;

    #[test]
    fn operator_errors_are_recoverable() {
        let invalid = Validator::default().validate_id("abc").unwrap_err();
        assert!(CatalogError::from(invalid).is_recoverable());
        assert!(CatalogError::DuplicateId(1).is_recoverable());
        assert!(CatalogError::AddFailed(1).is_recoverable());
    }

    #[test]
    fn environment_errors_are_fatal() {
        assert!(!CatalogError::Io(std::io::Error::other("disk")).is_recoverable());
        assert!(!CatalogError::Config("bad".into()).is_recoverable());
    }

    #[test]
    fn add_failed_names_the_product() {
        assert_eq!(
            CatalogError::AddFailed(42).to_string(),
            "Failed to add product 42."
        );
    }
}
