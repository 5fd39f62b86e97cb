use thiserror::Error;

/// Errors raised by token directory operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DirectoryError {
    #[error("{entity} not found")]
    NotFound { entity: &'static str, id: i64 },

    #[error("Invalid sort field: {0}")]
    InvalidSortField(String),

    #[error("Unknown blockchain: {0}")]
    UnknownBlockchain(i64),

}

impl DirectoryError {
    pub fn token_not_found(id: i64) -> Self {
        DirectoryError::NotFound {
            entity: "Token",
            id,
        }
    }

    pub fn blockchain_not_found(id: i64) -> Self {
        DirectoryError::NotFound {
            entity: "Blockchain",
            id,
        }
    }

    /// Stable machine-readable code used in HTTP error bodies
    pub fn code(&self) -> &'static str {
        match self {
            DirectoryError::NotFound { .. } => "NOT_FOUND",
            DirectoryError::InvalidSortField(_) => "INVALID_SORT_FIELD",
            DirectoryError::UnknownBlockchain(_) => "UNKNOWN_BLOCKCHAIN",
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, DirectoryError::NotFound { .. })
    }
}

pub type DirectoryResult<T> = Result<T, DirectoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = DirectoryError::token_not_found(7);
        assert_eq!(err.to_string(), "Token not found");
        assert_eq!(err.code(), "NOT_FOUND");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_codes() {
        assert_eq!(
            DirectoryError::InvalidSortField("price".into()).code(),
            "INVALID_SORT_FIELD"
        );
        assert_eq!(DirectoryError::UnknownBlockchain(9).code(), "UNKNOWN_BLOCKCHAIN");
    }
}
