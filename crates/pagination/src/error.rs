//! Error types for the pagination crate.

use thiserror::Error;

/// Errors raised while building entity lists or reading request parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaginationError {
    /// An entity list was requested without a sequence of entities.
    ///
    /// Use [`crate::EntityList::empty`] to represent an empty page.
    #[error("entities must not be null")]
    MissingEntities,

    /// A numeric query parameter was not a non-negative integer.
    #[error("invalid query parameter {name}: '{value}' is not a non-negative integer")]
    InvalidQueryParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// Raw value supplied for the parameter.
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_entities_formats_correctly() {
        assert_eq!(
            PaginationError::MissingEntities.to_string(),
            "entities must not be null"
        );
    }

    #[test]
    fn invalid_query_parameter_formats_correctly() {
        let err = PaginationError::InvalidQueryParameter {
            name: "limit",
            value: "ten".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "invalid query parameter limit: 'ten' is not a non-negative integer"
        );
    }
}
