use thiserror::Error;

/// Errors raised while building extensions or normalizing queries.
///
/// Every variant describes a programming error in the caller: the operations
/// are pure, so retrying with the same input fails the same way.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtensionError {
    /// A required precondition on an argument does not hold.
    #[error("invalid argument: {message}")]
    InvalidArgument { message: &'static str },

    /// A value matched none of the recognised query shapes.
    #[error("invalid query {query}")]
    InvalidQuery { query: String },

    /// A slot id was registered twice in the same lookup table.
    #[error("slot id '{id}' is already registered")]
    DuplicateSlot { id: String },

    /// A filter name was registered twice in the same lookup table.
    #[error("filter '{name}' is already registered")]
    DuplicateFilter { name: String },
}

impl ExtensionError {
    pub fn invalid_argument(message: &'static str) -> Self {
        Self::InvalidArgument { message }
    }

    pub fn invalid_query(query: impl ToString) -> Self {
        Self::InvalidQuery {
            query: query.to_string(),
        }
    }
}
