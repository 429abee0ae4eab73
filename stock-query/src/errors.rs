use crate::fields::FieldKey;

/// Error types for query parsing. Parsing is atomic: the first clause that
/// fails aborts the whole query and carries its own text in the error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// Clause does not match the `field operator number` shape.
    InvalidFormat { clause: String },
    /// Field segment resolves to no canonical key.
    UnknownField { clause: String, field: String },
    /// Numeric segment fails to parse. Defensive: the clause pattern should
    /// make this unreachable.
    InvalidNumber { clause: String, value: String },
}

impl std::fmt::Display for QueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryError::InvalidFormat { clause } => write!(
                f,
                "Error in query clause \"{}\": invalid format, use e.g. \"Market Cap > 500\"",
                clause
            ),
            QueryError::UnknownField { clause, field } => write!(
                f,
                "Error in query clause \"{}\": unknown field \"{}\". Available fields: {}",
                clause,
                field,
                FieldKey::labels_joined()
            ),
            QueryError::InvalidNumber { clause, value } => write!(
                f,
                "Error in query clause \"{}\": invalid numeric value \"{}\"",
                clause, value
            ),
        }
    }
}

impl std::error::Error for QueryError {}
