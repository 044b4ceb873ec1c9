//! Error types for the query pipeline.

use thiserror::Error;

/// Errors surfaced by the pipeline entry points.
///
/// Schema validation itself never fails with this type: the validator
/// returns its findings as a list of plain strings. This enum exists for
/// the composed entry points, which fold a non-empty finding list into a
/// single error, and for the algebra builder, which refuses queries that
/// skipped validation.
#[derive(Debug, Error)]
pub enum QueryError {
    /// The query failed schema validation.
    ///
    /// Carries all validation messages joined with `", "`, in the order
    /// the validator produced them.
    #[error("validation failed: {0}")]
    Validation(String),

    /// A clause required by the algebra builder is missing.
    #[error("missing required clause: {0}")]
    MissingClause(String),
}

impl QueryError {
    /// Folds validator findings into a single [`QueryError::Validation`].
    #[must_use]
    pub fn from_messages(messages: &[String]) -> Self {
        Self::Validation(messages.join(", "))
    }
}

/// Result type for pipeline operations.
pub type QueryResult<T> = Result<T, QueryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_joins_messages() {
        let err = QueryError::from_messages(&[
            "table 'X' does not exist".to_string(),
            "field 'y' does not exist in table 'X'".to_string(),
        ]);
        assert_eq!(
            err.to_string(),
            "validation failed: table 'X' does not exist, field 'y' does not exist in table 'X'"
        );
    }

    #[test]
    fn missing_clause_display() {
        let err = QueryError::MissingClause("FROM".to_string());
        assert_eq!(err.to_string(), "missing required clause: FROM");
    }
}
