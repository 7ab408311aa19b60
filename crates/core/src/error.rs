//! Error types for the cinerec recommendation core
//!
//! Every failure here is a deterministic property of the input, never a
//! transient condition; callers decide whether to log, abort, or fall back.

use thiserror::Error;

/// Errors produced by the recommendation core.
#[derive(Debug, Error)]
pub enum RecError {
    /// An identifier or position referenced in a query does not exist.
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    /// The requested decomposition rank is infeasible for the matrix shape.
    #[error("rank {rank} is infeasible for a {rows}x{cols} ratings matrix")]
    InvalidRank {
        rank: usize,
        rows: usize,
        cols: usize,
    },

    /// Too few observed ratings to fit a model.
    #[error("need at least {needed} positively rated cells, found {found}")]
    InsufficientData { needed: usize, found: usize },

    /// An operation that requires non-empty input received an empty one.
    #[error("degenerate input: {0}")]
    DegenerateInput(String),

    /// A record failed ingestion validation.
    #[error("invalid {entity} record: {reason}")]
    InvalidRecord {
        entity: &'static str,
        reason: String,
    },
}

impl RecError {
    /// Shorthand for a missing entity.
    pub fn not_found(entity: &'static str, id: i64) -> Self {
        Self::NotFound { entity, id }
    }

    /// Shorthand for an empty-input failure.
    pub fn degenerate(reason: impl Into<String>) -> Self {
        Self::DegenerateInput(reason.into())
    }

    /// Wrap a `validator` failure for the given entity.
    pub fn invalid_record(entity: &'static str, errors: &validator::ValidationErrors) -> Self {
        Self::InvalidRecord {
            entity,
            reason: errors.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RecError::not_found("movie", 42);
        assert_eq!(err.to_string(), "movie 42 not found");

        let err = RecError::InvalidRank {
            rank: 3,
            rows: 2,
            cols: 3,
        };
        assert_eq!(
            err.to_string(),
            "rank 3 is infeasible for a 2x3 ratings matrix"
        );

        let err = RecError::InsufficientData {
            needed: 2,
            found: 1,
        };
        assert!(err.to_string().contains("at least 2"));
    }
}
