//! Error types for querel.

use crate::ast::StatementKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuerelError {
    /// A clause was added to a statement kind that cannot carry it.
    #[error("{clause} is not a valid clause for {kind} statements")]
    InvalidClause {
        clause: &'static str,
        kind: StatementKind,
    },

    /// A JOIN condition must be a boolean-valued criterion.
    #[error("JOIN condition must be a boolean criterion, got a plain expression")]
    InvalidJoinCondition,

    /// The statement kind cannot be resolved any more (e.g. `delete()` after
    /// select-list clauses were added).
    #[error("cannot turn this builder into a {wanted} statement: {reason}")]
    StatementKindFixed {
        wanted: StatementKind,
        reason: &'static str,
    },

    /// IGNORE on INSERT requested for a dialect without that syntax.
    #[error("dialect {dialect} does not support IGNORE on INSERT")]
    IgnoreNotSupported { dialect: &'static str },

    /// The active dialect does not expose the requested statement kind.
    #[error("dialect {dialect} does not support {kind} statements")]
    UnsupportedStatement {
        dialect: &'static str,
        kind: StatementKind,
    },
}

impl QuerelError {
    /// Create an invalid-clause error for the given statement kind.
    pub fn invalid_clause(clause: &'static str, kind: StatementKind) -> Self {
        Self::InvalidClause { clause, kind }
    }
}

/// Result type alias for querel operations.
pub type QuerelResult<T> = Result<T, QuerelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = QuerelError::invalid_clause("GROUP BY", StatementKind::Insert);
        assert_eq!(
            err.to_string(),
            "GROUP BY is not a valid clause for INSERT statements"
        );
    }
}
