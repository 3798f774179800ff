//! Error types for expression simplification
//!
//! Simplification has a single failure type. Callers are not expected to
//! inspect it beyond reporting that the expression could not be simplified,
//! but the variants keep enough context for logs and tests.

use std::fmt;
use std::io;
use std::sync::Arc;

/// The simplification pipeline could not produce a result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimplificationFailure {
    /// A `)` without a matching `(`, or a `(` that is never closed
    UnbalancedParentheses {
        /// Token index of the offending parenthesis
        position: usize,
        /// The input as normalized text
        input: Arc<str>,
    },

    /// The rule catalog did not reach a fixed point within the pass budget
    NonConvergent {
        /// Catalog passes run before giving up
        passes: usize,
        /// The expression at the point the budget ran out
        expression: Arc<str>,
    },
}

impl fmt::Display for SimplificationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimplificationFailure::UnbalancedParentheses { position, input } => write!(
                f,
                "Unbalanced parenthesis at token {}. Input: {:?}",
                position, input
            ),
            SimplificationFailure::NonConvergent { passes, expression } => write!(
                f,
                "Simplification did not converge after {} passes. Last expression: {:?}",
                passes, expression
            ),
        }
    }
}

impl std::error::Error for SimplificationFailure {}

impl From<SimplificationFailure> for io::Error {
    fn from(err: SimplificationFailure) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}
