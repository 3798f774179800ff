//! The rewrite engine
//!
//! Simplification runs in two stages over the token sequence:
//!
//! 1. **Innermost groups first.** Each parenthesized group is simplified on
//!    its own as soon as it closes, so by the time a group is rewritten all
//!    groups nested in it already are. The result replaces the group, keeping
//!    its parentheses unless it is a single operand.
//! 2. **Top level.** The flattened top-level sequence is simplified the same
//!    way.
//!
//! "Simplified" means the [catalog()] is applied pass after pass until a whole
//! pass changes nothing. Every pass of a call is counted against the
//! configured budget; running out is a [`SimplificationFailure::NonConvergent`].

pub mod catalog;
pub mod pattern;

pub use catalog::catalog;
pub use pattern::{Elem, Family, Rule, Slot, Strength};

use crate::error::SimplificationFailure;
use crate::token::{is_operand, render, Token};
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Counters for one simplification
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimplifyStats {
    /// Catalog passes run, across all groups and the top level
    pub passes: usize,
    /// Individual rule replacements
    pub rewrites: usize,
    /// Parenthesized groups simplified
    pub groups: usize,
}

/// State of one simplification call
pub(crate) struct Run<'a> {
    rules: &'a [Rule],
    max_passes: usize,
    stats: SimplifyStats,
}

impl<'a> Run<'a> {
    pub(crate) fn new(rules: &'a [Rule], max_passes: usize) -> Self {
        Run {
            rules,
            max_passes,
            stats: SimplifyStats::default(),
        }
    }

    pub(crate) fn stats(&self) -> SimplifyStats {
        self.stats
    }

    /// Simplify a whole token sequence, innermost groups first
    pub(crate) fn simplify(&mut self, tokens: &[Token]) -> Result<Vec<Token>, SimplificationFailure> {
        let mut top: Vec<Token> = Vec::with_capacity(tokens.len());
        // Open groups: position of the `(` and the interior collected so far
        let mut open: Vec<(usize, Vec<Token>)> = Vec::new();

        for (position, token) in tokens.iter().enumerate() {
            match token {
                Token::Open => open.push((position, Vec::new())),
                Token::Close => {
                    let (start, interior) = open
                        .pop()
                        .ok_or_else(|| unbalanced(position, tokens))?;
                    let simplified = self.fixed_point(interior)?;
                    self.stats.groups += 1;
                    debug!(
                        start,
                        end = position,
                        result = %render(&simplified),
                        "simplified group"
                    );
                    let target = match open.last_mut() {
                        Some((_, interior)) => interior,
                        None => &mut top,
                    };
                    push_group(target, simplified);
                }
                other => {
                    let target = match open.last_mut() {
                        Some((_, interior)) => interior,
                        None => &mut top,
                    };
                    target.push(other.clone());
                }
            }
        }

        if let Some((start, _)) = open.last() {
            return Err(unbalanced(*start, tokens));
        }

        self.fixed_point(top)
    }

    /// Apply the catalog until a full pass changes nothing
    pub(crate) fn fixed_point(
        &mut self,
        mut tokens: Vec<Token>,
    ) -> Result<Vec<Token>, SimplificationFailure> {
        loop {
            if self.stats.passes >= self.max_passes {
                warn!(
                    passes = self.stats.passes,
                    expression = %render(&tokens),
                    "pass budget exhausted"
                );
                return Err(SimplificationFailure::NonConvergent {
                    passes: self.stats.passes,
                    expression: Arc::from(render(&tokens)),
                });
            }
            self.stats.passes += 1;

            let before = tokens.clone();
            for rule in self.rules {
                let (rewritten, fired) = rule.apply(&tokens);
                if fired > 0 {
                    debug!(family = %rule.family(), fired, "rule fired");
                    self.stats.rewrites += fired;
                    tokens = rewritten;
                }
            }
            trace!(pass = self.stats.passes, expression = %render(&tokens), "catalog pass");

            if tokens == before {
                return Ok(tokens);
            }
        }
    }
}

/// Put a simplified group back into its parent
///
/// A single operand needs no parentheses; anything else is re-wrapped so the
/// parent still sees one operand in that place.
fn push_group(target: &mut Vec<Token>, interior: Vec<Token>) {
    if is_operand(&interior) {
        target.extend(interior);
    } else {
        target.push(Token::Open);
        target.extend(interior);
        target.push(Token::Close);
    }
}

fn unbalanced(position: usize, tokens: &[Token]) -> SimplificationFailure {
    SimplificationFailure::UnbalancedParentheses {
        position,
        input: Arc::from(render(tokens)),
    }
}
