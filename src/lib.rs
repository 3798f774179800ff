//! # boolcalc
//!
//! Algebraic simplification of boolean expressions over the variables `A`,
//! `B` and `C`.
//!
//! ## Overview
//!
//! An expression is written with the literals `True` and `False`, the
//! operators `&` (AND), `|` (OR), `~` (NOT) and parentheses. It is split into
//! [tokens](token) and rewritten with a fixed catalog of identities until no
//! rule applies:
//!
//! - idempotence (`A & A` → `A`)
//! - double negation (`~~A` → `A`)
//! - complement (`A & ~A` → `False`, `A | ~A` → `True`)
//! - absorption (`A & (A | B)` → `A`)
//! - distribution (`(A & B) | (A & C)` → `A & (B | C)`)
//! - identity and constant folding (`A | True` → `True`, `~False` → `True`)
//! - redundant parentheses (`((A & B))` → `(A & B)`, `(A)` → `A`)
//!
//! Parenthesized groups are simplified innermost first, then the top level.
//! The result is equivalent to the input but not guaranteed to be minimal:
//! the engine stops when the catalog stops firing.
//!
//! ## Quick Start
//!
//! ```
//! use boolcalc::simplify;
//!
//! # fn main() -> Result<(), boolcalc::SimplificationFailure> {
//! let result = simplify("(A & B) | (A & C)")?;
//! assert_eq!(result.simplified, "A & (B | C)");
//!
//! let result = simplify("(A & (A | B))")?;
//! assert_eq!(result.simplified, "A");
//! # Ok(())
//! # }
//! ```
//!
//! ## Configuration
//!
//! Every catalog pass counts against a budget. Exhausting it is reported as
//! [`SimplificationFailure::NonConvergent`] instead of looping:
//!
//! ```
//! use boolcalc::{SimplificationFailure, Simplifier, SimplifyConfig};
//!
//! let simplifier = Simplifier::new(SimplifyConfig { max_passes: 1 });
//! let err = simplifier.simplify("A & A").unwrap_err();
//! assert!(matches!(err, SimplificationFailure::NonConvergent { .. }));
//! ```
//!
//! ## Malformed Input
//!
//! Unknown words and stray characters are carried through unchanged.
//! Unbalanced parentheses are a [`SimplificationFailure`].
//!
//! ## Logging
//!
//! The engine reports rule firings at `debug` and each catalog pass at
//! `trace` through [`tracing`]. Install a subscriber to see them.

pub mod batch;
pub mod error;
pub mod rewrite;
pub mod token;

pub use error::SimplificationFailure;
pub use rewrite::SimplifyStats;
pub use token::{render, tokenize, Token, Variable};

use rewrite::{catalog, Rule, Run};
use tracing::debug;

/// Default number of catalog passes allowed per call
pub const DEFAULT_MAX_PASSES: usize = 500;

/// Configuration for the simplifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimplifyConfig {
    /// Catalog passes allowed per call, counted over all groups
    pub max_passes: usize,
}

impl Default for SimplifyConfig {
    fn default() -> Self {
        SimplifyConfig {
            max_passes: DEFAULT_MAX_PASSES,
        }
    }
}

impl SimplifyConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }
}

/// Outcome of simplifying one expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Simplification {
    /// The input, exactly as given
    pub original: String,
    /// The simplified expression as normalized text
    pub simplified: String,
    /// Work done to get there
    pub stats: SimplifyStats,
}

impl Simplification {
    /// Whether the result differs from the normalized input
    ///
    /// Spacing differences alone do not count.
    pub fn changed(&self) -> bool {
        render(&tokenize(&self.original)) != self.simplified
    }

    /// The result's truth value, if it simplified to a literal
    ///
    /// ```
    /// # fn main() -> Result<(), boolcalc::SimplificationFailure> {
    /// assert_eq!(boolcalc::simplify("B | ~B")?.as_constant(), Some(true));
    /// assert_eq!(boolcalc::simplify("B | C")?.as_constant(), None);
    /// # Ok(())
    /// # }
    /// ```
    pub fn as_constant(&self) -> Option<bool> {
        match self.simplified.as_str() {
            "True" => Some(true),
            "False" => Some(false),
            _ => None,
        }
    }
}

/// Simplifies expressions with the built-in rule catalog
///
/// Holds only configuration; each call is independent, so one simplifier
/// can be shared between threads.
#[derive(Debug, Clone)]
pub struct Simplifier {
    config: SimplifyConfig,
    rules: &'static [Rule],
}

impl Default for Simplifier {
    fn default() -> Self {
        Simplifier::new(SimplifyConfig::default())
    }
}

impl Simplifier {
    /// Create a simplifier over the built-in catalog
    pub fn new(config: SimplifyConfig) -> Self {
        Simplifier {
            config,
            rules: catalog(),
        }
    }

    /// The configuration this simplifier runs with
    pub fn config(&self) -> &SimplifyConfig {
        &self.config
    }

    /// Simplify raw expression text
    pub fn simplify(&self, raw: &str) -> Result<Simplification, SimplificationFailure> {
        let tokens = tokenize(raw);
        let (simplified, stats) = self.simplify_tokens_with_stats(&tokens)?;
        let simplified = render(&simplified);
        debug!(
            input = raw,
            output = %simplified,
            passes = stats.passes,
            rewrites = stats.rewrites,
            "simplified expression"
        );
        Ok(Simplification {
            original: raw.to_string(),
            simplified,
            stats,
        })
    }

    /// Simplify an already tokenized expression
    pub fn simplify_tokens(&self, tokens: &[Token]) -> Result<Vec<Token>, SimplificationFailure> {
        self.simplify_tokens_with_stats(tokens)
            .map(|(tokens, _)| tokens)
    }

    fn simplify_tokens_with_stats(
        &self,
        tokens: &[Token],
    ) -> Result<(Vec<Token>, SimplifyStats), SimplificationFailure> {
        let mut run = Run::new(self.rules, self.config.max_passes);
        let simplified = run.simplify(tokens)?;
        Ok((simplified, run.stats()))
    }
}

/// Simplify raw expression text with the default configuration
///
/// ```
/// # fn main() -> Result<(), boolcalc::SimplificationFailure> {
/// let result = boolcalc::simplify("A | True")?;
/// assert_eq!(result.original, "A | True");
/// assert_eq!(result.simplified, "True");
/// # Ok(())
/// # }
/// ```
pub fn simplify(raw: &str) -> Result<Simplification, SimplificationFailure> {
    Simplifier::default().simplify(raw)
}
