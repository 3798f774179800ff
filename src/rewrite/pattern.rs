//! Rewrite rules and the token-level matcher
//!
//! A [`Rule`] is a pattern and a replacement over [`Elem`]s. Patterns match a
//! contiguous run of tokens; placeholders bind variables (`X`, `Y`, `Z`) or a
//! parenthesis-free run of tokens (`E`). Rules are declared with the
//! `rule!` macro from `boolcalc-macros`.
//!
//! Because matching is textual, a match is only replaced when its
//! neighbours cannot bind tighter than the pattern does. See [`Strength`].

use crate::token::{Token, Variable};
use std::fmt;
use std::ops::Range;

/// A variable placeholder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    X,
    Y,
    Z,
}

impl Slot {
    const fn index(self) -> usize {
        match self {
            Slot::X => 0,
            Slot::Y => 1,
            Slot::Z => 2,
        }
    }
}

/// One element of a pattern or replacement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Elem {
    Open,
    Close,
    And,
    Or,
    Not,
    Const(bool),
    /// Any of `A`, `B`, `C`; the same slot always binds the same letter
    Var(Slot),
    /// A non-empty run of tokens without parentheses
    Fragment,
}

impl Elem {
    /// The token a literal element stands for
    fn literal(self) -> Option<Token> {
        match self {
            Elem::Open => Some(Token::Open),
            Elem::Close => Some(Token::Close),
            Elem::And => Some(Token::And),
            Elem::Or => Some(Token::Or),
            Elem::Not => Some(Token::Not),
            Elem::Const(value) => Some(value.into()),
            Elem::Var(_) | Elem::Fragment => None,
        }
    }
}

/// The identity a rule is an instance of
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Idempotence,
    DoubleNegation,
    ComplementAnd,
    ComplementOr,
    Absorption,
    Distribution,
    Identity,
    ConstantFolding,
    ParenthesisCleanup,
}

impl Family {
    pub fn name(self) -> &'static str {
        match self {
            Family::Idempotence => "idempotence",
            Family::DoubleNegation => "double_negation",
            Family::ComplementAnd => "complement_and",
            Family::ComplementOr => "complement_or",
            Family::Absorption => "absorption",
            Family::Distribution => "distribution",
            Family::Identity => "identity",
            Family::ConstantFolding => "constant_folding",
            Family::ParenthesisCleanup => "parenthesis_cleanup",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How tightly a pattern binds, from its top-level operator
///
/// Ordered from loosest to tightest. A pattern with a `|` outside any
/// parentheses is `Or`, else one with a `&` outside parentheses is `And`,
/// else it is an `Atom`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Strength {
    Or,
    And,
    Atom,
}

impl Strength {
    /// Strength of a pattern or replacement
    pub const fn of(elems: &[Elem]) -> Strength {
        let mut depth = 0usize;
        let mut has_and = false;
        let mut has_or = false;
        let mut i = 0;
        while i < elems.len() {
            match elems[i] {
                Elem::Open => depth += 1,
                Elem::Close => depth = depth.saturating_sub(1),
                Elem::And if depth == 0 => has_and = true,
                Elem::Or if depth == 0 => has_or = true,
                _ => {}
            }
            i += 1;
        }
        if has_or {
            Strength::Or
        } else if has_and {
            Strength::And
        } else {
            Strength::Atom
        }
    }

    /// Whether a match of this strength between `prev` and `next` is a
    /// complete subexpression
    ///
    /// Precedence is `~` over `&` over `|`. A `~` before an `&` match would
    /// negate only its first operand; an `&` on either side of an `|` match
    /// would take one of its operands.
    pub fn admits(self, prev: Option<&Token>, next: Option<&Token>) -> bool {
        match self {
            Strength::Atom => true,
            Strength::And => !matches!(prev, Some(Token::Not)),
            Strength::Or => {
                !matches!(prev, Some(Token::Not) | Some(Token::And))
                    && !matches!(next, Some(Token::And))
            }
        }
    }
}

/// Placeholder bindings of one successful match
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Match {
    /// One past the last matched token
    pub(crate) end: usize,
    vars: [Option<Variable>; 3],
    fragment: Option<Range<usize>>,
}

/// A sound rewrite: `pattern` may be replaced by `replacement`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    family: Family,
    pattern: &'static [Elem],
    replacement: &'static [Elem],
    strength: Strength,
}

impl Rule {
    pub const fn new(
        family: Family,
        pattern: &'static [Elem],
        replacement: &'static [Elem],
    ) -> Self {
        Rule {
            family,
            pattern,
            replacement,
            strength: Strength::of(pattern),
        }
    }

    pub fn family(&self) -> Family {
        self.family
    }

    pub fn pattern(&self) -> &'static [Elem] {
        self.pattern
    }

    pub fn replacement(&self) -> &'static [Elem] {
        self.replacement
    }

    pub fn strength(&self) -> Strength {
        self.strength
    }

    /// Try to match the pattern starting at `tokens[start]`
    ///
    /// `E` is greedy: it takes the whole parenthesis-free run and is never
    /// shortened to let the rest of the pattern match.
    pub(crate) fn match_at(&self, tokens: &[Token], start: usize) -> Option<Match> {
        let mut vars: [Option<Variable>; 3] = [None; 3];
        let mut fragment = None;
        let mut pos = start;

        for elem in self.pattern {
            match *elem {
                Elem::Var(slot) => {
                    let var = match tokens.get(pos) {
                        Some(Token::Var(var)) => *var,
                        _ => return None,
                    };
                    match vars[slot.index()] {
                        Some(bound) if bound != var => return None,
                        _ => vars[slot.index()] = Some(var),
                    }
                    pos += 1;
                }
                Elem::Fragment => {
                    let len = tokens
                        .get(pos..)?
                        .iter()
                        .take_while(|token| !token.is_paren())
                        .count();
                    if len == 0 {
                        return None;
                    }
                    fragment = Some(pos..pos + len);
                    pos += len;
                }
                literal => {
                    if tokens.get(pos) != literal.literal().as_ref() {
                        return None;
                    }
                    pos += 1;
                }
            }
        }

        Some(Match {
            end: pos,
            vars,
            fragment,
        })
    }

    /// Append the replacement for `m` to `out`
    pub(crate) fn instantiate(&self, m: &Match, tokens: &[Token], out: &mut Vec<Token>) {
        for elem in self.replacement {
            match *elem {
                Elem::Var(slot) => out.extend(m.vars[slot.index()].map(Token::from)),
                Elem::Fragment => {
                    if let Some(range) = &m.fragment {
                        out.extend_from_slice(&tokens[range.clone()]);
                    }
                }
                literal => out.extend(literal.literal()),
            }
        }
    }

    /// Replace every admissible, non-overlapping match, scanning left to right
    ///
    /// Returns the rewritten tokens and the number of replacements.
    pub(crate) fn apply(&self, tokens: &[Token]) -> (Vec<Token>, usize) {
        let mut out = Vec::with_capacity(tokens.len());
        let mut fired = 0;
        let mut pos = 0;

        while pos < tokens.len() {
            if let Some(m) = self.match_at(tokens, pos) {
                if self.strength.admits(out.last(), tokens.get(m.end)) {
                    self.instantiate(&m, tokens, &mut out);
                    pos = m.end;
                    fired += 1;
                    continue;
                }
            }
            out.push(tokens[pos].clone());
            pos += 1;
        }

        (out, fired)
    }
}
