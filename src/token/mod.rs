//! Tokens of the boolean expression language
//!
//! An expression is a flat sequence of [`Token`]s. There is no tree: the
//! rewrite engine matches patterns directly against the sequence.
//!
//! # Example
//!
//! ```
//! use boolcalc::token::{render, tokenize, Token, Variable};
//!
//! let tokens = tokenize("(A&~B)");
//! assert_eq!(tokens[1], Token::Var(Variable::A));
//! assert_eq!(render(&tokens), "(A & ~B)");
//! ```

mod display;
mod tokenizer;

pub use display::render;
pub use tokenizer::{fragments, tokenize};

use std::sync::Arc;

/// One of the three variable names an expression may use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Variable {
    A,
    B,
    C,
}

impl Variable {
    /// All variables, in alphabetical order
    pub const ALL: [Variable; 3] = [Variable::A, Variable::B, Variable::C];

    /// The variable's letter
    pub fn letter(self) -> char {
        match self {
            Variable::A => 'A',
            Variable::B => 'B',
            Variable::C => 'C',
        }
    }
}

/// An atomic unit of an expression
///
/// Tokens carry no position. `Other` holds any fragment the language does not
/// know; it is never rewritten and is rendered back verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// `A`, `B` or `C`
    Var(Variable),
    /// `True` or `False`
    Const(bool),
    /// `&`
    And,
    /// `|`
    Or,
    /// `~`
    Not,
    /// `(`
    Open,
    /// `)`
    Close,
    /// Unrecognised fragment, passed through untouched
    Other(Arc<str>),
}

impl Token {
    /// Classify a tokenizer fragment
    pub fn from_fragment(fragment: &str) -> Self {
        match fragment {
            "A" => Token::Var(Variable::A),
            "B" => Token::Var(Variable::B),
            "C" => Token::Var(Variable::C),
            "True" => Token::Const(true),
            "False" => Token::Const(false),
            "&" => Token::And,
            "|" => Token::Or,
            "~" => Token::Not,
            "(" => Token::Open,
            ")" => Token::Close,
            other => Token::Other(Arc::from(other)),
        }
    }

    /// True for tokens that stand for a value on their own
    pub fn is_atom(&self) -> bool {
        matches!(self, Token::Var(_) | Token::Const(_) | Token::Other(_))
    }

    /// True for `(` and `)`
    pub fn is_paren(&self) -> bool {
        matches!(self, Token::Open | Token::Close)
    }
}

impl From<Variable> for Token {
    fn from(var: Variable) -> Self {
        Token::Var(var)
    }
}

impl From<bool> for Token {
    fn from(value: bool) -> Self {
        Token::Const(value)
    }
}

/// Find the `)` matching the `(` at `open`
///
/// Returns `None` if `tokens[open]` is not `(` or the group is never closed.
pub(crate) fn matching_close(tokens: &[Token], open: usize) -> Option<usize> {
    if tokens.get(open) != Some(&Token::Open) {
        return None;
    }
    let mut depth = 0usize;
    for (index, token) in tokens.iter().enumerate().skip(open) {
        match token {
            Token::Open => depth += 1,
            Token::Close => {
                depth -= 1;
                if depth == 0 {
                    return Some(index);
                }
            }
            _ => {}
        }
    }
    None
}

/// True if `tokens` form a single operand
///
/// An operand is one atom, one fully parenthesized group, or `~` applied to
/// an operand. Such a sequence can stand anywhere without parentheses.
pub(crate) fn is_operand(tokens: &[Token]) -> bool {
    let rest = match tokens.iter().position(|t| *t != Token::Not) {
        Some(start) => &tokens[start..],
        None => return false,
    };
    match rest {
        [single] => single.is_atom(),
        [Token::Open, ..] => matching_close(rest, 0) == Some(rest.len() - 1),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fragment() {
        assert_eq!(Token::from_fragment("A"), Token::Var(Variable::A));
        assert_eq!(Token::from_fragment("True"), Token::Const(true));
        assert_eq!(Token::from_fragment("False"), Token::Const(false));
        assert_eq!(Token::from_fragment("~"), Token::Not);
        assert_eq!(Token::from_fragment("D"), Token::Other(Arc::from("D")));
        // Literals are case sensitive
        assert_eq!(Token::from_fragment("true"), Token::Other(Arc::from("true")));
    }

    #[test]
    fn test_from_variable_and_bool() {
        assert_eq!(Token::from(Variable::C), Token::Var(Variable::C));
        let tokens: Vec<Token> = vec![Variable::A.into(), Token::And, false.into()];
        assert_eq!(render(&tokens), "A & False");
    }

    #[test]
    fn test_matching_close() {
        let tokens = tokenize("(A & (B | C)) | C");
        assert_eq!(matching_close(&tokens, 0), Some(8));
        assert_eq!(matching_close(&tokens, 3), Some(7));
        assert_eq!(matching_close(&tokens, 1), None);
        assert_eq!(matching_close(&tokenize("(A & B"), 0), None);
    }

    #[test]
    fn test_is_operand() {
        assert!(is_operand(&tokenize("A")));
        assert!(is_operand(&tokenize("False")));
        assert!(is_operand(&tokenize("~~A")));
        assert!(is_operand(&tokenize("(A | B)")));
        assert!(is_operand(&tokenize("~(A | B)")));
        assert!(!is_operand(&tokenize("A & B")));
        assert!(!is_operand(&tokenize("(A) | (B)")));
        assert!(!is_operand(&tokenize("~")));
        assert!(!is_operand(&[]));
    }
}
