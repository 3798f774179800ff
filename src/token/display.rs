//! Display formatting for tokens and normalized expression text

use super::{Token, Variable};
use std::fmt;

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Formats a token as the fragment it was read from
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Var(var) => write!(f, "{}", var),
            Token::Const(true) => write!(f, "True"),
            Token::Const(false) => write!(f, "False"),
            Token::And => write!(f, "&"),
            Token::Or => write!(f, "|"),
            Token::Not => write!(f, "~"),
            Token::Open => write!(f, "("),
            Token::Close => write!(f, ")"),
            Token::Other(text) => write!(f, "{}", text),
        }
    }
}

/// Render tokens as normalized expression text
///
/// Tokens are separated by one space, except that `~` and `(` are not
/// followed by a space and `)` is not preceded by one.
///
/// # Examples
///
/// ```
/// use boolcalc::token::{render, tokenize};
///
/// assert_eq!(render(&tokenize("A&(B|~ C)")), "A & (B | ~C)");
/// assert_eq!(render(&tokenize("~ ( A )")), "~(A)");
/// ```
pub fn render(tokens: &[Token]) -> String {
    let mut out = String::new();
    let mut prev: Option<&Token> = None;
    for token in tokens {
        let glued = match prev {
            None => true,
            Some(Token::Not) | Some(Token::Open) => true,
            Some(_) => *token == Token::Close,
        };
        if !glued {
            out.push(' ');
        }
        out.push_str(&token.to_string());
        prev = Some(token);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::tokenize;

    #[test]
    fn test_token_display() {
        assert_eq!(Token::Var(Variable::B).to_string(), "B");
        assert_eq!(Token::Const(false).to_string(), "False");
        assert_eq!(Token::Or.to_string(), "|");
    }

    #[test]
    fn test_render_spacing() {
        assert_eq!(render(&tokenize("A&B|C")), "A & B | C");
        assert_eq!(render(&tokenize("( A & B )")), "(A & B)");
        assert_eq!(render(&tokenize("~ ~ A")), "~~A");
        assert_eq!(render(&tokenize("~(A|B)")), "~(A | B)");
        assert_eq!(render(&tokenize("((A))")), "((A))");
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render(&[]), "");
    }

    #[test]
    fn test_render_is_stable() {
        let text = "A & (B | ~C) | True";
        assert_eq!(render(&tokenize(text)), text);
    }
}
