//! Splitting raw text into tokens

use super::Token;

/// Split raw text into fragments
///
/// Whitespace separates fragments and is dropped. Each of `(`, `)`, `&`, `|`
/// and `~` is a fragment of its own; every other character extends the
/// current fragment. This never fails: garbage comes out as garbage
/// fragments, in input order.
///
/// # Examples
///
/// ```
/// use boolcalc::token::fragments;
///
/// assert_eq!(fragments("(A & ~B)"), ["(", "A", "&", "~", "B", ")"]);
/// assert_eq!(fragments("A&B"), ["A", "&", "B"]);
/// assert!(fragments("").is_empty());
/// ```
pub fn fragments(raw: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start: Option<usize> = None;

    for (index, ch) in raw.char_indices() {
        let standalone = matches!(ch, '(' | ')' | '&' | '|' | '~');
        if ch.is_whitespace() || standalone {
            if let Some(begin) = start.take() {
                out.push(&raw[begin..index]);
            }
            if standalone {
                out.push(&raw[index..index + ch.len_utf8()]);
            }
        } else if start.is_none() {
            start = Some(index);
        }
    }

    if let Some(begin) = start {
        out.push(&raw[begin..]);
    }
    out
}

/// Tokenize raw text
///
/// Equivalent to classifying every [`fragments`] entry with
/// [`Token::from_fragment`].
pub fn tokenize(raw: &str) -> Vec<Token> {
    fragments(raw).into_iter().map(Token::from_fragment).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::Variable;
    use std::sync::Arc;

    #[test]
    fn test_fragments_group() {
        assert_eq!(fragments("(A & ~B)"), vec!["(", "A", "&", "~", "B", ")"]);
    }

    #[test]
    fn test_fragments_without_spaces() {
        assert_eq!(fragments("A&B"), vec!["A", "&", "B"]);
        assert_eq!(fragments("~~A|(B&C)"), vec!["~", "~", "A", "|", "(", "B", "&", "C", ")"]);
    }

    #[test]
    fn test_fragments_empty_and_blank() {
        assert!(fragments("").is_empty());
        assert!(fragments("   \t\n").is_empty());
    }

    #[test]
    fn test_fragments_literals_and_garbage() {
        assert_eq!(fragments("True|False"), vec!["True", "|", "False"]);
        // Unknown runs are kept whole
        assert_eq!(fragments("AB & x1"), vec!["AB", "&", "x1"]);
        assert_eq!(fragments("A  \t B"), vec!["A", "B"]);
    }

    #[test]
    fn test_fragments_non_ascii() {
        assert_eq!(fragments("é&ß"), vec!["é", "&", "ß"]);
        // Non-breaking space is whitespace too
        assert_eq!(fragments("A\u{a0}B"), vec!["A", "B"]);
    }

    #[test]
    fn test_tokenize_classifies() {
        let tokens = tokenize("~A | True & q");
        assert_eq!(
            tokens,
            vec![
                Token::Not,
                Token::Var(Variable::A),
                Token::Or,
                Token::Const(true),
                Token::And,
                Token::Other(Arc::from("q")),
            ]
        );
    }
}
