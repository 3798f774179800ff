//! Property tests: simplification is sound, stable and bounded
//!
//! Random well-formed expressions over A, B and C are rendered to text,
//! simplified, and compared with the input under all eight assignments.

use boolcalc::{simplify, tokenize, Simplifier, SimplifyConfig, Token};
use proptest::prelude::*;

/// Generated expression, only used to produce test input
#[derive(Debug, Clone)]
enum Gen {
    Var(char),
    Const(bool),
    Not(Box<Gen>),
    And(Box<Gen>, Box<Gen>),
    Or(Box<Gen>, Box<Gen>),
    Group(Box<Gen>),
}

impl Gen {
    /// Render with only the parentheses precedence requires, plus explicit groups
    fn render(&self) -> String {
        match self {
            Gen::Var(v) => v.to_string(),
            Gen::Const(true) => "True".to_string(),
            Gen::Const(false) => "False".to_string(),
            Gen::Not(inner) => match **inner {
                Gen::And(..) | Gen::Or(..) => format!("~({})", inner.render()),
                _ => format!("~{}", inner.render()),
            },
            Gen::And(l, r) => format!("{} & {}", l.render_in_and(), r.render_in_and()),
            Gen::Or(l, r) => format!("{} | {}", l.render(), r.render()),
            Gen::Group(inner) => format!("({})", inner.render()),
        }
    }

    fn render_in_and(&self) -> String {
        match self {
            Gen::Or(..) => format!("({})", self.render()),
            _ => self.render(),
        }
    }
}

fn gen_strategy() -> impl Strategy<Value = Gen> {
    let leaf = prop_oneof![
        4 => prop::sample::select(vec!['A', 'B', 'C']).prop_map(Gen::Var),
        1 => any::<bool>().prop_map(Gen::Const),
    ];
    leaf.prop_recursive(3, 16, 2, |inner| {
        prop_oneof![
            inner.clone().prop_map(|e| Gen::Not(Box::new(e))),
            (inner.clone(), inner.clone()).prop_map(|(l, r)| Gen::And(Box::new(l), Box::new(r))),
            (inner.clone(), inner.clone()).prop_map(|(l, r)| Gen::Or(Box::new(l), Box::new(r))),
            inner.prop_map(|e| Gen::Group(Box::new(e))),
        ]
    })
}

/// Evaluate normalized tokens; precedence is `~` over `&` over `|`
fn eval(tokens: &[Token], env: [bool; 3]) -> bool {
    fn or(tokens: &[Token], pos: &mut usize, env: [bool; 3]) -> bool {
        let mut value = and(tokens, pos, env);
        while tokens.get(*pos) == Some(&Token::Or) {
            *pos += 1;
            let rhs = and(tokens, pos, env);
            value = value || rhs;
        }
        value
    }
    fn and(tokens: &[Token], pos: &mut usize, env: [bool; 3]) -> bool {
        let mut value = unary(tokens, pos, env);
        while tokens.get(*pos) == Some(&Token::And) {
            *pos += 1;
            let rhs = unary(tokens, pos, env);
            value = value && rhs;
        }
        value
    }
    fn unary(tokens: &[Token], pos: &mut usize, env: [bool; 3]) -> bool {
        let token = tokens[*pos].clone();
        *pos += 1;
        match token {
            Token::Not => !unary(tokens, pos, env),
            Token::Open => {
                let value = or(tokens, pos, env);
                assert_eq!(tokens[*pos], Token::Close);
                *pos += 1;
                value
            }
            Token::Var(var) => env[var as usize],
            Token::Const(value) => value,
            other => panic!("unexpected token {:?}", other),
        }
    }
    let mut pos = 0;
    let value = or(tokens, &mut pos, env);
    assert_eq!(pos, tokens.len(), "trailing tokens in {:?}", tokens);
    value
}

fn truth_table(text: &str) -> Vec<bool> {
    let tokens = tokenize(text);
    (0u8..8)
        .map(|bits| eval(&tokens, [bits & 1 != 0, bits & 2 != 0, bits & 4 != 0]))
        .collect()
}

proptest! {
    #[test]
    fn test_simplification_is_sound(expr in gen_strategy()) {
        let input = expr.render();
        let result = simplify(&input).unwrap();
        prop_assert_eq!(
            truth_table(&input),
            truth_table(&result.simplified),
            "{} simplified to {}",
            input,
            result.simplified
        );
    }

    #[test]
    fn test_simplification_is_stable(expr in gen_strategy()) {
        let once = simplify(&expr.render()).unwrap().simplified;
        let twice = simplify(&once).unwrap().simplified;
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn test_simplification_never_grows(expr in gen_strategy()) {
        let input = expr.render();
        let result = simplify(&input).unwrap();
        prop_assert!(tokenize(&result.simplified).len() <= tokenize(&input).len());
    }

    #[test]
    fn test_inputs_finish_within_budget(expr in gen_strategy()) {
        let input = expr.render();
        let simplifier = Simplifier::new(SimplifyConfig { max_passes: 500 });
        let result = simplifier.simplify(&input);
        prop_assert!(result.is_ok(), "{} failed: {:?}", input, result);
    }
}
