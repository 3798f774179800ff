use proc_macro::TokenStream;
use quote::quote;
use syn::parse::{Parse, ParseStream, Result};
use syn::{parse_macro_input, Ident, Token};

/// One element of a rule pattern or replacement
enum Elem {
    Open,
    Close,
    And,
    Or,
    Not,
    Const(bool),
    Var(Ident),
    Fragment(Ident),
}

impl Elem {
    /// Generate the `Elem` value the engine matches against
    fn to_tokens(&self) -> proc_macro2::TokenStream {
        match self {
            Elem::Open => quote! { Elem::Open },
            Elem::Close => quote! { Elem::Close },
            Elem::And => quote! { Elem::And },
            Elem::Or => quote! { Elem::Or },
            Elem::Not => quote! { Elem::Not },
            Elem::Const(value) => quote! { Elem::Const(#value) },
            Elem::Var(slot) => quote! { Elem::Var(Slot::#slot) },
            Elem::Fragment(_) => quote! { Elem::Fragment },
        }
    }

    /// The placeholder this element binds, if any
    fn placeholder(&self) -> Option<&Ident> {
        match self {
            Elem::Var(name) | Elem::Fragment(name) => Some(name),
            _ => None,
        }
    }
}

/// Parsed `Family: pattern => replacement`
struct RuleInput {
    family: Ident,
    pattern: Vec<Elem>,
    replacement: Vec<Elem>,
}

impl Parse for RuleInput {
    fn parse(input: ParseStream) -> Result<Self> {
        let family: Ident = input.parse()?;
        input.parse::<Token![:]>()?;

        let pattern = parse_side(input)?;
        if pattern.is_empty() {
            return Err(input.error("rule pattern must not be empty"));
        }
        input.parse::<Token![=>]>()?;
        let replacement = parse_side(input)?;
        if !input.is_empty() {
            return Err(input.error("unexpected tokens after the replacement"));
        }

        // A replacement may only emit what the pattern captured
        for name in replacement.iter().filter_map(Elem::placeholder) {
            let bound = pattern
                .iter()
                .filter_map(Elem::placeholder)
                .any(|bound| bound == name);
            if !bound {
                return Err(syn::Error::new(
                    name.span(),
                    format!("placeholder `{}` is not bound by the pattern", name),
                ));
            }
        }

        Ok(RuleInput {
            family,
            pattern,
            replacement,
        })
    }
}

/// Parse elements up to `=>` or the end of the input
fn parse_side(input: ParseStream) -> Result<Vec<Elem>> {
    let mut elems = Vec::new();
    while !input.is_empty() && !input.peek(Token![=>]) {
        parse_elem(input, &mut elems)?;
    }
    Ok(elems)
}

fn parse_elem(input: ParseStream, elems: &mut Vec<Elem>) -> Result<()> {
    if input.peek(syn::token::Paren) {
        let content;
        syn::parenthesized!(content in input);
        elems.push(Elem::Open);
        while !content.is_empty() {
            parse_elem(&content, elems)?;
        }
        elems.push(Elem::Close);
    } else if input.peek(Token![&]) {
        input.parse::<Token![&]>()?;
        elems.push(Elem::And);
    } else if input.peek(Token![|]) {
        input.parse::<Token![|]>()?;
        elems.push(Elem::Or);
    } else if input.peek(Token![~]) {
        input.parse::<Token![~]>()?;
        elems.push(Elem::Not);
    } else {
        let ident: Ident = input.parse()?;
        let elem = match ident.to_string().as_str() {
            "True" => Elem::Const(true),
            "False" => Elem::Const(false),
            "X" | "Y" | "Z" => Elem::Var(ident),
            "E" => Elem::Fragment(ident),
            other => {
                return Err(syn::Error::new(
                    ident.span(),
                    format!(
                        "unknown rule element `{}`; expected X, Y, Z, E, True or False",
                        other
                    ),
                ))
            }
        };
        elems.push(elem);
    }
    Ok(())
}

/// The `rule!` procedural macro for rewrite rules
///
/// Declares one rewrite rule in the same notation the engine reads, so the
/// catalog can be written as a table of algebraic identities.
///
/// # Syntax
///
/// `rule!(Family: pattern => replacement)`
///
/// - `X`, `Y`, `Z` - variable placeholders; a repeated placeholder must bind
///   the same letter
/// - `E` - a non-empty run of tokens without parentheses
/// - `True`, `False` - literals
/// - `&`, `|`, `~` and parentheses - matched as written
///
/// Operators must be separated by whitespace (`X & ~X`, not `X&~X`), since
/// `&&` and `||` lex as single Rust tokens.
///
/// The expansion is `Rule::new(Family::<Family>, &[..], &[..])` and expects
/// `Rule`, `Family`, `Elem` and `Slot` to be in scope.
///
/// # Examples
///
/// ```ignore
/// static RULES: &[Rule] = &[
///     rule!(ComplementAnd: X & ~X => False),
///     rule!(Distribution: (X & Y) | (X & Z) => X & (Y | Z)),
///     rule!(ParenthesisCleanup: ((E)) => (E)),
/// ];
/// ```
#[proc_macro]
pub fn rule(input: TokenStream) -> TokenStream {
    let rule = parse_macro_input!(input as RuleInput);
    let family = &rule.family;
    let pattern = rule.pattern.iter().map(Elem::to_tokens);
    let replacement = rule.replacement.iter().map(Elem::to_tokens);
    TokenStream::from(quote! {
        Rule::new(Family::#family, &[#(#pattern),*], &[#(#replacement),*])
    })
}
