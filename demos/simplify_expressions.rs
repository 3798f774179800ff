//! Example: simplifying boolean expressions
//!
//! Walks through the rule families on small inputs, then shows the
//! token-level API and how failures are reported.

use boolcalc::token::{fragments, render};
use boolcalc::{simplify, tokenize, Simplifier, SimplifyConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Simplification Examples ===\n");

    // Example 1: one input per rule family
    println!("1. Rule Families:");
    let inputs = [
        ("idempotence", "A & A"),
        ("double negation", "~~B"),
        ("complement", "(C & ~C) | (A | ~A)"),
        ("absorption", "A & (A | B)"),
        ("distribution", "(A & B) | (A & C)"),
        ("identity", "True & B | False"),
        ("nested groups", "(A & (A | B))"),
    ];
    for (family, input) in inputs {
        let result = simplify(input)?;
        println!("   {:<16} {:<22} => {}", family, input, result.simplified);
    }
    println!();

    // Example 2: tokens
    println!("2. Tokens:");
    let raw = "~(A&B)|C";
    println!("   Fragments of {:?}: {:?}", raw, fragments(raw));
    let tokens = tokenize(raw);
    println!("   Normalized: {}", render(&tokens));
    let simplified = Simplifier::default().simplify_tokens(&tokens)?;
    println!("   Simplified tokens: {:?}", simplified);
    println!();

    // Example 3: statistics
    println!("3. Statistics:");
    let result = simplify("((A & B) | (B & A)) & (C | ~C)")?;
    println!("   {} => {}", result.original, result.simplified);
    println!(
        "   passes: {}, rewrites: {}, groups: {}",
        result.stats.passes, result.stats.rewrites, result.stats.groups
    );
    println!();

    // Example 4: failures
    println!("4. Failures:");
    match simplify("(A & B") {
        Ok(result) => println!("   unexpected: {}", result.simplified),
        Err(e) => println!("   (A & B => {}", e),
    }
    let tight = Simplifier::new(SimplifyConfig { max_passes: 1 });
    match tight.simplify("A & A") {
        Ok(result) => println!("   unexpected: {}", result.simplified),
        Err(e) => println!("   A & A with one pass => {}", e),
    }

    Ok(())
}
