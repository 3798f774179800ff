//! The rule catalog
//!
//! Order does not affect the result of a fixed-point run, only how many
//! passes it takes. Every rule shortens the token sequence, so a run on any
//! input terminates.

use super::pattern::{Elem, Family, Rule, Slot};
use boolcalc_macros::rule;

static CATALOG: &[Rule] = &[
    // Idempotence
    rule!(Idempotence: (X & X) => X),
    rule!(Idempotence: (X | X) => X),
    rule!(Idempotence: X & X => X),
    rule!(Idempotence: X | X => X),
    // Double negation
    rule!(DoubleNegation: ~~X => X),
    // Complement
    rule!(ComplementAnd: (X & ~X) => False),
    rule!(ComplementAnd: (~X & X) => False),
    rule!(ComplementAnd: X & ~X => False),
    rule!(ComplementAnd: ~X & X => False),
    rule!(ComplementOr: (X | ~X) => True),
    rule!(ComplementOr: (~X | X) => True),
    rule!(ComplementOr: X | ~X => True),
    rule!(ComplementOr: ~X | X => True),
    // Absorption
    rule!(Absorption: X & (X | Y) => X),
    rule!(Absorption: X & (Y | X) => X),
    rule!(Absorption: (X | Y) & X => X),
    rule!(Absorption: (Y | X) & X => X),
    // Distribution
    rule!(Distribution: (X & Y) | (X & Z) => X & (Y | Z)),
    rule!(Distribution: (X & Y) | (Z & X) => X & (Y | Z)),
    // AND with constants
    rule!(Identity: True & X => X),
    rule!(Identity: X & True => X),
    rule!(Identity: False & X => False),
    rule!(Identity: X & False => False),
    rule!(Identity: True & ~X => ~X),
    rule!(Identity: ~X & True => ~X),
    rule!(Identity: False & ~X => False),
    rule!(Identity: ~X & False => False),
    // OR with constants
    rule!(Identity: True | X => True),
    rule!(Identity: X | True => True),
    rule!(Identity: False | X => X),
    rule!(Identity: X | False => X),
    rule!(Identity: True | ~X => True),
    rule!(Identity: ~X | True => True),
    rule!(Identity: False | ~X => ~X),
    rule!(Identity: ~X | False => ~X),
    // Constants only
    rule!(ConstantFolding: ~True => False),
    rule!(ConstantFolding: ~False => True),
    rule!(ConstantFolding: True & True => True),
    rule!(ConstantFolding: True & False => False),
    rule!(ConstantFolding: False & True => False),
    rule!(ConstantFolding: False & False => False),
    rule!(ConstantFolding: True | True => True),
    rule!(ConstantFolding: True | False => True),
    rule!(ConstantFolding: False | True => True),
    rule!(ConstantFolding: False | False => False),
    // Redundant parentheses
    rule!(ParenthesisCleanup: ((E)) => (E)),
    rule!(ParenthesisCleanup: (X) => X),
];

/// The built-in rules, in application order
pub fn catalog() -> &'static [Rule] {
    CATALOG
}
