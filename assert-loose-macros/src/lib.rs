//! Procedural macro implementation for assert-loose.
//!
//! This crate provides the procedural macro implementation for the `assert-loose` crate.
//! Users should use the main `assert-loose` crate which re-exports this macro.
//!
//! # Architecture Overview
//!
//! The macro transformation happens in three phases:
//!
//! 1. **Parse** (`parse.rs`): Tokenize the macro input into the two operand expressions
//! 2. **Expand** (`expand.rs`): Emit the comparison and failure-report code
//! 3. **Execute**: Generated code runs the check through `assert_loose::__macro_support`
//!
//! See the main `assert-loose` crate for documentation and examples.

use proc_macro::TokenStream;
use syn::Expr;

mod expand;
mod parse;

// Root-level struct that tracks one assertion: the expected side and the
// side under test, in that order.
struct AssertLoose {
    expect: Expr,
    actual: Expr,
}

/// Loose numeric equality assertion.
///
/// ```text
/// assert_loose!(expect, actual);
/// ```
///
/// Both operands are evaluated exactly once, reduced to their numeric value,
/// and compared through the `LooseEq` trait. Differing integer widths and
/// integer/float pairings compare by value; representation does not matter.
///
/// # Panics
///
/// On mismatch the macro panics with a report containing the line
/// `error: {expect} != {actual}`, the invocation's source location, and the
/// source spelling of each operand next to the value it produced:
///
/// ```text
/// assert_loose! failed:
///
/// error: 16777216 != 121393
///   --> `assert_loose!(16_777_216, candidate)` (assert-loose/tests/smoke.rs:12)
///   expect: `16_777_216` = 16777216
///   actual: `candidate` = 121393
/// ```
///
/// Operand source text is rendered token by token, so literals keep their
/// written spelling (underscores, radix prefixes) in the report.
///
/// See the [`assert-loose` crate documentation] for the comparison rules and
/// the result-returning form.
///
/// [`assert-loose` crate documentation]: https://docs.rs/assert-loose
#[proc_macro]
pub fn assert_loose(input: TokenStream) -> TokenStream {
    // Parse the input
    let assert = match parse::parse(input) {
        Ok(assert) => assert,
        Err(err) => return TokenStream::from(err.to_compile_error()),
    };

    // Expand to output code
    let expanded = expand::expand(&assert);

    TokenStream::from(expanded)
}
