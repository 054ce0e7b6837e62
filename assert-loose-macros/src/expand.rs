use crate::AssertLoose;
use proc_macro2::TokenStream;
use quote::quote;
use syn::Expr;

// Render the expression as written, token by token. Literal tokens keep
// their original spelling (underscores, radix prefixes, suffixes), which is
// what the report shows next to the produced value.
fn expr_to_string(expr: &Expr) -> String {
    quote! { #expr }.to_string()
}

pub fn expand(assert: &AssertLoose) -> TokenStream {
    let expect = &assert.expect;
    let actual = &assert.actual;
    let expect_src = expr_to_string(expect);
    let actual_src = expr_to_string(actual);

    // Wrap in a block to avoid variable name conflicts
    quote! {
        {
            let __assert_loose_result = {
                let __expect = #expect;
                let __actual = #actual;
                if !::assert_loose::__macro_support::loose_eq(&__expect, &__actual) {
                    // Build the failure report. Both values are compile-time
                    // constants:
                    // - CARGO_MANIFEST_DIR: absolute path to this package's root
                    // - file!(): path relative to the workspace root
                    // Together they let the report derive the absolute source
                    // path at runtime without relying on the working directory.
                    let __report = ::assert_loose::__macro_support::MismatchReport::new(
                        ::std::env!("CARGO_MANIFEST_DIR"),
                        ::std::file!(),
                        ::std::line!(),
                        #expect_src,
                        #actual_src,
                        &__expect,
                        &__actual,
                    );
                    ::std::panic!("{}", __report);
                }
            };
            __assert_loose_result
        }
    }
}
