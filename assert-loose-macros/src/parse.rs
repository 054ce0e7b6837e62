use crate::AssertLoose;
use syn::{Result, Token, parse::Parse, parse::ParseStream};

impl Parse for AssertLoose {
    /// Parses the top-level macro invocation.
    ///
    /// # Example Input
    /// ```text
    /// assert_loose!(16_777_216, fib(25))
    /// assert_loose!(expected, actual,)
    /// ```
    ///
    /// The macro always expects: `expect`, `actual`, with an optional
    /// trailing comma.
    fn parse(input: ParseStream) -> Result<Self> {
        let expect = input.parse()?;
        let _: Token![,] = input.parse()?;
        let actual = input.parse()?;
        if input.peek(Token![,]) {
            let _: Token![,] = input.parse()?;
        }

        Ok(AssertLoose { expect, actual })
    }
}

pub(crate) fn parse(input: proc_macro::TokenStream) -> Result<AssertLoose> {
    syn::parse(input)
}
