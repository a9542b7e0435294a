//! Macro argument parsing structures.

use syn::{
    Expr, LitStr, Token, Type,
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    token::Comma,
};

/// scan! arguments: input, format, target types
pub struct ScanArgs {
    pub input: Expr,
    pub format: LitStr,
    pub types: Punctuated<Type, Comma>,
}

impl Parse for ScanArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let input_expr = input.parse()?;
        input.parse::<Token![,]>()?;
        let format = input.parse()?;

        let types = if input.is_empty() {
            Punctuated::new()
        } else {
            input.parse::<Token![,]>()?;
            Punctuated::parse_terminated(input)?
        };

        Ok(Self {
            input: input_expr,
            format,
            types,
        })
    }
}
