//! Code generation for the `scan!` macro.

use crate::parsing::ScanArgs;
use crate::tokenization::tokenize_format_string;
use quote::quote;
use syn::spanned::Spanned;

/// Check the format string against the target types and build the call.
///
/// Errors on an empty format, invalid placeholders, or a placeholder count
/// that differs from the number of types.
pub fn generate_scan_call(args: &ScanArgs) -> syn::Result<proc_macro2::TokenStream> {
    let format_lit = &args.format;
    let format_str = format_lit.value();

    if format_str.is_empty() && !args.types.is_empty() {
        return Err(syn::Error::new(
            format_lit.span(),
            "Format string cannot be empty when target types are given.",
        ));
    }

    let placeholders = tokenize_format_string(&format_str, format_lit)?.len();
    let targets = args.types.len();

    if placeholders < targets {
        let unused = &args.types[placeholders];
        return Err(syn::Error::new(
            unused.span(),
            format!(
                "Too many target types: the format string has {placeholders} placeholder(s) \
                 but {targets} type(s) were given"
            ),
        ));
    }
    if placeholders > targets {
        return Err(syn::Error::new(
            format_lit.span(),
            format!(
                "Placeholder #{} has no target type: the format string has {placeholders} \
                 placeholder(s) but {targets} type(s) were given",
                targets + 1
            ),
        ));
    }

    let input = &args.input;
    let types = args.types.iter();
    Ok(quote! {
        ::textscan::scan::<(#(#types,)*)>(#input, #format_lit)
    })
}
