//! Format string tokenization at compile-time.

use crate::constants::{
    MAX_FORMAT_STRING_LEN, MAX_PLACEHOLDERS, MAX_SPECIFIER_LEN, SPECIFIERS_INITIAL_CAPACITY,
};
use crate::types::Specifier;
use syn::LitStr;

/// Tokenize format string into the specifiers of its placeholders, in order.
///
/// Rejects unterminated placeholders and bodies other than `""`, `%s`, `%d`,
/// `%u`, `%f`. Enforces `MAX_FORMAT_STRING_LEN`, `MAX_PLACEHOLDERS` and
/// `MAX_SPECIFIER_LEN`. Literal text, including a lone `}`, is skipped.
pub fn tokenize_format_string(
    format_str: &str,
    format_lit: &LitStr,
) -> syn::Result<Vec<Specifier>> {
    if format_str.len() > MAX_FORMAT_STRING_LEN {
        return Err(syn::Error::new(
            format_lit.span(),
            format!(
                "Format string too long ({} bytes). Maximum allowed: {} bytes.",
                format_str.len(),
                MAX_FORMAT_STRING_LEN
            ),
        ));
    }

    let mut specifiers: Vec<Specifier> = Vec::with_capacity(SPECIFIERS_INITIAL_CAPACITY);
    let mut chars = format_str.chars();

    while let Some(ch) = chars.next() {
        if ch != '{' {
            continue;
        }

        let mut body = String::new();
        let mut closed = false;
        for c2 in chars.by_ref() {
            if c2 == '}' {
                closed = true;
                break;
            }
            if body.len() >= MAX_SPECIFIER_LEN {
                return Err(syn::Error::new(
                    format_lit.span(),
                    format!("Placeholder body too long (>{MAX_SPECIFIER_LEN} characters)."),
                ));
            }
            body.push(c2);
        }

        if !closed {
            return Err(syn::Error::new(
                format_lit.span(),
                format!("Unterminated placeholder '{{{body}' in format string."),
            ));
        }

        let Some(specifier) = Specifier::from_body(&body) else {
            return Err(syn::Error::new(
                format_lit.span(),
                format!(
                    "Invalid placeholder '{{{body}}}'. \
                     Use '{{}}', '{{%s}}', '{{%d}}', '{{%u}}' or '{{%f}}'."
                ),
            ));
        };

        if specifiers.len() == MAX_PLACEHOLDERS {
            return Err(syn::Error::new(
                format_lit.span(),
                format!("Too many placeholders in format string. Maximum allowed: {MAX_PLACEHOLDERS}."),
            ));
        }
        specifiers.push(specifier);
    }

    Ok(specifiers)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit() -> LitStr {
        syn::parse_quote!("")
    }

    fn tokenize(format: &str) -> syn::Result<Vec<Specifier>> {
        tokenize_format_string(format, &lit())
    }

    #[test]
    fn test_tokenization_basic() {
        let specifiers = tokenize("ID: {%d} Name: {}").unwrap();
        assert_eq!(specifiers, vec![Specifier::Integer, Specifier::Infer]);
    }

    #[test]
    fn test_all_specifiers() {
        let specifiers = tokenize("{%s}{%d}{%u}{%f}{}").unwrap();
        assert_eq!(
            specifiers,
            vec![
                Specifier::Text,
                Specifier::Integer,
                Specifier::Unsigned,
                Specifier::Float,
                Specifier::Infer,
            ]
        );
    }

    #[test]
    fn test_literal_text_yields_no_specifiers() {
        assert_eq!(tokenize("a}b").unwrap(), vec![]);
        assert_eq!(tokenize("plain text").unwrap(), vec![]);
        assert_eq!(tokenize("{}}{}").unwrap(), vec![Specifier::Infer, Specifier::Infer]);
    }

    #[test]
    fn test_invalid_bodies_rejected() {
        for format in ["{s}", "{%x}", "{%dd}", "{name}", "{{}}"] {
            let error = tokenize(format).unwrap_err();
            assert!(error.to_string().starts_with("Invalid placeholder"), "{format}");
        }
    }

    #[test]
    fn test_unterminated_placeholder_rejected() {
        let error = tokenize("{%d").unwrap_err();
        assert!(error.to_string().contains("Unterminated"));
    }

    #[test]
    fn test_long_body_rejected() {
        let format = format!("{{{}}}", "x".repeat(MAX_SPECIFIER_LEN + 1));
        let error = tokenize(&format).unwrap_err();
        assert!(error.to_string().contains("too long"));
    }

    #[test]
    fn test_placeholder_limit_at_boundary() {
        let at_limit = "{} ".repeat(MAX_PLACEHOLDERS);
        assert_eq!(tokenize(&at_limit).unwrap().len(), MAX_PLACEHOLDERS);

        let over_limit = "{} ".repeat(MAX_PLACEHOLDERS + 1);
        assert!(tokenize(&over_limit).is_err());
    }

    #[test]
    fn test_format_length_limit() {
        let format = "x".repeat(MAX_FORMAT_STRING_LEN + 1);
        assert!(tokenize(&format).is_err());
    }
}
