//! Procedural macro for the `textscan` crate.
//!
//! `scan!` is a compile-time checked front-end for `textscan::scan`:
//!
//! 1. **Tokenization**: the format literal is split into literal text and
//!    placeholders while the macro expands
//! 2. **Validation**: every placeholder body must be `""`, `%s`, `%d`, `%u` or
//!    `%f`, and the placeholder count must equal the number of target types
//! 3. **Expansion**: the macro becomes a call to `textscan::scan` with the
//!    target types gathered into a tuple
//!
//! Whether a specifier suits its target type (e.g. `%u` for `i32`) is still
//! checked when the scan runs.
//!
//! # Security
//!
//! - **Format strings**: Maximum 10,000 bytes
//! - **Placeholders**: Maximum 256 per format string
//! - **Placeholder bodies**: Maximum 16 characters

#![forbid(unsafe_code)]

// ============================================================================
// Module Organization
// ============================================================================

mod codegen;
mod constants;
mod parsing;
mod tokenization;
mod types;

use proc_macro::TokenStream;
use syn::parse_macro_input;

use codegen::generate_scan_call;
use parsing::ScanArgs;

// ============================================================================
// Public Macros
// ============================================================================

/// Scans a string into a tuple of typed values, checking the format string at
/// compile time.
///
/// # Syntax
///
/// ```ignore
/// scan!(input_expr, "format string", Type1, Type2, ...)
/// ```
///
/// - `input_expr`: Expression that evaluates to a `&str`
/// - `format string`: String literal with `{}`, `{%s}`, `{%d}`, `{%u}` or `{%f}` placeholders
/// - `Type1, ...`: One target type per placeholder, in order
///
/// # Returns
///
/// `Result<(Type1, Type2, ...), textscan::ScanError>`
///
/// # Examples
///
/// ```ignore
/// use textscan::scan;
///
/// let (name, age) = scan!("Alice: 30", "{}: {%u}", String, u32).unwrap();
/// assert_eq!(name, "Alice");
/// assert_eq!(age, 30);
/// ```
///
/// A count mismatch is a compile error:
///
/// ```ignore
/// let _ = textscan::scan!("1 2", "{} {}", i32);
/// ```
#[proc_macro]
pub fn scan(input: TokenStream) -> TokenStream {
    let args = parse_macro_input!(input as ScanArgs);

    match generate_scan_call(&args) {
        Ok(code) => TokenStream::from(code),
        Err(err) => err.to_compile_error().into(),
    }
}
