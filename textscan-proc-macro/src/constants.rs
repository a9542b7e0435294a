//! Compile-time limits for the `scan!` macro.
//!
//! Format strings are checked while the macro expands, so these bound the
//! work a single invocation can cause.

// ============================================================================
// Security Limits (Compile-Time DoS Protection)
// ============================================================================

/// Maximum length of a format string in bytes.
pub const MAX_FORMAT_STRING_LEN: usize = 10_000;

/// Maximum number of placeholders in a format string.
///
/// Target tuples stop at twelve elements, so anything above that fails the
/// arity check anyway; this bound only caps how much is tokenized.
pub const MAX_PLACEHOLDERS: usize = 256;

/// Maximum length of a placeholder body. Valid bodies are at most `%x`.
pub const MAX_SPECIFIER_LEN: usize = 16;

// ============================================================================
// Memory Pre-Allocation Hints
// ============================================================================

/// Initial capacity hint for the specifier vector.
pub const SPECIFIERS_INITIAL_CAPACITY: usize = 4;
