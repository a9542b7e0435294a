//! Typed text scanning: the inverse of `format!`.
//!
//! Given an input string and a format template made of literal text and
//! placeholders, [`scan`] recovers one typed value per placeholder:
//!
//! ```
//! let (id, name) = textscan::scan::<(u32, String)>("ID: 123 Name: Smith", "ID: {%d} Name: {%s}")?;
//! assert_eq!(id, 123);
//! assert_eq!(name, "Smith");
//! # Ok::<(), textscan::ScanError>(())
//! ```
//!
//! The [`scan!`] macro does the same but checks the format string and the
//! number of target types while compiling:
//!
//! ```
//! let (x, y) = textscan::scan!("x=10, y=-20", "x={}, y={%d}", u8, i64)?;
//! assert_eq!((x, y), (10, -20));
//! # Ok::<(), textscan::ScanError>(())
//! ```
//!
//! ```compile_fail
//! // One placeholder, two target types.
//! let _ = textscan::scan!("100", "{%d}", i32, String);
//! ```
//!
//! # Placeholders
//!
//! - `{}`: the conversion follows the target type
//! - `{%s}`: text (`String`, `&str`, `Box<str>`, `Cow<str>`)
//! - `{%d}`: any integer
//! - `{%u}`: unsigned integers only
//! - `{%f}`: `f32` or `f64`
//!
//! # Architecture
//!
//! 1. **Splitting** ([`split`]): the template is tokenized and each literal
//!    span is located in the input, left to right; the text between two
//!    literals belongs to the placeholder between them
//! 2. **Resolution**: each segment is classified by its specifier and target
//!    kind, converted, and range checked
//! 3. **Aggregation** ([`ScanTuple`]): values are bound positionally into the
//!    requested tuple, stopping at the first error
//!
//! # Known Limitations
//!
//! - **Leftmost literal match**: each literal is matched at its first
//!   occurrence and the search never backtracks, so `"{%d}-{%d}"` cannot read
//!   `"-5--3"`.
//! - **No escapes**: `{` always opens a placeholder.
//! - **Strict numbers**: no whitespace, no leading `+`, decimal integers only.
//!
//! # Errors
//!
//! A failed scan returns a single [`ScanError`]; [`ScanError::kind`] tells the
//! failing stage apart. `ScanError` converts into [`std::io::Error`] with
//! [`std::io::ErrorKind::InvalidInput`].

#![forbid(unsafe_code)]

extern crate self as textscan;

// ============================================================================
// Module Organization
// ============================================================================

mod error;
mod format;
mod numeric;
mod record;
mod resolve;
mod specifier;
mod target;

// ============================================================================
// Re-exports for Public API
// ============================================================================

pub use error::{ErrorKind, ScanError, SpecifierProblem, ValueError};
pub use format::{Segment, Segments, split};
pub use record::{ScanTuple, scan};
pub use target::{FloatWidth, IntWidth, Scan, Scanned, TargetKind};
pub use textscan_proc_macro::scan;
