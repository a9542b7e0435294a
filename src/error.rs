//! Error types returned by the scan engine.
//!
//! A failed scan yields exactly one [`ScanError`]. Problems tied to a single
//! placeholder are reported as [`ValueError`] and wrapped together with the
//! zero-based position of the placeholder that produced them.

use std::io;

use thiserror::Error;

/// Tag identifying which stage of a scan failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A literal span of the format was not found in the remaining input.
    LiteralMismatch,
    /// The number of placeholders differs from the number of target types.
    ArityMismatch,
    /// A placeholder body is malformed or uses an unknown letter.
    UnsupportedSpecifier,
    /// The specifier letter is incompatible with the target type.
    TypeMismatch,
    /// The input segment is not a valid literal for the target.
    ConversionFailure,
    /// The parsed value does not fit the target type.
    RangeOverflow,
}

/// Why a placeholder body was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecifierProblem {
    /// Not exactly `%` followed by one character.
    Malformed,
    /// `%` followed by a letter other than `s`, `d`, `u` or `f`.
    Unrecognized,
}

impl std::fmt::Display for SpecifierProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Malformed => f.write_str("wrong or too long format specifier"),
            Self::Unrecognized => f.write_str("unexpected format specifier"),
        }
    }
}

/// Failure to produce the value of a single placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    #[error("unsupported specifier: {problem} {specifier:?}")]
    UnsupportedSpecifier {
        specifier: String,
        problem: SpecifierProblem,
    },

    #[error("type mismatch: '%{letter}' specifier requires {required}, found <{target}>")]
    TypeMismatch {
        letter: char,
        required: &'static str,
        target: &'static str,
    },

    #[error("parse error: failed to convert {text:?} into <{target}>")]
    ConversionFailure { text: String, target: &'static str },

    #[error("range error: {text:?} is out of range for <{target}>")]
    RangeOverflow { text: String, target: &'static str },
}

impl ValueError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnsupportedSpecifier { .. } => ErrorKind::UnsupportedSpecifier,
            Self::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            Self::ConversionFailure { .. } => ErrorKind::ConversionFailure,
            Self::RangeOverflow { .. } => ErrorKind::RangeOverflow,
        }
    }
}

/// The single error reported by a failed scan.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    /// `literal` could not be located in `remaining`, the input left
    /// unconsumed at that point.
    #[error("literal mismatch: expected {literal:?} in remaining input {remaining:?}")]
    LiteralMismatch { literal: String, remaining: String },

    #[error(
        "arity mismatch: format has {placeholders} placeholder(s) but {targets} target type(s) were requested"
    )]
    ArityMismatch { placeholders: usize, targets: usize },

    /// The placeholder at `position` (zero-based) could not be resolved.
    #[error("placeholder #{position}: {source}")]
    Placeholder {
        position: usize,
        #[source]
        source: ValueError,
    },
}

impl ScanError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::LiteralMismatch { .. } => ErrorKind::LiteralMismatch,
            Self::ArityMismatch { .. } => ErrorKind::ArityMismatch,
            Self::Placeholder { source, .. } => source.kind(),
        }
    }

    /// Zero-based placeholder index, for errors raised while resolving a value.
    pub fn position(&self) -> Option<usize> {
        match self {
            Self::Placeholder { position, .. } => Some(*position),
            _ => None,
        }
    }
}

impl From<ScanError> for io::Error {
    fn from(error: ScanError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, error)
    }
}
