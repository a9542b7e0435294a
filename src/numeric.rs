//! Strict numeric conversion and narrowing.
//!
//! Conversions work at the widest width of each family (`i128`, `u128`, `f64`)
//! and accept only the exact literal: no surrounding whitespace, no leading
//! `+`, no trailing characters. Narrowing to the target width never clamps.

use std::num::IntErrorKind;

use nom::{
    IResult, Parser,
    character::complete::{char, digit1},
    combinator::{all_consuming, opt, recognize},
    sequence::pair,
};

use crate::target::{FloatWidth, IntWidth};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericError {
    /// Not a literal of the requested family.
    Malformed,
    /// A well-formed literal outside the range of the target.
    Overflow,
}

fn signed_literal(text: &str) -> IResult<&str, &str> {
    all_consuming(recognize(pair(opt(char('-')), digit1))).parse(text)
}

fn unsigned_literal(text: &str) -> IResult<&str, &str> {
    all_consuming(digit1).parse(text)
}

fn int_error(kind: &IntErrorKind) -> NumericError {
    match kind {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => NumericError::Overflow,
        _ => NumericError::Malformed,
    }
}

pub fn convert_integer(text: &str) -> Result<i128, NumericError> {
    let (_, literal) = signed_literal(text).map_err(|_| NumericError::Malformed)?;
    literal.parse::<i128>().map_err(|e| int_error(e.kind()))
}

/// Negative literals are well-formed but below every unsigned range, so they
/// report [`NumericError::Overflow`] (`-0` is zero).
pub fn convert_unsigned(text: &str) -> Result<u128, NumericError> {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(digits) => (true, digits),
        None => (false, text),
    };
    let (_, literal) = unsigned_literal(digits).map_err(|_| NumericError::Malformed)?;
    let value = literal.parse::<u128>().map_err(|e| int_error(e.kind()))?;
    if negative && value != 0 {
        return Err(NumericError::Overflow);
    }
    Ok(value)
}

pub fn convert_float(text: &str) -> Result<f64, NumericError> {
    if text.starts_with('+') {
        return Err(NumericError::Malformed);
    }
    let value = text.parse::<f64>().map_err(|_| NumericError::Malformed)?;
    // `1e400` parses to infinity; only a spelled-out infinity may.
    if value.is_infinite() && !names_infinity(text) {
        return Err(NumericError::Overflow);
    }
    Ok(value)
}

fn names_infinity(text: &str) -> bool {
    let magnitude = text.strip_prefix('-').unwrap_or(text);
    magnitude
        .get(..3)
        .is_some_and(|head| head.eq_ignore_ascii_case("inf"))
}

pub fn narrow_signed(value: i128, width: IntWidth) -> Result<i128, NumericError> {
    let (min, max) = width.signed_bounds();
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(NumericError::Overflow)
    }
}

pub fn narrow_unsigned(value: u128, width: IntWidth) -> Result<u128, NumericError> {
    if value <= width.unsigned_max() {
        Ok(value)
    } else {
        Err(NumericError::Overflow)
    }
}

/// NaN passes through; infinities only fit `f64`.
///
/// A finite value fits `f32` when it rounds to a finite `f32`, so the shortest
/// decimal form of `f32::MAX`, which lies just above it, is accepted.
#[allow(clippy::cast_possible_truncation)]
pub fn narrow_float(value: f64, width: FloatWidth) -> Result<f64, NumericError> {
    match width {
        FloatWidth::F64 => Ok(value),
        FloatWidth::F32 => {
            if (value as f32).is_infinite() {
                Err(NumericError::Overflow)
            } else {
                Ok(value)
            }
        }
    }
}
