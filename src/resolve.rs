//! Conversion of a single placeholder segment into its target type.

use tracing::trace;

use crate::error::ValueError;
use crate::numeric::{self, NumericError};
use crate::specifier::{Family, classify};
use crate::target::{Scan, Scanned, TargetKind};

/// Resolve the text captured by one placeholder into a `T`.
///
/// `specifier` is the placeholder body (`""`, `"%d"`, ...). The specifier is
/// checked against `T` before the text is looked at.
pub fn resolve<'a, T: Scan<'a>>(input: &'a str, specifier: &str) -> Result<T, ValueError> {
    let family = classify(T::KIND, T::NAME, specifier)?;
    let scanned = convert(T::KIND, family, input).map_err(|error| match error {
        NumericError::Malformed => conversion_failure::<T>(input),
        NumericError::Overflow => ValueError::RangeOverflow {
            text: input.to_owned(),
            target: T::NAME,
        },
    })?;
    trace!(target_type = T::NAME, ?scanned, "resolved placeholder");
    T::from_scanned(scanned).ok_or_else(|| conversion_failure::<T>(input))
}

fn conversion_failure<'a, T: Scan<'a>>(input: &str) -> ValueError {
    ValueError::ConversionFailure {
        text: input.to_owned(),
        target: T::NAME,
    }
}

fn convert(kind: TargetKind, family: Family, input: &str) -> Result<Scanned<'_>, NumericError> {
    match (family, kind) {
        (Family::Signed, TargetKind::Signed(width)) => {
            let value = numeric::convert_integer(input)?;
            numeric::narrow_signed(value, width).map(Scanned::Signed)
        }
        (Family::Unsigned, TargetKind::Unsigned(width)) => {
            let value = numeric::convert_unsigned(input)?;
            numeric::narrow_unsigned(value, width).map(Scanned::Unsigned)
        }
        (Family::Float, TargetKind::Float(width)) => {
            let value = numeric::convert_float(input)?;
            numeric::narrow_float(value, width).map(Scanned::Float)
        }
        (Family::Text, TargetKind::Text) => Ok(Scanned::Text(input)),
        // A family that does not belong to `kind` cannot produce its value.
        _ => Err(NumericError::Malformed),
    }
}
