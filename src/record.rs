//! Positional assembly of placeholder values into a typed tuple.

use tracing::debug;

use crate::error::ScanError;
use crate::format::{Segments, split};
use crate::resolve::resolve;
use crate::target::Scan;

/// A fixed-arity tuple of [`Scan`] targets, one per placeholder.
///
/// Implemented for `()` and for tuples of up to twelve elements.
pub trait ScanTuple<'a>: Sized {
    const ARITY: usize;

    /// Resolve every segment in order, stopping at the first failure.
    fn from_segments(segments: &Segments<'a, '_>) -> Result<Self, ScanError>;
}

fn check_arity(segments: &Segments<'_, '_>, targets: usize) -> Result<(), ScanError> {
    if segments.len() == targets {
        Ok(())
    } else {
        Err(ScanError::ArityMismatch {
            placeholders: segments.len(),
            targets,
        })
    }
}

fn resolve_at<'a, T: Scan<'a>>(
    segments: &Segments<'a, '_>,
    position: usize,
    targets: usize,
) -> Result<T, ScanError> {
    let segment = segments.get(position).ok_or(ScanError::ArityMismatch {
        placeholders: segments.len(),
        targets,
    })?;
    resolve::<T>(segment.input, segment.specifier)
        .map_err(|source| ScanError::Placeholder { position, source })
}

impl<'a> ScanTuple<'a> for () {
    const ARITY: usize = 0;

    fn from_segments(segments: &Segments<'a, '_>) -> Result<Self, ScanError> {
        check_arity(segments, 0)
    }
}

macro_rules! impl_scan_tuple {
    ($arity:literal => $($ty:ident $position:tt),+) => {
        impl<'a, $($ty: Scan<'a>),+> ScanTuple<'a> for ($($ty,)+) {
            const ARITY: usize = $arity;

            fn from_segments(segments: &Segments<'a, '_>) -> Result<Self, ScanError> {
                check_arity(segments, $arity)?;
                Ok(($(resolve_at::<$ty>(segments, $position, $arity)?,)+))
            }
        }
    };
}

impl_scan_tuple!(1 => A 0);
impl_scan_tuple!(2 => A 0, B 1);
impl_scan_tuple!(3 => A 0, B 1, C 2);
impl_scan_tuple!(4 => A 0, B 1, C 2, D 3);
impl_scan_tuple!(5 => A 0, B 1, C 2, D 3, E 4);
impl_scan_tuple!(6 => A 0, B 1, C 2, D 3, E 4, F 5);
impl_scan_tuple!(7 => A 0, B 1, C 2, D 3, E 4, F 5, G 6);
impl_scan_tuple!(8 => A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7);
impl_scan_tuple!(9 => A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8);
impl_scan_tuple!(10 => A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9);
impl_scan_tuple!(11 => A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9, K 10);
impl_scan_tuple!(12 => A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9, K 10, L 11);

/// Scan `input` against `format` into the tuple `T`.
///
/// Each `{}` or `{%x}` placeholder of `format` yields one element of `T`, in
/// order. The number of placeholders must equal the arity of `T`.
///
/// | Placeholder | Accepted targets |
/// |-------------|------------------|
/// | `{}`        | any [`Scan`] type, converted by its kind |
/// | `{%s}`      | `String`, `&str`, `Box<str>`, `Cow<str>` |
/// | `{%d}`      | signed and unsigned integers |
/// | `{%u}`      | unsigned integers |
/// | `{%f}`      | `f32`, `f64` |
///
/// # Errors
///
/// Returns the first problem found: a literal of the format missing from the
/// input, a placeholder count different from the arity of `T`, or the first
/// placeholder (in format order) whose value cannot be produced.
///
/// # Examples
///
/// ```
/// let (id, name, score) =
///     textscan::scan::<(i32, &str, f64)>("100 hello 2.5", "{%d} {%s} {%f}").unwrap();
/// assert_eq!((id, name, score), (100, "hello", 2.5));
///
/// let error = textscan::scan::<(i32, String)>("100", "{%d}").unwrap_err();
/// assert_eq!(error.kind(), textscan::ErrorKind::ArityMismatch);
/// ```
pub fn scan<'a, T: ScanTuple<'a>>(input: &'a str, format: &str) -> Result<T, ScanError> {
    split(input, format)
        .and_then(|segments| T::from_segments(&segments))
        .inspect_err(|error| debug!(%error, format, "scan failed"))
}
