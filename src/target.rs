//! Target type descriptors and the [`Scan`] trait.
//!
//! Every type that can receive a placeholder value describes itself with a
//! [`TargetKind`]. The engine only ever looks at that tag, so conversion logic
//! is ordinary control flow over a closed set of kinds.

use std::borrow::Cow;

/// Width of an integer target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntWidth {
    W8,
    W16,
    W32,
    W64,
    W128,
    /// Pointer-sized (`isize`/`usize`).
    Size,
}

impl IntWidth {
    /// Inclusive bounds of the signed type of this width.
    pub const fn signed_bounds(self) -> (i128, i128) {
        match self {
            Self::W8 => (i8::MIN as i128, i8::MAX as i128),
            Self::W16 => (i16::MIN as i128, i16::MAX as i128),
            Self::W32 => (i32::MIN as i128, i32::MAX as i128),
            Self::W64 => (i64::MIN as i128, i64::MAX as i128),
            Self::W128 => (i128::MIN, i128::MAX),
            Self::Size => (isize::MIN as i128, isize::MAX as i128),
        }
    }

    /// Largest value of the unsigned type of this width.
    pub const fn unsigned_max(self) -> u128 {
        match self {
            Self::W8 => u8::MAX as u128,
            Self::W16 => u16::MAX as u128,
            Self::W32 => u32::MAX as u128,
            Self::W64 => u64::MAX as u128,
            Self::W128 => u128::MAX,
            Self::Size => usize::MAX as u128,
        }
    }
}

/// Width of a floating-point target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FloatWidth {
    F32,
    F64,
}

/// Natural category of a target type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetKind {
    /// Any type built from a slice of the input.
    Text,
    Signed(IntWidth),
    Unsigned(IntWidth),
    Float(FloatWidth),
}

/// A converted placeholder value before it is turned into the target type.
///
/// Numeric variants have already passed the narrowing check for the target's
/// [`TargetKind`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scanned<'a> {
    Text(&'a str),
    Signed(i128),
    Unsigned(u128),
    Float(f64),
}

/// A type that can receive the value of one placeholder.
///
/// `'a` is the lifetime of the scanned input, which lets borrowed targets
/// such as `&'a str` point straight into it.
///
/// # Implementing
///
/// A newtype can reuse the kind of the type it wraps. `from_scanned` returning
/// `None` is reported as a conversion failure.
///
/// ```
/// use textscan::{IntWidth, Scan, Scanned, TargetKind};
///
/// #[derive(Debug, PartialEq)]
/// struct Port(u16);
///
/// impl<'a> Scan<'a> for Port {
///     const NAME: &'static str = "Port";
///     const KIND: TargetKind = TargetKind::Unsigned(IntWidth::W16);
///
///     fn from_scanned(value: Scanned<'a>) -> Option<Self> {
///         u16::from_scanned(value).filter(|port| *port != 0).map(Port)
///     }
/// }
///
/// let (port,) = textscan::scan::<(Port,)>("port=8080", "port={%u}").unwrap();
/// assert_eq!(port, Port(8080));
/// ```
pub trait Scan<'a>: Sized {
    /// Name used in error messages.
    const NAME: &'static str;
    const KIND: TargetKind;

    fn from_scanned(value: Scanned<'a>) -> Option<Self>;
}

impl<'a> Scan<'a> for &'a str {
    const NAME: &'static str = "&str";
    const KIND: TargetKind = TargetKind::Text;

    fn from_scanned(value: Scanned<'a>) -> Option<Self> {
        match value {
            Scanned::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl<'a> Scan<'a> for String {
    const NAME: &'static str = "String";
    const KIND: TargetKind = TargetKind::Text;

    fn from_scanned(value: Scanned<'a>) -> Option<Self> {
        <&str>::from_scanned(value).map(str::to_owned)
    }
}

impl<'a> Scan<'a> for Box<str> {
    const NAME: &'static str = "Box<str>";
    const KIND: TargetKind = TargetKind::Text;

    fn from_scanned(value: Scanned<'a>) -> Option<Self> {
        <&str>::from_scanned(value).map(Box::from)
    }
}

impl<'a> Scan<'a> for Cow<'a, str> {
    const NAME: &'static str = "Cow<str>";
    const KIND: TargetKind = TargetKind::Text;

    fn from_scanned(value: Scanned<'a>) -> Option<Self> {
        <&str>::from_scanned(value).map(Cow::Borrowed)
    }
}

macro_rules! impl_scan_signed {
    ($($ty:ty => $width:ident),* $(,)?) => {$(
        impl<'a> Scan<'a> for $ty {
            const NAME: &'static str = stringify!($ty);
            const KIND: TargetKind = TargetKind::Signed(IntWidth::$width);

            fn from_scanned(value: Scanned<'a>) -> Option<Self> {
                match value {
                    Scanned::Signed(value) => <$ty>::try_from(value).ok(),
                    _ => None,
                }
            }
        }
    )*};
}

macro_rules! impl_scan_unsigned {
    ($($ty:ty => $width:ident),* $(,)?) => {$(
        impl<'a> Scan<'a> for $ty {
            const NAME: &'static str = stringify!($ty);
            const KIND: TargetKind = TargetKind::Unsigned(IntWidth::$width);

            fn from_scanned(value: Scanned<'a>) -> Option<Self> {
                match value {
                    Scanned::Unsigned(value) => <$ty>::try_from(value).ok(),
                    _ => None,
                }
            }
        }
    )*};
}

impl_scan_signed!(
    i8 => W8,
    i16 => W16,
    i32 => W32,
    i64 => W64,
    i128 => W128,
    isize => Size,
);
impl_scan_unsigned!(
    u8 => W8,
    u16 => W16,
    u32 => W32,
    u64 => W64,
    u128 => W128,
    usize => Size,
);

impl<'a> Scan<'a> for f64 {
    const NAME: &'static str = "f64";
    const KIND: TargetKind = TargetKind::Float(FloatWidth::F64);

    fn from_scanned(value: Scanned<'a>) -> Option<Self> {
        match value {
            Scanned::Float(value) => Some(value),
            _ => None,
        }
    }
}

impl<'a> Scan<'a> for f32 {
    const NAME: &'static str = "f32";
    const KIND: TargetKind = TargetKind::Float(FloatWidth::F32);

    #[allow(clippy::cast_possible_truncation)]
    fn from_scanned(value: Scanned<'a>) -> Option<Self> {
        // Narrowing already rejected values that round to an infinity.
        match value {
            Scanned::Float(value) => Some(value as f32),
            _ => None,
        }
    }
}
