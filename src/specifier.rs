//! Placeholder specifier classification.

use nom::{
    IResult, Parser,
    character::complete::{anychar, char},
    combinator::all_consuming,
    sequence::preceded,
};

use crate::error::{SpecifierProblem, ValueError};
use crate::target::TargetKind;

/// Conversion family selected for one placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    Text,
    Signed,
    Unsigned,
    Float,
}

impl TargetKind {
    /// Family used when the placeholder carries no specifier.
    pub const fn family(self) -> Family {
        match self {
            Self::Text => Family::Text,
            Self::Signed(_) => Family::Signed,
            Self::Unsigned(_) => Family::Unsigned,
            Self::Float(_) => Family::Float,
        }
    }
}

/// `%` followed by exactly one character.
fn specifier_letter(body: &str) -> IResult<&str, char> {
    all_consuming(preceded(char('%'), anychar)).parse(body)
}

/// Pick the conversion family for a target of `kind` and a placeholder body.
///
/// An explicit specifier only narrows what is accepted; the family returned is
/// always the natural family of `kind`, so `{%d}` into a `u32` converts as
/// unsigned.
pub fn classify(
    kind: TargetKind,
    target: &'static str,
    specifier: &str,
) -> Result<Family, ValueError> {
    if specifier.is_empty() {
        return Ok(kind.family());
    }

    let (_, letter) = specifier_letter(specifier).map_err(|_| ValueError::UnsupportedSpecifier {
        specifier: specifier.to_owned(),
        problem: SpecifierProblem::Malformed,
    })?;

    let (accepted, required) = match letter {
        's' => (matches!(kind, TargetKind::Text), "a text type"),
        'd' => (
            matches!(kind, TargetKind::Signed(_) | TargetKind::Unsigned(_)),
            "an integer type",
        ),
        'u' => (
            matches!(kind, TargetKind::Unsigned(_)),
            "an unsigned integer type",
        ),
        'f' => (matches!(kind, TargetKind::Float(_)), "a floating-point type"),
        _ => {
            return Err(ValueError::UnsupportedSpecifier {
                specifier: specifier.to_owned(),
                problem: SpecifierProblem::Unrecognized,
            });
        }
    };

    if accepted {
        Ok(kind.family())
    } else {
        Err(ValueError::TypeMismatch {
            letter,
            required,
            target,
        })
    }
}
