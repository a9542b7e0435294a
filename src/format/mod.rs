//! Co-parsing of a format template and an input string.
//!
//! The template is tokenized into placeholders and the literal spans between
//! them. Each literal is then searched for in the input, left to right, and the
//! input between two located literals becomes the text of the placeholder that
//! separates them.
//!
//! The search takes the first occurrence of each literal and never backtracks:
//! `"{}-{}"` against `"a-b-c"` yields `"a"` and `"b-c"`, and against `"-5--3"`
//! it yields `""` and `"5--3"`.

use tracing::trace;

use crate::error::ScanError;

mod format_parser;

/// Input text and specifier body of one placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a, 'f> {
    /// Slice of the input captured by the placeholder.
    pub input: &'a str,
    /// Text between the braces, e.g. `""` or `"%d"`.
    pub specifier: &'f str,
}

/// Placeholder segments of one input, in template order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segments<'a, 'f> {
    segments: Vec<Segment<'a, 'f>>,
}

impl<'a, 'f> Segments<'a, 'f> {
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&Segment<'a, 'f>> {
        self.segments.get(position)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Segment<'a, 'f>> {
        self.segments.iter()
    }

    pub fn inputs(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.segments.iter().map(|segment| segment.input)
    }

    pub fn specifiers(&self) -> impl Iterator<Item = &'f str> + '_ {
        self.segments.iter().map(|segment| segment.specifier)
    }
}

impl<'s, 'a, 'f> IntoIterator for &'s Segments<'a, 'f> {
    type Item = &'s Segment<'a, 'f>;
    type IntoIter = std::slice::Iter<'s, Segment<'a, 'f>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Split `input` into one segment per placeholder of `format`.
///
/// Fails with [`ScanError::LiteralMismatch`] when a literal span of the format
/// is not found in the input left over by the previous spans. The text before
/// the first placeholder may appear anywhere in the input; text after the
/// final literal is ignored.
///
/// # Examples
///
/// ```
/// let segments = textscan::split("x=10, y=20", "x={}, y={%d}").unwrap();
/// assert_eq!(segments.inputs().collect::<Vec<_>>(), ["10", "20"]);
/// assert_eq!(segments.specifiers().collect::<Vec<_>>(), ["", "%d"]);
/// ```
pub fn split<'a, 'f>(input: &'a str, format: &'f str) -> Result<Segments<'a, 'f>, ScanError> {
    let template = format_parser::tokenize(format);
    let mut segments = Vec::with_capacity(template.placeholders.len());
    let mut remaining = input;
    let mut pending: Option<&'f str> = None;

    for token in template.placeholders {
        let (before, after) = locate(remaining, token.leading)?;
        if let Some(specifier) = pending.replace(token.specifier) {
            trace!(input = before, specifier, "carved placeholder segment");
            segments.push(Segment {
                input: before,
                specifier,
            });
        }
        remaining = after;
    }

    let last_input = if template.trailing.is_empty() {
        remaining
    } else {
        locate(remaining, template.trailing)?.0
    };
    if let Some(specifier) = pending {
        trace!(input = last_input, specifier, "carved final segment");
        segments.push(Segment {
            input: last_input,
            specifier,
        });
    }

    Ok(Segments { segments })
}

/// Find the first occurrence of `literal`, returning the text before and after it.
fn locate<'a>(remaining: &'a str, literal: &str) -> Result<(&'a str, &'a str), ScanError> {
    match remaining.find(literal) {
        Some(offset) => {
            let (before, rest) = remaining.split_at(offset);
            Ok((before, &rest[literal.len()..]))
        }
        None => Err(ScanError::LiteralMismatch {
            literal: literal.to_owned(),
            remaining: remaining.to_owned(),
        }),
    }
}
