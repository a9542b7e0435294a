//! Placeholder specifiers recognized while checking a format string at compile
//! time. The expanded code re-reads the format string at run time.

/// Conversion requested by a placeholder body.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Specifier {
    /// `{}`: conversion follows the target type.
    Infer,
    /// `{%s}`
    Text,
    /// `{%d}`
    Integer,
    /// `{%u}`
    Unsigned,
    /// `{%f}`
    Float,
}

impl Specifier {
    pub fn from_body(body: &str) -> Option<Self> {
        match body {
            "" => Some(Self::Infer),
            "%s" => Some(Self::Text),
            "%d" => Some(Self::Integer),
            "%u" => Some(Self::Unsigned),
            "%f" => Some(Self::Float),
            _ => None,
        }
    }
}
