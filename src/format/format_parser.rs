use nom::{
    IResult, Parser,
    bytes::complete::take_until,
    character::complete::char,
    multi::many0,
    sequence::{delimited, pair},
};

/// One `{...}` group together with the literal text that precedes it.
#[derive(Debug, PartialEq, Eq)]
pub(super) struct PlaceholderToken<'f> {
    pub leading: &'f str,
    pub specifier: &'f str,
}

#[derive(Debug, PartialEq, Eq)]
pub(super) struct Template<'f> {
    pub placeholders: Vec<PlaceholderToken<'f>>,
    /// Format text after the last placeholder. An unterminated `{` ends up
    /// here verbatim.
    pub trailing: &'f str,
}

pub(super) fn tokenize(format: &str) -> Template<'_> {
    match many0(placeholder_token).parse(format) {
        Ok((trailing, placeholders)) => Template {
            placeholders,
            trailing,
        },
        Err(_) => Template {
            placeholders: Vec::new(),
            trailing: format,
        },
    }
}

fn placeholder_token(input: &str) -> IResult<&str, PlaceholderToken<'_>> {
    let (remaining, (leading, specifier)) = pair(
        take_until("{"),
        delimited(char('{'), take_until("}"), char('}')),
    )
    .parse(input)?;
    Ok((remaining, PlaceholderToken { leading, specifier }))
}
