use std::borrow::Cow;

use pretty_assertions::assert_eq;
use textscan::{ErrorKind, ScanError, scan};

// --- Single type ---

#[test]
fn test_string_with_empty_specifier() {
    let (value,) = scan::<(String,)>("hello world", "{}").unwrap();
    assert_eq!(value, "hello world");
}

#[test]
fn test_signed_with_d_specifier() {
    assert_eq!(scan::<(i32,)>("-123", "{%d}"), Ok((-123,)));
}

#[test]
fn test_unsigned_with_u_specifier() {
    assert_eq!(scan::<(u32,)>("456", "{%u}"), Ok((456,)));
}

#[test]
fn test_int_with_empty_specifier() {
    assert_eq!(scan::<(i32,)>("42", "{}"), Ok((42,)));
}

#[test]
#[allow(clippy::float_cmp)]
fn test_double_with_f_specifier() {
    let (value,) = scan::<(f64,)>("3.14159", "{%f}").unwrap();
    assert_eq!(value, 3.14159);
}

#[test]
fn test_text_targets() {
    let input = String::from("lovely string");
    let (borrowed,) = scan::<(&str,)>(&input, "{%s}").unwrap();
    let (boxed,) = scan::<(Box<str>,)>(&input, "{%s}").unwrap();
    let (cow,) = scan::<(Cow<str>,)>(&input, "{}").unwrap();
    assert_eq!(borrowed, "lovely string");
    assert_eq!(&*boxed, "lovely string");
    assert!(matches!(cow, Cow::Borrowed("lovely string")));
}

// --- Multiple types ---

#[test]
fn test_mixed_specifiers() {
    let values = scan::<(i32, String, f64)>("100 hello 2.5", "{%d} {%s} {%f}").unwrap();
    assert_eq!(values, (100, "hello".to_owned(), 2.5));
}

#[test]
fn test_empty_and_specified() {
    let values = scan::<(String, i32)>("start 99", "{} {%d}").unwrap();
    assert_eq!(values, ("start".to_owned(), 99));
}

#[test]
fn test_two_strings() {
    let values = scan::<(String, String)>("word1 word2", "{} {}").unwrap();
    assert_eq!(values, ("word1".to_owned(), "word2".to_owned()));
}

#[test]
fn test_literal_inside_words() {
    let values =
        scan::<(String, String)>("lovely string makes love", "{} string makes {%s}").unwrap();
    assert_eq!(values, ("lovely".to_owned(), "love".to_owned()));
}

#[test]
fn test_every_width() {
    let values = scan::<(i8, i16, i64, isize, u8, u16, u64, usize, f32)>(
        "-128,32767,-9223372036854775808,-1,255,65535,18446744073709551615,0,0.5",
        "{},{},{},{},{},{},{},{},{}",
    )
    .unwrap();
    assert_eq!(
        values,
        (
            i8::MIN,
            i16::MAX,
            i64::MIN,
            -1,
            u8::MAX,
            u16::MAX,
            u64::MAX,
            0,
            0.5
        )
    );
}

#[test]
fn test_128_bit_extremes() {
    let values = scan::<(i128, i128, u128)>(
        "[-170141183460469231731687303715884105728..170141183460469231731687303715884105727] \
         max=340282366920938463463374607431768211455",
        "[{%d}..{}] max={%u}",
    )
    .unwrap();
    assert_eq!(values, (i128::MIN, i128::MAX, u128::MAX));

    let error = scan::<(i128,)>("170141183460469231731687303715884105728", "{}").unwrap_err();
    assert_eq!(error.kind(), ErrorKind::RangeOverflow);
}

#[test]
fn test_f32_extremes() {
    let input = format!("{} {}", f32::MAX, f32::MIN);
    let values = scan::<(f32, f32)>(&input, "{%f} {}").unwrap();
    assert_eq!(values, (f32::MAX, f32::MIN));

    let error = scan::<(f32,)>("3.5e38", "{%f}").unwrap_err();
    assert_eq!(error.kind(), ErrorKind::RangeOverflow);
}

// --- Format and input matching ---

#[test]
fn test_literal_text() {
    let values = scan::<(i32, String)>("ID: 123 Name: Smith", "ID: {%d} Name: {%s}").unwrap();
    assert_eq!(values, (123, "Smith".to_owned()));
}

#[test]
fn test_leading_and_trailing_text() {
    assert_eq!(scan::<(i32,)>("[Value=50]", "[Value={%d}]"), Ok((50,)));
}

#[test]
fn test_escaped_braces_are_not_supported() {
    // `{{` opens a placeholder whose body is `{`.
    let error = scan::<(String,)>("{x}", "{{}}").unwrap_err();
    assert_eq!(error.kind(), ErrorKind::UnsupportedSpecifier);
}

#[test]
fn test_leftmost_match_rejects_negative_numbers_after_dash() {
    let error = scan::<(i32, i32)>("-5--3", "{%d}-{%d}").unwrap_err();
    assert_eq!(error.kind(), ErrorKind::ConversionFailure);
    assert_eq!(error.position(), Some(0));
}

// --- Errors ---

#[test]
fn test_conversion_failure() {
    let error = scan::<(i32,)>("not_a_number", "{%d}").unwrap_err();
    assert_eq!(error.kind(), ErrorKind::ConversionFailure);
    assert!(
        error
            .to_string()
            .contains("failed to convert \"not_a_number\" into <i32>")
    );
}

#[test]
fn test_arity_mismatch() {
    let error = scan::<(i32, String)>("100", "{%d}").unwrap_err();
    assert_eq!(
        error,
        ScanError::ArityMismatch {
            placeholders: 1,
            targets: 2,
        }
    );
}

#[test]
fn test_literal_mismatch() {
    let error = scan::<(i32,)>("ID 123", "ID: {%d}").unwrap_err();
    assert_eq!(error.kind(), ErrorKind::LiteralMismatch);
}

#[test]
fn test_unterminated_placeholder() {
    let error = scan::<(i32,)>("100", "{%d").unwrap_err();
    assert_eq!(error.kind(), ErrorKind::LiteralMismatch);
}

#[test]
fn test_empty_input() {
    let error = scan::<(i32,)>("", "{%d}").unwrap_err();
    assert_eq!(error.kind(), ErrorKind::ConversionFailure);
}

#[test]
fn test_wrong_format_specifier() {
    let error = scan::<(String,)>("wrong format specifier", "{s}").unwrap_err();
    assert_eq!(error.kind(), ErrorKind::UnsupportedSpecifier);
}

#[test]
fn test_unsigned_specifier_rejects_signed_target() {
    let error = scan::<(i64,)>("5", "{%u}").unwrap_err();
    assert_eq!(error.kind(), ErrorKind::TypeMismatch);
}

#[test]
fn test_narrow_targets_never_truncate() {
    assert_eq!(
        scan::<(u8,)>("256", "{%u}").unwrap_err().kind(),
        ErrorKind::RangeOverflow
    );
    assert_eq!(
        scan::<(u16,)>("-1", "{}").unwrap_err().kind(),
        ErrorKind::RangeOverflow
    );
    assert_eq!(
        scan::<(f32,)>("3.5e38", "{%f}").unwrap_err().kind(),
        ErrorKind::RangeOverflow
    );
}

#[test]
fn test_error_converts_to_io_error() {
    fn parse_port(line: &str) -> std::io::Result<u16> {
        let (port,) = scan::<(u16,)>(line, "port={%u}")?;
        Ok(port)
    }

    assert_eq!(parse_port("port=8080").unwrap(), 8080);
    let error = parse_port("port=80000").unwrap_err();
    assert_eq!(error.kind(), std::io::ErrorKind::InvalidInput);
}

#[test]
fn test_tracing_events_do_not_affect_results() {
    use tracing_subscriber::EnvFilter;

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("textscan=trace"))
        .with_test_writer()
        .finish();
    tracing::subscriber::with_default(subscriber, || {
        assert_eq!(scan::<(u8, u8)>("1.2", "{}.{}"), Ok((1, 2)));
        assert_eq!(
            scan::<(u8,)>("x", "{}").unwrap_err().kind(),
            ErrorKind::ConversionFailure
        );
    });
}
