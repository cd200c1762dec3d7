// Text <-> ComplexNumber conversion for the "a+bi" / "a-bi" notation

use crate::compat::{String, ToString};
use crate::complex::ComplexNumber;
use core::num::ParseFloatError;
use core::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("Missing + or - for form of a+bi or a-bi")]
    MissingSeparator,
    #[error("invalid number '{text}': {source}")]
    InvalidNumber {
        text: String,
        source: ParseFloatError,
    },
}

/// Parse `"<real><sign><imag>i"` into a complex number.
///
/// The split point is the first `+` anywhere in the text, or failing that the
/// first `-` after the leading character, so a negative real part is not
/// mistaken for the separator. Everything from the split point on, minus one
/// trailing `i`, is the imaginary part.
///
/// A `+` inside an exponent is still taken as the separator, so `"1e+5+2i"`
/// does not parse.
///
/// # Examples
///
/// ```
/// use imcalc_core::parser::parse;
///
/// let z = parse("-2-5i").unwrap();
/// assert_eq!(z.real(), -2.0);
/// assert_eq!(z.imaginary(), -5.0);
/// ```
pub fn parse(text: &str) -> Result<ComplexNumber, ParseError> {
    let split = find_separator(text).ok_or(ParseError::MissingSeparator)?;
    let (real_text, imaginary_text) = text.split_at(split);
    let imaginary_text = imaginary_text.strip_suffix('i').unwrap_or(imaginary_text);

    let real = parse_component(real_text)?;
    let imaginary = parse_component(imaginary_text)?;
    Ok(ComplexNumber::new(real, imaginary))
}

/// Render a complex number as `"a+bi"` or `"a-bi"`.
pub fn format(value: &ComplexNumber) -> String {
    value.to_string()
}

fn find_separator(text: &str) -> Option<usize> {
    text.find('+').or_else(|| {
        text.char_indices()
            .skip(1)
            .find(|&(_, c)| c == '-')
            .map(|(pos, _)| pos)
    })
}

fn parse_component(text: &str) -> Result<f64, ParseError> {
    text.parse::<f64>()
        .map_err(|source| ParseError::InvalidNumber {
            text: text.to_string(),
            source,
        })
}

impl FromStr for ComplexNumber {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positive_imaginary() {
        assert_eq!(parse("3+4i").unwrap(), ComplexNumber::new(3.0, 4.0));
        assert_eq!(parse("0+1i").unwrap(), ComplexNumber::I);
        assert_eq!(parse("2.5+0.125i").unwrap(), ComplexNumber::new(2.5, 0.125));
    }

    #[test]
    fn test_parse_negative_parts() {
        assert_eq!(parse("-2-5i").unwrap(), ComplexNumber::new(-2.0, -5.0));
        assert_eq!(parse("3-4i").unwrap(), ComplexNumber::new(3.0, -4.0));
        assert_eq!(parse("-3+4i").unwrap(), ComplexNumber::new(-3.0, 4.0));
    }

    #[test]
    fn test_negative_zero_imaginary() {
        let z = parse("-1-0i").unwrap();
        assert_eq!(z, ComplexNumber::new(-1.0, -0.0));
        assert_eq!(format(&z), "-1+0i");
        assert_eq!(z.argument(), core::f64::consts::PI);
    }

    #[test]
    fn test_trailing_i_is_optional() {
        assert_eq!(parse("3+4").unwrap(), ComplexNumber::new(3.0, 4.0));
    }

    #[test]
    fn test_missing_separator() {
        assert_eq!(parse("hello"), Err(ParseError::MissingSeparator));
        assert_eq!(parse("-5"), Err(ParseError::MissingSeparator));
        assert_eq!(parse("42"), Err(ParseError::MissingSeparator));
        assert_eq!(parse(""), Err(ParseError::MissingSeparator));
    }

    #[test]
    fn test_invalid_number() {
        assert!(matches!(
            parse("abc+4i"),
            Err(ParseError::InvalidNumber { ref text, .. }) if text == "abc"
        ));
        assert!(matches!(
            parse("3+xi"),
            Err(ParseError::InvalidNumber { ref text, .. }) if text == "+x"
        ));
        // Leading '+' leaves an empty real part
        assert!(matches!(
            parse("+4i"),
            Err(ParseError::InvalidNumber { ref text, .. }) if text.is_empty()
        ));
    }

    #[test]
    fn test_exponent_plus_is_taken_as_separator() {
        assert!(matches!(parse("1e+5+2i"), Err(ParseError::InvalidNumber { .. })));
        // A '-' exponent is fine as long as a '+' separates the parts
        assert_eq!(parse("1e-3+2i").unwrap(), ComplexNumber::new(0.001, 2.0));
    }

    #[test]
    fn test_format() {
        assert_eq!(format(&ComplexNumber::new(3.0, 4.0)), "3+4i");
        assert_eq!(format(&ComplexNumber::new(-2.0, -5.0)), "-2-5i");
    }

    #[test]
    fn test_from_str() {
        let z: ComplexNumber = "7-0.5i".parse().unwrap();
        assert_eq!(z, ComplexNumber::new(7.0, -0.5));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ParseError::MissingSeparator.to_string(),
            "Missing + or - for form of a+bi or a-bi"
        );
        let err = parse("q+1i").unwrap_err();
        assert!(err.to_string().starts_with("invalid number 'q'"));
    }
}
