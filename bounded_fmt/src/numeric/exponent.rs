// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Taking apart and putting back the exponent of scientific notation text.
//!
//! Rust renders `{:e}` as `1.5e-7` (no plus sign, no zero padding). Both float paths
//! split that at the marker, parse the exponent, and re-emit it in their own style:
//! - C style `e-07` for the printf-like directives.
//! - Locale style (`e-7`, `−1.5 × 10⁻⁷`, ...) for the adaptive engine.

use nom::{IResult, Parser,
          character::complete::{digit1, one_of},
          combinator::opt};

use crate::{ExponentDigits, FormatError, NumericLocale, ScratchText};

pub const SUPERSCRIPT_DIGITS: [&str; 10] = ["⁰", "¹", "²", "³", "⁴", "⁵", "⁶", "⁷", "⁸", "⁹"];

pub const SUPERSCRIPT_MINUS: &str = "⁻";

/// Split at the first `e` or `E`. The exponent part excludes the marker.
#[must_use]
pub fn split_exponent(text: &str) -> (&str, Option<&str>) {
    match text.find(['e', 'E']) {
        Some(pos) => (&text[..pos], Some(&text[pos + 1..])),
        None => (text, None),
    }
}

/// Parse a signed decimal exponent, eg: `+07`, `-300`, `12`.
///
/// # Errors
///
/// Returns [`FormatError::ResultOutOfRange`] if the text is not a number or does not
/// fit in an [`i32`].
pub fn parse_exponent(text: &str) -> Result<i32, FormatError> {
    let result: IResult<&str, (Option<char>, &str)> =
        (opt(one_of("+-")), digit1).parse(text);
    let Ok(("", (sign, digits))) = result else {
        return Err(FormatError::ResultOutOfRange);
    };

    let magnitude = digits
        .bytes()
        .try_fold(0_i32, |acc, digit| {
            acc.checked_mul(10)?.checked_add(i32::from(digit - b'0'))
        })
        .ok_or(FormatError::ResultOutOfRange)?;

    Ok(if sign == Some('-') {
        -magnitude
    } else {
        magnitude
    })
}

/// Decimal digits of `value`, most significant first, no leading zeros.
#[must_use]
pub fn exponent_digits(mut value: u32) -> ExponentDigits {
    let mut digits = ExponentDigits::new();
    loop {
        digits.push(u8::try_from(value % 10).unwrap_or_default());
        value /= 10;
        if value == 0 {
            break;
        }
    }
    digits.reverse();
    digits
}

/// `exponent_prefix`, then the sign token and digits. Superscript mode uses `⁻` for
/// negative exponents and nothing for positive ones.
pub fn push_locale_exponent(out: &mut ScratchText, exponent: i32, locale: &NumericLocale) {
    out.push_str(locale.exponent_prefix);
    let digits = exponent_digits(exponent.unsigned_abs());

    if locale.use_superscript_exponent {
        if exponent < 0 {
            out.push_str(SUPERSCRIPT_MINUS);
        }
        for digit in digits {
            out.push_str(SUPERSCRIPT_DIGITS[usize::from(digit)]);
        }
    } else {
        out.push_str(if exponent < 0 {
            locale.minus_prefix
        } else {
            locale.plus_prefix
        });
        for digit in digits {
            out.push(char::from(b'0' + digit));
        }
    }
}

/// `e+07` style: marker, mandatory sign, at least two digits.
pub fn push_c_exponent(out: &mut ScratchText, marker: char, exponent: i32) {
    out.push(marker);
    out.push(if exponent < 0 { '-' } else { '+' });
    let digits = exponent_digits(exponent.unsigned_abs());
    if digits.len() < 2 {
        out.push('0');
    }
    for digit in digits {
        out.push(char::from(b'0' + digit));
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case("1.50e-7", "1.50", Some("-7") ; "negative exponent")]
    #[test_case("2E12", "2", Some("12") ; "upper case marker")]
    #[test_case("3.25", "3.25", None ; "no exponent")]
    fn test_split_exponent(text: &str, mantissa: &str, exponent: Option<&str>) {
        assert_eq!(split_exponent(text), (mantissa, exponent));
    }

    #[test_case("+07", Ok(7) ; "plus and leading zero")]
    #[test_case("-300", Ok(-300) ; "negative")]
    #[test_case("0", Ok(0) ; "zero")]
    #[test_case("99999999999", Err(FormatError::ResultOutOfRange) ; "overflow")]
    #[test_case("", Err(FormatError::ResultOutOfRange) ; "empty")]
    #[test_case("1x", Err(FormatError::ResultOutOfRange) ; "trailing garbage")]
    fn test_parse_exponent(text: &str, expected: Result<i32, FormatError>) {
        assert_eq!(parse_exponent(text), expected);
    }

    #[test]
    fn test_exponent_digits() {
        assert_eq!(exponent_digits(0).as_slice(), &[0]);
        assert_eq!(exponent_digits(307).as_slice(), &[3, 0, 7]);
        assert_eq!(exponent_digits(u32::MAX).len(), 10);
    }

    #[test]
    fn test_locale_exponent() {
        let mut out = ScratchText::new();
        push_locale_exponent(&mut out, -7, &NumericLocale::ascii());
        assert_eq!(out.as_str(), "e-7");

        out.clear();
        push_locale_exponent(&mut out, 12, &NumericLocale::ascii());
        assert_eq!(out.as_str(), "e12");

        out.clear();
        push_locale_exponent(&mut out, -12, &NumericLocale::unicode());
        assert_eq!(out.as_str(), " × 10⁻¹²");

        out.clear();
        let locale = NumericLocale::ascii().with_sign_tokens("+", "-");
        push_locale_exponent(&mut out, 5, &locale);
        assert_eq!(out.as_str(), "e+5");
    }

    #[test]
    fn test_c_exponent() {
        let mut out = ScratchText::new();
        push_c_exponent(&mut out, 'e', 3);
        assert_eq!(out.as_str(), "e+03");

        out.clear();
        push_c_exponent(&mut out, 'E', -300);
        assert_eq!(out.as_str(), "E-300");
    }
}
