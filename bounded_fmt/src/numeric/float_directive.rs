// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Floats rendered from a directive (`{:e}`, `{:.3f}`, `{:g}`, ...). These follow the
//! printf conventions:
//!
//! | Type      | Output                                                          |
//! | :-------- | :-------------------------------------------------------------- |
//! | `e` / `E` | `d.ddde+XX`, precision digits after the point, at least two     |
//! |           | exponent digits                                                 |
//! | `f` / `F` | fixed, precision digits after the point                         |
//! | `g` / `G` | fixed or scientific with precision significant digits, trailing |
//! |           | zeros removed unless `#`                                        |
//! | auto      | `g` with enough digits to round trip the value                  |
//!
//! Precision defaults to `6`. The writer's decimal separator replaces the `.`.

use super::{MAX_EXACT_MANTISSA_DIGITS, Padding, ensure_fits, parse_exponent,
            push_c_exponent, push_fixed_digits, push_padded, push_scientific_digits,
            split_exponent, trim_fraction};
use crate::{Align, BoundedWriter, FormatArgSpec, FormatError, FormatType,
            InvalidArgumentReason, ScratchText, Sign, ValueCategory, WriterStorage};

pub const DEFAULT_FLOAT_PRECISION: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloatWidth {
    F32,
    F64,
}

/// A float argument widened to [`f64`], remembering where it came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Float {
    pub value: f64,
    pub width: FloatWidth,
}

impl Float {
    /// Significant digits needed to round trip the original type.
    #[must_use]
    pub fn max_digits10(self) -> usize {
        match self.width {
            FloatWidth::F32 => 9,
            FloatWidth::F64 => 17,
        }
    }
}

impl From<f32> for Float {
    fn from(value: f32) -> Self {
        Self {
            value: f64::from(value),
            width: FloatWidth::F32,
        }
    }
}

impl From<f64> for Float {
    fn from(value: f64) -> Self {
        Self {
            value,
            width: FloatWidth::F64,
        }
    }
}

/// Render `value` per `spec` and copy it into `writer` only if all of it fits.
///
/// # Errors
///
/// - [`FormatError::InvalidArgument`] for `s`, `d`, `b`, `x`, `X`.
/// - [`FormatError::Capacity`] with the cursor unchanged if the text does not fit.
///   Width and kept precision digits are checked against the remaining space before
///   any text is composed.
pub fn render_float<S: WriterStorage>(
    writer: &mut BoundedWriter<S>,
    value: Float,
    spec: &FormatArgSpec,
) -> Result<(), FormatError> {
    let format_type = spec.format_type;
    let upper = format_type.is_upper_case();
    let alternate = spec.alternate_form;

    let number = value.value;
    let magnitude = number.abs();
    let remaining = writer.remaining();
    let mut body = ScratchText::new();

    if number.is_nan() {
        body.push_str(if upper { "NAN" } else { "nan" });
    } else if number.is_infinite() {
        body.push_str(if upper { "INF" } else { "inf" });
    } else if magnitude == 0.0 {
        body.push('0');
    } else {
        match format_type {
            FormatType::Auto => {
                let precision = spec.precision.unwrap_or(value.max_digits10() - 1);
                push_general(&mut body, magnitude, precision, alternate, false, remaining)?;
            }
            FormatType::ExponentLower | FormatType::ExponentUpper => {
                let precision = spec.precision.unwrap_or(DEFAULT_FLOAT_PRECISION);
                ensure_fits(precision, remaining)?;
                push_scientific(&mut body, magnitude, precision, alternate, upper)?;
            }
            FormatType::FixedLower | FormatType::FixedUpper => {
                let precision = spec.precision.unwrap_or(DEFAULT_FLOAT_PRECISION);
                ensure_fits(precision, remaining)?;
                push_fixed(&mut body, magnitude, precision, alternate);
            }
            FormatType::GeneralLower | FormatType::GeneralUpper => {
                let precision = spec.precision.unwrap_or(DEFAULT_FLOAT_PRECISION);
                push_general(&mut body, magnitude, precision, alternate, upper, remaining)?;
            }
            other => {
                return Err(FormatError::invalid(
                    InvalidArgumentReason::IncompatibleType {
                        type_char: other.as_char(),
                        category: ValueCategory::Float,
                    },
                ));
            }
        }
    }

    let negative = number.is_sign_negative() && !number.is_nan() && magnitude != 0.0;
    let prefix = match (negative, spec.sign) {
        (true, _) => "-",
        (false, Sign::Always) => "+",
        (false, Sign::Space) => " ",
        (false, Sign::Never) => "",
    };

    ensure_fits(spec.width.unwrap_or(0), remaining)?;
    let padding = Padding::compute(
        prefix.len() + body.len(),
        spec,
        Align::Right,
        number.is_finite(),
    );
    let mut out = ScratchText::new();
    let body_start = push_padded(&mut out, prefix, &body, padding);
    let decimal_pos = body.find('.').map(|pos| pos + body_start);

    tracing::trace!(?value, format_type = %format_type.as_char(), text = %out, "float rendered");
    let decimal_separator = writer.decimal_separator();
    writer.write_number_text(&out, decimal_pos, decimal_separator)?;
    Ok(())
}

/// `{:.Nf}`. The `#` flag keeps the point even with no digits after it.
fn push_fixed(out: &mut ScratchText, magnitude: f64, precision: usize, alternate: bool) {
    push_fixed_digits(out, magnitude, precision);
    if alternate && precision == 0 {
        out.push('.');
    }
}

fn push_scientific(
    out: &mut ScratchText,
    magnitude: f64,
    precision: usize,
    alternate: bool,
    upper: bool,
) -> Result<(), FormatError> {
    let mut rendered = ScratchText::new();
    push_scientific_digits(&mut rendered, magnitude, precision);
    let (mantissa, exponent) = split_exponent(&rendered);
    let exponent = parse_exponent(exponent.unwrap_or("0"))?;

    out.push_str(mantissa);
    if alternate && precision == 0 {
        out.push('.');
    }
    push_c_exponent(out, if upper { 'E' } else { 'e' }, exponent);
    Ok(())
}

/// `%g`: with `P` significant digits and decimal exponent `X` of the rounded value,
/// use fixed notation with `P - 1 - X` digits if `-4 <= X < P`, else scientific with
/// `P - 1` digits.
///
/// Without `#` the zeros are trimmed, so `P` is capped where the exact expansion
/// ends. With `#` all `P` digits are kept and must fit in `remaining`.
fn push_general(
    out: &mut ScratchText,
    magnitude: f64,
    precision: usize,
    alternate: bool,
    upper: bool,
    remaining: usize,
) -> Result<(), FormatError> {
    let significant = if alternate {
        ensure_fits(precision, remaining)?;
        precision.max(1)
    } else {
        precision.clamp(1, MAX_EXACT_MANTISSA_DIGITS + 1)
    };
    let mut probe = ScratchText::new();
    push_scientific_digits(&mut probe, magnitude, significant - 1);
    let (mantissa, exponent_text) = split_exponent(&probe);
    let exponent = parse_exponent(exponent_text.unwrap_or("0"))?;

    let significant_i64 = i64::try_from(significant).unwrap_or(i64::MAX);
    let exponent_i64 = i64::from(exponent);

    if (-4..significant_i64).contains(&exponent_i64) {
        let fraction_digits =
            usize::try_from(significant_i64 - 1 - exponent_i64).unwrap_or_default();
        let start = out.len();
        push_fixed(out, magnitude, fraction_digits, alternate);
        if !alternate {
            let kept = trim_fraction(&out[start..]).len();
            out.truncate(start + kept);
        }
    } else {
        out.push_str(if alternate {
            mantissa
        } else {
            trim_fraction(mantissa)
        });
        if alternate && significant == 1 {
            out.push('.');
        }
        push_c_exponent(out, if upper { 'E' } else { 'e' }, exponent);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;
    use crate::CapacityError;

    fn render(value: impl Into<Float>, spec: FormatArgSpec) -> String {
        let mut buf = [0_u8; 200];
        let mut writer = BoundedWriter::new(&mut buf[..]);
        render_float(&mut writer, value.into(), &spec).unwrap();
        writer.as_str().to_owned()
    }

    fn spec(format_type: FormatType, precision: Option<usize>) -> FormatArgSpec {
        FormatArgSpec {
            format_type,
            precision,
            ..Default::default()
        }
    }

    #[test_case(1234.5, FormatType::ExponentLower, None, "1.234500e+03" ; "e default precision")]
    #[test_case(0.000_123, FormatType::ExponentUpper, Some(2), "1.23E-04" ; "E with precision")]
    #[test_case(1.234_56, FormatType::FixedLower, Some(3), "1.235" ; "f rounds")]
    #[test_case(2.0, FormatType::FixedUpper, None, "2.000000" ; "F default precision")]
    #[test_case(100_000.0, FormatType::GeneralLower, None, "100000" ; "g stays fixed")]
    #[test_case(1_000_000.0, FormatType::GeneralLower, None, "1e+06" ; "g goes scientific")]
    #[test_case(0.000_012_5, FormatType::GeneralUpper, Some(3), "1.25E-05" ; "G small")]
    #[test_case(0.000_125, FormatType::GeneralLower, None, "0.000125" ; "g at lower bound")]
    #[test_case(-2.5, FormatType::Auto, None, "-2.5" ; "auto negative")]
    #[test_case(0.1, FormatType::Auto, None, "0.1" ; "auto tenth")]
    #[test_case(1e20, FormatType::Auto, None, "1e+20" ; "auto large")]
    #[test_case(123_456_789.0, FormatType::Auto, None, "123456789" ; "auto integral")]
    #[test_case(2.0 / 3.0, FormatType::Auto, Some(3), "0.667" ; "auto with precision")]
    fn test_directive_types(
        value: f64,
        format_type: FormatType,
        precision: Option<usize>,
        expected: &str,
    ) {
        assert_eq!(render(value, spec(format_type, precision)), expected);
    }

    #[test]
    fn test_f32_uses_its_own_round_trip_digits() {
        assert_eq!(render(0.1_f32, FormatArgSpec::default()), "0.1");
        assert_eq!(render(16_777_216.0_f32, FormatArgSpec::default()), "16777216");
    }

    #[test]
    fn test_zero_and_special_values() {
        assert_eq!(render(0.0, spec(FormatType::FixedLower, Some(3))), "0");
        assert_eq!(render(-0.0, FormatArgSpec::default()), "0");
        assert_eq!(render(f64::INFINITY, FormatArgSpec::default()), "inf");
        assert_eq!(render(f64::NEG_INFINITY, spec(FormatType::FixedUpper, None)), "-INF");
        assert_eq!(render(f64::NAN, spec(FormatType::GeneralUpper, None)), "NAN");
    }

    #[test]
    fn test_alternate_form_keeps_zeros_and_point() {
        let it = FormatArgSpec {
            alternate_form: true,
            format_type: FormatType::GeneralLower,
            ..Default::default()
        };
        assert_eq!(render(1.5, it), "1.50000");

        let it = FormatArgSpec {
            alternate_form: true,
            format_type: FormatType::FixedLower,
            precision: Some(0),
            ..Default::default()
        };
        assert_eq!(render(3.0, it), "3.");
    }

    #[test]
    fn test_sign_and_padding() {
        let it = FormatArgSpec {
            sign: Sign::Always,
            zero_pad: true,
            width: Some(9),
            precision: Some(2),
            format_type: FormatType::FixedLower,
            ..Default::default()
        };
        assert_eq!(render(3.257, it), "+00003.26");

        // Zero flag is ignored for non-finite values.
        assert_eq!(render(f64::INFINITY, it), "     +inf");

        let it = FormatArgSpec {
            align: Align::Center,
            width: Some(8),
            ..Default::default()
        };
        assert_eq!(render(2.5, it), "  2.5   ");
    }

    #[test]
    fn test_decimal_separator_from_writer() {
        let mut buf = [0_u8; 32];
        let mut writer = BoundedWriter::new(&mut buf[..]).with_decimal_separator(b',');
        let it = FormatArgSpec {
            zero_pad: true,
            width: Some(8),
            precision: Some(2),
            format_type: FormatType::ExponentLower,
            ..Default::default()
        };
        render_float(&mut writer, (-1234.5).into(), &it).unwrap();
        assert_eq!(writer.as_str(), "-1,23e+03");
    }

    #[test]
    fn test_integer_types_are_rejected() {
        let mut buf = [0_u8; 32];
        let mut writer = BoundedWriter::new(&mut buf[..]);
        let result = render_float(&mut writer, 1.0.into(), &spec(FormatType::HexLower, None));
        assert_eq!(
            result,
            Err(FormatError::invalid(InvalidArgumentReason::IncompatibleType {
                type_char: 'x',
                category: ValueCategory::Float,
            }))
        );
    }

    #[test]
    fn test_capacity_is_atomic() {
        let mut buf = [0_u8; 4];
        let mut writer = BoundedWriter::new(&mut buf[..]);
        let result = render_float(&mut writer, 3.25.into(), &FormatArgSpec::default());
        assert_eq!(result, Ok(()));
        let result = render_float(&mut writer, 1.5.into(), &FormatArgSpec::default());
        assert_eq!(result, Err(FormatError::Capacity(CapacityError)));
        assert_eq!(writer.as_str(), "3.25");
    }

    #[test_case(FormatType::FixedLower ; "fixed")]
    #[test_case(FormatType::ExponentLower ; "scientific")]
    fn test_huge_precision_is_a_capacity_error(format_type: FormatType) {
        let mut buf = [0_u8; 16];
        let mut writer = BoundedWriter::new(&mut buf[..]);
        let result = render_float(&mut writer, 1.5.into(), &spec(format_type, Some(70_000)));
        assert_eq!(result, Err(FormatError::Capacity(CapacityError)));
        assert!(writer.is_empty());
    }

    #[test]
    fn test_huge_precision_that_fits() {
        let mut writer = BoundedWriter::new(vec![0_u8; 80_000]);
        render_float(&mut writer, 1.5.into(), &spec(FormatType::FixedLower, Some(70_000)))
            .unwrap();
        let text = writer.as_str();
        assert_eq!(text.len(), 70_002);
        assert!(text.starts_with("1.5000"));
        assert!(text[2..].bytes().skip(1).all(|it| it == b'0'));

        writer.clear();
        let it = spec(FormatType::ExponentLower, Some(1000));
        render_float(&mut writer, 1.5.into(), &it).unwrap();
        let text = writer.as_str();
        assert_eq!(text.len(), 1006);
        assert!(text.ends_with("0e+00"));
    }

    #[test]
    fn test_huge_general_precision_trims() {
        assert_eq!(render(1.5, spec(FormatType::GeneralLower, Some(70_000))), "1.5");
        // 2^-40, whose exact expansion has 28 significant digits.
        let value = 1.0 / 1_099_511_627_776.0;
        assert_eq!(
            render(value, spec(FormatType::GeneralUpper, Some(70_000))),
            "9.094947017729282379150390625E-13"
        );
        assert_eq!(render(0.25, spec(FormatType::Auto, Some(70_000))), "0.25");

        let mut buf = [0_u8; 16];
        let mut writer = BoundedWriter::new(&mut buf[..]);
        let it = FormatArgSpec {
            alternate_form: true,
            ..spec(FormatType::GeneralLower, Some(70_000))
        };
        let result = render_float(&mut writer, 1.5.into(), &it);
        assert_eq!(result, Err(FormatError::Capacity(CapacityError)));
    }

    #[test]
    fn test_huge_width_fails_before_composing() {
        let mut buf = [0_u8; 16];
        let mut writer = BoundedWriter::new(&mut buf[..]);
        let it = FormatArgSpec {
            width: Some(usize::MAX),
            ..Default::default()
        };
        let result = render_float(&mut writer, 1.5.into(), &it);
        assert_eq!(result, Err(FormatError::Capacity(CapacityError)));
        assert!(writer.is_empty());
    }
}
