// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The adaptive float engine. It picks fixed or scientific notation from the value's
//! magnitude, keeps a minimum number of significant digits for small values, trims
//! trailing zeros, and re-emits the exponent in the locale's style.
//!
//! ```text
//! 1234.5     -> 1234.5
//! 0.000123   -> 0.00012
//! 1234567.0  -> 1.23e6
//! 1.5e-7     -> 1.5e-7     (unicode locale: 1.5 × 10⁻⁷)
//! ```
//!
//! Text is composed in [`ScratchText`] and copied into the writer in one step, so a
//! failure never leaves half a number behind.

use std::{fmt::Write, num::FpCategory};

use super::{NumericLocale, NumericRenderSettings, parse_exponent, push_fill,
            push_locale_exponent, split_exponent};
use crate::{BoundedWriter, CapacityError, FormatError, ScratchText, WriterStorage};

/// Recommended minimum capacity for a buffer that receives one float.
pub const FLOAT_TEXT_BUFFER_CAPACITY: usize = 128;

/// Returned by [`float_to_string()`] and [`float_to_string_localized()`] on failure.
pub const FLOAT_ERROR_SENTINEL: &str = "####";

/// Render `value` with an ASCII `-` for negatives and the writer's decimal separator.
/// When `trim` is false, trailing zeros of the mantissa are kept.
///
/// Returns the text that was written.
///
/// # Errors
///
/// - [`FormatError::Capacity`] with the cursor unchanged if the text does not fit.
/// - [`FormatError::ResultOutOfRange`] if the exponent can't be represented.
pub fn format_float<'w, S: WriterStorage>(
    writer: &'w mut BoundedWriter<S>,
    value: f64,
    settings: &NumericRenderSettings,
    trim: bool,
) -> Result<&'w str, FormatError> {
    let locale = NumericLocale::ascii().with_decimal_separator(writer.decimal_separator());
    render_adaptive(writer, value, settings, &locale, trim)
}

/// Same as [`format_float()`], with every token (sign, specials, exponent, decimal
/// separator) taken from `locale`. Always trims.
///
/// # Errors
///
/// See [`format_float()`].
pub fn format_float_localized<'w, S: WriterStorage>(
    writer: &'w mut BoundedWriter<S>,
    value: f64,
    settings: &NumericRenderSettings,
    locale: &NumericLocale,
) -> Result<&'w str, FormatError> {
    render_adaptive(writer, value, settings, locale, true)
}

/// Owned version of [`format_float()`]. Returns [`FLOAT_ERROR_SENTINEL`] on failure.
#[must_use]
pub fn float_to_string(value: f64, settings: &NumericRenderSettings, trim: bool) -> String {
    let mut buf = [0_u8; FLOAT_TEXT_BUFFER_CAPACITY];
    let mut writer = BoundedWriter::new(&mut buf[..]);
    match format_float(&mut writer, value, settings, trim) {
        Ok(text) => text.to_owned(),
        Err(_) => FLOAT_ERROR_SENTINEL.to_owned(),
    }
}

/// Owned version of [`format_float_localized()`]. Returns [`FLOAT_ERROR_SENTINEL`] on
/// failure.
#[must_use]
pub fn float_to_string_localized(
    value: f64,
    settings: &NumericRenderSettings,
    locale: &NumericLocale,
) -> String {
    let mut buf = [0_u8; FLOAT_TEXT_BUFFER_CAPACITY];
    let mut writer = BoundedWriter::new(&mut buf[..]);
    match format_float_localized(&mut writer, value, settings, locale) {
        Ok(text) => text.to_owned(),
        Err(_) => FLOAT_ERROR_SENTINEL.to_owned(),
    }
}

/// Drop trailing `0`s after a decimal point, then the point itself if nothing is
/// left after it. Text without a `.` is returned as is.
#[must_use]
pub fn trim_fraction(text: &str) -> &str {
    if !text.contains('.') {
        return text;
    }
    let trimmed = text.trim_end_matches('0');
    trimmed.strip_suffix('.').unwrap_or(trimmed)
}

/// Fraction digits past this are always `0` in the exact decimal expansion of an
/// [`f64`] (the smallest subnormal is `2^-1074`).
pub const MAX_EXACT_FRACTION_DIGITS: usize = 1074;

/// Mantissa digits after the point past this are always `0` in the exact scientific
/// expansion of an [`f64`], which has at most 767 significant digits.
pub const MAX_EXACT_MANTISSA_DIGITS: usize = 767;

/// Fail fast when text of at least `min_len` bytes can't fit in `remaining`.
///
/// # Errors
///
/// Returns [`CapacityError`] if `min_len > remaining`.
pub fn ensure_fits(min_len: usize, remaining: usize) -> Result<(), CapacityError> {
    if min_len > remaining {
        return Err(CapacityError);
    }
    Ok(())
}

/// `{:.N}` for any `N`. Digits past [`MAX_EXACT_FRACTION_DIGITS`] are filled in as
/// zeros, so `std::fmt` never sees a precision it can't handle.
pub fn push_fixed_digits(out: &mut ScratchText, magnitude: f64, precision: usize) {
    let exact = precision.min(MAX_EXACT_FRACTION_DIGITS);
    _ = write!(out, "{magnitude:.exact$}");
    push_fill(out, '0', precision - exact);
}

/// `{:.Ne}` for any `N`, see [`push_fixed_digits()`].
pub fn push_scientific_digits(out: &mut ScratchText, magnitude: f64, precision: usize) {
    let exact = precision.min(MAX_EXACT_MANTISSA_DIGITS);
    let mut rendered = ScratchText::new();
    _ = write!(rendered, "{magnitude:.exact$e}");
    let (mantissa, exponent) = split_exponent(&rendered);
    out.push_str(mantissa);
    push_fill(out, '0', precision - exact);
    if let Some(exponent) = exponent {
        out.push('e');
        out.push_str(exponent);
    }
}

fn render_adaptive<'w, S: WriterStorage>(
    writer: &'w mut BoundedWriter<S>,
    value: f64,
    settings: &NumericRenderSettings,
    locale: &NumericLocale,
    trim: bool,
) -> Result<&'w str, FormatError> {
    let start = writer.size();
    let mut out = ScratchText::new();
    let decimal_pos =
        compose_adaptive(&mut out, value, settings, locale, trim, writer.remaining())?;
    writer.write_number_text(&out, decimal_pos, locale.decimal_separator)?;
    Ok(writer.written_since(start))
}

/// Returns the byte offset of the mantissa's `.` in `out`, if there is one. Untrimmed
/// text longer than `remaining` is rejected before it is composed.
fn compose_adaptive(
    out: &mut ScratchText,
    value: f64,
    settings: &NumericRenderSettings,
    locale: &NumericLocale,
    trim: bool,
    remaining: usize,
) -> Result<Option<usize>, FormatError> {
    match value.classify() {
        FpCategory::Zero => {
            out.push('0');
            return Ok(None);
        }
        FpCategory::Nan => {
            out.push_str(locale.nan_text);
            return Ok(None);
        }
        _ => {}
    }

    // Sign bit, not comparison, picks the prefix.
    out.push_str(if value.is_sign_negative() {
        locale.minus_prefix
    } else {
        locale.plus_prefix
    });

    if value.is_infinite() {
        out.push_str(locale.infinity_text);
        return Ok(None);
    }

    let magnitude = value.abs();
    let mut rendered = ScratchText::new();
    let scientific = settings.uses_scientific(magnitude);
    // Trimmed zeros past the exact expansion would be dropped anyway.
    if scientific {
        let precision = settings.scientific_precision;
        if trim {
            let precision = precision.min(MAX_EXACT_MANTISSA_DIGITS);
            push_scientific_digits(&mut rendered, magnitude, precision);
        } else {
            ensure_fits(precision, remaining)?;
            push_scientific_digits(&mut rendered, magnitude, precision);
        }
    } else {
        let precision = settings.fixed_precision_for(magnitude);
        if trim {
            let precision = precision.min(MAX_EXACT_FRACTION_DIGITS);
            push_fixed_digits(&mut rendered, magnitude, precision);
        } else {
            ensure_fits(precision, remaining)?;
            push_fixed_digits(&mut rendered, magnitude, precision);
        }
    }
    tracing::trace!(value, scientific, rendered = %rendered, "adaptive float mode");

    // Trimming is bounded by the exponent marker, so exponent digits are never touched.
    let (mantissa, exponent_text) = split_exponent(&rendered);
    let mantissa = if trim { trim_fraction(mantissa) } else { mantissa };

    let decimal_pos = mantissa.find('.').map(|pos| pos + out.len());
    out.push_str(mantissa);

    if let Some(exponent_text) = exponent_text {
        let exponent = parse_exponent(exponent_text)?;
        if exponent != 0 {
            push_locale_exponent(out, exponent, locale);
        }
    }

    Ok(decimal_pos)
}
