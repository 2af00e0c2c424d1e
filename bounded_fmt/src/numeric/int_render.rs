// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Integer to text. Every primitive integer type is widened into an [`Integer`] that
//! remembers the bit width and signedness of the original, so `x`, `X` and `b` can
//! render the two's complement bit pattern of that width (`-1_i8` is `ff`).

use std::fmt::Write;

use super::{Padding, ensure_fits, push_padded};
use crate::{Align, BoundedWriter, FormatArgSpec, FormatError, FormatType,
            InvalidArgumentReason, ScratchText, Sign, ValueCategory, WriterStorage};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Integer {
    Signed { value: i128, bits: u32 },
    Unsigned { value: u128, bits: u32 },
}

impl Integer {
    #[must_use]
    pub fn is_zero(self) -> bool {
        match self {
            Self::Signed { value, .. } => value == 0,
            Self::Unsigned { value, .. } => value == 0,
        }
    }

    #[must_use]
    pub fn is_negative(self) -> bool { matches!(self, Self::Signed { value, .. } if value < 0) }

    /// Absolute value. Can't overflow, even for [`i128::MIN`].
    #[must_use]
    pub fn magnitude(self) -> u128 {
        match self {
            Self::Signed { value, .. } => value.unsigned_abs(),
            Self::Unsigned { value, .. } => value,
        }
    }

    /// Two's complement representation, masked to the original bit width.
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    pub fn bit_pattern(self) -> u128 {
        match self {
            Self::Signed { value, bits } => (value as u128) & mask(bits),
            Self::Unsigned { value, bits } => value & mask(bits),
        }
    }
}

fn mask(bits: u32) -> u128 {
    if bits >= u128::BITS {
        u128::MAX
    } else {
        (1_u128 << bits) - 1
    }
}

macro_rules! impl_from_for_integer {
    ($variant:ident, $wide:ty => $($ty:ty),*) => {
        $(
            impl From<$ty> for Integer {
                fn from(value: $ty) -> Self {
                    Self::$variant { value: <$wide>::from(value), bits: <$ty>::BITS }
                }
            }
        )*
    };
}

impl_from_for_integer!(Signed, i128 => i8, i16, i32, i64, i128);
impl_from_for_integer!(Unsigned, u128 => u8, u16, u32, u64, u128);

// No `From<isize>` for `i128`, but pointer sized integers are at most 128 bits wide.
impl From<isize> for Integer {
    fn from(value: isize) -> Self {
        Self::Signed {
            value: value as i128,
            bits: isize::BITS,
        }
    }
}

impl From<usize> for Integer {
    fn from(value: usize) -> Self {
        Self::Unsigned {
            value: value as u128,
            bits: usize::BITS,
        }
    }
}

/// Render `value` per `spec` and copy it into `writer` only if all of it fits.
///
/// # Errors
///
/// - [`FormatError::InvalidArgument`] if the type char is not `d`, `b`, `x`, `X` or
///   auto.
/// - [`FormatError::Capacity`] with the cursor unchanged if the text does not fit.
///   Width and precision are checked against the remaining space before any text is
///   composed.
pub fn render_integer<S: WriterStorage>(
    writer: &mut BoundedWriter<S>,
    value: Integer,
    spec: &FormatArgSpec,
) -> Result<(), FormatError> {
    let format_type = spec.format_type;
    let (radix_prefix, uses_bit_pattern) = match format_type {
        FormatType::Auto | FormatType::Decimal => ("", false),
        FormatType::Binary => ("0b", true),
        FormatType::HexLower => ("0x", true),
        FormatType::HexUpper => ("0X", true),
        other => {
            return Err(FormatError::invalid(InvalidArgumentReason::IncompatibleType {
                type_char: other.as_char(),
                category: ValueCategory::Integer,
            }));
        }
    };

    ensure_fits(spec.width.unwrap_or(0), writer.remaining())?;
    ensure_fits(spec.precision.unwrap_or(0), writer.remaining())?;

    if value.is_zero() && spec.is_undecorated() {
        writer.write_all_or_nothing("0")?;
        return Ok(());
    }

    let mut digits = ScratchText::new();
    _ = match format_type {
        FormatType::Binary => write!(digits, "{:b}", value.bit_pattern()),
        FormatType::HexLower => write!(digits, "{:x}", value.bit_pattern()),
        FormatType::HexUpper => write!(digits, "{:X}", value.bit_pattern()),
        _ => write!(digits, "{}", value.magnitude()),
    };

    // Precision is a minimum digit count.
    if let Some(min_digits) = spec.precision
        && digits.len() < min_digits
    {
        let mut widened = ScratchText::new();
        super::push_fill(&mut widened, '0', min_digits - digits.len());
        widened.push_str(&digits);
        digits = widened;
    }

    let mut prefix = ScratchText::new();
    let negative = value.is_negative() && !uses_bit_pattern;
    match (negative, spec.sign) {
        (true, _) => prefix.push('-'),
        (false, Sign::Always) => prefix.push('+'),
        (false, Sign::Space) => prefix.push(' '),
        (false, Sign::Never) => {}
    }
    if spec.alternate_form && !value.is_zero() {
        prefix.push_str(radix_prefix);
    }

    let padding = Padding::compute(
        prefix.len() + digits.len(),
        spec,
        Align::Right,
        spec.precision.is_none(),
    );
    let mut out = ScratchText::new();
    push_padded(&mut out, &prefix, &digits, padding);

    tracing::trace!(?value, text = %out, "integer rendered");
    writer.write_all_or_nothing(out.as_str())?;
    Ok(())
}
