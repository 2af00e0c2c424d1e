// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Width handling shared by text, integers and floats. Widths count `char`s, not
//! bytes, so `−1` (with a U+2212 minus) is two wide.

use crate::{Align, BoundedWriter, CapacityError, FormatArgSpec, ScratchText,
            WriterStorage};

/// How much fill goes around a rendered value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Padding {
    /// Spaces before the value.
    pub leading: usize,
    /// Zeros between the sign / radix prefix and the digits.
    pub zeros: usize,
    /// Spaces after the value.
    pub trailing: usize,
}

impl Padding {
    /// `default_align` applies when the directive has no alignment char. Zero padding
    /// only happens when `zero_pad_allowed`, the `0` flag is set, and there is no
    /// explicit alignment.
    #[must_use]
    pub fn compute(
        content_width: usize,
        spec: &FormatArgSpec,
        default_align: Align,
        zero_pad_allowed: bool,
    ) -> Self {
        let fill = spec.width.unwrap_or(0).saturating_sub(content_width);
        if fill == 0 {
            return Self::default();
        }

        if zero_pad_allowed && spec.zero_pad && spec.align == Align::None {
            return Self {
                zeros: fill,
                ..Default::default()
            };
        }

        let align = match spec.align {
            Align::None => default_align,
            it => it,
        };
        match align {
            Align::Left | Align::None => Self {
                trailing: fill,
                ..Default::default()
            },
            Align::Right => Self {
                leading: fill,
                ..Default::default()
            },
            Align::Center => {
                let leading = fill / 2;
                Self {
                    leading,
                    trailing: fill - leading,
                    ..Default::default()
                }
            }
        }
    }
}

/// Compose `prefix` + `digits` into `out` with the given padding. Returns the byte
/// offset at which `digits` starts.
pub fn push_padded(
    out: &mut ScratchText,
    prefix: &str,
    digits: &str,
    padding: Padding,
) -> usize {
    push_fill(out, ' ', padding.leading);
    out.push_str(prefix);
    push_fill(out, '0', padding.zeros);
    let digits_start = out.len();
    out.push_str(digits);
    push_fill(out, ' ', padding.trailing);
    digits_start
}

pub fn push_fill(out: &mut ScratchText, ch: char, count: usize) {
    for _ in 0..count {
        out.push(ch);
    }
}

/// Write `count` spaces. Partial on overflow, like [`BoundedWriter::write`].
///
/// # Errors
///
/// Returns [`CapacityError`] if the writer filled up.
pub fn write_spaces<S: WriterStorage>(
    writer: &mut BoundedWriter<S>,
    count: usize,
) -> Result<(), CapacityError> {
    for _ in 0..count {
        writer.write_unit(b' ')?;
    }
    Ok(())
}
