// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{Renderable, dispatch_render};
use crate::{BoundedWriter, FormatConfig, FormatError, FormatSegment, FormatSpecParser,
            InvalidArgumentReason, TextBuilderHeap, WriterStorage};

/// Returned by [`format_to_string()`] and [`format_to_string_with()`] on failure.
pub const FORMAT_ERROR_SENTINEL: &str = "#ERRFMT";

/// First buffer size tried by [`format_to_string_with()`]. Doubles on overflow.
const INITIAL_OWNED_CAPACITY: usize = 64;

/// Give up on [`format_to_string_with()`] past this size.
const MAX_OWNED_CAPACITY: usize = 1 << 20;

impl<S: WriterStorage> BoundedWriter<S> {
    /// Render `spec` with `args` (see [`crate::fmt_args`]) at the cursor.
    ///
    /// ```
    /// use bounded_fmt::{BoundedWriter, fmt_args};
    ///
    /// let mut buf = [0_u8; 32];
    /// let mut writer = BoundedWriter::new(&mut buf[..]);
    /// writer.format("{}/{} {:>6.2f}", fmt_args![3, 4, 0.75]).unwrap();
    /// assert_eq!(writer.as_str(), "3/4   0.75");
    /// ```
    ///
    /// # Errors
    ///
    /// The first error aborts the rest of the format string. Text written before it
    /// stays in the writer.
    /// - [`FormatError::InvalidArgument`] for a malformed format string, an index out
    ///   of range, or a type char that doesn't suit its argument.
    /// - [`FormatError::Capacity`] when the writer fills up.
    /// - [`FormatError::NotSupported`] for an argument with no capability.
    pub fn format(&mut self, spec: &str, args: &[&dyn Renderable]) -> Result<(), FormatError> {
        let result = FormatSpecParser::new(spec, args.len()).try_for_each(|segment| {
            match segment? {
                FormatSegment::Literal(text) => Ok(self.write(text)?),
                FormatSegment::Argument {
                    index,
                    spec: arg_spec,
                } => match args.get(index) {
                    Some(arg) => dispatch_render(self, *arg, &arg_spec),
                    None => Err(FormatError::invalid(
                        InvalidArgumentReason::IndexOutOfRange {
                            index,
                            arg_count: args.len(),
                        },
                    )),
                },
            }
        });

        if let Err(error) = &result {
            tracing::debug!(spec, %error, written = self.size(), "format aborted");
        }
        result
    }
}

/// Owned text from a format string, using the default [`FormatConfig`]. Returns
/// [`FORMAT_ERROR_SENTINEL`] on failure.
#[must_use]
pub fn format_to_string(spec: &str, args: &[&dyn Renderable]) -> String {
    format_to_string_with(&FormatConfig::default(), spec, args)
}

/// Owned text from a format string, with the decimal separator from `config`. Returns
/// [`FORMAT_ERROR_SENTINEL`] on failure.
#[must_use]
pub fn format_to_string_with(
    config: &FormatConfig,
    spec: &str,
    args: &[&dyn Renderable],
) -> String {
    let mut capacity = spec.len().saturating_mul(2).max(INITIAL_OWNED_CAPACITY);
    loop {
        let mut builder = TextBuilderHeap::new(capacity).with_config(config);
        match builder.format(spec, args) {
            Ok(()) => return builder.to_string_lossy().into_owned(),
            Err(error) if error.is_capacity() && capacity < MAX_OWNED_CAPACITY => {
                capacity = capacity.saturating_mul(2);
            }
            Err(_) => return FORMAT_ERROR_SENTINEL.to_owned(),
        }
    }
}
