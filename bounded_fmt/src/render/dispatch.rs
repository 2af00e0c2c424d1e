// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{Renderable, TextValue};
use crate::{Align, BoundedWriter, FormatArgSpec, FormatError, FormatType,
            InvalidArgumentReason, Padding, ValueCategory, WriterStorage, render_float,
            render_integer, write_spaces};

/// Render one argument with exactly one strategy, picked in the fixed order documented
/// on [`Renderable`].
///
/// # Errors
///
/// - [`FormatError::NotSupported`] if `value` exposes no capability.
/// - Anything the chosen strategy returns.
pub fn dispatch_render<S: WriterStorage>(
    writer: &mut BoundedWriter<S>,
    value: &dyn Renderable,
    spec: &FormatArgSpec,
) -> Result<(), FormatError> {
    if let Some(formatter) = value.as_spec_aware() {
        trace_strategy(ValueCategory::SpecAwareFormatter);
        return writer.with_remaining(|sub_writer| formatter.format_with_spec(sub_writer, spec));
    }

    if let Some(renderer) = value.as_buffer_renderer() {
        trace_strategy(ValueCategory::BufferRenderer);
        let count = renderer.render_into(writer.remaining_mut())?;
        writer.advance(count)?;
        return Ok(());
    }

    if let Some(convertible) = value.as_text_convertible() {
        trace_strategy(ValueCategory::TextConvertible);
        writer.write(convertible.convert_to_text().as_bytes())?;
        return Ok(());
    }

    if let Some(text) = value.as_text() {
        trace_strategy(ValueCategory::Text);
        return render_text(writer, text, spec);
    }

    if let Some(integer) = value.as_integer() {
        trace_strategy(ValueCategory::Integer);
        return render_integer(writer, integer, spec);
    }

    if let Some(float) = value.as_float() {
        trace_strategy(ValueCategory::Float);
        return render_float(writer, float, spec);
    }

    Err(FormatError::NotSupported)
}

fn trace_strategy(category: ValueCategory) {
    tracing::trace!(%category, "render strategy");
}

/// Text is copied as is, left aligned in `width` chars by default. Like
/// [`BoundedWriter::write`], a truncated copy keeps the prefix that fit.
fn render_text<S: WriterStorage>(
    writer: &mut BoundedWriter<S>,
    text: TextValue<'_>,
    spec: &FormatArgSpec,
) -> Result<(), FormatError> {
    if !matches!(spec.format_type, FormatType::Auto | FormatType::Text) {
        return Err(FormatError::invalid(InvalidArgumentReason::IncompatibleType {
            type_char: spec.format_type.as_char(),
            category: ValueCategory::Text,
        }));
    }

    text.with_str(|text| -> Result<(), FormatError> {
        let padding = Padding::compute(text.chars().count(), spec, Align::Left, false);
        write_spaces(writer, padding.leading)?;
        writer.write(text)?;
        write_spaces(writer, padding.trailing)?;
        Ok(())
    })
}
