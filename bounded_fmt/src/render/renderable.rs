// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Anything passed to [`crate::BoundedWriter::format`] is a [`Renderable`]. The trait
//! is a set of capability accessors, each returning `None` by default. A type opts
//! into a capability by overriding its accessor:
//!
//! ```
//! use std::borrow::Cow;
//! use bounded_fmt::{ConvertToText, Renderable, fmt_args, format_to_string};
//!
//! struct Celsius(i32);
//!
//! impl ConvertToText for Celsius {
//!     fn convert_to_text(&self) -> Cow<'_, str> { Cow::Owned(format!("{}°C", self.0)) }
//! }
//!
//! impl Renderable for Celsius {
//!     fn as_text_convertible(&self) -> Option<&dyn ConvertToText> { Some(self) }
//! }
//!
//! assert_eq!(format_to_string("{}", fmt_args![Celsius(21)]), "21°C");
//! ```
//!
//! When a value exposes more than one capability, [`crate::dispatch_render`] picks the
//! first one in this order:
//! 1. [`SpecAwareFormat`]
//! 2. [`RenderIntoBuffer`]
//! 3. [`ConvertToText`]
//! 4. text ([`Renderable::as_text`])
//! 5. integer ([`Renderable::as_integer`])
//! 6. float ([`Renderable::as_float`])

use std::borrow::Cow;

use crate::{CapacityError, Float, FormatArgSpec, FormatError, InlineString, Integer,
            SliceWriter};

/// Full control over rendering, including validation of the directive's type char.
/// The writer covers only the unwritten tail of the destination.
pub trait SpecAwareFormat {
    /// # Errors
    ///
    /// Whatever the implementation decides. Bytes written before the error stay.
    fn format_with_spec(
        &self,
        writer: &mut SliceWriter<'_>,
        spec: &FormatArgSpec,
    ) -> Result<(), FormatError>;
}

/// Writes straight into the unwritten tail of the destination and reports how many
/// bytes it used. The directive's spec is ignored.
pub trait RenderIntoBuffer {
    /// # Errors
    ///
    /// Returns [`CapacityError`] if `buffer` is too small. The cursor does not move.
    fn render_into(&self, buffer: &mut [u8]) -> Result<usize, CapacityError>;
}

/// Produces its text, which is then copied like any other text.
pub trait ConvertToText {
    fn convert_to_text(&self) -> Cow<'_, str>;
}

/// Text-like values, borrowed where possible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextValue<'a> {
    Str(&'a str),
    Char(char),
}

impl TextValue<'_> {
    pub fn with_str<R>(self, f: impl FnOnce(&str) -> R) -> R {
        match self {
            TextValue::Str(text) => f(text),
            TextValue::Char(ch) => {
                let mut buf = [0_u8; 4];
                f(ch.encode_utf8(&mut buf))
            }
        }
    }
}

pub trait Renderable {
    fn as_spec_aware(&self) -> Option<&dyn SpecAwareFormat> { None }

    fn as_buffer_renderer(&self) -> Option<&dyn RenderIntoBuffer> { None }

    fn as_text_convertible(&self) -> Option<&dyn ConvertToText> { None }

    fn as_text(&self) -> Option<TextValue<'_>> { None }

    fn as_integer(&self) -> Option<Integer> { None }

    fn as_float(&self) -> Option<Float> { None }
}

impl<T: Renderable + ?Sized> Renderable for &T {
    fn as_spec_aware(&self) -> Option<&dyn SpecAwareFormat> { (**self).as_spec_aware() }

    fn as_buffer_renderer(&self) -> Option<&dyn RenderIntoBuffer> {
        (**self).as_buffer_renderer()
    }

    fn as_text_convertible(&self) -> Option<&dyn ConvertToText> {
        (**self).as_text_convertible()
    }

    fn as_text(&self) -> Option<TextValue<'_>> { (**self).as_text() }

    fn as_integer(&self) -> Option<Integer> { (**self).as_integer() }

    fn as_float(&self) -> Option<Float> { (**self).as_float() }
}

impl Renderable for str {
    fn as_text(&self) -> Option<TextValue<'_>> { Some(TextValue::Str(self)) }
}

impl Renderable for String {
    fn as_text(&self) -> Option<TextValue<'_>> { Some(TextValue::Str(self)) }
}

impl Renderable for Cow<'_, str> {
    fn as_text(&self) -> Option<TextValue<'_>> { Some(TextValue::Str(self)) }
}

impl Renderable for InlineString {
    fn as_text(&self) -> Option<TextValue<'_>> { Some(TextValue::Str(self.as_str())) }
}

impl Renderable for char {
    fn as_text(&self) -> Option<TextValue<'_>> { Some(TextValue::Char(*self)) }
}

macro_rules! impl_renderable_for_integers {
    ($($ty:ty),*) => {
        $(
            impl Renderable for $ty {
                fn as_integer(&self) -> Option<Integer> { Some(Integer::from(*self)) }
            }
        )*
    };
}

impl_renderable_for_integers!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);

impl Renderable for f32 {
    fn as_float(&self) -> Option<Float> { Some(Float::from(*self)) }
}

impl Renderable for f64 {
    fn as_float(&self) -> Option<Float> { Some(Float::from(*self)) }
}

/// Build the argument slice for [`crate::BoundedWriter::format`].
///
/// ```
/// use bounded_fmt::{BoundedWriter, fmt_args};
///
/// let mut buf = [0_u8; 16];
/// let mut writer = BoundedWriter::new(&mut buf[..]);
/// writer.format("{1}:{0}", fmt_args!["a", "b"]).unwrap();
/// assert_eq!(writer.as_str(), "b:a");
/// ```
#[macro_export]
macro_rules! fmt_args {
    () => {
        &[] as &[&dyn $crate::Renderable]
    };
    ($($arg:expr),+ $(,)?) => {
        &[$(&$arg as &dyn $crate::Renderable),+] as &[&dyn $crate::Renderable]
    };
}
