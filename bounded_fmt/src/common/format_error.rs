// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Error types returned by every fallible operation in this crate. See
//! [`CapacityError`] and [`FormatError`] for details.
//!
//! None of these errors are fatal. A writer that returned one is left in a well defined
//! state: whatever bytes landed before the failure are still there, and
//! [`crate::BoundedWriter::clear`] makes it usable again.

use std::fmt::{Display, Formatter};

/// The destination region has no room left.
///
/// When this is returned from a plain write, the longest prefix that fit has already
/// been copied and the cursor sits at the end of the region. Numeric rendering is
/// atomic instead: the cursor does not move at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
#[error("Destination buffer is full")]
#[diagnostic(
    code(bounded_fmt::capacity),
    help("Use a larger buffer, or clear() the writer and retry")
)]
pub struct CapacityError;

/// Errors from [`crate::BoundedWriter::format`] and the numeric entry points.
///
/// | Variant              | Cause                                                 |
/// | :------------------- | :---------------------------------------------------- |
/// | [`Capacity`]         | Destination exhausted, partial output already landed  |
/// | [`InvalidArgument`]  | Malformed directive, bad index, incompatible type     |
/// | [`NotSupported`]     | The value exposes no rendering capability             |
/// | [`ResultOutOfRange`] | A numeric parse (eg: exponent) overflowed             |
///
/// [`Capacity`]: Self::Capacity
/// [`InvalidArgument`]: Self::InvalidArgument
/// [`NotSupported`]: Self::NotSupported
/// [`ResultOutOfRange`]: Self::ResultOutOfRange
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum FormatError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Capacity(#[from] CapacityError),

    #[error("Invalid argument: {0}")]
    #[diagnostic(
        code(bounded_fmt::invalid_argument),
        help("Directives look like {{index:[<>^][+- ][#][0][width][.precision][L][type]}}")
    )]
    InvalidArgument(InvalidArgumentReason),

    #[error("Value has no rendering capability")]
    #[diagnostic(
        code(bounded_fmt::not_supported),
        help("Implement one of the capability accessors of the Renderable trait")
    )]
    NotSupported,

    #[error("Numeric value out of range")]
    #[diagnostic(code(bounded_fmt::result_out_of_range))]
    ResultOutOfRange,
}

impl FormatError {
    #[must_use]
    pub fn invalid(reason: InvalidArgumentReason) -> Self { Self::InvalidArgument(reason) }

    #[must_use]
    pub fn is_capacity(&self) -> bool { matches!(self, Self::Capacity(_)) }
}

/// Details for [`FormatError::InvalidArgument`]. Offsets are byte offsets into the
/// format string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidArgumentReason {
    #[error("directive opened at offset {offset} is never closed")]
    UnterminatedDirective { offset: usize },

    #[error("malformed directive at offset {offset}")]
    MalformedDirective { offset: usize },

    #[error("unmatched '}}' at offset {offset}")]
    UnmatchedClosingBrace { offset: usize },

    #[error("unsupported type '{type_char}' at offset {offset}")]
    UnsupportedType { type_char: char, offset: usize },

    #[error("argument index {index} is out of range ({arg_count} arguments)")]
    IndexOutOfRange { index: usize, arg_count: usize },

    #[error("type '{type_char}' can't be used with a {category} value")]
    IncompatibleType {
        type_char: char,
        category: ValueCategory,
    },
}

/// The rendering strategy the dispatcher picked for a value. Used in diagnostics and
/// tracing output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueCategory {
    SpecAwareFormatter,
    BufferRenderer,
    TextConvertible,
    Text,
    Integer,
    Float,
}

impl Display for ValueCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::SpecAwareFormatter => "spec aware formatter",
            Self::BufferRenderer => "buffer renderer",
            Self::TextConvertible => "text convertible",
            Self::Text => "text",
            Self::Integer => "integer",
            Self::Float => "floating point",
        })
    }
}
