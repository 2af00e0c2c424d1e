// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Builders own their storage and hand out a [`ZeroTerminatedWriter`] over it. There
//! are two implementations:
//! - [`TextBuilderHeap`] allocates once on the heap, with a capacity chosen at run
//!   time. It never grows; running out of room is a [`crate::CapacityError`].
//! - [`TextBuilderStack`] uses a fixed-size inline array. No allocation at all.
//!
//! Both deref to the writer, so `builder.write(..)`, `builder.format(..)` and
//! `builder.as_str()` all work directly.

use std::{fmt::{Display, Formatter},
          ops::{Deref, DerefMut}};

use super::ZeroTerminatedWriter;
use crate::FormatConfig;

/// Heap backed builder. Holds `capacity` bytes of text plus the terminator.
#[derive(Debug, Clone)]
pub struct TextBuilderHeap {
    writer: ZeroTerminatedWriter<Box<[u8]>>,
}

impl TextBuilderHeap {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let storage = vec![0_u8; capacity.saturating_add(1)].into_boxed_slice();
        Self {
            writer: ZeroTerminatedWriter::reserve_last_byte(storage),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: &FormatConfig) -> Self {
        self.writer.set_decimal_separator(config.decimal_separator);
        self
    }
}

impl Deref for TextBuilderHeap {
    type Target = ZeroTerminatedWriter<Box<[u8]>>;

    fn deref(&self) -> &Self::Target { &self.writer }
}

impl DerefMut for TextBuilderHeap {
    fn deref_mut(&mut self) -> &mut Self::Target { &mut self.writer }
}

impl Display for TextBuilderHeap {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}

/// Inline array backed builder. `N` includes the terminator, so `N - 1` bytes of text
/// fit. `N` must be at least `1`.
#[derive(Debug, Clone)]
pub struct TextBuilderStack<const N: usize> {
    writer: ZeroTerminatedWriter<[u8; N]>,
}

impl<const N: usize> Default for TextBuilderStack<N> {
    fn default() -> Self { Self::new() }
}

impl<const N: usize> TextBuilderStack<N> {
    #[must_use]
    pub fn new() -> Self {
        const { assert!(N > 0, "TextBuilderStack needs room for the terminator") };
        Self {
            writer: ZeroTerminatedWriter::reserve_last_byte([0_u8; N]),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: &FormatConfig) -> Self {
        self.writer.set_decimal_separator(config.decimal_separator);
        self
    }
}

impl<const N: usize> Deref for TextBuilderStack<N> {
    type Target = ZeroTerminatedWriter<[u8; N]>;

    fn deref(&self) -> &Self::Target { &self.writer }
}

impl<const N: usize> DerefMut for TextBuilderStack<N> {
    fn deref_mut(&mut self) -> &mut Self::Target { &mut self.writer }
}

impl<const N: usize> Display for TextBuilderStack<N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}
