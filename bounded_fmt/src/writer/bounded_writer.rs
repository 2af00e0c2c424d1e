// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The bounded writer is the only place where capacity is enforced. Every other piece
//! of this crate (the format parser, the render dispatcher, the numeric engine) writes
//! through it.
//!
//! # Partial writes
//!
//! [`BoundedWriter::write`] copies the longest prefix that fits and then reports a
//! [`CapacityError`]. There is no rollback. Callers must treat a failed write as "some
//! bytes landed, the operation is incomplete".
//!
//! Numeric text uses [`BoundedWriter::write_all_or_nothing`] instead, so a number is
//! either written in full or not at all.
//!
//! # Storage
//!
//! The writer is generic over its storage so the same code drives a borrowed region
//! ([`SliceWriter`]), a heap allocation ([`crate::TextBuilderHeap`]) and an inline
//! array ([`crate::TextBuilderStack`]).

use std::{borrow::Cow,
          fmt::{Display, Formatter}};

use crate::CapacityError;

/// Decimal separator used by a freshly created writer.
pub const DEFAULT_DECIMAL_SEPARATOR: u8 = b'.';

/// Anything that can back a [`BoundedWriter`].
pub trait WriterStorage: AsRef<[u8]> + AsMut<[u8]> {}

impl<T: AsRef<[u8]> + AsMut<[u8]> + ?Sized> WriterStorage for T {}

/// A writer over a caller supplied region that it does not own.
pub type SliceWriter<'a> = BoundedWriter<&'a mut [u8]>;

/// Cursor over `storage[0..end]`.
///
/// Invariant: `cursor <= end <= storage.len()`. The cursor only moves forward on
/// writes, and back to `0` on [`clear()`](Self::clear).
#[derive(Debug, Clone)]
pub struct BoundedWriter<S> {
    storage: S,
    cursor: usize,
    end: usize,
    decimal_separator: u8,
}

impl<S: WriterStorage> BoundedWriter<S> {
    /// The whole storage is writable.
    pub fn new(storage: S) -> Self {
        let end = storage.as_ref().len();
        Self::with_end(storage, end)
    }

    /// Only `storage[0..end]` is writable. `end` is clamped to the storage length.
    pub(crate) fn with_end(storage: S, end: usize) -> Self {
        let end = end.min(storage.as_ref().len());
        Self {
            storage,
            cursor: 0,
            end,
            decimal_separator: DEFAULT_DECIMAL_SEPARATOR,
        }
    }

    #[must_use]
    pub fn with_decimal_separator(mut self, decimal_separator: u8) -> Self {
        self.decimal_separator = decimal_separator;
        self
    }

    /// Byte that replaces `.` in floating point output. Should be ASCII, otherwise
    /// the written bytes are no longer valid UTF-8.
    pub fn decimal_separator(&self) -> u8 { self.decimal_separator }

    pub fn set_decimal_separator(&mut self, decimal_separator: u8) {
        self.decimal_separator = decimal_separator;
    }

    /// Number of bytes written so far.
    pub fn size(&self) -> usize { self.cursor }

    /// Number of writable bytes in total.
    pub fn capacity(&self) -> usize { self.end }

    pub fn remaining(&self) -> usize { self.end - self.cursor }

    pub fn is_empty(&self) -> bool { self.cursor == 0 }

    pub fn is_full(&self) -> bool { self.cursor == self.end }

    pub fn as_bytes(&self) -> &[u8] { &self.storage.as_ref()[..self.cursor] }

    /// The written bytes as text. If a truncated write split a multi byte codepoint,
    /// only the valid prefix is returned. Use [`to_string_lossy()`](Self::to_string_lossy)
    /// to see everything.
    pub fn as_str(&self) -> &str { valid_utf8_prefix(self.as_bytes()) }

    pub fn to_string_lossy(&self) -> Cow<'_, str> { String::from_utf8_lossy(self.as_bytes()) }

    /// Text written at or after byte offset `start`.
    pub fn written_since(&self, start: usize) -> &str {
        let bytes = self.as_bytes();
        valid_utf8_prefix(&bytes[start.min(bytes.len())..])
    }

    /// Logical reset. Nothing is erased.
    pub fn clear(&mut self) -> &mut Self {
        self.cursor = 0;
        self
    }

    /// Copy as many leading bytes of `bytes` as fit.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError`] if `bytes` was truncated. The fitting prefix has
    /// already been copied.
    pub fn write(&mut self, bytes: impl AsRef<[u8]>) -> Result<(), CapacityError> {
        let bytes = bytes.as_ref();
        if bytes.is_empty() {
            return Ok(());
        }

        let count = bytes.len().min(self.remaining());
        let cursor = self.cursor;
        self.storage.as_mut()[cursor..cursor + count].copy_from_slice(&bytes[..count]);
        self.cursor += count;

        if count == bytes.len() {
            Ok(())
        } else {
            Err(CapacityError)
        }
    }

    /// Copy a single code unit.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError`] if the writer is full.
    pub fn write_unit(&mut self, unit: u8) -> Result<(), CapacityError> {
        if self.is_full() {
            return Err(CapacityError);
        }
        let cursor = self.cursor;
        self.storage.as_mut()[cursor] = unit;
        self.cursor += 1;
        Ok(())
    }

    /// Copy `bytes` only if all of them fit.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError`] without touching the writer if `bytes` does not fit.
    pub fn write_all_or_nothing(
        &mut self,
        bytes: impl AsRef<[u8]>,
    ) -> Result<(), CapacityError> {
        let bytes = bytes.as_ref();
        if bytes.len() > self.remaining() {
            return Err(CapacityError);
        }
        self.write(bytes)
    }

    /// Atomic copy of rendered number text, swapping the byte at `decimal_pos` (which
    /// must be a `.`) for `decimal_separator`.
    pub(crate) fn write_number_text(
        &mut self,
        text: &str,
        decimal_pos: Option<usize>,
        decimal_separator: u8,
    ) -> Result<(), CapacityError> {
        let bytes = text.as_bytes();
        if bytes.len() > self.remaining() {
            return Err(CapacityError);
        }
        let start = self.cursor;
        self.write(bytes)?;

        if let Some(pos) = decimal_pos
            && decimal_separator != b'.'
            && bytes.get(pos) == Some(&b'.')
        {
            self.storage.as_mut()[start + pos] = decimal_separator;
        }
        Ok(())
    }

    /// Mutable view of the unwritten tail `storage[cursor..end]`. Pair with
    /// [`advance()`](Self::advance) once bytes have been placed there.
    pub fn remaining_mut(&mut self) -> &mut [u8] {
        let (cursor, end) = (self.cursor, self.end);
        &mut self.storage.as_mut()[cursor..end]
    }

    /// Commit `count` bytes that were placed through [`remaining_mut()`](Self::remaining_mut).
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError`] without moving the cursor if `count` is larger than
    /// [`remaining()`](Self::remaining).
    pub fn advance(&mut self, count: usize) -> Result<(), CapacityError> {
        if count > self.remaining() {
            return Err(CapacityError);
        }
        self.cursor += count;
        Ok(())
    }

    /// Lend a [`SliceWriter`] over the unwritten tail (with the same decimal separator)
    /// to `f`, then advance past whatever it wrote, even if `f` failed.
    pub fn with_remaining<R>(&mut self, f: impl FnOnce(&mut SliceWriter<'_>) -> R) -> R {
        let decimal_separator = self.decimal_separator;
        let mut sub_writer = BoundedWriter::new(self.remaining_mut())
            .with_decimal_separator(decimal_separator);
        let result = f(&mut sub_writer);
        let written = sub_writer.size();
        self.cursor += written;
        result
    }

    pub(crate) fn storage_mut(&mut self) -> &mut [u8] { self.storage.as_mut() }
}

/// Longest prefix of `bytes` that is valid UTF-8.
pub(crate) fn valid_utf8_prefix(bytes: &[u8]) -> &str {
    match std::str::from_utf8(bytes) {
        Ok(it) => it,
        Err(error) => {
            std::str::from_utf8(&bytes[..error.valid_up_to()]).unwrap_or_default()
        }
    }
}

/// Lets `write!` target a bounded writer. Truncation surfaces as [`std::fmt::Error`].
impl<S: WriterStorage> std::fmt::Write for BoundedWriter<S> {
    fn write_str(&mut self, s: &str) -> std::fmt::Result {
        self.write(s).map_err(|_| std::fmt::Error)
    }
}

impl<S: WriterStorage> Display for BoundedWriter<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}

#[cfg(test)]
mod tests {
    use std::fmt::Write;

    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case(8, "" ; "empty input")]
    #[test_case(8, "abc" ; "shorter than capacity")]
    #[test_case(3, "abc" ; "exactly capacity")]
    #[test_case(64, "the quick brown fox" ; "plenty of room")]
    fn test_write_that_fits(capacity: usize, input: &str) {
        let mut buf = vec![0_u8; capacity];
        let mut writer = BoundedWriter::new(buf.as_mut_slice());
        assert_eq!(writer.write(input), Ok(()));
        assert_eq!(writer.size(), input.len());
        assert_eq!(writer.as_str(), input);
        assert_eq!(writer.remaining(), capacity - input.len());
    }

    #[test_case(0, "a" ; "zero capacity")]
    #[test_case(3, "abcd" ; "one byte too many")]
    #[test_case(5, "hello world" ; "much too long")]
    fn test_write_that_truncates(capacity: usize, input: &str) {
        let mut buf = vec![0_u8; capacity];
        let mut writer = BoundedWriter::new(buf.as_mut_slice());
        assert_eq!(writer.write(input), Err(CapacityError));
        assert_eq!(writer.size(), capacity);
        assert_eq!(writer.as_str(), &input[..capacity]);
        assert!(writer.is_full());
    }

    #[test]
    fn test_write_unit() {
        let mut buf = [0_u8; 2];
        let mut writer = BoundedWriter::new(&mut buf[..]);
        assert_eq!(writer.write_unit(b'o'), Ok(()));
        assert_eq!(writer.write_unit(b'k'), Ok(()));
        assert_eq!(writer.write_unit(b'!'), Err(CapacityError));
        assert_eq!(writer.as_str(), "ok");
    }

    #[test]
    fn test_clear_then_rewrite_is_idempotent() {
        let mut buf = [0_u8; 6];
        let mut writer = BoundedWriter::new(&mut buf[..]);
        let _unused = writer.write("abcdefgh");
        let first = writer.as_bytes().to_vec();

        writer.clear();
        assert!(writer.is_empty());
        assert_eq!(writer.capacity(), 6);

        let _unused = writer.write("abcdefgh");
        assert_eq!(writer.as_bytes(), first.as_slice());
    }

    #[test]
    fn test_write_all_or_nothing() {
        let mut buf = [0_u8; 4];
        let mut writer = BoundedWriter::new(&mut buf[..]);
        assert_eq!(writer.write_all_or_nothing("ab"), Ok(()));
        assert_eq!(writer.write_all_or_nothing("cde"), Err(CapacityError));
        assert_eq!(writer.as_str(), "ab");
        assert_eq!(writer.write_all_or_nothing("cd"), Ok(()));
        assert_eq!(writer.as_str(), "abcd");
    }

    #[test]
    fn test_write_number_text_swaps_decimal_separator() {
        let mut buf = [0_u8; 16];
        let mut writer = BoundedWriter::new(&mut buf[..]);
        assert_eq!(writer.write_number_text("3.14", Some(1), b','), Ok(()));
        assert_eq!(writer.as_str(), "3,14");

        // Position not pointing at a '.' is left alone.
        writer.clear();
        assert_eq!(writer.write_number_text("3.14", Some(0), b','), Ok(()));
        assert_eq!(writer.as_str(), "3.14");

        writer.clear();
        let _unused = writer.write("0123456789abcd");
        assert_eq!(
            writer.write_number_text("3.14", Some(1), b','),
            Err(CapacityError)
        );
        assert_eq!(writer.size(), 14);
    }

    #[test]
    fn test_fmt_write_reports_truncation() {
        let mut buf = [0_u8; 5];
        let mut writer = BoundedWriter::new(&mut buf[..]);
        assert!(write!(writer, "{}", 42).is_ok());
        assert!(write!(writer, "{}", 12345).is_err());
        assert_eq!(writer.as_str(), "42123");
    }

    #[test]
    fn test_with_remaining_advances_by_sub_writer_size() {
        let mut buf = [0_u8; 8];
        let mut writer = BoundedWriter::new(&mut buf[..]).with_decimal_separator(b',');
        let _unused = writer.write("ab");

        let result = writer.with_remaining(|sub| {
            assert_eq!(sub.capacity(), 6);
            assert_eq!(sub.decimal_separator(), b',');
            sub.write("cdefghij")
        });

        assert_eq!(result, Err(CapacityError));
        assert_eq!(writer.as_str(), "abcdefgh");
    }

    #[test]
    fn test_remaining_mut_and_advance() {
        let mut buf = [0_u8; 4];
        let mut writer = BoundedWriter::new(&mut buf[..]);
        writer.remaining_mut()[..2].copy_from_slice(b"hi");
        assert_eq!(writer.advance(2), Ok(()));
        assert_eq!(writer.advance(3), Err(CapacityError));
        assert_eq!(writer.as_str(), "hi");
    }

    #[test]
    fn test_truncated_codepoint_is_hidden_from_as_str() {
        let mut buf = [0_u8; 2];
        let mut writer = BoundedWriter::new(&mut buf[..]);
        // "a" then the first byte of U+2212.
        assert_eq!(writer.write("a−"), Err(CapacityError));
        assert_eq!(writer.as_str(), "a");
        assert_eq!(writer.to_string_lossy(), "a\u{FFFD}");
        assert_eq!(writer.written_since(1), "");
    }

    #[test]
    fn test_owned_storage() {
        let mut writer = BoundedWriter::new([0_u8; 3]);
        assert_eq!(writer.write("xyz"), Ok(()));
        assert_eq!(writer.to_string(), "xyz");
    }
}
