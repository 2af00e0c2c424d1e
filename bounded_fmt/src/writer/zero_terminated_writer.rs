// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! A [`BoundedWriter`] that keeps the last byte of its storage in reserve for a NUL
//! terminator, for interop with consumers of zero terminated strings.

use std::{ffi::CStr,
          ops::{Deref, DerefMut}};

use super::{BoundedWriter, WriterStorage};
use crate::CapacityError;

#[derive(Debug, Clone)]
pub struct ZeroTerminatedWriter<S> {
    writer: BoundedWriter<S>,
}

impl<S: WriterStorage> ZeroTerminatedWriter<S> {
    /// # Errors
    ///
    /// Returns [`CapacityError`] if `storage` is empty, since there is no room for the
    /// terminator.
    pub fn try_new(storage: S) -> Result<Self, CapacityError> {
        if storage.as_ref().is_empty() {
            return Err(CapacityError);
        }
        Ok(Self::reserve_last_byte(storage))
    }

    /// Caller guarantees that `storage` is not empty.
    pub(crate) fn reserve_last_byte(storage: S) -> Self {
        let len = storage.as_ref().len();
        debug_assert!(len > 0, "zero terminated storage can't be empty");
        Self {
            writer: BoundedWriter::with_end(storage, len.saturating_sub(1)),
        }
    }

    /// Store a `0` at the cursor and return the written bytes followed by it. The
    /// terminator is not counted in [`BoundedWriter::size`], so writing can continue
    /// afterwards (overwriting it).
    pub fn terminate_and_get(&mut self) -> &[u8] {
        let cursor = self.writer.size();
        let storage = self.writer.storage_mut();
        storage[cursor] = 0;
        &storage[..=cursor]
    }

    /// Same as [`terminate_and_get()`](Self::terminate_and_get) but as a [`CStr`]. If
    /// the written text itself contains a NUL, the string ends there.
    pub fn c_str(&mut self) -> &CStr {
        CStr::from_bytes_until_nul(self.terminate_and_get()).unwrap_or_default()
    }

    pub fn into_inner(self) -> BoundedWriter<S> { self.writer }
}

impl<S> Deref for ZeroTerminatedWriter<S> {
    type Target = BoundedWriter<S>;

    fn deref(&self) -> &Self::Target { &self.writer }
}

impl<S> DerefMut for ZeroTerminatedWriter<S> {
    fn deref_mut(&mut self) -> &mut Self::Target { &mut self.writer }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_empty_storage_is_rejected() {
        let mut buf: [u8; 0] = [];
        assert!(ZeroTerminatedWriter::try_new(&mut buf[..]).is_err());
    }

    #[test]
    fn test_last_byte_is_reserved() {
        let mut buf = [0xff_u8; 4];
        let mut writer = ZeroTerminatedWriter::try_new(&mut buf[..]).unwrap();
        assert_eq!(writer.capacity(), 3);
        assert_eq!(writer.write("abcd"), Err(CapacityError));
        assert_eq!(writer.as_str(), "abc");
        assert_eq!(writer.terminate_and_get(), b"abc\0");
        assert_eq!(writer.size(), 3);
        drop(writer);
        assert_eq!(buf, *b"abc\0");
    }

    #[test]
    fn test_terminate_when_empty() {
        let mut buf = [0xff_u8; 1];
        let mut writer = ZeroTerminatedWriter::try_new(&mut buf[..]).unwrap();
        assert_eq!(writer.capacity(), 0);
        assert_eq!(writer.terminate_and_get(), b"\0");
        assert_eq!(writer.c_str(), c"");
    }

    #[test]
    fn test_c_str_and_keep_writing() {
        let mut writer = ZeroTerminatedWriter::try_new([0_u8; 16]).unwrap();
        let _unused = writer.write("left");
        assert_eq!(writer.c_str(), c"left");
        let _unused = writer.write("+right");
        assert_eq!(writer.c_str(), c"left+right");
    }
}
