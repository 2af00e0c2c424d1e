// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Be careful when adjusting these sizes. Scratch text is composed on the stack before
//! it is copied into a bounded writer, so a number never lands half written. Anything
//! longer than the inline size is [`smallvec::SmallVec::spilled`] on the heap, which
//! only happens for very wide paddings or very large fixed precisions.

use smallstr::SmallString;
use smallvec::SmallVec;

/// Inline size of [`ScratchText`]. Large enough for any `f64` in scientific notation,
/// any `i128` / `u128` in decimal or hex with a sign and prefix, and the fixed
/// notation of every value inside the default adaptive thresholds. Binary text of the
/// 128 bit types (up to 131 bytes with `-0b`) spills.
pub const SCRATCH_TEXT_SIZE: usize = 128;

/// Stack allocated scratch space for numeric text.
pub type ScratchText = SmallString<[u8; SCRATCH_TEXT_SIZE]>;

/// Default inline size for [`InlineString`].
pub const DEFAULT_STRING_STORAGE_SIZE: usize = 16;

/// Stack allocated string storage for short strings. It is one of the text-like
/// argument types accepted by the format machinery.
pub type InlineString = SmallString<[u8; DEFAULT_STRING_STORAGE_SIZE]>;

/// Decimal digits of an exponent, most significant first. Ten digits covers [`u32`].
pub const EXPONENT_DIGITS_SIZE: usize = 10;

pub type ExponentDigits = SmallVec<[u8; EXPONENT_DIGITS_SIZE]>;
