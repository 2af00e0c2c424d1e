// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # bounded_fmt
//!
//! Render typed values into a caller supplied, bounded byte region, driven by a
//! curly brace format string. Nothing is ever written past the end of the
//! destination, and a failed operation leaves behind exactly the prefix that fit.
//!
//! ```
//! use bounded_fmt::{BoundedWriter, CapacityError, FormatError, fmt_args};
//!
//! let mut buf = [0_u8; 12];
//! let mut writer = BoundedWriter::new(&mut buf[..]);
//! writer.format("{:>5}|{:.2f}", fmt_args![42, 0.126]).unwrap();
//! assert_eq!(writer.as_str(), "   42|0.13");
//!
//! // Only 2 bytes left.
//! assert_eq!(
//!     writer.format("{}", fmt_args!["abc"]),
//!     Err(FormatError::Capacity(CapacityError))
//! );
//! assert_eq!(writer.as_str(), "   42|0.13ab");
//! ```
//!
//! # Format strings
//!
//! ```text
//! {[index][:[align][sign][#][0][width][.precision][L][type]]}
//! ```
//!
//! - `align` is one of `<`, `>`, `^`; `sign` one of `+`, `-`, space.
//! - `type` is one of `s d b x X e E f F g G`, or omitted.
//! - `{{` and `}}` produce literal braces.
//! - Directives without an index take the next one, counting on from the last
//!   directive.
//!
//! # Components
//!
//! | Module                | What it does                                             |
//! | --------------------- | -------------------------------------------------------- |
//! | [`writer`]            | [`BoundedWriter`], [`ZeroTerminatedWriter`], builders    |
//! | [`spec`]              | [`FormatSpecParser`] and [`FormatArgSpec`]               |
//! | [`render`]            | [`Renderable`] capabilities and [`dispatch_render()`]    |
//! | [`numeric`]           | Integer and float to text, adaptive notation, locales    |
//! | [`config`]            | [`FormatConfig`], decimal separator from the environment |
//! | [`log`]               | Optional `tracing` subscriber setup                      |
//! | [`common`]            | [`CapacityError`] and [`FormatError`]                    |
//! | [`stack_alloc_types`] | Inline scratch buffers                                   |
//!
//! Adaptive float rendering, outside of format strings:
//!
//! ```
//! use bounded_fmt::{NumericLocale, NumericRenderSettings, float_to_string,
//!                   float_to_string_localized};
//!
//! let settings = NumericRenderSettings::default();
//! assert_eq!(float_to_string(1.5, &settings, true), "1.5");
//! assert_eq!(float_to_string(1_234_567.0, &settings, true), "1.23e6");
//! assert_eq!(
//!     float_to_string_localized(-2.5, &settings, &NumericLocale::unicode()),
//!     "−2.5"
//! );
//! ```

// Enable unwrap_in_result lint for production code only (not tests).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach.
pub mod common;
pub mod config;
pub mod log;
pub mod numeric;
pub mod render;
pub mod spec;
pub mod stack_alloc_types;
pub mod writer;

// Re-export.
pub use common::*;
pub use config::*;
pub use log::*;
pub use numeric::*;
pub use render::*;
pub use spec::*;
pub use stack_alloc_types::*;
pub use writer::*;
