// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod bounded_writer;
pub mod text_builder;
pub mod zero_terminated_writer;

// Re-export.
pub use bounded_writer::*;
pub use text_builder::*;
pub use zero_terminated_writer::*;
