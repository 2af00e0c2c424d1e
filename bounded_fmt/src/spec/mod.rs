// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod format_arg_spec;
pub mod spec_parser;

// Re-export.
pub use format_arg_spec::*;
pub use spec_parser::*;
