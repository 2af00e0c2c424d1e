// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod format_config;

// Re-export.
pub use format_config::*;
