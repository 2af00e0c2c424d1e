// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod dispatch;
pub mod format_impl;
pub mod renderable;

// Re-export.
pub use dispatch::*;
pub use format_impl::*;
pub use renderable::*;
