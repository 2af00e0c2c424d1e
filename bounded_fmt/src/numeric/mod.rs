// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod exponent;
pub mod float_directive;
pub mod float_render;
pub mod int_render;
pub mod numeric_locale;
pub mod padding;
pub mod render_settings;

// Re-export.
pub use exponent::*;
pub use float_directive::*;
pub use float_render::*;
pub use int_render::*;
pub use numeric_locale::*;
pub use padding::*;
pub use render_settings::*;
