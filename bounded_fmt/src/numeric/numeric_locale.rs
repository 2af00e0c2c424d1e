// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// A small bundle of presentation tokens for numbers. This is not a locale database,
/// just the glyphs the float engine needs. Start from [`NumericLocale::ascii()`] or
/// [`NumericLocale::unicode()`] and adjust with the `with_*` modifiers.
///
/// ```
/// use bounded_fmt::NumericLocale;
///
/// let locale = NumericLocale::unicode().with_decimal_separator(b',');
/// assert_eq!(locale.minus_prefix, "\u{2212}");
/// assert_eq!(locale.decimal_separator, b',');
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericLocale {
    pub decimal_separator: u8,
    /// Written before non-negative values.
    pub plus_prefix: &'static str,
    /// Written before negative values.
    pub minus_prefix: &'static str,
    pub infinity_text: &'static str,
    pub nan_text: &'static str,
    /// Written between the mantissa and the exponent, eg: `e` or ` × 10`.
    pub exponent_prefix: &'static str,
    /// Render the exponent as superscript digits.
    pub use_superscript_exponent: bool,
}

impl Default for NumericLocale {
    fn default() -> Self { Self::ascii() }
}

impl NumericLocale {
    /// `-1.5e-7`, `inf`, `nan`.
    #[must_use]
    pub const fn ascii() -> Self {
        Self {
            decimal_separator: b'.',
            plus_prefix: "",
            minus_prefix: "-",
            infinity_text: "inf",
            nan_text: "nan",
            exponent_prefix: "e",
            use_superscript_exponent: false,
        }
    }

    /// `−1.5 × 10⁻⁷`, `∞`, `NaN`.
    #[must_use]
    pub const fn unicode() -> Self {
        Self {
            decimal_separator: b'.',
            plus_prefix: "",
            minus_prefix: "\u{2212}",
            infinity_text: "\u{221E}",
            nan_text: "NaN",
            exponent_prefix: " \u{D7} 10",
            use_superscript_exponent: true,
        }
    }

    #[must_use]
    pub const fn with_decimal_separator(mut self, decimal_separator: u8) -> Self {
        self.decimal_separator = decimal_separator;
        self
    }

    #[must_use]
    pub const fn with_sign_tokens(
        mut self,
        plus_prefix: &'static str,
        minus_prefix: &'static str,
    ) -> Self {
        self.plus_prefix = plus_prefix;
        self.minus_prefix = minus_prefix;
        self
    }

    #[must_use]
    pub const fn with_special_tokens(
        mut self,
        infinity_text: &'static str,
        nan_text: &'static str,
    ) -> Self {
        self.infinity_text = infinity_text;
        self.nan_text = nan_text;
        self
    }

    #[must_use]
    pub const fn with_exponent_style(
        mut self,
        exponent_prefix: &'static str,
        use_superscript_exponent: bool,
    ) -> Self {
        self.exponent_prefix = exponent_prefix;
        self.use_superscript_exponent = use_superscript_exponent;
        self
    }
}
