// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Knobs for the adaptive float engine ([`crate::format_float`]).
///
/// Values with magnitude in `[scientific_below, scientific_above]` are written in
/// fixed notation, everything else in scientific notation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericRenderSettings {
    /// Digits after the decimal point in fixed notation.
    pub fixed_precision: usize,
    /// Minimum significant digits kept for fixed values with magnitude below `1`.
    pub significant_digits_near_zero: usize,
    /// Mantissa digits after the decimal point in scientific notation.
    pub scientific_precision: usize,
    pub scientific_below: f64,
    pub scientific_above: f64,
}

impl Default for NumericRenderSettings {
    fn default() -> Self {
        Self {
            fixed_precision: 2,
            significant_digits_near_zero: 2,
            scientific_precision: 2,
            scientific_below: 1e-6,
            scientific_above: 1e6,
        }
    }
}

impl NumericRenderSettings {
    #[must_use]
    pub fn uses_scientific(&self, magnitude: f64) -> bool {
        magnitude < self.scientific_below || magnitude > self.scientific_above
    }

    /// Digits after the decimal point for `magnitude` in fixed notation. Values below
    /// `1` get enough digits to show `significant_digits_near_zero` significant ones.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn fixed_precision_for(&self, magnitude: f64) -> usize {
        if magnitude >= 1.0 || magnitude <= 0.0 {
            return self.fixed_precision;
        }
        let leading_zeros = (-magnitude.log10().floor()) as usize;
        let wanted = self
            .significant_digits_near_zero
            .saturating_add(leading_zeros)
            .saturating_sub(1);
        wanted.max(self.fixed_precision)
    }
}
