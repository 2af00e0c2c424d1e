// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Decoded form of one directive, eg: `{1:>+#08.3Lf}`. See [`FormatArgSpec`].

use strum_macros::EnumIter;

/// Presentation options of a single directive. Parsed fresh for each directive and
/// never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormatArgSpec {
    /// Explicit argument position, if the directive named one.
    pub index: Option<usize>,
    pub align: Align,
    pub sign: Sign,
    /// `#` flag.
    pub alternate_form: bool,
    /// `0` flag.
    pub zero_pad: bool,
    pub width: Option<usize>,
    pub precision: Option<usize>,
    /// `L` flag.
    pub use_locale: bool,
    pub format_type: FormatType,
}

impl FormatArgSpec {
    /// True when nothing but the type (and index) was specified, so a value can be
    /// written without any sign, prefix, or padding decisions.
    #[must_use]
    pub fn is_undecorated(&self) -> bool {
        self.align == Align::None
            && self.sign == Sign::Never
            && !self.alternate_form
            && !self.zero_pad
            && self.width.is_none()
            && self.precision.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    /// `<`
    Left,
    /// `>`
    Right,
    /// `^`
    Center,
    #[default]
    None,
}

impl Align {
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '<' => Some(Self::Left),
            '>' => Some(Self::Right),
            '^' => Some(Self::Center),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sign {
    /// `+`: sign for every number.
    Always,
    /// `-`: sign for negative numbers only.
    #[default]
    Never,
    /// ` `: leading space for non-negative numbers.
    Space,
}

impl Sign {
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Self::Always),
            '-' => Some(Self::Never),
            ' ' => Some(Self::Space),
            _ => None,
        }
    }
}

/// The trailing type character of a directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter)]
pub enum FormatType {
    /// No type char given.
    #[default]
    Auto,
    /// `s`
    Text,
    /// `d`
    Decimal,
    /// `b`
    Binary,
    /// `x`
    HexLower,
    /// `X`
    HexUpper,
    /// `e`
    ExponentLower,
    /// `E`
    ExponentUpper,
    /// `f`
    FixedLower,
    /// `F`
    FixedUpper,
    /// `g`
    GeneralLower,
    /// `G`
    GeneralUpper,
}

impl FormatType {
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            's' => Some(Self::Text),
            'd' => Some(Self::Decimal),
            'b' => Some(Self::Binary),
            'x' => Some(Self::HexLower),
            'X' => Some(Self::HexUpper),
            'e' => Some(Self::ExponentLower),
            'E' => Some(Self::ExponentUpper),
            'f' => Some(Self::FixedLower),
            'F' => Some(Self::FixedUpper),
            'g' => Some(Self::GeneralLower),
            'G' => Some(Self::GeneralUpper),
            _ => None,
        }
    }

    /// The directive character, or a space for [`FormatType::Auto`].
    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            Self::Auto => ' ',
            Self::Text => 's',
            Self::Decimal => 'd',
            Self::Binary => 'b',
            Self::HexLower => 'x',
            Self::HexUpper => 'X',
            Self::ExponentLower => 'e',
            Self::ExponentUpper => 'E',
            Self::FixedLower => 'f',
            Self::FixedUpper => 'F',
            Self::GeneralLower => 'g',
            Self::GeneralUpper => 'G',
        }
    }

    #[must_use]
    pub fn is_upper_case(self) -> bool {
        matches!(
            self,
            Self::HexUpper | Self::ExponentUpper | Self::FixedUpper | Self::GeneralUpper
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_format_type_char_round_trip() {
        for format_type in FormatType::iter().filter(|it| *it != FormatType::Auto) {
            assert_eq!(FormatType::from_char(format_type.as_char()), Some(format_type));
        }
        assert_eq!(FormatType::from_char(' '), None);
        assert_eq!(FormatType::from_char('o'), None);
    }

    #[test]
    fn test_default_spec_is_undecorated() {
        let spec = FormatArgSpec::default();
        assert!(spec.is_undecorated());
        assert_eq!(spec.format_type, FormatType::Auto);
        assert_eq!(spec.sign, Sign::Never);
        assert_eq!(spec.align, Align::None);

        let spec = FormatArgSpec {
            format_type: FormatType::Decimal,
            index: Some(2),
            ..Default::default()
        };
        assert!(spec.is_undecorated());

        let spec = FormatArgSpec {
            width: Some(3),
            ..Default::default()
        };
        assert!(!spec.is_undecorated());
    }
}
