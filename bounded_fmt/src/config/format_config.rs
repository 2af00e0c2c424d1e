// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! There is no process wide locale in this crate. The embedding application builds a
//! [`FormatConfig`] once (usually with [`FormatConfig::from_env()`]) and passes it to
//! the writers, builders and convenience functions that need it.

use std::env;

use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

use crate::{BoundedWriter, DEFAULT_DECIMAL_SEPARATOR, NumericLocale, NumericRenderSettings,
            Renderable, WriterStorage, float_to_string_localized, format_to_string_with};

/// Environment variables that name the numeric locale, highest priority first.
#[derive(Debug, Display, EnumString, EnumIter, Copy, Clone, PartialEq, Eq)]
pub enum LocaleEnvKeys {
    #[strum(serialize = "LC_ALL")]
    LcAll,
    #[strum(serialize = "LC_NUMERIC")]
    LcNumeric,
    #[strum(serialize = "LANG")]
    Lang,
}

/// Languages that write `3,14` instead of `3.14`.
const COMMA_DECIMAL_LANGUAGES: &[&str] = &[
    "az", "be", "bg", "ca", "cs", "da", "de", "el", "es", "et", "eu", "fi", "fr", "gl",
    "hr", "hu", "id", "is", "it", "kk", "lt", "lv", "mk", "nb", "nl", "nn", "no", "pl",
    "pt", "ro", "ru", "sk", "sl", "sq", "sr", "sv", "tr", "uk", "vi",
];

/// Territories that use `.` even though their language usually doesn't.
const POINT_DECIMAL_EXCEPTIONS: &[&str] = &["de_CH", "it_CH", "es_MX", "es_US"];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormatConfig {
    /// Used by writers for directive driven floats.
    pub decimal_separator: u8,
    pub render_settings: NumericRenderSettings,
    /// Used by [`FormatConfig::float_to_string()`].
    pub locale: NumericLocale,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            decimal_separator: DEFAULT_DECIMAL_SEPARATOR,
            render_settings: NumericRenderSettings::default(),
            locale: NumericLocale::ascii(),
        }
    }
}

impl FormatConfig {
    /// Derive the decimal separator from `LC_ALL`, `LC_NUMERIC` or `LANG` (the first
    /// one that is set and not empty). Everything else is default.
    #[must_use]
    pub fn from_env() -> Self { Self::from_env_with(|key| env::var(key).ok()) }

    /// Same as [`from_env()`](Self::from_env) with a custom variable lookup.
    #[must_use]
    pub fn from_env_with(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let found = LocaleEnvKeys::iter().find_map(|key| {
            lookup(&key.to_string())
                .filter(|value| !value.is_empty())
                .map(|value| (key, value))
        });

        let Some((key, locale_name)) = found else {
            return Self::default();
        };

        let decimal_separator = decimal_separator_for_locale_name(&locale_name);
        tracing::debug!(
            %key,
            locale_name,
            decimal_separator = %char::from(decimal_separator),
            "decimal separator from environment"
        );
        Self::default().with_decimal_separator(decimal_separator)
    }

    /// Sets the separator for writers and for [`Self::locale`].
    #[must_use]
    pub fn with_decimal_separator(mut self, decimal_separator: u8) -> Self {
        self.decimal_separator = decimal_separator;
        self.locale = self.locale.with_decimal_separator(decimal_separator);
        self
    }

    #[must_use]
    pub fn with_render_settings(mut self, render_settings: NumericRenderSettings) -> Self {
        self.render_settings = render_settings;
        self
    }

    #[must_use]
    pub fn with_locale(mut self, locale: NumericLocale) -> Self {
        self.locale = locale;
        self
    }

    /// Adaptive rendering with this config's settings and locale.
    #[must_use]
    pub fn float_to_string(&self, value: f64) -> String {
        float_to_string_localized(value, &self.render_settings, &self.locale)
    }

    #[must_use]
    pub fn format_to_string(&self, spec: &str, args: &[&dyn Renderable]) -> String {
        format_to_string_with(self, spec, args)
    }
}

impl<S: WriterStorage> BoundedWriter<S> {
    #[must_use]
    pub fn with_config(self, config: &FormatConfig) -> Self {
        self.with_decimal_separator(config.decimal_separator)
    }
}

/// `,` for locale names like `de_DE.UTF-8` or `fr_FR@euro` whose language uses a
/// decimal comma, `.` for everything else (including `C` and `POSIX`).
#[must_use]
pub fn decimal_separator_for_locale_name(locale_name: &str) -> u8 {
    let base = locale_name
        .split(['.', '@'])
        .next()
        .unwrap_or_default();
    let language = base.split(['_', '-']).next().unwrap_or_default();

    let is_exception = POINT_DECIMAL_EXCEPTIONS
        .iter()
        .any(|it| it.eq_ignore_ascii_case(&base.replace('-', "_")));
    let uses_comma = COMMA_DECIMAL_LANGUAGES
        .iter()
        .any(|it| it.eq_ignore_ascii_case(language));

    if uses_comma && !is_exception {
        b','
    } else {
        DEFAULT_DECIMAL_SEPARATOR
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;
    use crate::fmt_args;

    #[test_case("de_DE.UTF-8", b',' ; "german")]
    #[test_case("fr_FR@euro", b',' ; "french with modifier")]
    #[test_case("pt_BR", b',' ; "brazilian portuguese")]
    #[test_case("ru", b',' ; "language only")]
    #[test_case("de_CH.UTF-8", b'.' ; "swiss german")]
    #[test_case("es-MX", b'.' ; "mexican spanish with dash")]
    #[test_case("en_US.UTF-8", b'.' ; "english")]
    #[test_case("C", b'.' ; "c locale")]
    #[test_case("POSIX", b'.' ; "posix")]
    #[test_case("", b'.' ; "empty")]
    fn test_decimal_separator_for_locale_name(name: &str, expected: u8) {
        assert_eq!(decimal_separator_for_locale_name(name), expected);
    }

    fn lookup_in(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_env_priority() {
        let config = FormatConfig::from_env_with(lookup_in(&[
            ("LANG", "en_US.UTF-8"),
            ("LC_NUMERIC", "de_DE.UTF-8"),
        ]));
        assert_eq!(config.decimal_separator, b',');
        assert_eq!(config.locale.decimal_separator, b',');

        let config = FormatConfig::from_env_with(lookup_in(&[
            ("LC_ALL", "C"),
            ("LC_NUMERIC", "de_DE.UTF-8"),
        ]));
        assert_eq!(config.decimal_separator, b'.');

        // Empty values are skipped.
        let config = FormatConfig::from_env_with(lookup_in(&[
            ("LC_ALL", ""),
            ("LANG", "fr_FR"),
        ]));
        assert_eq!(config.decimal_separator, b',');

        let config = FormatConfig::from_env_with(lookup_in(&[]));
        assert_eq!(config, FormatConfig::default());
    }

    #[test]
    fn test_env_key_names() {
        let names: Vec<String> = LocaleEnvKeys::iter().map(|it| it.to_string()).collect();
        assert_eq!(names, vec!["LC_ALL", "LC_NUMERIC", "LANG"]);
        assert_eq!("LANG".parse::<LocaleEnvKeys>(), Ok(LocaleEnvKeys::Lang));
    }

    #[test]
    fn test_config_surfaces() {
        let config = FormatConfig::default()
            .with_decimal_separator(b',')
            .with_render_settings(NumericRenderSettings {
                fixed_precision: 3,
                ..Default::default()
            });
        assert_eq!(config.float_to_string(1.2345), "1,234");
        assert_eq!(config.format_to_string("{:.1f}", fmt_args![0.75]), "0,8");

        let config = config.with_locale(NumericLocale::unicode());
        assert_eq!(config.float_to_string(-2.0), "−2");

        let mut buf = [0_u8; 8];
        let writer = BoundedWriter::new(&mut buf[..]).with_config(&config);
        assert_eq!(writer.decimal_separator(), b',');
    }
}
