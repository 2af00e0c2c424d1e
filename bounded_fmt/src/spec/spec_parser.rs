// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Splits a format string into literal runs and argument directives.
//!
//! Grammar, where `[..]` is optional:
//!
//! ```text
//! directive := '{' [index] [':' [align][sign]['#']['0'][width]['.' precision]['L'][type]] '}'
//! align     := '<' | '>' | '^'
//! sign      := '+' | '-' | ' '
//! type      := 's' | 'd' | 'b' | 'x' | 'X' | 'e' | 'E' | 'f' | 'F' | 'g' | 'G'
//! ```
//!
//! `{{` and `}}` are escapes for literal braces. Directives without an index take the
//! argument after the previous directive's argument (starting at `0`), so positional
//! and automatic directives can be mixed.

use nom::{IResult, Parser,
          character::complete::{anychar, char, digit1},
          combinator::{map_opt, map_res, opt},
          sequence::preceded};

use super::{Align, FormatArgSpec, FormatType, Sign};
use crate::{FormatError, InvalidArgumentReason};

/// Every type character the parser accepts.
pub const SUPPORTED_TYPE_CHARS: &str = "sdbxXeEfFgG";

/// One event produced by [`FormatSpecParser`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatSegment<'a> {
    /// Text to copy verbatim. Escaped braces come out as their own one byte run.
    Literal(&'a str),
    /// A directive, with its argument index already resolved and bounds checked.
    Argument { index: usize, spec: FormatArgSpec },
}

/// Iterator over the [`FormatSegment`]s of a format string. Stops after the first
/// error.
#[derive(Debug, Clone)]
pub struct FormatSpecParser<'a> {
    input: &'a str,
    pos: usize,
    arg_count: usize,
    next_index: usize,
    failed: bool,
}

impl<'a> FormatSpecParser<'a> {
    #[must_use]
    pub fn new(input: &'a str, arg_count: usize) -> Self {
        Self {
            input,
            pos: 0,
            arg_count,
            next_index: 0,
            failed: false,
        }
    }

    fn fail(&mut self, reason: InvalidArgumentReason) -> Option<<Self as Iterator>::Item> {
        self.failed = true;
        Some(Err(FormatError::invalid(reason)))
    }

    fn next_directive(&mut self) -> Option<<Self as Iterator>::Item> {
        let offset = self.pos;
        let rest = &self.input[offset..];

        let (remainder, (explicit_index, mut spec)) = match parse_directive(rest) {
            Ok(it) => it,
            Err(nom::Err::Error(error) | nom::Err::Failure(error)) => {
                let consumed = rest.len() - error.input.len();
                let reason = classify_failure(offset, &rest[..consumed], error.input);
                return self.fail(reason);
            }
            Err(nom::Err::Incomplete(_)) => {
                return self.fail(InvalidArgumentReason::UnterminatedDirective { offset });
            }
        };

        let index = explicit_index.unwrap_or(self.next_index);
        if index >= self.arg_count {
            return self.fail(InvalidArgumentReason::IndexOutOfRange {
                index,
                arg_count: self.arg_count,
            });
        }

        self.next_index = index + 1;
        self.pos += rest.len() - remainder.len();
        spec.index = explicit_index;
        Some(Ok(FormatSegment::Argument { index, spec }))
    }
}

impl<'a> Iterator for FormatSpecParser<'a> {
    type Item = Result<FormatSegment<'a>, FormatError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.pos >= self.input.len() {
            return None;
        }

        let offset = self.pos;
        let rest = &self.input[offset..];

        // Literal run up to the next brace.
        let literal_len = rest.find(['{', '}']).unwrap_or(rest.len());
        if literal_len > 0 {
            self.pos += literal_len;
            return Some(Ok(FormatSegment::Literal(&rest[..literal_len])));
        }

        let bytes = rest.as_bytes();
        match (bytes[0], bytes.get(1)) {
            (b'}', Some(b'}')) | (b'{', Some(b'{')) => {
                self.pos += 2;
                Some(Ok(FormatSegment::Literal(&rest[..1])))
            }
            (b'}', _) => self.fail(InvalidArgumentReason::UnmatchedClosingBrace { offset }),
            (_, None) => self.fail(InvalidArgumentReason::UnterminatedDirective { offset }),
            _ => self.next_directive(),
        }
    }
}

/// Drive a parse with two callbacks: `on_literal` for literal runs and `on_argument`
/// for directives (resolved index and decoded spec). Literal runs before a malformed
/// directive have already been delivered when the error is returned.
///
/// # Errors
///
/// Returns [`FormatError::InvalidArgument`] for malformed input, or the first error
/// returned by a callback.
pub fn parse_format_spec<'a>(
    input: &'a str,
    arg_count: usize,
    mut on_literal: impl FnMut(&'a str) -> Result<(), FormatError>,
    mut on_argument: impl FnMut(usize, &FormatArgSpec) -> Result<(), FormatError>,
) -> Result<(), FormatError> {
    for segment in FormatSpecParser::new(input, arg_count) {
        match segment? {
            FormatSegment::Literal(text) => on_literal(text)?,
            FormatSegment::Argument { index, spec } => on_argument(index, &spec)?,
        }
    }
    Ok(())
}

fn classify_failure(
    offset: usize,
    consumed: &str,
    remainder: &str,
) -> InvalidArgumentReason {
    let failed_at = offset + consumed.len();
    match remainder.chars().next() {
        None => InvalidArgumentReason::UnterminatedDirective { offset },
        Some(type_char) if type_char.is_alphabetic() && consumed.contains(':') => {
            InvalidArgumentReason::UnsupportedType {
                type_char,
                offset: failed_at,
            }
        }
        Some(_) => InvalidArgumentReason::MalformedDirective { offset: failed_at },
    }
}

/// `{` [index] [`:` body] `}`.
#[rustfmt::skip]
fn parse_directive(input: &str) -> IResult<&str, (Option<usize>, FormatArgSpec)> {
    let (input, (_, index, spec, _)) = (
        /* open */ char('{'),
        /* index */ opt(parse_usize),
        /* body */ opt(preceded(char(':'), parse_spec_body)),
        /* close */ char('}'),
    )
        .parse(input)?;
    Ok((input, (index, spec.unwrap_or_default())))
}

/// Fields in their fixed order, each one optional.
#[rustfmt::skip]
fn parse_spec_body(input: &str) -> IResult<&str, FormatArgSpec> {
    let (input, (align, sign, alternate_form, zero_pad, width, precision, use_locale, format_type)) = (
        opt(map_opt(anychar, Align::from_char)),
        opt(map_opt(anychar, Sign::from_char)),
        opt(char('#')),
        opt(char('0')),
        opt(parse_usize),
        opt(preceded(char('.'), parse_usize)),
        opt(char('L')),
        opt(map_opt(anychar, FormatType::from_char)),
    )
        .parse(input)?;

    Ok((input, FormatArgSpec {
        index: None,
        align: align.unwrap_or_default(),
        sign: sign.unwrap_or_default(),
        alternate_form: alternate_form.is_some(),
        zero_pad: zero_pad.is_some(),
        width,
        precision,
        use_locale: use_locale.is_some(),
        format_type: format_type.unwrap_or_default(),
    }))
}

/// Decimal digits that fit in a [`usize`].
fn parse_usize(input: &str) -> IResult<&str, usize> {
    map_res(digit1, str::parse::<usize>).parse(input)
}
