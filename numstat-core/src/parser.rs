// numstat-core/src/parser.rs
//! Tokenizing and numeric parsing of free-form input.
//!
//! Input is split on runs of whitespace, commas and semicolons. Every
//! remaining token is parsed on its own; a token either contributes one finite
//! `f64` to the dataset or bumps the invalid counter, so
//! `values.len() + invalid_count` always equals the number of tokens.
//!
//! License: MIT OR APACHE 2.0

use log::{debug, trace};
use serde::{Deserialize, Serialize};

/// How much of a token has to be numeric for it to count as a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseMode {
    /// The longest leading numeric literal is used and anything after it is
    /// ignored, so `"12abc"` parses as `12`.
    #[default]
    Prefix,
    /// The whole token must be a numeric literal.
    Strict,
}

/// The result of parsing one raw input string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedInput {
    /// Finite values, in the order their tokens appeared.
    pub values: Vec<f64>,
    /// Tokens that did not yield a finite number.
    pub invalid_count: usize,
}

impl ParsedInput {
    /// Number of non-empty tokens the input was split into.
    pub fn token_count(&self) -> usize {
        self.values.len() + self.invalid_count
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Whitespace as ECMAScript defines it: Unicode `White_Space` plus the
/// byte-order mark, minus NEXT LINE (U+0085).
pub fn is_blank(c: char) -> bool {
    match c {
        '\u{FEFF}' => true,
        '\u{0085}' => false,
        _ => c.is_whitespace(),
    }
}

/// Returns `true` for characters that separate tokens.
pub fn is_separator(c: char) -> bool {
    is_blank(c) || c == ',' || c == ';'
}

/// Splits `input` into its non-empty tokens.
pub fn tokenize(input: &str) -> impl Iterator<Item = &str> {
    input
        .split(is_separator)
        .map(|token| token.trim_matches(is_blank))
        .filter(|token| !token.is_empty())
}

/// Parses `input` with the default [`ParseMode::Prefix`] semantics.
pub fn parse(input: &str) -> ParsedInput {
    parse_with_mode(input, ParseMode::Prefix)
}

/// Parses `input`, deciding token validity according to `mode`.
pub fn parse_with_mode(input: &str, mode: ParseMode) -> ParsedInput {
    let mut parsed = ParsedInput::default();

    for token in tokenize(input) {
        match parse_token(token, mode) {
            Some(value) => parsed.values.push(value),
            None => {
                trace!("Rejected token '{}'", token);
                parsed.invalid_count += 1;
            }
        }
    }

    debug!(
        "Parsed {} tokens ({:?} mode): {} valid, {} invalid",
        parsed.token_count(),
        mode,
        parsed.values.len(),
        parsed.invalid_count
    );
    parsed
}

/// Parses a single token. Returns `None` when the token has no numeric
/// literal (or, in strict mode, is not entirely one) or when the literal is
/// not finite, e.g. `1e400`.
pub fn parse_token(token: &str, mode: ParseMode) -> Option<f64> {
    let len = numeric_prefix_len(token);
    if len == 0 || (mode == ParseMode::Strict && len != token.len()) {
        return None;
    }

    // The prefix only ever spans ASCII bytes, so `len` is a char boundary.
    token[..len]
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Length in bytes of the longest leading decimal floating-point literal:
/// `[+-]? (digits [. digits?] | . digits) ([eE] [+-]? digits)?`.
///
/// The exponent is only included when at least one digit follows it, so
/// `"3e"` and `"3e+"` both stop after the `3`.
fn numeric_prefix_len(token: &str) -> usize {
    let bytes = token.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i = 1;
    }

    let int_start = i;
    i = skip_digits(bytes, i);
    let mut mantissa_digits = i - int_start;

    if bytes.get(i) == Some(&b'.') {
        let frac_end = skip_digits(bytes, i + 1);
        let frac_digits = frac_end - (i + 1);
        if mantissa_digits + frac_digits > 0 {
            mantissa_digits += frac_digits;
            i = frac_end;
        }
    }

    if mantissa_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_end = skip_digits(bytes, j);
        if exp_end > j {
            i = exp_end;
        }
    }

    i
}

fn skip_digits(bytes: &[u8], mut i: usize) -> usize {
    while bytes.get(i).is_some_and(u8::is_ascii_digit) {
        i += 1;
    }
    i
}
