#![warn(clippy::all)]

//! Splitting arbitrary text into lowercase words and joining them with a delimiter.
//!
//! This is the "no case" conversion every other case conversion is built on:
//!
//! 1. boundary rules insert a space at implicit word breaks (`camelCase` => `camel Case`),
//! 2. the strip rule turns each run of separator characters into a single space,
//! 3. the result is trimmed, split on spaces and lowercased,
//! 4. the words are joined with the delimiter.

use log::trace;

use crate::error::Res;
use crate::options::Options;

const SPACE: char = ' ';

/// Transform into a lowercase string with the delimiter between words.
///
/// # Arguments
///
/// * `input` - Text to split into words.
/// * `options` - Delimiter, boundary and strip rules to use.
pub fn segment(input: &str, options: &Options) -> String {
  let mut split = input.to_owned();
  for rule in options.active_boundary_rules() {
    split = rule.apply(&split).into_owned();
  }
  trace!("Split `{input}` at boundaries into `{split}`");

  let stripped = options.active_strip_rule().apply(&split, options.allows_apostrophe());
  trace!("Stripped `{split}` into `{stripped}`");

  let words: Vec<String> = stripped
    .trim_matches(SPACE)
    .split(SPACE)
    .filter(|word| !word.is_empty())
    .map(str::to_lowercase)
    .collect();

  words.join(options.get_delimiter())
}

/// Like [segment], but with options given as an option map.
///
/// # Errors
///
/// * `Error::InvalidOption` - The option map has an unknown key, a mistyped value or an
///   invalid pattern.
pub fn segment_with(input: &str, options: serde_json::Value) -> Res<String> {
  let options = Options::from_value(options)?;
  Ok(segment(input, &options))
}

/// Like [segment], but for raw bytes that must be valid UTF-8.
///
/// # Errors
///
/// * `Error::MalformedInput` - The input is not valid UTF-8.
pub fn segment_bytes(input: &[u8], options: &Options) -> Res<String> {
  let input = std::str::from_utf8(input)?;
  Ok(segment(input, options))
}
