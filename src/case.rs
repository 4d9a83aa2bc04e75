#![warn(clippy::all)]

//! Case conversions built on top of [segment].

use std::str::FromStr;

use derive_more::Display;

use crate::error::Error;
use crate::options::{Options, StripRule};
use crate::segment::segment;
use crate::unicode::{first_char_lower, first_char_upper, is_lower, is_upper, split_on_uppercase, title_words};

/// The case conversions this crate knows about.
#[derive(Debug, Display, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Case {
  /// `camelCase`
  #[display("camelCase")]
  Camel,
  /// `Capital Case`
  #[display("Capital Case")]
  Capital,
  /// `CONSTANT_CASE`
  #[display("CONSTANT_CASE")]
  Constant,
  /// `dot.case`
  #[display("dot.case")]
  Dot,
  /// `Header-Case`
  #[display("Header-Case")]
  Header,
  /// `Headline Case`
  #[display("Headline Case")]
  Headline,
  /// `kebab-case`
  #[display("kebab-case")]
  Kebab,
  /// `no case`
  #[display("no case")]
  No,
  /// `PascalCase`
  #[display("PascalCase")]
  Pascal,
  /// `path/case`
  #[display("path/case")]
  Path,
  /// `Sentence case`
  #[display("Sentence case")]
  Sentence,
  /// `snake_case`
  #[display("snake_case")]
  Snake,
  /// `sWAP cASE`
  #[display("sWAP cASE")]
  Swap,
  /// `Title Case`
  #[display("Title Case")]
  Title,
}

impl Case {
  /// Every case, in alphabetical order.
  pub const ALL: [Case; 14] = [
    Case::Camel,
    Case::Capital,
    Case::Constant,
    Case::Dot,
    Case::Header,
    Case::Headline,
    Case::Kebab,
    Case::No,
    Case::Pascal,
    Case::Path,
    Case::Sentence,
    Case::Snake,
    Case::Swap,
    Case::Title,
  ];

  /// Convert `input` into this case.
  ///
  /// `options` are ignored by the cases that do not split words with custom options
  /// (capital, constant, headline, sentence, swap and title).
  pub fn convert(&self, input: &str, options: &Options) -> String {
    match self {
      Case::Camel => camel(input, options),
      Case::Capital => capital(input),
      Case::Constant => constant(input),
      Case::Dot => dot(input, options),
      Case::Header => header(input, options),
      Case::Headline => headline(input),
      Case::Kebab => kebab(input, options),
      Case::No => no(input, options),
      Case::Pascal => pascal(input, options),
      Case::Path => path(input, options),
      Case::Sentence => sentence(input),
      Case::Snake => snake(input, options),
      Case::Swap => swap(input),
      Case::Title => title(input),
    }
  }
}

impl FromStr for Case {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "camel" | "camelCase" => Ok(Case::Camel),
      "capital" | "Capital Case" => Ok(Case::Capital),
      "constant" | "CONSTANT_CASE" => Ok(Case::Constant),
      "dot" | "dot.case" => Ok(Case::Dot),
      "header" | "Header-Case" => Ok(Case::Header),
      "headline" | "Headline Case" => Ok(Case::Headline),
      "kebab" | "kebab-case" => Ok(Case::Kebab),
      "no" | "no case" => Ok(Case::No),
      "pascal" | "PascalCase" => Ok(Case::Pascal),
      "path" | "path/case" => Ok(Case::Path),
      "sentence" | "Sentence case" => Ok(Case::Sentence),
      "snake" | "snake_case" => Ok(Case::Snake),
      "swap" | "sWAP cASE" => Ok(Case::Swap),
      "title" | "Title Case" => Ok(Case::Title),
      _ => Err(Error::InvalidOption(format!("Unknown case `{s}`"))),
    }
  }
}

/// Uppercase the first character and every character that follows `separator`.
fn upper_after(s: &str, separator: char) -> String {
  let mut result = String::with_capacity(s.len());
  let mut upper_next = true;

  for c in s.chars() {
    if upper_next {
      result.extend(c.to_uppercase());
    } else {
      result.push(c);
    }

    upper_next = c == separator;
  }

  result
}

/// Transform into a lowercase string with spaces between words.
pub fn no(input: &str, options: &Options) -> String {
  segment(input, options)
}

/// Transform into a string with the separator denoted by the next word capitalized.
pub fn camel(input: &str, options: &Options) -> String {
  first_char_lower(&pascal(input, options))
}

/// Transform into a space separated string with each word capitalized.
pub fn capital(input: &str) -> String {
  upper_after(&segment(input, &Options::new()), ' ')
}

/// Transform into an uppercase string with an underscore between words.
pub fn constant(input: &str) -> String {
  snake(input, &Options::new()).to_uppercase()
}

/// Transform into a lowercase string with a period between words.
pub fn dot(input: &str, options: &Options) -> String {
  segment(input, &options.or_delimiter("."))
}

/// Transform into a dash separated string of capitalized words.
///
/// Only characters following a `-` are capitalized, so a custom delimiter leaves the
/// following words lowercase (`FooBar` => `Foo:bar`).
pub fn header(input: &str, options: &Options) -> String {
  upper_after(&segment(input, &options.or_delimiter("-")), '-')
}

/// Transform into a space separated string of capitalized words.
///
/// A single word is first split on its uppercase letters (`TestV2` => `Test V2`). Dashes and
/// underscores separate words, but other punctuation is kept (`version 1.2.10` =>
/// `Version 1.2.10`).
pub fn headline(input: &str) -> String {
  let parts: Vec<&str> = input.split(' ').collect();
  let parts = if parts.len() > 1 { parts } else { split_on_uppercase(input) };

  let titled: Vec<String> = parts.into_iter().map(title_words).collect();
  let collapsed = titled.join("_");

  let words: Vec<&str> = collapsed.split(['-', '_', ' ']).filter(|word| !word.is_empty()).collect();
  words.join(" ")
}

/// Transform into a lowercase string with dashes between words.
pub fn kebab(input: &str, options: &Options) -> String {
  segment(input, &options.or_delimiter("-"))
}

/// Transform into a string of capitalized words without separators.
pub fn pascal(input: &str, options: &Options) -> String {
  headline(&segment(input, options)).replace(' ', "")
}

/// Transform into a lowercase string with slashes between words.
pub fn path(input: &str, options: &Options) -> String {
  segment(input, &options.or_delimiter("/"))
}

/// Transform into a lowercase string with spaces between words, then capitalize the string.
pub fn sentence(input: &str) -> String {
  first_char_upper(&segment(input, &Options::new()))
}

/// Transform into a lowercase string with underscores between words.
///
/// Underscores leading the input are kept (`__typename` => `__typename`).
pub fn snake(input: &str, options: &Options) -> String {
  let options = options.or_delimiter("_").into_owned().or_strip_rule(StripRule::NonWordAfterLeadingUnderscores);
  segment(input, &options)
}

/// Transform a string by swapping every character from upper to lowercase, or lower to
/// uppercase.
pub fn swap(input: &str) -> String {
  let mut result = String::with_capacity(input.len());

  for c in input.chars() {
    if is_lower(c) {
      result.extend(c.to_uppercase());
    } else if is_upper(c) {
      result.extend(c.to_lowercase());
    } else {
      result.push(c);
    }
  }

  result
}

/// Capitalize the first letter of every word and lowercase the rest.
///
/// This is plain Unicode word capitalization. See [crate::title_case] for English
/// editorial title-casing.
pub fn title(input: &str) -> String {
  title_words(input)
}
