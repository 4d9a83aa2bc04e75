#![warn(clippy::all)]

//! Options controlling how a string is split into words and joined back together.

use std::borrow::Cow;
use std::str::FromStr;
use std::sync::LazyLock;

use derive_more::Display;
use log::debug;
use regex::Regex;
use serde::de::{self, Deserializer};
use serde::Deserialize;

use crate::error::{Error, Res};

/// Delimiter used between words unless one is given.
pub const DEFAULT_DELIMITER: &str = " ";

macro_rules! pattern {
  ($name:ident, $pattern:literal) => {
    static $name: LazyLock<Regex> = LazyLock::new(|| Regex::new($pattern).expect("valid built-in pattern"));
  };
}

pattern!(LOWER_TO_UPPER, r"([\p{Ll}\p{M}\p{N}])([\p{Lu}\p{M}])");
pattern!(ACRONYM_TO_WORD, r"([\p{Lu}\p{M}])([\p{Lu}\p{M}][\p{Ll}\p{M}])");
pattern!(DIGIT_TO_LETTER, r"(\p{N})([\p{L}\p{M}])");
pattern!(LETTER_TO_DIGIT, r"([\p{L}\p{M}])(\p{N})");
pattern!(NON_WORD, r"[^\p{L}\p{M}\p{N}]+");
pattern!(NON_WORD_OR_APOSTROPHE, r"[^\p{L}\p{M}\p{N}'’]+");

/// A rule that finds an implicit word boundary in undelimited text.
///
/// Every match of a rule is split between its first and second capture group.
#[derive(Debug, Clone, Display)]
pub enum BoundaryRule {
  /// A lowercase letter, mark or number followed by an uppercase letter (`camelCase`).
  #[display("lower-to-upper")]
  LowerToUpper,
  /// The last capital of an uppercase run followed by a lowercase letter (`CAMELCase`).
  #[display("acronym-to-word")]
  AcronymToWord,
  /// A number followed by a letter (`13test`).
  #[display("digit-to-letter")]
  DigitToLetter,
  /// A letter followed by a number (`test13`).
  #[display("letter-to-digit")]
  LetterToDigit,
  /// A caller-supplied pattern; a space is inserted between capture groups 1 and 2.
  #[display("custom `{_0}`")]
  Custom(Regex),
}

static DEFAULT_BOUNDARY_RULES: [BoundaryRule; 2] = [BoundaryRule::LowerToUpper, BoundaryRule::AcronymToWord];
static NUMBER_BOUNDARY_RULES: [BoundaryRule; 2] = [BoundaryRule::DigitToLetter, BoundaryRule::LetterToDigit];
static DEFAULT_STRIP_RULE: StripRule = StripRule::NonWord;

impl BoundaryRule {
  fn regex(&self) -> &Regex {
    match self {
      BoundaryRule::LowerToUpper => &LOWER_TO_UPPER,
      BoundaryRule::AcronymToWord => &ACRONYM_TO_WORD,
      BoundaryRule::DigitToLetter => &DIGIT_TO_LETTER,
      BoundaryRule::LetterToDigit => &LETTER_TO_DIGIT,
      BoundaryRule::Custom(regex) => regex,
    }
  }

  /// Insert a space at every boundary this rule finds.
  pub fn apply<'a>(&self, input: &'a str) -> Cow<'a, str> {
    self.regex().replace_all(input, "${1} ${2}")
  }
}

/// A rule that finds runs of characters which separate words.
#[derive(Debug, Clone, Display)]
pub enum StripRule {
  /// Anything that is not a letter, mark or number.
  #[display("non-word")]
  NonWord,
  /// Like [StripRule::NonWord], but underscores leading the whole input are kept.
  #[display("non-word-after-leading-underscores")]
  NonWordAfterLeadingUnderscores,
  /// A caller-supplied pattern. Apostrophe handling does not apply to it.
  #[display("custom `{_0}`")]
  Custom(Regex),
}

impl StripRule {
  /// Replace every run of separator characters with a single space.
  ///
  /// # Arguments
  ///
  /// * `input` - Text to strip.
  /// * `apostrophe` - Whether `'` and `’` are kept as word characters by the built-in rules.
  pub fn apply<'a>(&self, input: &'a str, apostrophe: bool) -> Cow<'a, str> {
    let non_word: &Regex = if apostrophe { &NON_WORD_OR_APOSTROPHE } else { &NON_WORD };

    match self {
      StripRule::NonWord => non_word.replace_all(input, " "),
      StripRule::NonWordAfterLeadingUnderscores => {
        let rest = input.trim_start_matches('_');
        let leading = &input[..input.len() - rest.len()];
        match non_word.replace_all(rest, " ") {
          Cow::Borrowed(_) => Cow::Borrowed(input),
          Cow::Owned(rest) => Cow::Owned(format!("{leading}{rest}")),
        }
      }
      StripRule::Custom(regex) => regex.replace_all(input, " "),
    }
  }
}

/// Word splitting and joining options.
///
/// Every field is optional until it is used, so that case converters can fall back to
/// their own defaults (e.g. `-` for kebab-case) while a value set by the caller still wins.
///
/// ```
/// use changecase::{segment, Options};
///
/// let options = Options::new().delimiter("_").separate_numbers(true);
/// assert_eq!(segment("testString123", &options), "test_string_123");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Options {
  delimiter: Option<String>,
  boundary_rules: Option<Vec<BoundaryRule>>,
  strip_rule: Option<StripRule>,
  separate_numbers: bool,
  apostrophe: bool,
}

impl Options {
  /// Options with every value left at its default.
  pub fn new() -> Self {
    Self::default()
  }

  /// Set the string placed between words.
  pub fn delimiter(mut self, delimiter: impl Into<String>) -> Self {
    self.delimiter = Some(delimiter.into());
    self
  }

  /// Replace the default boundary rules.
  pub fn boundary_rules(mut self, rules: impl IntoIterator<Item = BoundaryRule>) -> Self {
    self.boundary_rules = Some(rules.into_iter().collect());
    self
  }

  /// Add a boundary rule. The first call replaces the default rules.
  pub fn boundary_rule(mut self, rule: BoundaryRule) -> Self {
    self.boundary_rules.get_or_insert_with(Vec::new).push(rule);
    self
  }

  /// Replace the default strip rule.
  pub fn strip_rule(mut self, rule: StripRule) -> Self {
    self.strip_rule = Some(rule);
    self
  }

  /// Also split between numbers and letters (`test123` => `test 123`).
  pub fn separate_numbers(mut self, separate_numbers: bool) -> Self {
    self.separate_numbers = separate_numbers;
    self
  }

  /// Keep `'` and `’` inside words (`assistant's`).
  pub fn allow_apostrophe(mut self, apostrophe: bool) -> Self {
    self.apostrophe = apostrophe;
    self
  }

  /// Build options from a JSON-like option map, rejecting unknown keys and mistyped values.
  ///
  /// Recognized keys are `delimiter` (string), `splitPatterns` (a regex or a list of
  /// regexes), `stripPattern` (regex), `separateNumbers` (bool) and `allowApostrophe` (bool).
  ///
  /// # Errors
  ///
  /// * `Error::InvalidOption` - A key is not recognized, a value has the wrong type, or a
  ///   pattern does not compile.
  pub fn from_value(value: serde_json::Value) -> Res<Self> {
    Self::try_from(serde_json::from_value::<RawOptions>(value)?)
  }

  pub(crate) fn or_delimiter(&self, delimiter: &str) -> Cow<'_, Options> {
    if self.delimiter.is_some() {
      return Cow::Borrowed(self);
    }

    Cow::Owned(self.clone().delimiter(delimiter))
  }

  pub(crate) fn or_strip_rule(self, rule: StripRule) -> Self {
    if self.strip_rule.is_some() {
      return self;
    }

    self.strip_rule(rule)
  }

  /// The delimiter placed between words.
  pub fn get_delimiter(&self) -> &str {
    self.delimiter.as_deref().unwrap_or(DEFAULT_DELIMITER)
  }

  /// The boundary rules applied in order, including the number rules if enabled.
  pub fn active_boundary_rules(&self) -> impl Iterator<Item = &BoundaryRule> {
    let base = self.boundary_rules.as_deref().unwrap_or(&DEFAULT_BOUNDARY_RULES);
    let numbers: &[BoundaryRule] = if self.separate_numbers { &NUMBER_BOUNDARY_RULES } else { &[] };
    base.iter().chain(numbers)
  }

  /// The strip rule applied after the boundary rules.
  pub fn active_strip_rule(&self) -> &StripRule {
    self.strip_rule.as_ref().unwrap_or(&DEFAULT_STRIP_RULE)
  }

  /// Whether apostrophes are kept inside words.
  pub fn allows_apostrophe(&self) -> bool {
    self.apostrophe
  }
}

impl TryFrom<serde_json::Value> for Options {
  type Error = Error;

  fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
    Self::from_value(value)
  }
}

impl FromStr for Options {
  type Err = Error;

  /// Parse a JSON object of options, e.g. `{"delimiter": "-", "separateNumbers": true}`.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::try_from(serde_json::from_str::<RawOptions>(s)?)
  }
}

/// The untyped shape of an option map before patterns are compiled.
///
/// A missing key means the default. An explicit `null` is a wrong-typed value.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
struct RawOptions {
  #[serde(default, deserialize_with = "present")]
  delimiter: Option<String>,
  #[serde(default, alias = "splitRx", deserialize_with = "patterns")]
  split_patterns: Option<Vec<String>>,
  #[serde(default, alias = "stripRx", deserialize_with = "present")]
  strip_pattern: Option<String>,
  #[serde(default, alias = "separateNum", deserialize_with = "present")]
  separate_numbers: Option<bool>,
  #[serde(default, alias = "apostrophe", deserialize_with = "present")]
  allow_apostrophe: Option<bool>,
}

/// Deserialize a value that was given, so that `null` fails like any other wrong type.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
  D: Deserializer<'de>,
  T: Deserialize<'de>,
{
  T::deserialize(deserializer).map(Some)
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Patterns {
  One(String),
  Many(Vec<String>),
}

fn patterns<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
  D: Deserializer<'de>,
{
  match Patterns::deserialize(deserializer) {
    Ok(Patterns::One(pattern)) => Ok(Some(vec![pattern])),
    Ok(Patterns::Many(patterns)) => Ok(Some(patterns)),
    Err(_) => Err(de::Error::custom("The option \"splitPatterns\" expects a pattern or a list of patterns")),
  }
}

fn compile(option: &str, pattern: &str) -> Res<Regex> {
  match Regex::new(pattern) {
    Ok(regex) => Ok(regex),
    Err(err) => Error::invalid_option(format!("The option \"{option}\" has an invalid pattern `{pattern}`: {err}")),
  }
}

impl TryFrom<RawOptions> for Options {
  type Error = Error;

  fn try_from(raw: RawOptions) -> Result<Self, Self::Error> {
    let mut options = Options::new()
      .separate_numbers(raw.separate_numbers.unwrap_or(false))
      .allow_apostrophe(raw.allow_apostrophe.unwrap_or(false));

    if let Some(delimiter) = raw.delimiter {
      options = options.delimiter(delimiter);
    }

    if let Some(patterns) = raw.split_patterns {
      let mut rules = Vec::with_capacity(patterns.len());
      for pattern in &patterns {
        rules.push(BoundaryRule::Custom(compile("splitPatterns", pattern)?));
      }
      options = options.boundary_rules(rules);
    }

    if let Some(pattern) = raw.strip_pattern {
      options = options.strip_rule(StripRule::Custom(compile("stripPattern", &pattern)?));
    }

    debug!("Resolved case options: {options:?}");
    Ok(options)
  }
}
