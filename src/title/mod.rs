#![warn(clippy::all)]

//! English editorial title casing.
//!
//! Small words (articles, short conjunctions and prepositions) are lowercased unless they start
//! or end the title or a subphrase, every other lowercase word is capitalized, and words that
//! already carry internal capitals, file paths, URLs and email addresses are left alone.

mod passes;
mod small_words;
mod text;

use log::trace;

use self::small_words::SmallWords;
use crate::unicode::is_lower;

type Pass = fn(&str, &SmallWords) -> String;

const PASSES: [(&str, Pass); 5] = [
  ("words", passes::capitalize_words),
  ("first words", passes::capitalize_first_words),
  ("last words", passes::capitalize_last_words),
  ("compound heads", passes::capitalize_compound_heads),
  ("compound tails", passes::capitalize_compound_tails),
];

/// A title caser, optionally with extra words to keep lowercase.
///
/// ```
/// use changecase::TitleCaser;
///
/// let caser = TitleCaser::new().ignore(["with"]);
/// assert_eq!(caser.apply("a walk with the dog"), "A Walk with the Dog");
/// ```
#[derive(Debug, Clone, Default)]
pub struct TitleCaser {
  ignored: Vec<String>,
  small_words: SmallWords,
}

impl TitleCaser {
  /// A title caser with the default English small words.
  pub fn new() -> Self {
    Self::default()
  }

  /// Treat `words` as small words too, on top of the words ignored so far.
  pub fn ignore<I, S>(mut self, words: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
  {
    self.ignored.extend(words.into_iter().map(|word| word.as_ref().to_owned()));
    self.small_words = SmallWords::new(&self.ignored);
    self
  }

  /// Title-case `input`.
  pub fn apply(&self, input: &str) -> String {
    let input = input.trim();
    let title = if input.chars().any(is_lower) { input.to_owned() } else { input.to_lowercase() };

    PASSES.iter().fold(title, |title, (name, pass)| {
      let result = pass(&title, &self.small_words);
      trace!("Title pass `{name}` turned `{title}` into `{result}`");
      result
    })
  }
}

/// Title-case `input` with the default English small words.
pub fn title_case(input: &str) -> String {
  TitleCaser::new().apply(input)
}
