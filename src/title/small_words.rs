#![warn(clippy::all)]

//! English function words that stay lowercase inside a title.

use fnv::FnvHashSet;

use crate::title::text::Text;

/// Articles, short prepositions and conjunctions.
///
/// Abbreviations with a trailing period come before the bare form so that the longer one is
/// tried first.
const SMALL_WORDS: [&str; 24] = [
  "a", "an", "and", "as", "at", "but", "by", "en", "for", "if", "in", "nor", "of", "on", "or", "over", "the", "to",
  "upon", "v.", "v", "via", "vs.", "vs",
];

/// The small words of a title caser, kept in the order they are tried.
#[derive(Debug, Clone)]
pub(crate) struct SmallWords {
  words: Vec<Vec<char>>,
}

impl Default for SmallWords {
  fn default() -> Self {
    Self::new(std::iter::empty::<&str>())
  }
}

impl SmallWords {
  /// The default small words followed by `ignored`, lowercased and without duplicates.
  pub(crate) fn new<I, S>(ignored: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
  {
    let mut seen = FnvHashSet::default();
    let mut words = Vec::with_capacity(SMALL_WORDS.len());

    let defaults = SMALL_WORDS.iter().map(|word| word.to_string());
    let ignored = ignored.into_iter().map(|word| word.as_ref().trim().to_lowercase());

    for word in defaults.chain(ignored) {
      if !word.is_empty() && seen.insert(word.clone()) {
        words.push(word.chars().collect());
      }
    }

    Self { words }
  }

  /// Ends of the small words found at `start`, in the order the words are tried.
  pub(crate) fn ends_at<'a>(&'a self, text: &'a Text, start: usize) -> impl Iterator<Item = usize> + 'a {
    self.words.iter().filter_map(move |word| text.match_ignore_case(start, word))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defaults() {
    assert_eq!(SmallWords::default().words.len(), SMALL_WORDS.len());
  }

  #[test]
  fn ignored_words_are_deduplicated() {
    let words = SmallWords::new(["With", "with", "THE", " ", "from "]);
    assert_eq!(words.words.len(), SMALL_WORDS.len() + 2);
  }

  #[test]
  fn ends() {
    let text = Text::new("and vs. Via");
    let words = SmallWords::default();
    assert_eq!(words.ends_at(&text, 0).collect::<Vec<_>>(), [1, 2, 3]);
    assert_eq!(words.ends_at(&text, 4).collect::<Vec<_>>(), [5, 7, 6]);
    assert_eq!(words.ends_at(&text, 8).collect::<Vec<_>>(), [9, 11]);
  }
}
