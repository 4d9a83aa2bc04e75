#![warn(clippy::all)]

//! A character-indexed view of a title with the lookaround helpers the passes need.

use crate::unicode::{is_lower, is_word_char};

/// Apostrophes that may attach a suffix to a word (`don't`, `Gruber’s`).
pub(crate) const APOSTROPHES: [char; 2] = ['\'', '’'];

pub(crate) struct Text {
  chars: Vec<char>,
}

impl Text {
  pub(crate) fn new(s: &str) -> Self {
    Self { chars: s.chars().collect() }
  }

  pub(crate) fn len(&self) -> usize {
    self.chars.len()
  }

  /// The character at `index`, if any.
  pub(crate) fn at(&self, index: usize) -> Option<char> {
    self.chars.get(index).copied()
  }

  /// The character right before `index`, if any.
  pub(crate) fn before(&self, index: usize) -> Option<char> {
    index.checked_sub(1).and_then(|index| self.at(index))
  }

  pub(crate) fn is_at(&self, index: usize, pred: impl Fn(char) -> bool) -> bool {
    self.at(index).is_some_and(pred)
  }

  /// Whether a word starts or ends at `index`.
  pub(crate) fn is_boundary(&self, index: usize) -> bool {
    self.before(index).is_some_and(is_word_char) != self.at(index).is_some_and(is_word_char)
  }

  /// The end of the longest run of characters matching `pred` that starts at `start`.
  pub(crate) fn run_end(&self, start: usize, pred: impl Fn(char) -> bool) -> usize {
    let mut end = start;
    while self.is_at(end, &pred) {
      end += 1;
    }
    end
  }

  pub(crate) fn substring(&self, start: usize, end: usize) -> String {
    self.chars[start..end].iter().collect()
  }

  /// Take the underscores following `end` and find where the word closes on a boundary.
  ///
  /// Prefers keeping as many underscores as possible.
  pub(crate) fn close(&self, end: usize) -> Option<usize> {
    let underscores = self.run_end(end, |c| c == '_');
    (end..=underscores).rev().find(|&index| self.is_boundary(index))
  }

  /// Possible ends of a word ending at `end` followed by an optional apostrophe suffix,
  /// longest first.
  pub(crate) fn apostrophe_ends(&self, end: usize) -> Vec<usize> {
    if !self.is_at(end, |c| APOSTROPHES.contains(&c)) {
      return vec![end];
    }

    let suffix = self.run_end(end + 1, is_lower);
    let mut ends: Vec<usize> = (end + 1..=suffix).rev().collect();
    ends.push(end);
    ends
  }

  /// The end of `word` if it occurs at `start`, ignoring case.
  ///
  /// `word` must already be lowercase.
  pub(crate) fn match_ignore_case(&self, start: usize, word: &[char]) -> Option<usize> {
    for (offset, &expected) in word.iter().enumerate() {
      let c = self.at(start + offset)?;
      if c != expected && !c.to_lowercase().eq(expected.to_lowercase()) {
        return None;
      }
    }

    Some(start + word.len())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn boundaries() {
    let text = Text::new("a_b c-d");
    assert!(text.is_boundary(0));
    assert!(!text.is_boundary(1));
    assert!(text.is_boundary(3));
    assert!(text.is_boundary(4));
    assert!(text.is_boundary(5));
    assert!(text.is_boundary(7));
    assert!(!Text::new("").is_boundary(0));
  }

  #[test]
  fn closing() {
    let text = Text::new("foo__ bar_baz");
    assert_eq!(text.close(3), Some(5));
    assert_eq!(text.close(9), None);
    assert_eq!(text.close(13), Some(13));
  }

  #[test]
  fn apostrophes() {
    let text = Text::new("don’t");
    assert_eq!(text.apostrophe_ends(3), [5, 4, 3]);
    assert_eq!(text.apostrophe_ends(5), [5]);
  }

  #[test]
  fn ignore_case() {
    let text = Text::new("The ÉTÉ");
    assert_eq!(text.match_ignore_case(0, &['t', 'h', 'e']), Some(3));
    assert_eq!(text.match_ignore_case(4, &['é', 't', 'é']), Some(7));
    assert_eq!(text.match_ignore_case(4, &['é', 't', 'é', 's']), None);
    assert_eq!(text.match_ignore_case(0, &['a']), None);
  }
}
