#![warn(clippy::all)]

//! The passes of the title caser.
//!
//! Every pass scans the whole title left to right and rewrites non-overlapping matches. The
//! passes run in the order they are declared here; the exception passes only ever promote a
//! small word to a capitalized one.

use crate::title::small_words::SmallWords;
use crate::title::text::{APOSTROPHES, Text};
use crate::unicode::{first_char_upper, is_letter, is_lower, is_punctuation};

/// Punctuation that ends a sentence or introduces a subtitle.
const SUBSENTENCE_ENDS: [char; 5] = [':', '.', ';', '?', '!'];

/// Quotes and brackets that open an inserted subphrase.
const SUBPHRASE_OPENERS: [char; 6] = ['\'', '"', '“', '‘', '(', '['];

/// Quotes and brackets that close an inserted subphrase.
const SUBPHRASE_CLOSERS: [char; 6] = ['\'', '"', '’', '”', ')', ']'];

/// Brackets allowed inside a word (`word(s)`).
const WORD_BRACKETS: [char; 6] = ['(', ')', '[', ']', '{', '}'];

const ELLIPSIS: char = '…';

fn capitalize(word: &str) -> String {
  first_char_upper(&word.to_lowercase())
}

/// Copy `text` while `rewrite` replaces the matches it finds.
///
/// `rewrite` is called at every position not covered by a previous match and returns the
/// replacement and the end of the match.
fn scan(text: &Text, mut rewrite: impl FnMut(usize) -> Option<(String, usize)>) -> String {
  let mut result = String::with_capacity(text.len());
  let mut index = 0;

  while index < text.len() {
    match rewrite(index) {
      Some((replacement, end)) if end > index => {
        result.push_str(&replacement);
        index = end;
      }
      _ => {
        result.extend(text.at(index));
        index += 1;
      }
    }
  }

  result
}

/// How the main pass treats a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WordKind {
  /// File paths, URLs, domains and email addresses.
  Verbatim,
  /// Small words are lowercased.
  Small,
  /// Words without capitals after their first letter get capitalized.
  Lowercase,
  /// Words like `iPhone` or `NASA` are left alone.
  Mixed,
}

/// A word matched by the main pass, with its surrounding underscores.
#[derive(Debug)]
struct Word {
  start: usize,
  body_start: usize,
  body_end: usize,
  end: usize,
  kind: WordKind,
}

impl Word {
  fn render(&self, text: &Text) -> String {
    let body = text.substring(self.body_start, self.body_end);
    let body = match self.kind {
      WordKind::Verbatim | WordKind::Mixed => body,
      WordKind::Small => body.to_lowercase(),
      WordKind::Lowercase => first_char_upper(&body),
    };

    format!("{}{}{}", text.substring(self.start, self.body_start), body, text.substring(self.body_end, self.end))
  }
}

fn is_path_char(c: char) -> bool {
  is_letter(c) || matches!(c, '-' | '_' | '/' | '\\')
}

fn is_host_char(c: char) -> bool {
  is_letter(c) || c == '-' || c == '_'
}

fn is_address_char(c: char) -> bool {
  is_host_char(c) || matches!(c, '@' | '.' | ':' | '/')
}

fn is_lowercase_word_char(c: char) -> bool {
  is_lower(c) || APOSTROPHES.contains(&c) || WORD_BRACKETS.contains(&c)
}

fn is_mixed_word_char(c: char) -> bool {
  is_letter(c) || APOSTROPHES.contains(&c) || WORD_BRACKETS.contains(&c)
}

/// A file path directly preceded by a space and a slash (` /usr/local`).
fn match_path(text: &Text, start: usize) -> Option<usize> {
  let after_slash = text.before(start).is_some_and(|c| c == '/' || c == '\\');
  let after_space = start >= 2 && text.at(start - 2) == Some(' ');
  if !after_slash || !after_space || !text.is_at(start, is_letter) {
    return None;
  }

  let end = text.run_end(start, is_path_char);
  (start + 2..=end).rev().find_map(|end| text.close(end))
}

/// A URL, domain or email address (`example.com`, `me@example.com`).
fn match_address(text: &Text, start: usize) -> Option<(usize, usize)> {
  let host_end = text.run_end(start, is_host_char);
  if host_end == start || !text.is_at(host_end, |c| matches!(c, '@' | '.' | ':')) {
    return None;
  }

  let end = text.run_end(host_end + 1, is_address_char);
  for body_end in (host_end + 2..=end).rev() {
    for suffix_end in text.apostrophe_ends(body_end) {
      if let Some(end) = text.close(suffix_end) {
        return Some((suffix_end, end));
      }
    }
  }

  None
}

fn match_small_word(text: &Text, small_words: &SmallWords, start: usize) -> Option<(usize, usize)> {
  small_words
    .ends_at(text, start)
    .flat_map(|word_end| text.apostrophe_ends(word_end))
    .find_map(|body_end| text.close(body_end).map(|end| (body_end, end)))
}

/// A letter followed by a run of characters matching `pred`.
fn match_plain_word(text: &Text, start: usize, pred: fn(char) -> bool) -> Option<(usize, usize)> {
  if !text.is_at(start, is_letter) {
    return None;
  }

  let end = text.run_end(start + 1, pred);
  (start + 1..=end).rev().find_map(|body_end| text.close(body_end).map(|end| (body_end, end)))
}

fn match_body(text: &Text, small_words: &SmallWords, body_start: usize) -> Option<(usize, usize, WordKind)> {
  if let Some(end) = match_path(text, body_start) {
    return Some((end, end, WordKind::Verbatim));
  }

  let tagged = |kind: WordKind| move |(body_end, end): (usize, usize)| (body_end, end, kind);
  match_address(text, body_start)
    .map(tagged(WordKind::Verbatim))
    .or_else(|| match_small_word(text, small_words, body_start).map(tagged(WordKind::Small)))
    .or_else(|| match_plain_word(text, body_start, is_lowercase_word_char).map(tagged(WordKind::Lowercase)))
    .or_else(|| match_plain_word(text, body_start, is_mixed_word_char).map(tagged(WordKind::Mixed)))
}

fn match_word(text: &Text, small_words: &SmallWords, start: usize) -> Option<Word> {
  if !text.is_boundary(start) {
    return None;
  }

  let underscores = text.run_end(start, |c| c == '_');
  (start..=underscores).rev().find_map(|body_start| {
    match_body(text, small_words, body_start).map(|(body_end, end, kind)| Word { start, body_start, body_end, end, kind })
  })
}

/// Lowercase small words, capitalize lowercase words and keep everything else.
pub(crate) fn capitalize_words(title: &str, small_words: &SmallWords) -> String {
  let text = Text::new(title);
  scan(&text, |index| match_word(&text, small_words, index).map(|word| (word.render(&text), word.end)))
}

/// Where a small word may start a title or subphrase at `index`.
fn subphrase_starts(text: &Text, index: usize) -> Vec<usize> {
  let mut starts = Vec::with_capacity(1);

  if index == 0 {
    starts.push(text.run_end(0, is_punctuation));
  }

  if text.is_at(index, |c| SUBSENTENCE_ENDS.contains(&c)) {
    let spaces = text.run_end(index + 1, |c| c == ' ');
    if spaces > index + 1 {
      starts.push(spaces);
    }
  }

  if text.at(index) == Some(' ') && text.is_at(index + 1, |c| SUBPHRASE_OPENERS.contains(&c)) {
    starts.push(text.run_end(index + 2, |c| c == ' '));
  }

  starts
}

/// Capitalize small words at the start of the title or of a subsentence or subphrase.
pub(crate) fn capitalize_first_words(title: &str, small_words: &SmallWords) -> String {
  let text = Text::new(title);
  scan(&text, |index| {
    subphrase_starts(&text, index).into_iter().find_map(|word_start| {
      let end = small_words.ends_at(&text, word_start).find(|&end| text.is_boundary(end))?;
      Some((format!("{}{}", text.substring(index, word_start), capitalize(&text.substring(word_start, end))), end))
    })
  })
}

/// Capitalize small words at the end of the title or of an inserted subphrase.
pub(crate) fn capitalize_last_words(title: &str, small_words: &SmallWords) -> String {
  let text = Text::new(title);
  let ends_title = |end: usize| text.run_end(end, is_punctuation) == text.len();
  let ends_subphrase =
    |end: usize| text.is_at(end, |c| SUBPHRASE_CLOSERS.contains(&c)) && text.at(end + 1) == Some(' ');

  scan(&text, |index| {
    if !text.is_boundary(index) {
      return None;
    }

    let end = small_words.ends_at(&text, index).find(|&end| ends_title(end) || ends_subphrase(end))?;
    Some((capitalize(&text.substring(index, end)), end))
  })
}

/// Capitalize small words that start a hyphenated compound (`in-flight` => `In-flight`).
pub(crate) fn capitalize_compound_heads(title: &str, small_words: &SmallWords) -> String {
  let text = Text::new(title);
  scan(&text, |index| {
    if !text.is_boundary(index) || text.before(index) == Some('-') {
      return None;
    }

    let end = small_words
      .ends_at(&text, index)
      .find(|&end| text.at(end) == Some('-') && text.is_at(end + 1, is_letter))?;
    Some((capitalize(&text.substring(index, end)), end))
  })
}

/// Capitalize small words that end a hyphenated compound (`Stand-in` => `Stand-In`).
pub(crate) fn capitalize_compound_tails(title: &str, small_words: &SmallWords) -> String {
  let text = Text::new(title);
  scan(&text, |index| {
    if !text.is_boundary(index) || text.before(index) == Some(ELLIPSIS) {
      return None;
    }

    let head_end = text.run_end(index, is_letter);
    if head_end == index || text.at(head_end) != Some('-') {
      return None;
    }

    let end = small_words.ends_at(&text, head_end + 1).find(|&end| text.at(end) != Some('-'))?;
    let tail = first_char_upper(&text.substring(head_end + 1, end));
    Some((format!("{}{}", text.substring(index, head_end + 1), tail), end))
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  fn words() -> SmallWords {
    SmallWords::default()
  }

  #[test]
  fn main_pass() {
    let words = words();
    assert_eq!(capitalize_words("the cat in the hat", &words), "the Cat in the Hat");
    assert_eq!(capitalize_words("keep NASA and iPhone", &words), "Keep NASA and iPhone");
    assert_eq!(capitalize_words("don't stop", &words), "Don't Stop");
    assert_eq!(capitalize_words("step-by-step", &words), "Step-by-Step");
    assert_eq!(capitalize_words("THE END", &words), "the END");
  }

  #[test]
  fn main_pass_keeps_addresses() {
    let words = words();
    assert_eq!(capitalize_words("mail me@example.com now", &words), "Mail me@example.com Now");
    assert_eq!(capitalize_words("see www.example.com/about", &words), "See www.example.com/about");
    assert_eq!(capitalize_words("run /usr/local/bin", &words), "Run /usr/local/bin");
    assert_eq!(capitalize_words("e.g. this", &words), "e.g. This");
  }

  #[test]
  fn main_pass_keeps_underscores() {
    let words = words();
    assert_eq!(capitalize_words("_private method", &words), "_Private Method");
    assert_eq!(capitalize_words("__init__ of", &words), "__Init__ of");
    assert_eq!(capitalize_words("snake_case", &words), "snake_case");
  }

  #[test]
  fn main_pass_small_word_suffixes() {
    let words = words();
    assert_eq!(capitalize_words("In's and Out's", &words), "in's and Out's");
    assert_eq!(capitalize_words("this V. that", &words), "This v. That");
  }

  #[test]
  fn first_words() {
    let words = words();
    assert_eq!(capitalize_first_words("the Cat", &words), "The Cat");
    assert_eq!(capitalize_first_words("\"a Cat\"", &words), "\"A Cat\"");
    assert_eq!(capitalize_first_words("Rings: the Return", &words), "Rings: The Return");
    assert_eq!(capitalize_first_words("Hope (a Story)", &words), "Hope (A Story)");
    assert_eq!(capitalize_first_words("Hope: another", &words), "Hope: another");
  }

  #[test]
  fn last_words() {
    let words = words();
    assert_eq!(capitalize_last_words("What It Is for", &words), "What It Is For");
    assert_eq!(capitalize_last_words("What It Is for?!", &words), "What It Is For?!");
    assert_eq!(capitalize_last_words("(Made of) Wood", &words), "(Made Of) Wood");
    assert_eq!(capitalize_last_words("Fit to Print", &words), "Fit to Print");
  }

  #[test]
  fn compound_heads() {
    let words = words();
    assert_eq!(capitalize_compound_heads("An in-Depth Look", &words), "An In-Depth Look");
    assert_eq!(capitalize_compound_heads("Man-in-the-Middle", &words), "Man-in-the-Middle");
  }

  #[test]
  fn compound_tails() {
    let words = words();
    assert_eq!(capitalize_compound_tails("Stand-in", &words), "Stand-In");
    assert_eq!(capitalize_compound_tails("Step-by-Step", &words), "Step-by-Step");
    assert_eq!(capitalize_compound_tails("Wait stand-in", &words), "Wait stand-In");
    assert_eq!(capitalize_compound_tails("Wait…stand-in", &words), "Wait…stand-in");
  }
}
