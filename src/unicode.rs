#![warn(clippy::all)]

//! Unicode-aware character classes and small string helpers.
//!
//! Character classes follow Unicode general categories rather than the derived properties
//! behind [`char::is_lowercase`] and friends, so that e.g. `ª` (a `Lo` letter with the
//! `Lowercase` property) is not treated as a lowercase letter.

use std::sync::LazyLock;

use regex::Regex;

macro_rules! category {
  ($name:ident, $pattern:literal) => {
    static $name: LazyLock<Regex> =
      LazyLock::new(|| Regex::new(concat!(r"\A(?:", $pattern, r")\z")).expect("valid category pattern"));
  };
}

category!(LETTER, r"\p{L}");
category!(MARK, r"\p{M}");
category!(NUMBER, r"\p{N}");
category!(LOWER, r"\p{Ll}");
category!(UPPER, r"\p{Lu}");
category!(PUNCT, r"\p{P}");

fn in_class(class: &Regex, c: char) -> bool {
  let mut buf = [0; 4];
  class.is_match(c.encode_utf8(&mut buf))
}

/// Returns true if `c` is a letter (`\p{L}`).
pub fn is_letter(c: char) -> bool {
  c.is_ascii_alphabetic() || (!c.is_ascii() && in_class(&LETTER, c))
}

/// Returns true if `c` is a combining mark (`\p{M}`).
pub fn is_mark(c: char) -> bool {
  !c.is_ascii() && in_class(&MARK, c)
}

/// Returns true if `c` is a number (`\p{N}`).
pub fn is_number(c: char) -> bool {
  c.is_ascii_digit() || (!c.is_ascii() && in_class(&NUMBER, c))
}

/// Returns true if `c` is a lowercase letter (`\p{Ll}`).
pub fn is_lower(c: char) -> bool {
  c.is_ascii_lowercase() || (!c.is_ascii() && in_class(&LOWER, c))
}

/// Returns true if `c` is an uppercase letter (`\p{Lu}`).
pub fn is_upper(c: char) -> bool {
  c.is_ascii_uppercase() || (!c.is_ascii() && in_class(&UPPER, c))
}

/// Returns true if `c` is punctuation (`\p{P}`) or an ASCII symbol such as `$` or `|`.
pub fn is_punctuation(c: char) -> bool {
  c.is_ascii_punctuation() || (!c.is_ascii() && in_class(&PUNCT, c))
}

/// Returns true if `c` can be part of a word: a letter, mark, number or underscore.
pub fn is_word_char(c: char) -> bool {
  c == '_' || c.is_alphanumeric() || is_mark(c)
}

/// Make a string's first character uppercase.
///
/// The full uppercase mapping is used, so a leading `ß` becomes `SS`.
pub fn first_char_upper(s: &str) -> String {
  let mut chars = s.chars();
  match chars.next() {
    Some(first) => first.to_uppercase().chain(chars).collect(),
    None => String::new(),
  }
}

/// Make a string's first character lowercase.
pub fn first_char_lower(s: &str) -> String {
  let mut chars = s.chars();
  match chars.next() {
    Some(first) => first.to_lowercase().chain(chars).collect(),
    None => String::new(),
  }
}

/// Split a string into pieces before every uppercase character.
///
/// Empty pieces are dropped, so a leading uppercase character does not produce an empty
/// first piece.
///
/// * `"FooBar"` => `["Foo", "Bar"]`
/// * `"Foo_B_a_r_baz"` => `["Foo_", "B_a_r_baz"]`
/// * `"fooBARBaz"` => `["foo", "B", "A", "R", "Baz"]`
pub fn split_on_uppercase(s: &str) -> Vec<&str> {
  let mut pieces = Vec::new();
  let mut start = 0;

  for (index, c) in s.char_indices() {
    if is_upper(c) && index > start {
      pieces.push(&s[start..index]);
      start = index;
    }
  }

  if start < s.len() {
    pieces.push(&s[start..]);
  }

  pieces
}

/// Slice a string by character positions.
///
/// `end` is exclusive. Negative positions count backwards from the end of the string, and
/// out-of-range positions are clamped, so the result is always a valid (possibly empty)
/// substring.
///
/// # Arguments
///
/// * `s` - String to slice.
/// * `start` - Position of the first character to keep.
/// * `end` - Position one past the last character to keep, or `None` for the end of `s`.
pub fn slice(s: &str, start: isize, end: Option<isize>) -> &str {
  let len = s.chars().count() as isize;
  let resolve = |pos: isize| if pos < 0 { (len + pos).max(0) } else { pos.min(len) };

  let start = resolve(start) as usize;
  let end = end.map_or(len, resolve) as usize;
  if start >= end {
    return "";
  }

  let byte_pos = |pos: usize| s.char_indices().nth(pos).map_or(s.len(), |(index, _)| index);
  &s[byte_pos(start)..byte_pos(end)]
}

/// Characters that neither start nor end a word when title-casing: marks and the apostrophes
/// and dots that may sit inside a word.
fn is_case_ignorable(c: char) -> bool {
  is_mark(c) || matches!(c, '\'' | '’' | '‘' | '.' | ':' | '·' | '\u{AD}')
}

/// Capitalize the first letter of every word and lowercase everything else.
///
/// A word starts at the first cased letter after any character that is neither cased nor
/// case-ignorable, so digits and underscores start a new word while apostrophes do not:
/// `"jefferson_costella"` becomes `"Jefferson_Costella"`, `"1a"` becomes `"1A"` and
/// `"assistant's"` becomes `"Assistant's"`.
pub fn title_words(s: &str) -> String {
  let mut result = String::with_capacity(s.len());
  let mut word_start = true;

  for c in s.chars() {
    let cased = c.is_lowercase() || c.is_uppercase();
    if cased && word_start {
      result.extend(c.to_uppercase());
    } else {
      result.extend(c.to_lowercase());
    }

    if cased {
      word_start = false;
    } else if !is_case_ignorable(c) {
      word_start = true;
    }
  }

  result
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn categories() {
    assert!(is_letter('a'));
    assert!(is_letter('ñ'));
    assert!(!is_letter('1'));
    assert!(is_mark('\u{0301}'));
    assert!(!is_mark('a'));
    assert!(is_number('Ⅰ'));
    assert!(is_number('٣'));
    assert!(is_lower('â'));
    assert!(!is_lower('ª'));
    assert!(is_upper('Ê'));
    assert!(is_punctuation('“'));
    assert!(is_punctuation('|'));
    assert!(!is_punctuation(' '));
  }

  #[test]
  fn first_char() {
    assert_eq!(first_char_upper("ââ êê"), "Ââ êê");
    assert_eq!(first_char_lower("PascalCase"), "pascalCase");
    assert_eq!(first_char_upper("ßa"), "SSa");
    assert_eq!(first_char_upper(""), "");
    assert_eq!(first_char_lower(""), "");
  }

  #[test]
  fn uppercase_split() {
    assert_eq!(split_on_uppercase("FooBar"), ["Foo", "Bar"]);
    assert_eq!(split_on_uppercase("Foo_Bar"), ["Foo_", "Bar"]);
    assert_eq!(split_on_uppercase("Foo_B_a_r_baz"), ["Foo_", "B_a_r_baz"]);
    assert_eq!(split_on_uppercase("fooBARBaz"), ["foo", "B", "A", "R", "Baz"]);
    assert_eq!(split_on_uppercase("Foo-baR-baz"), ["Foo-ba", "R-baz"]);
    assert_eq!(split_on_uppercase("sindÖdeUndSo"), ["sind", "Öde", "Und", "So"]);
    assert!(split_on_uppercase("").is_empty());
  }

  #[test]
  fn slicing() {
    let s = "The quick brown fox jumps over the lazy dog.";
    assert_eq!(slice(s, 31, None), "the lazy dog.");
    assert_eq!(slice(s, 4, Some(19)), "quick brown fox");
    assert_eq!(slice(s, -4, None), "dog.");
    assert_eq!(slice(s, -9, Some(-5)), "lazy");
    assert_eq!(slice(s, 10, Some(5)), "");
    assert_eq!(slice("ââ êê", 1, Some(4)), "â ê");
  }

  #[test]
  fn word_titles() {
    assert_eq!(title_words("jefFErson coSTella"), "Jefferson Costella");
    assert_eq!(title_words("jefferson_costella uses-_Laravel"), "Jefferson_Costella Uses-_Laravel");
    assert_eq!(title_words("assistant's"), "Assistant's");
    assert_eq!(title_words("TestV2"), "Testv2");
    assert_eq!(title_words("1a 2nd"), "1A 2Nd");
    assert_eq!(title_words("o’neil.txt"), "O’neil.txt");
    assert_eq!(title_words("iñt ërn âTi"), "Iñt Ërn Âti");
  }
}
