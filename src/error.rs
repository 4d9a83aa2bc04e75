#![warn(clippy::all)]

//! Common types for error-handling.

/// A shorthand type for library functions that may return errors.
pub type Res<T> = Result<T, Error>;

/// Errors returned by the case conversion functions.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Case conversion error")]
pub enum Error {
  /// An option key is unknown, its value has the wrong type, or a pattern does not compile.
  #[error("Invalid option: {0}")]
  InvalidOption(String),
  /// The input could not be processed (e.g. it is not valid UTF-8).
  #[error("Malformed input: {0}")]
  MalformedInput(String),
}

impl Error {
  /// Returns a Result containing an InvalidOption error
  pub(crate) fn invalid_option<T>(reason: impl ToString) -> Res<T> {
    Err(Error::InvalidOption(reason.to_string()))
  }
}

impl From<serde_json::Error> for Error {
  fn from(err: serde_json::Error) -> Self {
    Error::InvalidOption(err.to_string())
  }
}

impl From<std::str::Utf8Error> for Error {
  fn from(err: std::str::Utf8Error) -> Self {
    Error::MalformedInput(err.to_string())
  }
}
