#![warn(clippy::all)]
#![warn(missing_docs)]

//! changecase converts text between camelCase, snake_case, Title Case and friends.
//! It splits text into lowercase words, recomposes them in the requested case, and title-cases
//! English headlines.

pub mod case;
pub mod error;
pub mod options;
pub mod segment;
mod title;
pub mod unicode;

pub use case::Case;
pub use error::{Error, Res};
pub use options::{BoundaryRule, Options, StripRule};
pub use segment::{segment, segment_bytes, segment_with};
pub use title::{TitleCaser, title_case};
pub use unicode::{first_char_lower, first_char_upper, slice, split_on_uppercase};
