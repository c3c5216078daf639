//! Quote-aware delimiter scanning and token-bounded replacement.
//!
//! Two independent, stateless components for splitting or patching
//! structured text (SQL-like statement fragments) without a full parser:
//!
//! - [`find_unquoted`] / [`find_unquoted_from`] locate the first occurrence
//!   of a delimiter character that sits outside spans delimited by a quote
//!   character; [`split_before_unquoted`] returns the prefix before it.
//! - [`replace_between`] rewrites the text between the first occurrence of a
//!   start token and the first end token after it, keeping both tokens.
//!
//! Delimiters inside quoted literals are never treated as structural:
//!
//! ```rust
//! use quotespan::find_unquoted;
//!
//! // The comma inside 'c,d' is opaque; the one after `a` is reported.
//! assert_eq!(find_unquoted("(a,b'c,d'e,f)", ',', '\''), Some(2));
//! ```
//!
//! Quoting is a single toggling character with no escape handling and no
//! distinction between quote kinds; inputs that need a language's real
//! quoting rules belong in a parser for that language.

#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod error;
mod replace;
mod scan;

#[cfg(test)]
mod tests;

pub use error::DelimiterNotFound;
pub use replace::replace_between;
pub use scan::{find_unquoted, find_unquoted_from, split_before_unquoted};
