//! Quote-aware scanning over `&str`.
//!
//! The scan walks the input left to right and keeps a two-state quoting
//! automaton: every sighting of the quote character flips the state, and a
//! target character only counts while the state is `Outside` *after* that
//! flip. The toggle-before-check ordering is load-bearing when the quote
//! character doubles as the target: a closing quote is reported (the flip
//! lands back on `Outside` at that position) while an opening quote is not.

use crate::error::DelimiterNotFound;

/// Whether the scan position currently sits inside a quoted span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuoteState {
    Outside,
    Inside,
}

impl QuoteState {
    #[inline]
    fn toggle(&mut self) {
        *self = match self {
            Self::Outside => Self::Inside,
            Self::Inside => Self::Outside,
        };
    }
}

/// Returns the byte index of the first occurrence of `target` in `haystack`
/// that does not sit inside a span delimited by `quote`, or `None` if every
/// occurrence is quoted or the target is absent.
///
/// Quoting is a bare toggle: there is no escape handling and no distinction
/// between opening and closing characters. An odd number of quote characters
/// leaves the rest of the string quoted, which suppresses any later matches
/// rather than erroring.
///
/// ```rust
/// use quotespan::find_unquoted;
///
/// assert_eq!(find_unquoted("(a,b'c,d'e,f)", ',', '\''), Some(2));
/// assert_eq!(find_unquoted("'a,b'", ',', '\''), None);
/// ```
#[must_use]
pub fn find_unquoted(haystack: &str, target: char, quote: char) -> Option<usize> {
    find_unquoted_from(haystack, 0, target, quote)
}

/// Like [`find_unquoted`], starting the search at byte offset `from`.
///
/// The quoting state always begins `Outside` at the starting offset: a scan
/// re-entering mid-string does not inherit quote context from characters
/// before `from`. Callers resuming a scan inside a quoted span must account
/// for that boundary themselves.
///
/// A `from` at or past the end of `haystack` yields `None`. A `from` that is
/// not a char boundary starts the scan at the next boundary after it.
///
/// ```rust
/// use quotespan::find_unquoted_from;
///
/// let s = "'a,b',c";
/// assert_eq!(find_unquoted_from(s, 0, ',', '\''), Some(5));
/// // Re-entry after the opening quote does not inherit the quote context.
/// assert_eq!(find_unquoted_from(s, 1, ',', '\''), Some(2));
/// ```
#[must_use]
pub fn find_unquoted_from(
    haystack: &str,
    from: usize,
    target: char,
    quote: char,
) -> Option<usize> {
    let mut start = from;
    while start < haystack.len() && !haystack.is_char_boundary(start) {
        start += 1;
    }
    if start >= haystack.len() {
        return None;
    }

    let mut state = QuoteState::Outside;
    for (offset, ch) in haystack[start..].char_indices() {
        if ch == quote {
            state.toggle();
        }
        if state == QuoteState::Outside && ch == target {
            return Some(start + offset);
        }
    }
    None
}

/// Splits off the prefix of `haystack` strictly before the first unquoted
/// occurrence of `target`.
///
/// ```rust
/// use quotespan::split_before_unquoted;
///
/// assert_eq!(split_before_unquoted("a;'b;c';d", ';', '\''), Ok("a"));
/// ```
///
/// # Errors
///
/// Returns [`DelimiterNotFound`] when `target` has no unquoted occurrence.
/// Absence of the delimiter is never conflated with an empty prefix; callers
/// either guarantee the delimiter exists or handle the miss explicitly.
pub fn split_before_unquoted(
    haystack: &str,
    target: char,
    quote: char,
) -> Result<&str, DelimiterNotFound> {
    match find_unquoted(haystack, target, quote) {
        Some(at) => Ok(&haystack[..at]),
        None => Err(DelimiterNotFound {
            delimiter: target,
            quote,
        }),
    }
}
