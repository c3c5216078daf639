use thiserror::Error;

/// Returned by [`split_before_unquoted`](crate::split_before_unquoted) when
/// the delimiter has no unquoted occurrence in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no unquoted occurrence of {delimiter:?} outside {quote:?} quotes")]
pub struct DelimiterNotFound {
    /// The delimiter that was searched for.
    pub delimiter: char,
    /// The character that delimited opaque quoted spans.
    pub quote: char,
}
