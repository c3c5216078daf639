//! Token-bounded replacement via explicit substring search.

use alloc::{borrow::Cow, string::String};

/// Replaces the text between the first `start_token` and the first
/// `end_token` after it, keeping both tokens.
///
/// The match anchors at the first occurrence of `start_token` followed by
/// exactly one literal space; the replaced region runs from that space up to
/// (but not including) the first occurrence of `end_token` at or after the
/// character following the space. The output keeps everything up to and
/// including `start_token`, then `replacement` verbatim, then `end_token`
/// and the unchanged remainder. Tokens are matched verbatim (pattern
/// metacharacters have no meaning) and the replaced region may span
/// newlines.
///
/// When the start token never occurs with a trailing space, or when no end
/// token follows it, the input comes back unchanged (borrowed): a silent
/// no-op, not an error. A tab or newline after `start_token` does not engage
/// the match; only a single space does. Later windows between the same
/// tokens are left untouched.
///
/// ```rust
/// use quotespan::replace_between;
///
/// let patched = replace_between("ipsum", "sit", "Lorem ipsum dolor sit amet", " foo ");
/// assert_eq!(patched, "Lorem ipsum foo sit amet");
/// ```
#[must_use]
pub fn replace_between<'orig>(
    start_token: &str,
    end_token: &str,
    original: &'orig str,
    replacement: &str,
) -> Cow<'orig, str> {
    let mut needle = String::with_capacity(start_token.len() + 1);
    needle.push_str(start_token);
    needle.push(' ');

    let Some(open) = original.find(needle.as_str()) else {
        return Cow::Borrowed(original);
    };
    let window = open + needle.len();
    let Some(close) = original[window..].find(end_token) else {
        return Cow::Borrowed(original);
    };

    let head = &original[..open + start_token.len()];
    let tail = &original[window + close..];
    let mut out = String::with_capacity(head.len() + replacement.len() + tail.len());
    out.push_str(head);
    out.push_str(replacement);
    out.push_str(tail);
    Cow::Owned(out)
}
