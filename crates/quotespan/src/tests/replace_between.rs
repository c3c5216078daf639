use alloc::borrow::Cow;

use rstest::rstest;

use crate::replace_between;

#[test]
fn replaces_the_first_bounded_span() {
    let out = replace_between("ipsum", "sit", "Lorem ipsum dolor sit amet", " foo ");
    assert_eq!(out, "Lorem ipsum foo sit amet");
    assert!(matches!(out, Cow::Owned(_)));
}

#[rstest]
#[case::start_token_absent("Lorem dolor sit amet")]
#[case::no_space_after_start("Lorem ipsumdolor sit amet")]
#[case::tab_after_start("Lorem ipsum\tdolor sit amet")]
#[case::newline_after_start("Lorem ipsum\ndolor sit amet")]
#[case::start_token_at_the_very_end("Lorem dolor sit amet ipsum")]
#[case::end_token_missing("Lorem ipsum dolor amet")]
#[case::end_token_only_before_start("sit Lorem ipsum dolor amet")]
fn unmatched_inputs_come_back_unchanged(#[case] original: &str) {
    let out = replace_between("ipsum", "sit", original, " foo ");
    assert!(matches!(out, Cow::Borrowed(s) if s == original));
}

/// The mandatory space after the start token belongs to the replaced region,
/// so an empty window still swallows it.
#[test]
fn end_token_immediately_after_the_space() {
    assert_eq!(replace_between("ipsum", "sit", "ipsum sit", "X"), "ipsumXsit");
}

#[test]
fn window_spans_newlines() {
    let original = "CREATE VIEW v AS SELECT 1,\n       2\nFROM t;\nCOMMIT;";
    let out = replace_between("AS", "FROM", original, " SELECT 99\n");
    assert_eq!(out, "CREATE VIEW v AS SELECT 99\nFROM t;\nCOMMIT;");
}

#[test]
fn only_the_first_window_is_rewritten() {
    let original = "on ipsum a sit off ipsum b sit end";
    let out = replace_between("ipsum", "sit", original, " X ");
    assert_eq!(out, "on ipsum X sit off ipsum b sit end");
}

#[test]
fn tokens_are_matched_literally_not_as_patterns() {
    let original = "q (a.*) keep [z]+ q";
    let out = replace_between("(a.*)", "[z]+", original, " R ");
    assert_eq!(out, "q (a.*) R [z]+ q");
}

/// Reapplying the call re-anchors at the same first window and rewrites it to
/// the same text, even when the replacement reintroduces the start token.
#[test]
fn reapplying_with_start_token_in_replacement_is_stable() {
    let once = replace_between("ipsum", "sit", "Lorem ipsum dolor sit amet", " x ipsum y ");
    assert_eq!(once, "Lorem ipsum x ipsum y sit amet");
    let twice = replace_between("ipsum", "sit", &once, " x ipsum y ");
    assert_eq!(twice, once);
}

/// A replacement containing the end token is the non-idempotent boundary: the
/// next call's window closes inside the previous replacement, so repeated
/// application keeps growing the text.
#[test]
fn reapplying_with_end_token_in_replacement_drifts() {
    let once = replace_between("ipsum", "sit", "Lorem ipsum dolor sit amet", " sit q ");
    assert_eq!(once, "Lorem ipsum sit q sit amet");
    let twice = replace_between("ipsum", "sit", &once, " sit q ");
    assert_eq!(twice, "Lorem ipsum sit q sit q sit amet");
    assert_ne!(twice, once);
}
