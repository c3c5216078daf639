#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use quotespan::{find_unquoted, find_unquoted_from, replace_between, split_before_unquoted};

#[derive(Debug, Arbitrary)]
struct Exercise {
    haystack: String,
    target: char,
    quote: char,
    from: usize,
    start_token: String,
    end_token: String,
    replacement: String,
}

fn exercise(ex: Exercise) {
    let Exercise {
        haystack,
        target,
        quote,
        from,
        start_token,
        end_token,
        replacement,
    } = ex;

    if let Some(idx) = find_unquoted(&haystack, target, quote) {
        assert!(haystack[idx..].starts_with(target));
    }

    let from = from % (haystack.len() + 1);
    if let Some(idx) = find_unquoted_from(&haystack, from, target, quote) {
        assert!(idx >= from);
        assert!(haystack[idx..].starts_with(target));
    }
    // Out-of-range offsets must stay a clean miss, never a panic.
    assert!(find_unquoted_from(&haystack, haystack.len() + 1, target, quote).is_none());

    match split_before_unquoted(&haystack, target, quote) {
        Ok(prefix) => assert_eq!(find_unquoted(&haystack, target, quote), Some(prefix.len())),
        Err(_) => assert!(find_unquoted(&haystack, target, quote).is_none()),
    }

    let patched = replace_between(&start_token, &end_token, &haystack, &replacement);
    if patched.as_ref() != haystack.as_str() {
        assert!(patched.contains(replacement.as_str()));
    }
}

fuzz_target!(|ex: Exercise| exercise(ex));
