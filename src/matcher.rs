//! Wildcard filename matching.
//!
//! Supports two metacharacters:
//! - `*` matches zero or more characters
//! - `?` matches exactly one character
//!
//! Everything else matches literally. There are no character classes and no
//! escapes; the matcher is separator-agnostic and treats its input as an
//! opaque sequence of characters.

/// Match a filename against a wildcard pattern.
///
/// When `case_sensitive` is false, both strings are lowercased (ASCII only,
/// matching the classic `tolower` behavior) before any wildcard logic runs,
/// so `*` and `?` semantics are unaffected by the folding. Non-ASCII letters
/// never fold.
///
/// Runs in O(text · pattern) via greedy star matching with backtracking to
/// the most recent `*`, so adversarial patterns like `*a*a*a...` stay cheap.
///
/// # Examples
/// ```
/// use ffind::matches;
///
/// assert!(matches("notes.txt", "*.txt", true));
/// assert!(matches("test1", "test?", true));
/// assert!(!matches("README.TXT", "*.txt", true));
/// assert!(matches("README.TXT", "*.txt", false));
/// ```
pub fn matches(text: &str, pattern: &str, case_sensitive: bool) -> bool {
    if case_sensitive {
        wildcard_match(text, pattern)
    } else {
        wildcard_match(&text.to_ascii_lowercase(), &pattern.to_ascii_lowercase())
    }
}

fn wildcard_match(text: &str, pattern: &str) -> bool {
    let text: Vec<char> = text.chars().collect();
    let pattern: Vec<char> = pattern.chars().collect();

    let mut ti = 0;
    let mut pi = 0;
    // Position of the last `*` seen and how much text it has swallowed so far.
    let mut star: Option<(usize, usize)> = None;

    while ti < text.len() {
        if pi < pattern.len() && pattern[pi] == '*' {
            star = Some((pi, ti));
            pi += 1;
        } else if pi < pattern.len() && (pattern[pi] == '?' || pattern[pi] == text[ti]) {
            ti += 1;
            pi += 1;
        } else if let Some((star_pi, star_ti)) = star {
            // Mismatch past a star: let the star consume one more character
            // and retry the pattern suffix from there.
            pi = star_pi + 1;
            ti = star_ti + 1;
            star = Some((star_pi, star_ti + 1));
        } else {
            return false;
        }
    }

    // Text exhausted; only trailing stars may remain.
    while pi < pattern.len() && pattern[pi] == '*' {
        pi += 1;
    }
    pi == pattern.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// The textbook recursive definition the greedy matcher must agree with:
    /// empty pattern matches empty text; `*` matches the rest of the pattern
    /// against every suffix of the text (the empty split included); `?`
    /// consumes exactly one character; literals compare exactly.
    fn matches_ref(text: &[char], pattern: &[char]) -> bool {
        match pattern.split_first() {
            None => text.is_empty(),
            Some(('*', rest)) => (0..=text.len()).any(|i| matches_ref(&text[i..], rest)),
            Some(('?', rest)) => !text.is_empty() && matches_ref(&text[1..], rest),
            Some((&c, rest)) => text.first() == Some(&c) && matches_ref(&text[1..], rest),
        }
    }

    fn agree(text: &str, pattern: &str) -> bool {
        let t: Vec<char> = text.chars().collect();
        let p: Vec<char> = pattern.chars().collect();
        wildcard_match(text, pattern) == matches_ref(&t, &p)
    }

    #[test]
    fn literal_matches() {
        assert!(matches("hello", "hello", true));
        assert!(matches("", "", true));
        assert!(!matches("hello", "world", true));
        assert!(!matches("hello", "hell", true));
        assert!(!matches("hello", "helloo", true));
    }

    #[test]
    fn star_wildcard() {
        assert!(matches("", "*", true));
        assert!(matches("anything", "*", true));
        assert!(matches("main.rs", "*.rs", true));
        assert!(matches(".rs", "*.rs", true));
        assert!(matches("test", "test*", true));
        assert!(matches("testing", "test*", true));
        assert!(matches("mytestfile", "*test*", true));
        assert!(matches("abc", "a*b*c", true));
        assert!(matches("aXXXbYYYc", "a*b*c", true));
        assert!(!matches("main.txt", "*.rs", true));
        assert!(!matches("mytest", "test*", true));
    }

    #[test]
    fn question_wildcard() {
        assert!(matches("a", "?", true));
        assert!(matches("abc", "???", true));
        assert!(matches("test1", "test?", true));
        assert!(!matches("", "?", true));
        assert!(!matches("ab", "?", true));
        assert!(!matches("ab", "???", true));
    }

    #[test]
    fn consecutive_stars() {
        assert!(matches("anything", "**", true));
        assert!(matches("", "**", true));
        assert!(matches("a", "a**", true));
        assert!(matches("ab", "a**b", true));
        assert!(matches("aXXXb", "a**b", true));
    }

    #[test]
    fn no_wildcards_is_equality() {
        for (text, pattern) in [
            ("same", "same"),
            ("same", "other"),
            ("", ""),
            ("x", ""),
            ("", "x"),
        ] {
            assert_eq!(matches(text, pattern, true), text == pattern);
        }
    }

    #[test]
    fn case_folding_is_ascii_only() {
        assert!(matches("README.TXT", "*.txt", false));
        assert!(matches("MiXeD", "mixed", false));
        assert!(!matches("MiXeD", "mixed", true));
        // Non-ASCII letters do not fold.
        assert!(!matches("É", "é", false));
        assert!(matches("É", "?", false));
    }

    #[test]
    fn folding_happens_before_wildcards() {
        assert!(matches("PHOTO_001.JPG", "photo_*.jpg", false));
        assert!(matches("Test9", "TEST?", false));
    }

    #[test]
    fn wildcards_are_never_literal_in_pattern() {
        // A `*` in the text is just a character; in the pattern it is always
        // a wildcard.
        assert!(matches("*", "*", true));
        assert!(matches("*", "?", true));
        assert!(matches("a*b", "a*b", true));
        assert!(!matches("axb", "a?c", true));
    }

    #[test]
    fn separator_agnostic() {
        assert!(matches("sub/c.txt", "*.txt", true));
        assert!(matches("a/b", "a?b", true));
    }

    #[test]
    fn backtracking_stress() {
        assert!(matches("aaaaaaaaaaaaaaaa", "a*a*a*a*a*a*a*a", true));
        assert!(!matches("aaaaaaaaaaaaaaaa", "a*a*a*a*a*a*a*ab", true));
        assert!(matches("XXXaYYYbZZZc", "*a*b*c", true));
        assert!(!matches("XXXaYYYcZZZb", "*a*b*c", true));
        // Large adversarial input completes quickly under the greedy matcher.
        let pattern = format!("{}b", "*a".repeat(50));
        let input = "a".repeat(2000);
        assert!(!matches(&input, &pattern, true));
    }

    #[test]
    fn exhaustive_equivalence_small_alphabet() {
        // Every text over {a, b} up to length 4 against every pattern over
        // {a, b, *, ?} up to length 3.
        fn all_strings(alphabet: &[char], max_len: usize) -> Vec<String> {
            let mut out = vec![String::new()];
            let mut layer = vec![String::new()];
            for _ in 0..max_len {
                layer = layer
                    .iter()
                    .flat_map(|s| alphabet.iter().map(move |c| format!("{s}{c}")))
                    .collect();
                out.extend(layer.iter().cloned());
            }
            out
        }

        let texts = all_strings(&['a', 'b'], 4);
        let patterns = all_strings(&['a', 'b', '*', '?'], 3);

        for text in &texts {
            for pattern in &patterns {
                assert!(
                    agree(text, pattern),
                    "disagreement on text={text:?} pattern={pattern:?}"
                );
            }
        }
    }

    proptest! {
        #[test]
        fn star_matches_everything(text in ".*") {
            prop_assert!(matches(&text, "*", true));
            prop_assert!(matches(&text, "*", false));
        }

        #[test]
        fn self_match(text in "[a-zA-Z0-9._-]{0,20}") {
            prop_assert!(matches(&text, &text, true));
            prop_assert!(matches(&text, &text.to_ascii_uppercase(), false));
        }

        #[test]
        fn greedy_agrees_with_recursive_definition(
            text in "[ab]{0,8}",
            pattern in r"[ab*?]{0,6}",
        ) {
            prop_assert!(agree(&text, &pattern));
        }
    }
}
