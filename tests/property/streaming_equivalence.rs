//! The streaming scanner must agree with a materialized reference scan for
//! every pattern, text, and capacity at least as large as the pattern —
//! including when the text arrives byte-by-byte through `Utf8Source`.

use proptest::prelude::*;

use streamscan::{StreamScanner, Utf8Source};

/// Naive O(n*m) reference over the fully materialized text.
fn brute_force(text: &str, pattern: &str) -> Vec<u64> {
    let text: Vec<char> = text.chars().collect();
    let pattern: Vec<char> = pattern.chars().collect();
    let mut out = Vec::new();
    if text.len() < pattern.len() {
        return out;
    }
    for start in 0..=(text.len() - pattern.len()) {
        if text[start..start + pattern.len()] == pattern[..] {
            out.push(start as u64);
        }
    }
    out
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(192))]

    /// Char-iterator sources: equivalence over a deliberately small
    /// alphabet so matches and near-misses are dense.
    #[test]
    fn iterator_source_matches_reference(
        text in "[ab]{0,80}",
        pattern in "[ab]{1,5}",
        slack in 0usize..10,
    ) {
        let capacity = pattern.chars().count() + slack;
        let scanner = StreamScanner::new(pattern.chars(), capacity).unwrap();
        let offsets = scanner.scan(text.chars()).unwrap();
        prop_assert_eq!(offsets, brute_force(&text, &pattern));
    }

    /// UTF-8 byte sources: offsets still count logical characters even
    /// though the underlying reader yields multi-byte sequences.
    #[test]
    fn utf8_source_matches_reference(
        text in "[aб⅚🦀]{0,48}",
        pattern in "[aб⅚🦀]{1,3}",
        slack in 0usize..6,
    ) {
        let capacity = pattern.chars().count() + slack;
        let scanner = StreamScanner::new(pattern.chars(), capacity).unwrap();
        let offsets = scanner.scan(Utf8Source::new(text.as_bytes())).unwrap();
        prop_assert_eq!(offsets, brute_force(&text, &pattern));
    }

    /// Capacity must not influence the result, only the memory bound.
    #[test]
    fn capacity_is_semantically_invisible(
        text in "[abc]{0,64}",
        pattern in "[abc]{1,4}",
    ) {
        let pattern_len = pattern.chars().count();
        let baseline = StreamScanner::new(pattern.chars(), pattern_len)
            .unwrap()
            .scan(text.chars())
            .unwrap();
        for capacity in [pattern_len + 1, pattern_len * 2, 64] {
            let offsets = StreamScanner::new(pattern.chars(), capacity)
                .unwrap()
                .scan(text.chars())
                .unwrap();
            prop_assert_eq!(&offsets, &baseline, "capacity {} diverged", capacity);
        }
    }
}
