use super::*;
use crate::data::windows::Window;

fn window(length: usize) -> Window {
    Window::new(length).unwrap()
}

#[test]
fn failure_function() {
    assert_eq!(FailureFunction::new(b"AAAA").as_slice(), &[0, 1, 2, 3]);
    assert_eq!(FailureFunction::new(b"ABCDABD").as_slice(), &[0, 0, 0, 0, 1, 2, 0]);
    assert_eq!(FailureFunction::new(b"AABAAA").as_slice(), &[0, 1, 0, 1, 2, 2]);
    assert_eq!(FailureFunction::new(b"x").as_slice(), &[0]);

    let empty = FailureFunction::new::<u8>(b"");
    assert!(empty.is_empty());
    assert_eq!(empty.len(), 0);
}

#[test]
fn failure_function_starts_at_zero() {
    let patterns: [&[u8]; 4] = [b"aaaaa", b"abcab", b"GATTACA", b"zz"];
    for pattern in patterns {
        let failure = FailureFunction::new(pattern);
        assert_eq!(failure.len(), pattern.len());
        assert_eq!(failure.as_slice()[0], 0);
        assert!(failure.as_slice().iter().enumerate().all(|(i, &k)| k <= i));
    }
}

#[test]
fn overlapping_matches() {
    let matcher = KmpMatcher::new(b"aa");
    let found: Vec<_> = matcher.find_iter(b"aaaa").collect();
    assert_eq!(found, [0..2, 1..3, 2..4]);

    let matcher = KmpMatcher::new(b"ABAB");
    assert_eq!(matcher.count_in(b"ABABABAB"), 3);
    assert_eq!(matcher.pattern(), b"ABAB");
    assert_eq!(matcher.failure().as_slice(), &[0, 0, 1, 2]);
}

#[test]
fn matches_agree_with_naive_search() {
    let text = b"GGCCACAGGATTGAGGCCACAGGATCCACAG";
    let patterns: [&[u8]; 5] = [b"CCACAG", b"G", b"GG", b"GATT", b"TTTT"];

    for pattern in patterns {
        let expected: Vec<_> = text
            .windows(pattern.len())
            .enumerate()
            .filter(|(_, w)| w == &pattern)
            .map(|(i, _)| i..i + pattern.len())
            .collect();
        let found: Vec<_> = KmpMatcher::new(pattern).find_iter(text).collect();
        assert_eq!(expected, found);
    }
}

#[test]
fn empty_pattern_or_text() {
    let matcher = KmpMatcher::<u8>::new(b"");
    assert_eq!(matcher.count_in(b"abc"), 0);

    let matcher = KmpMatcher::new(b"abc");
    assert_eq!(matcher.count_in(b""), 0);
    assert_eq!(matcher.count_in(b"ab"), 0);
}

#[test]
fn score_edge_cases() {
    assert_eq!(window_occurrence_score(b"", b"anything", Window::default()), 0);
    assert_eq!(window_occurrence_score(b"abcdefg", b"", Window::default()), 0);
    assert_eq!(window_occurrence_score(b"abc", b"abcabc", Window::default()), 0);
    assert_eq!(window_occurrence_score(b"abc", b"ab", window(3)), 0);
}

#[test]
fn score_counts_overlaps() {
    assert_eq!(window_occurrence_score(b"aa", b"aaaa", window(2)), 3);
    assert_eq!(window_occurrence_score(b"abcde", b"xxabcdexxabcde", Window::default()), 2);
}

#[test]
fn repeated_windows_are_counted_each_time() {
    // "aaa" yields the window "aa" twice, and each is found 3 times
    assert_eq!(window_occurrence_score(b"aaa", b"aaaa", window(2)), 6);
}

#[test]
fn score_is_role_asymmetric() {
    let one = window(1);
    assert_eq!(window_occurrence_score(b"abb", b"ab", one), 2);
    assert_eq!(window_occurrence_score(b"ab", b"abb", one), 1);

    // Only the pattern source has to be long enough for a window
    assert_eq!(window_occurrence_score(b"abcd", b"abc", window(4)), 0);
    assert_eq!(window_occurrence_score(b"abc", b"abcd", window(4)), 0);
}

#[test]
fn works_over_chars() {
    let patterns: Vec<char> = "añoñ".chars().collect();
    let text: Vec<char> = "ñoñoño".chars().collect();
    // "ño" occurs 3 times and "oñ" twice, "añ" never does
    assert_eq!(window_occurrence_score(&patterns, &text, window(2)), 5);
}

#[test]
fn mutated_reads_share_windows() {
    use crate::{similarity::window_similarity, test_data::{READ_1, READ_2}};

    let score = window_occurrence_score(READ_1, READ_2, Window::default());
    assert!(score > 0);
    assert!(score <= READ_1.len() * READ_2.len());

    let similarity = window_similarity(READ_1, READ_2, Window::default());
    assert!(similarity > 0.0 && similarity < 100.0);
}
