use super::KmpMatcher;
use crate::data::windows::{Window, truncated_windows};

/// Counts how often the windows of `patterns` occur within `text`.
///
/// Every window drawn from `patterns` by
/// [`truncated_windows`](crate::data::windows::truncated_windows) is searched
/// for independently with [`KmpMatcher`], and every occurrence in `text`,
/// including overlapping ones, adds 1 to the score. Repeated windows in
/// `patterns` are searched once per repetition.
///
/// The score is 0 if either sequence is empty or if `patterns` is shorter than
/// the window.
///
/// <div class="warning">
///
/// The arguments play different roles: `patterns` supplies the windows and
/// `text` is searched. Swapping them is not equivalent in general, such as for
/// single-element windows, where the last element of `patterns` never forms a
/// window but every element of `text` is searched.
///
/// </div>
///
/// ## Complexity
///
/// $O(w)$ preprocessing and an $O(n)$ scan per window, so $O(mn)$ overall for
/// lengths $m$ and $n$. Each window is matched independently rather than with
/// a multi-pattern automaton.
///
/// ## Example
///
/// ```
/// # use likeness::{data::windows::Window, search::window_occurrence_score};
/// let two = Window::new(2).unwrap();
/// assert_eq!(window_occurrence_score(b"aa", b"aaaa", two), 3);
///
/// let one = Window::new(1).unwrap();
/// assert_eq!(window_occurrence_score(b"abb", b"ab", one), 2);
/// assert_eq!(window_occurrence_score(b"ab", b"abb", one), 1);
/// ```
#[must_use]
pub fn window_occurrence_score<T: PartialEq>(patterns: &[T], text: &[T], window: Window) -> usize {
    if patterns.is_empty() || text.is_empty() || patterns.len() < window.get() {
        return 0;
    }

    truncated_windows(patterns, window)
        .map(|pattern| KmpMatcher::new(pattern).count_in(text))
        .sum()
}
