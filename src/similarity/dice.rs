use crate::data::windows::{Window, WindowSet};
use std::hash::Hash;

/// Calculates a Dice coefficient over the distinct windows of two sequences,
/// as a percentage in `[0, 100]`.
///
/// The score is $200 \cdot |A \cap B| / (|A| + |B|)$ where $A$ and $B$ are the
/// [`WindowSet`]s of `s1` and `s2`. The checks are applied in order:
///
/// 1. If either sequence is empty, the score is 0.
/// 2. If the sequences are equal, the score is 100, even when they are
///    shorter than the window.
/// 3. If neither sequence has a full window, the score is 0.
///
/// This is also known as the "strike a match" or White similarity when
/// `window` is 2.
///
/// ## Complexity
///
/// $O((m + n) \cdot w)$ for window length $w$, from hashing each window.
///
/// ## Example
///
/// ```
/// # use likeness::{data::windows::Window, similarity::window_similarity};
/// let bigram = Window::new(2).unwrap();
/// assert_eq!(window_similarity(b"night", b"nacht", bigram), 25.0);
///
/// assert_eq!(window_similarity(b"abcdef", b"abcdef", Window::default()), 100.0);
/// assert_eq!(window_similarity(b"", b"x", Window::default()), 0.0);
/// assert_eq!(window_similarity(b"abc", b"abd", Window::default()), 0.0);
/// ```
#[must_use]
pub fn window_similarity<T: Eq + Hash>(s1: &[T], s2: &[T], window: Window) -> f64 {
    if s1.is_empty() || s2.is_empty() {
        return 0.0;
    } else if s1 == s2 {
        return 100.0;
    }

    WindowOverlap::new(s1, s2, window).dice_percent()
}

/// The window counts behind [`window_similarity`].
///
/// ```
/// # use likeness::{data::windows::Window, similarity::WindowOverlap};
/// let overlap = WindowOverlap::new(b"abcdef", b"abcdeg", Window::default());
/// assert_eq!(overlap, WindowOverlap { shared: 1, first: 2, second: 2 });
/// assert_eq!(overlap.dice_percent(), 50.0);
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct WindowOverlap {
    /// Distinct windows present in both sequences
    pub shared: usize,
    /// Distinct windows of the first sequence
    pub first:  usize,
    /// Distinct windows of the second sequence
    pub second: usize,
}

impl WindowOverlap {
    /// Counts the distinct and shared windows of `s1` and `s2`. Unlike
    /// [`window_similarity`], no special cases are applied.
    #[must_use]
    pub fn new<T: Eq + Hash>(s1: &[T], s2: &[T], window: Window) -> Self {
        let first = WindowSet::from_sequence(s1, window);
        let second = WindowSet::from_sequence(s2, window);

        WindowOverlap {
            shared: first.shared_count(&second),
            first:  first.len(),
            second: second.len(),
        }
    }

    /// The Dice coefficient as a percentage, or 0 when neither sequence had a
    /// window.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn dice_percent(&self) -> f64 {
        let total = self.first + self.second;
        if total == 0 {
            return 0.0;
        }

        (self.shared as f64 * 2.0 / total as f64) * 100.0
    }
}
