use crate::{
    alignment::{AlignmentWeights, nw::needleman_wunsch_score},
    data::windows::Window,
    distance::levenshtein,
    search::window_occurrence_score,
    similarity::window_similarity,
};

///
/// Trait for comparing byte strings with each of the *likeness* metrics.
///
/// Anything viewable as bytes can be compared, including [`str`], [`String`],
/// `[u8]`, and [`Vec<u8>`]. Comparisons are over bytes, so multi-byte UTF-8
/// characters count as several elements. For comparisons over characters,
/// collect into a `Vec<char>` and call the free functions instead.
///
/// ```
/// # use likeness::prelude::*;
/// assert_eq!("kitten".edit_distance("sitting"), 3);
/// assert_eq!(b"abc".global_alignment_score(b"abc", AlignmentWeights::default()), 3.0);
/// assert_eq!("night".window_similarity("nacht", Window::new(2).unwrap()), 25.0);
/// assert_eq!("aa".window_occurrences("aaaa", Window::new(2).unwrap()), 3);
/// ```
pub trait ApproximateMatch {
    /// The Levenshtein distance to `other`. See
    /// [`levenshtein`](crate::distance::levenshtein).
    fn edit_distance(&self, other: impl AsRef<[u8]>) -> usize;

    /// The Needleman–Wunsch global alignment score against `other`. See
    /// [`needleman_wunsch_score`](crate::alignment::nw::needleman_wunsch_score).
    fn global_alignment_score(&self, other: impl AsRef<[u8]>, weights: AlignmentWeights) -> f64;

    /// The Dice similarity percentage of the windows shared with `other`. See
    /// [`window_similarity`](crate::similarity::window_similarity).
    fn window_similarity(&self, other: impl AsRef<[u8]>, window: Window) -> f64;

    /// Counts the occurrences of `self`'s windows within `text`. Note that
    /// `self` supplies the patterns and `text` is searched, so swapping the
    /// two is not equivalent. See
    /// [`window_occurrence_score`](crate::search::window_occurrence_score).
    fn window_occurrences(&self, text: impl AsRef<[u8]>, window: Window) -> usize;
}

impl<T: AsRef<[u8]> + ?Sized> ApproximateMatch for T {
    #[inline]
    fn edit_distance(&self, other: impl AsRef<[u8]>) -> usize {
        levenshtein(self.as_ref(), other.as_ref())
    }

    #[inline]
    fn global_alignment_score(&self, other: impl AsRef<[u8]>, weights: AlignmentWeights) -> f64 {
        needleman_wunsch_score(self.as_ref(), other.as_ref(), weights)
    }

    #[inline]
    fn window_similarity(&self, other: impl AsRef<[u8]>, window: Window) -> f64 {
        window_similarity(self.as_ref(), other.as_ref(), window)
    }

    #[inline]
    fn window_occurrences(&self, text: impl AsRef<[u8]>, window: Window) -> usize {
        window_occurrence_score(self.as_ref(), text.as_ref(), window)
    }
}
