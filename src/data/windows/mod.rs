//! ## Fixed-Length Windows
//!
//! A *window* is a contiguous run of `length` elements of a sequence. The
//! window-based metrics ([`window_similarity`] and
//! [`window_occurrence_score`]) draw their windows with
//! [`truncated_windows`], which considers start positions `0..len - 1` and
//! keeps only full-length windows.
//!
//! For a window length of 2 or more this yields every full window of the
//! sequence. For a window length of 1 the final element never starts a
//! window, so `b"abc"` yields `a` and `b` only. Scores produced by older tools
//! with the same extraction rule stay comparable.
//!
//! ```
//! # use likeness::data::windows::{Window, truncated_windows};
//! let two = Window::new(2).unwrap();
//! let windows: Vec<&[u8]> = truncated_windows(b"abcd", two).collect();
//! assert_eq!(windows, [b"ab", b"bc", b"cd"]);
//!
//! let one = Window::new(1).unwrap();
//! assert_eq!(truncated_windows(b"abcd", one).count(), 3);
//! ```
//!
//! [`window_similarity`]: crate::similarity::window_similarity
//! [`window_occurrence_score`]: crate::search::window_occurrence_score

use std::{
    collections::{HashSet, hash_set},
    hash::Hash,
    iter::Take,
    num::NonZeroUsize,
    slice::Windows,
};

mod errors;

pub use errors::*;

/// A validated, nonzero window length. The default is 5.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Window(NonZeroUsize);

impl Window {
    /// The default window length of 5.
    pub const DEFAULT: Window = match NonZeroUsize::new(5) {
        Some(length) => Window(length),
        None => unreachable!(),
    };

    /// Creates a new [`Window`] of the given length.
    ///
    /// ## Errors
    ///
    /// Returns [`WindowError::Zero`] if `length` is 0.
    #[inline]
    pub const fn new(length: usize) -> Result<Self, WindowError> {
        match NonZeroUsize::new(length) {
            Some(length) => Ok(Window(length)),
            None => Err(WindowError::Zero),
        }
    }

    /// The window length.
    #[inline]
    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for Window {
    #[inline]
    fn default() -> Self {
        Window::DEFAULT
    }
}

impl TryFrom<usize> for Window {
    type Error = WindowError;

    #[inline]
    fn try_from(length: usize) -> Result<Self, Self::Error> {
        Window::new(length)
    }
}

impl From<NonZeroUsize> for Window {
    #[inline]
    fn from(length: NonZeroUsize) -> Self {
        Window(length)
    }
}

impl From<Window> for usize {
    #[inline]
    fn from(window: Window) -> Self {
        window.get()
    }
}

/// Iterates over the full-length windows of `seq` whose start position is
/// below `seq.len() - 1`. See the [module documentation](self) for how this
/// differs from [`slice::windows`].
#[inline]
pub fn truncated_windows<T>(seq: &[T], window: Window) -> Take<Windows<'_, T>> {
    seq.windows(window.get()).take(seq.len().saturating_sub(1))
}

/// The distinct windows of a sequence, borrowed from it.
///
/// ```
/// # use likeness::data::windows::{Window, WindowSet};
/// let set = WindowSet::from_sequence(b"abab", Window::new(2).unwrap());
/// assert_eq!(set.len(), 2);
/// assert!(set.contains(b"ba"));
/// ```
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct WindowSet<'a, T: Eq + Hash> {
    set:    HashSet<&'a [T]>,
    window: Window,
}

impl<'a, T: Eq + Hash> WindowSet<'a, T> {
    /// Collects the distinct [`truncated_windows`] of `seq`.
    #[inline]
    #[must_use]
    pub fn from_sequence(seq: &'a [T], window: Window) -> Self {
        WindowSet {
            set: truncated_windows(seq, window).collect(),
            window,
        }
    }

    /// The window length used to build the set.
    #[inline]
    #[must_use]
    pub fn window(&self) -> Window {
        self.window
    }

    /// The number of distinct windows.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.set.len()
    }

    /// Returns `true` if no window could be drawn.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    /// Returns `true` if `window` is one of the distinct windows.
    #[inline]
    #[must_use]
    pub fn contains(&self, window: &[T]) -> bool {
        self.set.contains(window)
    }

    /// Counts the windows of `other` that are also in `self`. Since both sets
    /// are distinct, each shared window contributes exactly 1.
    #[inline]
    #[must_use]
    pub fn shared_count(&self, other: &WindowSet<'_, T>) -> usize {
        other.iter().filter(|window| self.contains(window)).count()
    }

    /// Iterates over the distinct windows in arbitrary order.
    #[inline]
    pub fn iter(&self) -> std::iter::Copied<hash_set::Iter<'_, &'a [T]>> {
        self.set.iter().copied()
    }
}

impl<'a, T: Eq + Hash> IntoIterator for WindowSet<'a, T> {
    type Item = &'a [T];
    type IntoIter = hash_set::IntoIter<&'a [T]>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.set.into_iter()
    }
}

#[cfg(test)]
mod test;
