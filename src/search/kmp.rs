use std::{iter::FusedIterator, ops::Range};

/// The Knuth–Morris–Pratt failure function of a pattern.
///
/// Entry `i` is the length of the longest proper prefix of `pattern[..=i]`
/// that is also a suffix of it. Entry 0 is always 0. After a mismatch at
/// pattern position `p > 0`, the search resumes at `failure[p - 1]` instead of
/// restarting from 0.
///
/// ```
/// # use likeness::search::FailureFunction;
/// let failure = FailureFunction::new(b"ABABCABAB");
/// assert_eq!(failure.as_slice(), &[0, 0, 1, 2, 0, 1, 2, 3, 4]);
/// ```
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct FailureFunction(Vec<usize>);

impl FailureFunction {
    /// Computes the failure function of `pattern` in $O(|pattern|)$ time.
    #[must_use]
    pub fn new<T: PartialEq>(pattern: &[T]) -> Self {
        let mut failure = vec![0; pattern.len()];
        // Length of the current prefix that is also a suffix
        let mut k = 0;

        for i in 1..pattern.len() {
            while k > 0 && pattern[i] != pattern[k] {
                k = failure[k - 1];
            }
            if pattern[i] == pattern[k] {
                k += 1;
            }
            failure[i] = k;
        }

        FailureFunction(failure)
    }

    /// The failure function as a slice, one entry per pattern element.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// The length of the pattern.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` for the failure function of an empty pattern.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A pattern preprocessed for Knuth–Morris–Pratt search, which can be reused
/// against any number of texts.
///
/// ```
/// # use likeness::search::KmpMatcher;
/// let matcher = KmpMatcher::new(b"ana");
/// let found: Vec<_> = matcher.find_iter(b"bananas").collect();
/// assert_eq!(found, [1..4, 3..6]);
/// assert_eq!(matcher.count_in(b"bananas"), 2);
/// ```
#[derive(Clone, Debug)]
pub struct KmpMatcher<'a, T> {
    pattern: &'a [T],
    failure: FailureFunction,
}

impl<'a, T: PartialEq> KmpMatcher<'a, T> {
    /// Preprocesses `pattern`.
    #[inline]
    #[must_use]
    pub fn new(pattern: &'a [T]) -> Self {
        KmpMatcher {
            pattern,
            failure: FailureFunction::new(pattern),
        }
    }

    /// The pattern being searched for.
    #[inline]
    #[must_use]
    pub fn pattern(&self) -> &'a [T] {
        self.pattern
    }

    /// The failure function of the pattern.
    #[inline]
    #[must_use]
    pub fn failure(&self) -> &FailureFunction {
        &self.failure
    }

    /// Iterates over the index ranges of every occurrence of the pattern in
    /// `text`, from left to right. Occurrences may overlap. An empty pattern
    /// never matches.
    #[inline]
    pub fn find_iter<'t>(&'t self, text: &'t [T]) -> KmpMatches<'t, T> {
        KmpMatches {
            pattern: self.pattern,
            failure: self.failure.as_slice(),
            text,
            text_pos: 0,
            pattern_pos: 0,
        }
    }

    /// Counts the occurrences of the pattern in `text`, including overlapping
    /// ones, in $O(|text|)$ time.
    #[inline]
    #[must_use]
    pub fn count_in(&self, text: &[T]) -> usize {
        self.find_iter(text).count()
    }
}

/// An iterator over the occurrences of a pattern, created by
/// [`KmpMatcher::find_iter`].
#[derive(Clone, Debug)]
pub struct KmpMatches<'a, T> {
    pattern:     &'a [T],
    failure:     &'a [usize],
    text:        &'a [T],
    text_pos:    usize,
    pattern_pos: usize,
}

impl<T: PartialEq> Iterator for KmpMatches<'_, T> {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pattern.is_empty() {
            return None;
        }

        while self.text_pos < self.text.len() {
            let element = &self.text[self.text_pos];

            while self.pattern_pos > 0 && self.pattern[self.pattern_pos] != *element {
                self.pattern_pos = self.failure[self.pattern_pos - 1];
            }
            if self.pattern[self.pattern_pos] == *element {
                self.pattern_pos += 1;
            }
            self.text_pos += 1;

            if self.pattern_pos == self.pattern.len() {
                // Fall back rather than reset, so overlapping occurrences are
                // found
                self.pattern_pos = self.failure[self.pattern_pos - 1];
                return Some(self.text_pos - self.pattern.len()..self.text_pos);
            }
        }

        None
    }
}

impl<T: PartialEq> FusedIterator for KmpMatches<'_, T> {}
