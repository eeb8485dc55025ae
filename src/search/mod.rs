//! ## Windowed Pattern Search
//!
//! [`window_occurrence_score`] measures how much of one sequence reappears in
//! another by counting, for every window of the first, its occurrences in the
//! second. The occurrences are found with the Knuth–Morris–Pratt algorithm:
//! [`FailureFunction`] holds the preprocessing of a pattern, and
//! [`KmpMatcher`] scans a text in linear time, reporting overlapping
//! occurrences.
//!
//! ```
//! # use likeness::{data::windows::Window, search::{KmpMatcher, window_occurrence_score}};
//! let matcher = KmpMatcher::new(b"aa");
//! assert_eq!(matcher.count_in(b"aaaa"), 3);
//!
//! let score = window_occurrence_score(b"GATTACA", b"ATTACATTACA", Window::new(4).unwrap());
//! assert_eq!(score, 6);
//! ```

mod kmp;
mod windowed;

pub use kmp::*;
pub use windowed::*;

#[cfg(all(test, feature = "bench"))]
mod bench;
#[cfg(test)]
mod test;
