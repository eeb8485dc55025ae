//! ## Needleman–Wunsch Alignment
//!
//! For the optimal global alignment score of two sequences use
//! [`needleman_wunsch_score`]. To inspect every prefix score, use
//! [`needleman_wunsch_table`].
//!
//! ### Linear Gap Penalties
//!
//! Every element aligned to a gap adds the same `gap` weight, so a gap of
//! length $k$ contributes $k \cdot \text{gap}$. There are no separate gap open
//! and gap extend penalties.
//!
//! ### Choice of Weights
//!
//! The [`AlignmentWeights`] are the main design lever:
//!
//! - With the defaults (match 1, mismatch 0, gap 0), gaps are free and the
//!   score is the length of the longest common subsequence.
//! - With match 0, mismatch -1, and gap -1, the score is the negated
//!   [`levenshtein`] distance.
//! - A typical nucleotide setting rewards matches and penalizes both
//!   mismatches and gaps, such as match 1, mismatch -1, and gap -1.
//!
//! ```
//! # use likeness::alignment::{AlignmentWeights, nw::needleman_wunsch_score};
//! let reference: &[u8] = b"GATTACA";
//! let query: &[u8] = b"GCATGCU";
//!
//! let weights = AlignmentWeights::new(1.0, -1.0, -1.0).unwrap();
//! assert_eq!(needleman_wunsch_score(reference, query, weights), 0.0);
//!
//! // Longest common subsequence
//! let lcs = needleman_wunsch_score(b"ABCBDAB", b"BDCABA", AlignmentWeights::default());
//! assert_eq!(lcs, 4.0);
//! ```
//!
//! [`levenshtein`]: crate::distance::levenshtein

use crate::{alignment::AlignmentWeights, data::matrices::ScoreTable};

/// Needleman–Wunsch algorithm, yielding the optimal global alignment score.
///
/// The alignment covers both sequences end to end; there is no trimming of
/// unaligned ends. Elements only need to be comparable for equality.
///
/// ## Complexity
///
/// For lengths $m$ and $n$:
///
/// - Time: $O(mn)$
/// - Space: $O(mn)$, see [`ScoreTable`]
///
/// ## Example
///
/// ```
/// # use likeness::alignment::{AlignmentWeights, nw::needleman_wunsch_score};
/// let score = needleman_wunsch_score(b"abc", b"abc", AlignmentWeights::default());
/// assert_eq!(score, 3.0);
///
/// let weights = AlignmentWeights::new(1.0, 0.0, -1.0).unwrap();
/// assert_eq!(needleman_wunsch_score(b"", b"abc", weights), -3.0);
/// ```
#[inline]
#[must_use]
pub fn needleman_wunsch_score<T: PartialEq>(s1: &[T], s2: &[T], weights: AlignmentWeights) -> f64 {
    needleman_wunsch_table(s1, s2, weights).last().unwrap_or_default()
}

/// Computes the full Needleman–Wunsch [`ScoreTable`] for `s1` (rows) and `s2`
/// (columns). Cell $(i, j)$ holds the optimal global alignment score of
/// `s1[..i]` and `s2[..j]`.
///
/// ## Example
///
/// ```
/// # use likeness::alignment::{AlignmentWeights, nw::needleman_wunsch_table};
/// let weights = AlignmentWeights::new(2.0, -1.0, -0.5).unwrap();
/// let table = needleman_wunsch_table(b"AC", b"A", weights);
///
/// assert_eq!(table.row(0), &[0.0, -0.5]);
/// assert_eq!(table.row(1), &[-0.5, 2.0]);
/// assert_eq!(table.row(2), &[-1.0, 1.5]);
/// ```
#[must_use]
pub fn needleman_wunsch_table<T: PartialEq>(s1: &[T], s2: &[T], weights: AlignmentWeights) -> ScoreTable<f64> {
    let mut table = ScoreTable::for_operands(s1.len(), s2.len());
    fill_needleman_wunsch(&mut table, s1, s2, weights);
    table
}

#[cfg_attr(feature = "multiversion", multiversion::multiversion(targets = "simd"))]
fn fill_needleman_wunsch<T: PartialEq>(table: &mut ScoreTable<f64>, s1: &[T], s2: &[T], weights: AlignmentWeights) {
    let gap = weights.gap();

    // Base cases: consuming a prefix of one sequence against nothing
    // accumulates one gap per element
    for i in 1..=s1.len() {
        table[(i, 0)] = table[(i - 1, 0)] + gap;
    }
    for j in 1..=s2.len() {
        table[(0, j)] = table[(0, j - 1)] + gap;
    }

    for (i, a) in s1.iter().enumerate() {
        let i = i + 1;
        for (j, b) in s2.iter().enumerate() {
            let j = j + 1;
            let up = table[(i - 1, j)] + gap;
            let left = table[(i, j - 1)] + gap;
            let diagonal = table[(i - 1, j - 1)] + weights.substitution(a, b);
            table[(i, j)] = up.max(left).max(diagonal);
        }
    }
}

#[cfg(all(test, feature = "bench"))]
mod bench;
#[cfg(test)]
mod test;
