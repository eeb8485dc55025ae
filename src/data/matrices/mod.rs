//! ## Dynamic Programming Tables
//!
//! [`ScoreTable`] is the working memory for [`levenshtein`] and
//! [`needleman_wunsch_score`]. For operands of length $m$ and $n$, the table
//! holds $(m+1)(n+1)$ cells in a single flat allocation, addressed as
//! `row * cols + col`. Row 0 and column 0 are the empty-prefix base cases, and
//! cell $(i, j)$ holds the optimal score for the prefixes of length $i$ and
//! $j$.
//!
//! Integer tables can be printed, which is mostly useful for debugging a
//! scoring result:
//!
//! ```
//! # use likeness::distance::levenshtein_table;
//! let table = levenshtein_table(b"ab", b"a");
//! assert_eq!(table.to_string(), "0\t1\n1\t0\n2\t1\n");
//! ```
//!
//! [`levenshtein`]: crate::distance::levenshtein
//! [`needleman_wunsch_score`]: crate::alignment::nw::needleman_wunsch_score

use std::{
    fmt,
    ops::{Index, IndexMut},
};

/// A flat, pre-sized, row-major table of scores.
#[derive(Clone, PartialEq, Debug)]
pub struct ScoreTable<T> {
    cells: Vec<T>,
    rows:  usize,
    cols:  usize,
}

impl<T: Copy + Default> ScoreTable<T> {
    /// Allocates a table with `rows` rows and `cols` columns, with every cell
    /// set to `T::default()`.
    ///
    /// ## Panics
    ///
    /// Panics if `rows * cols` cells cannot be allocated. No internal limit is
    /// imposed, so callers scoring very long sequences should bound the input
    /// lengths themselves.
    #[inline]
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        // Overflow requests an impossible capacity, which panics in `vec!`
        // rather than silently wrapping.
        let size = rows.checked_mul(cols).unwrap_or(usize::MAX);
        ScoreTable {
            cells: vec![T::default(); size],
            rows,
            cols,
        }
    }

    /// Allocates a table sized for two operands, that is, with
    /// `first_len + 1` rows and `second_len + 1` columns.
    #[inline]
    #[must_use]
    pub fn for_operands(first_len: usize, second_len: usize) -> Self {
        Self::new(first_len.saturating_add(1), second_len.saturating_add(1))
    }

    /// Gets the value in the cell at (`row`, `col`), or [`None`] if out of
    /// bounds.
    #[inline]
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        if row < self.rows && col < self.cols {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    /// The bottom-right cell, which holds the score for the full operands.
    /// Returns [`None`] only for a table with no cells.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<T> {
        self.cells.last().copied()
    }
}

impl<T> ScoreTable<T> {
    /// The number of rows.
    #[inline]
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// The number of columns.
    #[inline]
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns a row of the table as a slice.
    ///
    /// ## Panics
    ///
    /// Panics if `row` is out of bounds.
    #[inline]
    #[must_use]
    pub fn row(&self, row: usize) -> &[T] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    /// Iterates over the rows of the table.
    #[inline]
    pub fn iter_rows(&self) -> std::slice::ChunksExact<'_, T> {
        // chunks_exact panics on a zero chunk size
        self.cells.chunks_exact(self.cols.max(1))
    }

    /// The underlying row-major cells.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }
}

impl<T> Index<(usize, usize)> for ScoreTable<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        debug_assert!(col < self.cols);
        &self.cells[row * self.cols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for ScoreTable<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        debug_assert!(col < self.cols);
        &mut self.cells[row * self.cols + col]
    }
}

impl<T: itoa::Integer + Copy> fmt::Display for ScoreTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buff = itoa::Buffer::new();
        for row in self.iter_rows() {
            let mut cells = row.iter().copied();
            if let Some(first) = cells.next() {
                f.write_str(buff.format(first))?;
            }
            for cell in cells {
                f.write_str("\t")?;
                f.write_str(buff.format(cell))?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}
