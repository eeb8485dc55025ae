//! ## Edit Distance
//!
//! [`levenshtein`] counts the minimum number of single-element insertions,
//! deletions, and substitutions that transform one sequence into another. It
//! is a true metric: it is zero only for identical sequences, symmetric, and
//! satisfies the triangle inequality.
//!
//! ```
//! # use likeness::distance::levenshtein;
//! let reference: &[u8] = b"GGCCACAGGATTGAG";
//! let query: &[u8] = b"GGCCACAGTATTAG";
//!
//! assert_eq!(levenshtein(reference, query), 2);
//! assert_eq!(levenshtein(query, reference), 2);
//! ```

mod levenshtein;

pub use levenshtein::*;

#[cfg(all(test, feature = "bench"))]
mod bench;
