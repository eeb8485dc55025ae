//! ## Window Similarity
//!
//! [`window_similarity`] scores two sequences by the fixed-length windows they
//! share, as a Dice coefficient percentage. It is tolerant of transpositions
//! and local rearrangements that edit distance penalizes heavily, which makes
//! it a good fit for deduplication and record linkage.
//!
//! The byte-string trait [`ApproximateMatch`] provides all of the *likeness*
//! metrics as methods.
//!
//! ```
//! # use likeness::{data::windows::Window, similarity::window_similarity};
//! let bigram = Window::new(2).unwrap();
//! let score = window_similarity(b"FRANCE", b"FRENCH", bigram);
//! assert_eq!(score, 40.0);
//! ```

mod dice;
mod traits;

pub use dice::*;
pub use traits::*;
