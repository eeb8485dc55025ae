#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::wildcard_imports)]
#![cfg_attr(feature = "bench", feature(test))]

/// Global alignment scoring.
pub mod alignment;
/// Shared data types: tables, windows, and errors.
pub mod data;
/// Edit distance.
pub mod distance;
/// Windowed pattern search.
pub mod search;
/// Window-based similarity and the byte-string comparison trait.
pub mod similarity;

/// Generate random sequences and mutated copies.
#[cfg(feature = "rand")]
pub mod generate;

/// Common structures and traits re-exported
pub mod prelude {
    pub use crate::alignment::{AlignmentWeights, nw::needleman_wunsch_score};
    pub use crate::data::{err::OrFail, windows::Window};
    pub use crate::distance::levenshtein;
    pub use crate::search::window_occurrence_score;
    pub use crate::similarity::{ApproximateMatch, window_similarity};

    #[cfg(feature = "rand")]
    pub use crate::generate::{rand_edits, rand_sequence};
}
