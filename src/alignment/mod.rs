//! ## Global Alignment
//!
//! *likeness* provides a linear-gap Needleman–Wunsch score in [`nw`]. The
//! scoring is configured with [`AlignmentWeights`], which default to a match
//! of 1 and a mismatch and gap of 0.
//!
//! ```
//! # use likeness::alignment::{AlignmentWeights, nw::needleman_wunsch_score};
//! let weights = AlignmentWeights::new(1.0, -1.0, -1.0).unwrap();
//! let score = needleman_wunsch_score(b"GGCCACAGGATTGAG", b"GGCCACAGTATTAG", weights);
//! assert_eq!(score, 11.0);
//! ```

mod errors;
mod weights;

/// Needleman–Wunsch global alignment.
pub mod nw;

pub use errors::*;
pub use weights::*;
