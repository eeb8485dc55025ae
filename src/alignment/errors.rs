use crate::data::err::GetCode;
use std::{error::Error, fmt};

/// An enum representing errors that can happen when configuring
/// [`AlignmentWeights`](super::AlignmentWeights).
#[derive(PartialEq, Eq, Clone, Copy)]
#[non_exhaustive]
pub enum WeightError {
    /// A weight was NaN or infinite. The name of the weight is included.
    NonFinite(&'static str),
}

impl fmt::Display for WeightError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            WeightError::NonFinite(weight) => write!(f, "The {weight} weight must be a finite number!"),
        }
    }
}

impl fmt::Debug for WeightError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl Error for WeightError {}
impl GetCode for WeightError {}
