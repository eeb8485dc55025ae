use crate::data::err::GetCode;
use std::{error::Error, fmt};

/// An enum representing errors that can happen when configuring a
/// [`Window`](super::Window).
#[derive(PartialEq, Eq, Clone, Copy)]
#[non_exhaustive]
pub enum WindowError {
    /// A window length of zero was requested
    Zero,
}

impl fmt::Display for WindowError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            WindowError::Zero => write!(f, "The window length must be at least 1!"),
        }
    }
}

impl fmt::Debug for WindowError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl Error for WindowError {}
impl GetCode for WindowError {}
