//! A module providing implementations of
//! [`Arbitrary`](https://docs.rs/arbitrary/latest/arbitrary/trait.Arbitrary.html)
//! for the *likeness* configuration types, as well as wrapper types to provide
//! [`Arbitrary`](https://docs.rs/arbitrary/latest/arbitrary/trait.Arbitrary.html)
//! sequences with stronger assumptions.
//!
//! <div class="warning note">
//!
//! **Note**
//!
//! You must enable the *fuzzing* feature in your `Cargo.toml` to use these
//! functions.
//!
//! </div>

use crate::{alignment::AlignmentWeights, data::windows::Window};
use arbitrary::{Arbitrary, Error, Result, Unstructured};

macro_rules! impl_deref {
    ($wrapper:ty, $inner:ty) => {
        impl ::std::ops::Deref for $wrapper {
            type Target = $inner;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl ::std::ops::DerefMut for $wrapper {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.0
            }
        }
    };
}

/// The largest window generated, keeping fuzzed searches fast.
const MAX_WINDOW: usize = 16;

impl<'a> Arbitrary<'a> for Window {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        Window::new(u.int_in_range(1..=MAX_WINDOW)?).map_err(|_| Error::IncorrectFormat)
    }

    fn size_hint(depth: usize) -> (usize, Option<usize>) {
        let _ = depth;
        (1, Some(1))
    }
}

/// Generates finite weights in half-unit steps between -8 and 8, so that
/// scores stay exactly representable.
impl<'a> Arbitrary<'a> for AlignmentWeights {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        let mut weight = || -> Result<f64> { Ok(f64::from(u.int_in_range(-16i8..=16)?) / 2.0) };
        AlignmentWeights::new(weight()?, weight()?, weight()?).map_err(|_| Error::IncorrectFormat)
    }

    fn size_hint(depth: usize) -> (usize, Option<usize>) {
        let _ = depth;
        (3, Some(3))
    }
}

/// A wrapper around `Vec<u8>` such that the implementation of
/// [`Arbitrary`](https://docs.rs/arbitrary/latest/arbitrary/trait.Arbitrary.html)
/// only generates the bytes `ACGT`. The small alphabet makes shared windows
/// and repeated patterns likely.
#[derive(Debug)]
pub struct AcgtSequence(pub Vec<u8>);

impl_deref! {AcgtSequence, Vec<u8>}

impl<'a> Arbitrary<'a> for AcgtSequence {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        const ALPHA: &[u8] = b"ACGT";
        let len = u.arbitrary_len::<u8>()?;
        let mut vec = Vec::with_capacity(len);
        for _ in 0..len {
            vec.push(*u.choose(ALPHA)?);
        }
        Ok(AcgtSequence(vec))
    }
}
