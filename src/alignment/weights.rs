use super::WeightError;

/// The match reward, mismatch penalty, and gap penalty for
/// [`needleman_wunsch_score`](super::nw::needleman_wunsch_score).
///
/// Penalties are added to the score, so they are usually zero or negative.
/// The defaults are a match of 1 and a mismatch and gap of 0, under which the
/// global alignment score is the length of the longest common subsequence.
///
/// All weights are finite; the constructors reject NaN and infinities.
///
/// ```
/// # use likeness::alignment::AlignmentWeights;
/// let weights = AlignmentWeights::new(2.0, -1.0, -2.0).unwrap();
/// assert_eq!(weights.gap(), -2.0);
///
/// let weights = AlignmentWeights::default().with_gap(-0.5).unwrap();
/// assert_eq!((weights.matching(), weights.mismatch(), weights.gap()), (1.0, 0.0, -0.5));
///
/// assert!(AlignmentWeights::new(f64::NAN, 0.0, 0.0).is_err());
/// ```
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct AlignmentWeights {
    matching: f64,
    mismatch: f64,
    gap:      f64,
}

impl AlignmentWeights {
    /// Match 1, mismatch 0, gap 0.
    pub const DEFAULT: AlignmentWeights = AlignmentWeights {
        matching: 1.0,
        mismatch: 0.0,
        gap:      0.0,
    };

    /// Creates a new set of alignment weights.
    ///
    /// ## Errors
    ///
    /// Returns [`WeightError::NonFinite`] naming the first weight that is NaN
    /// or infinite.
    #[inline]
    pub fn new(matching: f64, mismatch: f64, gap: f64) -> Result<Self, WeightError> {
        Ok(AlignmentWeights {
            matching: finite("matching", matching)?,
            mismatch: finite("mismatch", mismatch)?,
            gap:      finite("gap", gap)?,
        })
    }

    /// Replaces the match reward.
    ///
    /// ## Errors
    ///
    /// Returns [`WeightError::NonFinite`] if `matching` is NaN or infinite.
    #[inline]
    pub fn with_matching(self, matching: f64) -> Result<Self, WeightError> {
        Self::new(matching, self.mismatch, self.gap)
    }

    /// Replaces the mismatch penalty.
    ///
    /// ## Errors
    ///
    /// Returns [`WeightError::NonFinite`] if `mismatch` is NaN or infinite.
    #[inline]
    pub fn with_mismatch(self, mismatch: f64) -> Result<Self, WeightError> {
        Self::new(self.matching, mismatch, self.gap)
    }

    /// Replaces the gap penalty.
    ///
    /// ## Errors
    ///
    /// Returns [`WeightError::NonFinite`] if `gap` is NaN or infinite.
    #[inline]
    pub fn with_gap(self, gap: f64) -> Result<Self, WeightError> {
        Self::new(self.matching, self.mismatch, gap)
    }

    /// The score added when two elements are equal.
    #[inline]
    #[must_use]
    pub const fn matching(&self) -> f64 {
        self.matching
    }

    /// The score added when two elements differ.
    #[inline]
    #[must_use]
    pub const fn mismatch(&self) -> f64 {
        self.mismatch
    }

    /// The score added when an element is aligned to a gap.
    #[inline]
    #[must_use]
    pub const fn gap(&self) -> f64 {
        self.gap
    }

    /// The diagonal contribution of aligning `a` against `b`.
    #[inline]
    #[must_use]
    pub(crate) fn substitution<T: PartialEq>(&self, a: &T, b: &T) -> f64 {
        if a == b { self.matching } else { self.mismatch }
    }
}

impl Default for AlignmentWeights {
    #[inline]
    fn default() -> Self {
        AlignmentWeights::DEFAULT
    }
}

#[inline]
fn finite(name: &'static str, weight: f64) -> Result<f64, WeightError> {
    if weight.is_finite() {
        Ok(weight)
    } else {
        Err(WeightError::NonFinite(name))
    }
}
