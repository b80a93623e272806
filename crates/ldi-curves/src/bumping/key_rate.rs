//! Key-rate bumping.
//!
//! A key-rate bump moves the zero rate at a single pillar. Because rates
//! are linearly interpolated, the effect on the curve is a triangle that
//! peaks at the bumped pillar and fades to zero at its neighbours.

use crate::bumping::bps_to_decimal;
use crate::curves::ZeroCurve;
use crate::error::CurveResult;

/// A shift applied to the rate at one pillar index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyRateBump {
    index: usize,
    shift_bps: f64,
}

impl KeyRateBump {
    /// Creates a key-rate bump of `shift_bps` at pillar `index`.
    #[must_use]
    pub fn new(index: usize, shift_bps: f64) -> Self {
        Self { index, shift_bps }
    }

    /// Creates symmetric up/down bumps at the same pillar.
    #[must_use]
    pub fn symmetric(index: usize, shift_bps: f64) -> (Self, Self) {
        (Self::new(index, shift_bps), Self::new(index, -shift_bps))
    }

    /// One bump per pillar of `curve`, e.g. for a full key-rate profile.
    #[must_use]
    pub fn profile(curve: &ZeroCurve, shift_bps: f64) -> Vec<Self> {
        (0..curve.len()).map(|i| Self::new(i, shift_bps)).collect()
    }

    /// Returns the pillar index.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the shift in basis points.
    #[must_use]
    pub fn shift_bps(&self) -> f64 {
        self.shift_bps
    }

    /// Returns the shift in rate units.
    #[must_use]
    pub fn shift_decimal(&self) -> f64 {
        bps_to_decimal(self.shift_bps)
    }

    /// Returns a bumped copy of `curve`.
    ///
    /// # Panics
    ///
    /// Panics if the index is not a pillar of `curve`.
    #[must_use]
    pub fn apply(&self, curve: &ZeroCurve) -> ZeroCurve {
        curve.bumped_at_index(self.index, self.shift_decimal())
    }

    /// Checked variant of [`apply`](Self::apply).
    pub fn try_apply(&self, curve: &ZeroCurve) -> CurveResult<ZeroCurve> {
        curve.try_bumped_at_index(self.index, self.shift_decimal())
    }
}
