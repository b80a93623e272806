//! Parallel (uniform) curve bumping.

use crate::bumping::bps_to_decimal;
use crate::curves::ZeroCurve;

/// A parallel shift applied to every pillar rate.
///
/// ```rust
/// use ldi_curves::bumping::ParallelBump;
///
/// let bump_up = ParallelBump::new(1.0);    // +1bp
/// let bump_100 = ParallelBump::new(-100.0); // -100bp
/// assert_eq!(bump_100.shift_decimal(), -0.01);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallelBump {
    shift_bps: f64,
}

impl ParallelBump {
    /// Creates a new parallel bump of `shift_bps` basis points.
    #[must_use]
    pub fn new(shift_bps: f64) -> Self {
        Self { shift_bps }
    }

    /// Creates symmetric up/down bumps for central differences.
    ///
    /// Returns `(up, down)`.
    #[must_use]
    pub fn symmetric(shift_bps: f64) -> (Self, Self) {
        (Self::new(shift_bps), Self::new(-shift_bps))
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
    #[must_use]
    pub fn apply(&self, curve: &ZeroCurve) -> ZeroCurve {
        curve.bumped_parallel(self.shift_decimal())
    }
}

impl Default for ParallelBump {
    fn default() -> Self {
        Self::new(1.0)
    }
}
