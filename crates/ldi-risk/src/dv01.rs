//! DV01: dollar value of a basis point.
//!
//! Every routine here is a symmetric central difference around the unbumped
//! curve (or rate):
//!
//! ```text
//! DV01 = (PV(-bp) - PV(+bp)) / 2
//! ```
//!
//! Positive DV01 means the position loses value when rates rise.

use ldi_curves::bumping::{bps_to_decimal, ParallelBump};
use ldi_curves::{Priceable, ZeroCurve};
use ldi_liabilities::Liability;
use tracing::trace;

/// Standard bump for DV01 and durations (1 basis point).
pub const DEFAULT_BUMP_BPS: f64 = 1.0;

/// PVs under parallel `+bp` and `-bp` curves, in that order.
pub(crate) fn parallel_pvs<P: Priceable + ?Sized>(obj: &P, curve: &ZeroCurve, bp: f64) -> (f64, f64) {
    let (up, down) = ParallelBump::symmetric(bp);
    let pv_up = obj.present_value(&up.apply(curve));
    let pv_down = obj.present_value(&down.apply(curve));
    trace!(bp, pv_up, pv_down, "parallel bump");
    (pv_up, pv_down)
}

/// Parallel DV01 under a zero curve.
///
/// # Arguments
///
/// * `obj` - Anything priceable under a curve
/// * `curve` - Base curve
/// * `bp` - Bump size in basis points (1bp = 0.0001)
///
/// # Example
///
/// ```rust
/// use ldi_curves::ZeroCurve;
/// use ldi_liabilities::AnnuityCertain;
/// use ldi_risk::parallel_dv01;
///
/// let curve = ZeroCurve::flat(vec![1.0, 30.0], 0.03).unwrap();
/// let dv01 = parallel_dv01(&AnnuityCertain::new(100.0, 20), &curve, 1.0);
/// assert!(dv01 > 0.0);
/// ```
pub fn parallel_dv01<P: Priceable + ?Sized>(obj: &P, curve: &ZeroCurve, bp: f64) -> f64 {
    let (pv_up, pv_down) = parallel_pvs(obj, curve, bp);
    (pv_down - pv_up) / 2.0
}

/// DV01 at a flat rate, using the liability's own compounding.
pub fn flat_rate_dv01<L: Liability + ?Sized>(obj: &L, rate: f64, bp: f64) -> f64 {
    let dr = bps_to_decimal(bp);
    let pv_up = obj.pv_at_rate(rate + dr);
    let pv_down = obj.pv_at_rate(rate - dr);
    (pv_down - pv_up) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::duration::key_rate_dv01s;
    use approx::assert_relative_eq;
    use ldi_liabilities::{AnnuityCertain, DeferredAnnuityCertain};
    use ldi_swaps::{SizedSwap, SwapDirection};
    use proptest::prelude::*;

    fn curve() -> ZeroCurve {
        ZeroCurve::new(
            vec![0.5, 1.0, 2.0, 5.0, 10.0, 20.0],
            vec![0.030, 0.031, 0.033, 0.036, 0.038, 0.039],
        )
        .unwrap()
    }

    #[test]
    fn test_liability_dv01_positive() {
        let curve = curve();
        assert!(parallel_dv01(&AnnuityCertain::new(100.0, 20), &curve, 1.0) > 0.0);
        assert!(parallel_dv01(&DeferredAnnuityCertain::new(100.0, 20, 5), &curve, 1.0) > 0.0);
    }

    #[test]
    fn test_payer_swap_dv01_negative() {
        let curve = curve();
        let swap = SizedSwap::at_par(&curve, 10, 1, SwapDirection::PayerFixed, 1e6).unwrap();
        assert!(parallel_dv01(&swap, &curve, 1.0) < 0.0);
        let receiver = SizedSwap::at_par(&curve, 10, 1, SwapDirection::ReceiverFixed, 1e6).unwrap();
        assert!(parallel_dv01(&receiver, &curve, 1.0) > 0.0);
    }

    #[test]
    fn test_flat_curve_matches_flat_rate() {
        let flat = ZeroCurve::flat(vec![1.0, 30.0], 0.035).unwrap();
        let annuity = AnnuityCertain::new(100.0, 20);
        assert_relative_eq!(
            parallel_dv01(&annuity, &flat, 1.0),
            flat_rate_dv01(&annuity, 0.035, 1.0),
            max_relative = 1e-9
        );
    }

    #[test]
    fn test_dv01_scales_with_bump() {
        // Linear to first order: a 2bp DV01 is about twice a 1bp DV01.
        let curve = curve();
        let annuity = AnnuityCertain::new(100.0, 20);
        let one = parallel_dv01(&annuity, &curve, 1.0);
        let two = parallel_dv01(&annuity, &curve, 2.0);
        assert_relative_eq!(two, 2.0 * one, max_relative = 1e-6);
    }

    proptest! {
        #[test]
        fn prop_dv01_linear_in_payment(payment in 1.0f64..1e6, n in 1u32..40) {
            let curve = curve();
            let unit = parallel_dv01(&AnnuityCertain::new(1.0, n), &curve, 1.0);
            let scaled = parallel_dv01(&AnnuityCertain::new(payment, n), &curve, 1.0);
            prop_assert!(unit > 0.0);
            prop_assert!((scaled - payment * unit).abs() <= 1e-9 * scaled.abs());
        }

        #[test]
        fn prop_key_rates_sum_to_parallel(n in 1u32..40, defer in 0u32..10) {
            // Pillar weights sum to one everywhere, so single-pillar bumps
            // add up to the parallel bump to first order.
            let curve = curve();
            let liability = DeferredAnnuityCertain::new(100.0, n, defer);
            let indices: Vec<usize> = (0..curve.len()).collect();
            let total = key_rate_dv01s(&liability, &curve, &indices, 1.0).unwrap().total();
            let parallel = parallel_dv01(&liability, &curve, 1.0);
            prop_assert!((total - parallel).abs() <= 1e-4 * parallel.abs());
        }
    }
}
