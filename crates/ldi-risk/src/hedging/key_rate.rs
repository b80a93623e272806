//! Multi-swap key-rate hedge.
//!
//! With `N` key pillars and `N` hedge swaps, let `A[j][i]` be the key-rate
//! DV01 at pillar `j` per unit notional of swap `i`, and `L[j]` the
//! liability's key-rate DV01 at pillar `j`. Notionals `n` solve
//!
//! ```text
//! A n = -L
//! ```
//!
//! so the hedged book has zero key-rate DV01 at every targeted pillar.
//! Parallel DV01 is not targeted and is reported as a residual.

use ldi_curves::{Priceable, ZeroCurve};
use ldi_math::linear_algebra::{solve_2x2, solve_linear_system};
use ldi_swaps::SizedSwap;
use nalgebra::{DMatrix, DVector};
use serde::Serialize;
use tracing::debug;

use super::single::size_swap_for_target_dv01;
use crate::config::{HedgeConfig, RiskConfig};
use crate::duration::{key_rate_dv01s, KeyRateProfile};
use crate::dv01::parallel_dv01;
use crate::error::{RiskError, RiskResult};

/// Key-rate DV01 per unit notional: one row per pillar, one column per swap.
///
/// # Errors
///
/// Returns [`RiskError::UndefinedRatio`] if a swap has zero notional, or a
/// curve error for an invalid pillar index.
#[allow(clippy::float_cmp)]
pub fn key_rate_sensitivity_matrix(
    swaps: &[SizedSwap],
    curve: &ZeroCurve,
    indices: &[usize],
    bp: f64,
) -> RiskResult<DMatrix<f64>> {
    let mut matrix = DMatrix::zeros(indices.len(), swaps.len());
    for (col, swap) in swaps.iter().enumerate() {
        if swap.notional() == 0.0 {
            return Err(RiskError::undefined_ratio(format!(
                "per-notional sensitivity of {}y swap: notional is zero",
                swap.maturity_years()
            )));
        }
        let kr01 = key_rate_dv01s(swap, curve, indices, bp)?;
        for (row, exposure) in kr01.exposures.iter().enumerate() {
            matrix[(row, col)] = exposure.value / swap.notional();
        }
    }
    Ok(matrix)
}

/// A liability hedged at several key rates with one swap per key rate.
#[derive(Debug, Clone, Serialize)]
pub struct KeyRateHedge {
    /// Hedge swaps with solved notionals.
    pub swaps: Vec<SizedSwap>,
    /// Liability key-rate DV01s at the targeted pillars.
    pub liability_kr01: KeyRateProfile,
    /// Combined key-rate DV01s of the hedge swaps.
    pub hedge_kr01: KeyRateProfile,
    /// Liability plus hedge key-rate DV01s.
    pub residual_kr01: KeyRateProfile,
    /// Liability parallel DV01.
    pub liability_dv01: f64,
    /// Net parallel DV01 of liability plus hedge.
    pub net_dv01: f64,
    /// Determinant of the per-notional sensitivity matrix.
    pub determinant: f64,
}

impl KeyRateHedge {
    /// Solves for swap notionals neutralizing key-rate DV01 at `key_indices`.
    ///
    /// Reference swaps are sized to a unit parallel DV01 at par, then
    /// rescaled to the solved notionals; their fixed rates stay locked.
    ///
    /// # Errors
    ///
    /// - [`RiskError::InvalidInput`] if the counts differ or are zero
    /// - [`RiskError::DegenerateSystem`] if the sensitivity matrix is singular
    ///   at `risk.degenerate_threshold`
    pub fn solve<P: Priceable + ?Sized>(
        liability: &P,
        curve: &ZeroCurve,
        key_indices: &[usize],
        maturities: &[u32],
        payments_per_year: u32,
        risk: &RiskConfig,
    ) -> RiskResult<Self> {
        if key_indices.is_empty() || key_indices.len() != maturities.len() {
            return Err(RiskError::invalid_input(format!(
                "need one hedge maturity per key rate: {} key rates, {} maturities",
                key_indices.len(),
                maturities.len()
            )));
        }
        risk.validate()?;
        let bp = risk.bump_bps;

        let liability_kr01 = key_rate_dv01s(liability, curve, key_indices, bp)?;
        let reference: Vec<SizedSwap> = maturities
            .iter()
            .map(|&m| size_swap_for_target_dv01(1.0, curve, m, payments_per_year))
            .collect::<RiskResult<_>>()?;

        let a = key_rate_sensitivity_matrix(&reference, curve, key_indices, bp)?;
        let b = DVector::from_iterator(
            liability_kr01.len(),
            liability_kr01.exposures.iter().map(|e| -e.value),
        );
        let determinant = a.determinant();
        debug!(determinant, n = maturities.len(), "key rate hedge system");

        let notionals = solve_notionals(&a, &b, risk.degenerate_threshold)?;
        let swaps: Vec<SizedSwap> = reference
            .iter()
            .zip(notionals.iter())
            .map(|(swap, &n)| swap.with_notional(n))
            .collect();

        let hedge_kr01 = key_rate_dv01s(swaps.as_slice(), curve, key_indices, bp)?;
        let residual_kr01 = liability_kr01.combined(&hedge_kr01);
        let liability_dv01 = parallel_dv01(liability, curve, bp);
        let net_dv01 = liability_dv01 + parallel_dv01(swaps.as_slice(), curve, bp);

        debug!(?notionals, net_dv01, "key rate hedge solved");
        Ok(Self {
            swaps,
            liability_kr01,
            hedge_kr01,
            residual_kr01,
            liability_dv01,
            net_dv01,
            determinant,
        })
    }

    /// Solves using `hedge.key_rate_maturities` as both swap maturities and
    /// key pillars.
    ///
    /// # Errors
    ///
    /// Returns [`RiskError::InvalidInput`] if a maturity is not a curve
    /// pillar, plus the conditions of [`solve`](Self::solve).
    pub fn from_config<P: Priceable + ?Sized>(
        liability: &P,
        curve: &ZeroCurve,
        hedge: &HedgeConfig,
        risk: &RiskConfig,
    ) -> RiskResult<Self> {
        hedge.validate()?;
        let indices = hedge
            .key_rate_maturities
            .iter()
            .map(|&m| {
                curve.pillar_index(f64::from(m)).ok_or_else(|| {
                    RiskError::invalid_input(format!("{m}y hedge maturity is not a curve pillar"))
                })
            })
            .collect::<RiskResult<Vec<_>>>()?;
        Self::solve(
            liability,
            curve,
            &indices,
            &hedge.key_rate_maturities,
            hedge.payments_per_year,
            risk,
        )
    }

    /// Solved notionals in swap order.
    pub fn notionals(&self) -> Vec<f64> {
        self.swaps.iter().map(SizedSwap::notional).collect()
    }
}

/// Two swaps go through Cramer's rule on the raw matrix; larger systems
/// through LU.
///
/// Per-notional entries are of order 1e-4, so the determinant of an
/// `N x N` system shrinks like `1e-4^N`. Before the LU solve both sides are
/// divided by the largest absolute entry, which leaves the solution
/// unchanged and makes `threshold` compare against a unit-scale determinant.
#[allow(clippy::float_cmp)]
fn solve_notionals(a: &DMatrix<f64>, b: &DVector<f64>, threshold: f64) -> RiskResult<Vec<f64>> {
    if a.nrows() == 2 && a.ncols() == 2 {
        let (n1, n2) = solve_2x2(
            [[a[(0, 0)], a[(0, 1)]], [a[(1, 0)], a[(1, 1)]]],
            [b[0], b[1]],
            threshold,
        )?;
        return Ok(vec![n1, n2]);
    }

    let scale = a.amax();
    if !scale.is_finite() || scale == 0.0 {
        return Err(RiskError::DegenerateSystem {
            determinant: 0.0,
            threshold,
        });
    }
    let scaled = solve_linear_system(&(a / scale), &(b / scale), threshold)?;
    Ok(scaled.iter().copied().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ldi_liabilities::{AnnuityCertain, DeferredAnnuityCertain};
    use ldi_swaps::SwapDirection;

    fn curve() -> ZeroCurve {
        ZeroCurve::new(
            vec![0.5, 1.0, 2.0, 5.0, 10.0, 20.0],
            vec![0.030, 0.031, 0.033, 0.036, 0.038, 0.039],
        )
        .unwrap()
    }

    #[test]
    fn test_two_node_hedge() {
        let curve = curve();
        let liability = AnnuityCertain::new(100.0, 20);
        let hedge = KeyRateHedge::solve(&liability, &curve, &[4, 5], &[10, 20], 1, &RiskConfig::default())
            .unwrap();

        assert_eq!(hedge.swaps.len(), 2);
        for residual in hedge.residual_kr01.values() {
            assert!(residual.abs() < 1e-3, "residual KR01 {residual}");
        }
        assert!(hedge.net_dv01.abs() < 0.3, "net DV01 {}", hedge.net_dv01);
    }

    #[test]
    fn test_from_config_matches_solve() {
        let curve = curve();
        let liability = AnnuityCertain::new(100.0, 20);
        let risk = RiskConfig::default();
        let direct = KeyRateHedge::solve(&liability, &curve, &[4, 5], &[10, 20], 1, &risk).unwrap();
        let configured = KeyRateHedge::from_config(&liability, &curve, &HedgeConfig::default(), &risk).unwrap();
        assert_eq!(direct.notionals(), configured.notionals());
    }

    #[test]
    fn test_three_node_hedge_uses_general_solver() {
        let curve = curve();
        let liability = DeferredAnnuityCertain::new(100.0, 20, 0);
        let hedge = KeyRateHedge::solve(
            &liability,
            &curve,
            &[3, 4, 5],
            &[5, 10, 20],
            1,
            &RiskConfig::default(),
        )
        .unwrap();
        for residual in hedge.residual_kr01.values() {
            assert!(residual.abs() < 1e-3);
        }
    }

    #[test]
    fn test_degenerate_system() {
        // Two identical hedge swaps cannot span two key rates.
        let curve = curve();
        let liability = AnnuityCertain::new(100.0, 20);
        let err = KeyRateHedge::solve(&liability, &curve, &[4, 5], &[10, 10], 1, &RiskConfig::default())
            .unwrap_err();
        assert!(matches!(err, RiskError::DegenerateSystem { .. }));
    }

    #[test]
    fn test_four_node_hedge_with_small_determinant() {
        let curve = curve();
        let liability = AnnuityCertain::new(100.0, 20);
        let hedge = KeyRateHedge::solve(
            &liability,
            &curve,
            &[2, 3, 4, 5],
            &[2, 5, 10, 20],
            1,
            &RiskConfig::default(),
        )
        .unwrap();
        assert_eq!(hedge.swaps.len(), 4);
        for residual in hedge.residual_kr01.values() {
            assert!(residual.abs() < 1e-3, "residual KR01 {residual}");
        }
    }

    #[test]
    fn test_small_entries_not_degenerate() {
        // det = 1e-16, well conditioned
        let a = DMatrix::from_diagonal_element(4, 4, 1e-4);
        let b = DVector::from_vec(vec![1e-4, 2e-4, 3e-4, 4e-4]);
        let notionals = solve_notionals(&a, &b, 1e-12).unwrap();
        for (i, n) in notionals.iter().enumerate() {
            assert!((n - (i + 1) as f64).abs() < 1e-9);
        }
    }

    #[test]
    fn test_small_entries_singular_still_degenerate() {
        let a = DMatrix::from_row_slice(
            3,
            3,
            &[1e-4, 2e-4, 3e-4, 2e-4, 4e-4, 6e-4, 1e-4, 0.0, 1e-4],
        );
        let b = DVector::from_vec(vec![1e-4, 1e-4, 1e-4]);
        assert!(matches!(
            solve_notionals(&a, &b, 1e-12),
            Err(RiskError::DegenerateSystem { .. })
        ));
        assert!(matches!(
            solve_notionals(&DMatrix::zeros(3, 3), &b, 1e-12),
            Err(RiskError::DegenerateSystem { .. })
        ));
    }

    #[test]
    fn test_two_by_two_keeps_raw_threshold() {
        // det = 1e-14 < 1e-12 on the unscaled matrix
        let a = DMatrix::from_diagonal_element(2, 2, 1e-7);
        let b = DVector::from_vec(vec![1e-7, 1e-7]);
        assert!(matches!(
            solve_notionals(&a, &b, 1e-12),
            Err(RiskError::DegenerateSystem { .. })
        ));
    }

    #[test]
    fn test_count_mismatch() {
        let curve = curve();
        let liability = AnnuityCertain::new(100.0, 20);
        assert!(matches!(
            KeyRateHedge::solve(&liability, &curve, &[4, 5], &[10], 1, &RiskConfig::default()),
            Err(RiskError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_maturity_not_a_pillar() {
        let curve = curve();
        let liability = AnnuityCertain::new(100.0, 20);
        let hedge = HedgeConfig {
            key_rate_maturities: vec![10, 15],
            ..HedgeConfig::default()
        };
        assert!(KeyRateHedge::from_config(&liability, &curve, &hedge, &RiskConfig::default()).is_err());
    }

    #[test]
    fn test_zero_notional_rejected() {
        let curve = curve();
        let swap = SizedSwap::at_par(&curve, 10, 1, SwapDirection::PayerFixed, 0.0).unwrap();
        assert!(matches!(
            key_rate_sensitivity_matrix(&[swap], &curve, &[4], 1.0),
            Err(RiskError::UndefinedRatio { .. })
        ));
    }
}
