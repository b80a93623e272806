//! The pricing capability consumed by the risk engine.
//!
//! Anything that can report a present value under a [`ZeroCurve`] implements
//! [`Priceable`]. Sensitivities (DV01, durations, key-rate exposures) are
//! written once against this trait and work for single liabilities, single
//! swaps and whole hedge books alike.

use crate::curves::ZeroCurve;

/// Present value under a zero curve.
///
/// Implementations must be pure: the same curve always gives the same PV.
///
/// Collections price as the sum of their elements, so an empty slice, a
/// single instrument and a book of instruments are all handled uniformly.
///
/// # Example
///
/// ```rust
/// use ldi_curves::{Priceable, ZeroCurve};
///
/// struct ZeroCoupon {
///     amount: f64,
///     maturity: f64,
/// }
///
/// impl Priceable for ZeroCoupon {
///     fn present_value(&self, curve: &ZeroCurve) -> f64 {
///         self.amount * curve.discount_factor(self.maturity)
///     }
/// }
///
/// let curve = ZeroCurve::flat(vec![1.0, 10.0], 0.03).unwrap();
/// let book = vec![
///     ZeroCoupon { amount: 100.0, maturity: 2.0 },
///     ZeroCoupon { amount: 50.0, maturity: 5.0 },
/// ];
/// let total = book.present_value(&curve);
/// assert!((total - book[0].present_value(&curve) - book[1].present_value(&curve)).abs() < 1e-12);
/// ```
pub trait Priceable {
    /// Returns the present value under `curve`.
    fn present_value(&self, curve: &ZeroCurve) -> f64;
}

impl<T: Priceable + ?Sized> Priceable for &T {
    fn present_value(&self, curve: &ZeroCurve) -> f64 {
        (**self).present_value(curve)
    }
}

impl<T: Priceable + ?Sized> Priceable for Box<T> {
    fn present_value(&self, curve: &ZeroCurve) -> f64 {
        (**self).present_value(curve)
    }
}

impl<T: Priceable> Priceable for [T] {
    fn present_value(&self, curve: &ZeroCurve) -> f64 {
        self.iter().map(|item| item.present_value(curve)).sum()
    }
}

impl<T: Priceable> Priceable for Vec<T> {
    fn present_value(&self, curve: &ZeroCurve) -> f64 {
        self.as_slice().present_value(curve)
    }
}

/// `None` prices at zero.
impl<T: Priceable> Priceable for Option<T> {
    fn present_value(&self, curve: &ZeroCurve) -> f64 {
        self.as_ref().map_or(0.0, |item| item.present_value(curve))
    }
}
