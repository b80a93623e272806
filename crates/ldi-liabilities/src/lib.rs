//! # LDI Liabilities
//!
//! Cash-flow liability models for the LDI liability hedging library.
//!
//! - [`AnnuityCertain`]: level annual payments
//! - [`DeferredAnnuityCertain`]: level payments after a deferral period
//! - [`LifeAnnuityImmediate`]: survival-weighted payments under [`GompertzMakeham`]
//!
//! All models value under a [`PricingBasis`] (a flat rate or a zero curve)
//! and implement [`Priceable`](ldi_curves::Priceable) for curve-based risk.
//!
//! ```rust
//! use ldi_curves::{Priceable, ZeroCurve};
//! use ldi_liabilities::prelude::*;
//!
//! let curve = ZeroCurve::flat(vec![1.0, 30.0], 0.035).unwrap();
//! let liability = DeferredAnnuityCertain::new(100.0, 20, 5);
//!
//! let on_curve = liability.present_value(&curve);
//! let at_rate = liability.pv_at_rate(0.035);
//! assert!((on_curve - at_rate).abs() < 1e-9);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod annuities;
pub mod basis;
pub mod cashflow;
pub mod error;
pub mod mortality;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::annuities::{
        AnnuityCertain, DeferredAnnuityCertain, LiabilityInstrument, LifeAnnuityImmediate,
        Liability,
    };
    pub use crate::basis::PricingBasis;
    pub use crate::cashflow::CashFlow;
    pub use crate::error::{LiabilityError, LiabilityResult};
    pub use crate::mortality::GompertzMakeham;
}

pub use annuities::{
    AnnuityCertain, DeferredAnnuityCertain, LiabilityInstrument, LifeAnnuityImmediate, Liability,
};
pub use basis::PricingBasis;
pub use cashflow::CashFlow;
pub use error::{LiabilityError, LiabilityResult};
pub use mortality::GompertzMakeham;
