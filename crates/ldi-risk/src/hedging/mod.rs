//! Hedge sizing with interest rate swaps.
//!
//! - [`size_swap_for_target_dv01`]: one payer-fixed swap against a parallel DV01
//! - [`KeyRateHedge`]: N swaps against N key-rate DV01s, solved as a linear system

mod key_rate;
mod single;

pub use key_rate::{key_rate_sensitivity_matrix, KeyRateHedge};
pub use single::{size_swap_for_target_dv01, DV01Hedge};
