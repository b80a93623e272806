//! Liability cash flows.

use serde::{Deserialize, Serialize};

/// A single payment at a time measured in years from valuation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CashFlow {
    /// Payment time in years.
    pub time: f64,
    /// Payment amount.
    pub amount: f64,
}

impl CashFlow {
    /// Creates a new cash flow.
    #[must_use]
    pub fn new(time: f64, amount: f64) -> Self {
        Self { time, amount }
    }
}

/// Level annual payments at `t = first, first + 1, ..., first + count - 1`.
///
/// Times are counted in `u64`, so no `u32` inputs can wrap.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn annual_schedule(first: u64, count: u32, amount: f64) -> Vec<CashFlow> {
    (first..first + u64::from(count))
        .map(|t| CashFlow::new(t as f64, amount))
        .collect()
}
