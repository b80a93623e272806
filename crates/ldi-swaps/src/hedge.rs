//! Hedge positions: none, one swap, or a book of swaps.

use ldi_curves::{Priceable, ZeroCurve};

use crate::swap::SizedSwap;

/// A borrowed hedge position.
///
/// All three shapes price uniformly: `None` is worth zero and a book is
/// worth the sum of its swaps.
#[derive(Debug, Clone, Copy, Default)]
pub enum Hedge<'a> {
    /// No hedge.
    #[default]
    None,
    /// A single swap.
    Single(&'a SizedSwap),
    /// Several swaps.
    Book(&'a [SizedSwap]),
}

impl<'a> Hedge<'a> {
    /// The swaps making up the hedge.
    pub fn swaps(&self) -> &'a [SizedSwap] {
        match *self {
            Hedge::None => &[],
            Hedge::Single(swap) => std::slice::from_ref(swap),
            Hedge::Book(swaps) => swaps,
        }
    }

    /// True when there is nothing to price.
    pub fn is_empty(&self) -> bool {
        self.swaps().is_empty()
    }
}

impl Priceable for Hedge<'_> {
    fn present_value(&self, curve: &ZeroCurve) -> f64 {
        self.swaps().present_value(curve)
    }
}

impl<'a> From<&'a SizedSwap> for Hedge<'a> {
    fn from(swap: &'a SizedSwap) -> Self {
        Hedge::Single(swap)
    }
}

impl<'a> From<&'a [SizedSwap]> for Hedge<'a> {
    fn from(swaps: &'a [SizedSwap]) -> Self {
        Hedge::Book(swaps)
    }
}

impl<'a> From<&'a Vec<SizedSwap>> for Hedge<'a> {
    fn from(swaps: &'a Vec<SizedSwap>) -> Self {
        Hedge::Book(swaps.as_slice())
    }
}

impl<'a> From<Option<&'a SizedSwap>> for Hedge<'a> {
    fn from(swap: Option<&'a SizedSwap>) -> Self {
        swap.map_or(Hedge::None, Hedge::Single)
    }
}
