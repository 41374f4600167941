use crate::Number;
use serde::{Deserialize, Serialize};

/// Largest accepted price magnitude. Every filter output is bounded by a small
/// multiple of its inputs, so prices within this bound keep the smoothing
/// arithmetic (including the Wilder `value * (period - 1)` term and the signal
/// window sum) far from overflow.
pub const MAX_PRICE: Number = 1e150;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    pub high: Number,
    pub low: Number,
    pub close: Number,
}

impl PriceBar {
    pub fn new(high: Number, low: Number, close: Number) -> Self {
        Self { high, low, close }
    }

    /// Typical price.
    pub fn hlc3(&self) -> Number {
        (self.high + self.low + self.close) / 3.0
    }

    /// Finite and within `MAX_PRICE` in magnitude.
    pub fn is_valid_price(price: Number) -> bool {
        price.is_finite() && price.abs() <= MAX_PRICE
    }

    pub fn is_valid(&self) -> bool {
        Self::is_valid_price(self.high)
            && Self::is_valid_price(self.low)
            && Self::is_valid_price(self.close)
    }
}
