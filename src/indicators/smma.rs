use crate::Number;
use std::num::NonZeroUsize;

/// Wilder's smoothed moving average, an EMA with smoothing constant
/// `1 / period`. Non-finite inputs are not checked and propagate.
#[derive(Debug, Copy, Clone)]
pub struct Smma {
    period: Number,
    output: Option<Number>,
}

impl Smma {
    pub fn new(period: NonZeroUsize) -> Self {
        Self {
            period: period.get() as Number,
            output: None,
        }
    }

    pub fn run(&mut self, input: Number) -> Number {
        let output = match self.output {
            Some(output) => (output * (self.period - 1.0) + input) / self.period,
            None => input,
        };
        self.output = Some(output);
        output
    }

    pub fn get(&self) -> Option<Number> {
        self.output
    }

    pub fn reset(&mut self) {
        self.output = None;
    }
}
