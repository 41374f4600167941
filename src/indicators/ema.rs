use crate::Number;
use std::num::NonZeroUsize;

/// Exponential moving average with smoothing constant `2 / (period + 1)`.
///
/// The first input seeds the output directly. Non-finite inputs are not
/// checked here and propagate into every later output.
#[derive(Debug, Copy, Clone)]
pub struct Ema {
    output: Option<Number>,
    alpha: Number,
}

impl Ema {
    pub fn new(period: NonZeroUsize) -> Self {
        Self {
            alpha: 2.0 / (1.0 + period.get() as Number),
            output: None,
        }
    }

    pub fn run(&mut self, input: Number) -> Number {
        let output = match self.output {
            Some(output) => input * self.alpha + output * (1.0 - self.alpha),
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
