use super::Ema;
use crate::Number;
use std::num::NonZeroUsize;

/// Zero lag EMA. The second EMA smooths the output of the first, and the gap
/// between the two is added back to cancel the first order lag.
#[derive(Debug, Copy, Clone)]
pub struct Zlema {
    fast: Ema,
    slow: Ema,
    output: Option<Number>,
}

impl Zlema {
    pub fn new(period: NonZeroUsize) -> Self {
        Self {
            fast: Ema::new(period),
            slow: Ema::new(period),
            output: None,
        }
    }

    pub fn run(&mut self, input: Number) -> Number {
        let fast = self.fast.run(input);
        let slow = self.slow.run(fast);
        let output = fast + (fast - slow);
        self.output = Some(output);
        output
    }

    pub fn get(&self) -> Option<Number> {
        self.output
    }

    pub fn reset(&mut self) {
        self.fast.reset();
        self.slow.reset();
        self.output = None;
    }
}
