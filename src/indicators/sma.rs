use crate::Number;
use std::{collections::VecDeque, num::NonZeroUsize};

/// Simple moving average over the last `period` inputs.
///
/// Until `period` inputs have been seen the mean is taken over the inputs
/// received so far. Non-finite inputs are not checked; a NaN stays in the
/// running sum even after it leaves the window.
#[derive(Debug, Clone)]
pub struct Sma {
    period: usize,
    window: VecDeque<Number>,
    sum: Number,
}

impl Sma {
    pub fn new(period: NonZeroUsize) -> Self {
        Self {
            period: period.get(),
            window: VecDeque::with_capacity(period.get()),
            sum: 0.0,
        }
    }

    pub fn run(&mut self, input: Number) -> Number {
        if self.window.len() == self.period {
            if let Some(oldest) = self.window.pop_front() {
                self.sum -= oldest;
            }
        }
        self.window.push_back(input);
        self.sum += input;

        self.sum / self.window.len() as Number
    }

    pub fn get(&self) -> Option<Number> {
        if self.window.is_empty() {
            None
        } else {
            Some(self.sum / self.window.len() as Number)
        }
    }

    /// Number of inputs currently held, at most `period`.
    pub fn len(&self) -> usize {
        self.window.len()
    }

    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    pub fn reset(&mut self) {
        self.window.clear();
        self.sum = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn period(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn warm_up() {
        let mut sma = Sma::new(period(4));
        assert_eq!(sma.get(), None);
        assert_eq!(sma.run(2.0), 2.0);
        assert_eq!(sma.run(4.0), 3.0);
        assert_eq!(sma.run(9.0), 5.0);
        assert_eq!(sma.len(), 3);
    }

    #[test]
    fn sliding() {
        let mut sma = Sma::new(period(3));
        sma.run(1.0);
        sma.run(2.0);
        assert_eq!(sma.run(3.0), 2.0);
        assert_eq!(sma.run(7.0), 4.0);
        assert_eq!(sma.run(-1.0), 3.0);
        assert_eq!(sma.run(0.0), 2.0);
        assert_eq!(sma.len(), 3);
        assert_eq!(sma.get(), Some(2.0));
    }

    #[test]
    fn window_never_exceeds_period() {
        let mut sma = Sma::new(period(5));
        for i in 0..50 {
            sma.run(i as Number);
            assert!(sma.len() <= 5);
        }
        // 45..=49
        assert_eq!(sma.get(), Some(47.0));
    }

    #[test]
    fn period_one() {
        let mut sma = Sma::new(period(1));
        assert_eq!(sma.run(5.0), 5.0);
        assert_eq!(sma.run(-3.0), -3.0);
        assert_eq!(sma.len(), 1);
    }

    #[test]
    fn non_finite_propagates() {
        let mut sma = Sma::new(period(2));
        sma.run(Number::NAN);
        sma.run(1.0);
        assert!(sma.run(2.0).is_nan());
        sma.reset();
        assert_eq!(sma.run(2.0), 2.0);
    }

    #[test]
    fn reset() {
        let mut sma = Sma::new(period(2));
        sma.run(10.0);
        sma.run(20.0);
        sma.reset();
        assert!(sma.is_empty());
        assert_eq!(sma.run(1.0), 1.0);
    }
}
