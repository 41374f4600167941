use super::{Sma, Smma, Zlema};
use crate::{Error, Number, PriceBar};
use serde::{Deserialize, Serialize};
use std::{fmt, num::NonZeroUsize};

pub const DEFAULT_LENGTH_MA: usize = 34;
pub const DEFAULT_LENGTH_SIGNAL: usize = 9;

/// Momentum state of a bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    /// Above the zero lag price and above the high band.
    Lime,
    /// Above the zero lag price, inside the high band.
    Green,
    /// At or below the zero lag price and below the low band.
    Red,
    /// At or below the zero lag price, inside the low band.
    Orange,
}

impl Color {
    /// Boundaries are asymmetric: ties with `mi` fall on the bearish side,
    /// ties with either band stay inside it.
    pub fn classify(hlc3: Number, mi: Number, hi: Number, lo: Number) -> Self {
        if hlc3 > mi {
            if hlc3 > hi {
                Self::Lime
            } else {
                Self::Green
            }
        } else if hlc3 < lo {
            Self::Red
        } else {
            Self::Orange
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Lime => "lime",
                Self::Green => "green",
                Self::Red => "red",
                Self::Orange => "orange",
            }
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpulseValue {
    /// Main difference.
    pub md: Number,
    /// Signal.
    pub sb: Number,
    /// Histogram, `md - sb`.
    pub sh: Number,
    pub color: Color,
}

impl fmt::Display for ImpulseValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "md: {:+.6}\t sb: {:+.6}\t sh: {:+.6}\t {}",
            self.md, self.sb, self.sh, self.color
        )
    }
}

/// Impulse MACD.
///
/// High and low are smoothed into two bands with Wilder's average, the typical
/// price is tracked by a zero lag EMA, and the main difference measures how far
/// the zero lag price sits outside the bands. Zero inside the bands.
///
/// Every result is kept in an append-only history.
#[derive(Debug, Clone)]
pub struct ImpulseMacd {
    length_ma: NonZeroUsize,
    length_signal: NonZeroUsize,
    high: Smma,
    low: Smma,
    mid: Zlema,
    signal: Sma,
    values: Vec<ImpulseValue>,
}

impl ImpulseMacd {
    pub fn new(length_ma: usize, length_signal: usize) -> Result<Self, Error> {
        let length_ma = NonZeroUsize::new(length_ma).ok_or(Error::InvalidConfiguration {
            name: "length_ma",
            value: length_ma,
        })?;
        let length_signal =
            NonZeroUsize::new(length_signal).ok_or(Error::InvalidConfiguration {
                name: "length_signal",
                value: length_signal,
            })?;

        Ok(Self::with_lengths(length_ma, length_signal))
    }

    pub fn with_lengths(length_ma: NonZeroUsize, length_signal: NonZeroUsize) -> Self {
        log::debug!(
            "Creating impulse macd: length_ma={}, length_signal={}",
            length_ma,
            length_signal
        );

        Self {
            length_ma,
            length_signal,
            high: Smma::new(length_ma),
            low: Smma::new(length_ma),
            mid: Zlema::new(length_ma),
            signal: Sma::new(length_signal),
            values: Vec::new(),
        }
    }

    pub fn length_ma(&self) -> usize {
        self.length_ma.get()
    }

    pub fn length_signal(&self) -> usize {
        self.length_signal.get()
    }

    /// Feeds one bar. Prices that are non-finite or exceed `MAX_PRICE` are
    /// rejected before any state changes.
    pub fn run(
        &mut self,
        high: Number,
        low: Number,
        close: Number,
    ) -> Result<ImpulseValue, Error> {
        let bar = PriceBar::new(high, low, close);
        Self::check(&bar)?;
        Ok(self.apply(bar))
    }

    pub fn run_bar(&mut self, bar: PriceBar) -> Result<ImpulseValue, Error> {
        self.run(bar.high, bar.low, bar.close)
    }

    /// Feeds bars in order. Either every bar is applied or, if any bar is
    /// rejected, none is.
    pub fn run_batch(&mut self, bars: &[PriceBar]) -> Result<Vec<ImpulseValue>, Error> {
        for bar in bars {
            Self::check(bar)?;
        }

        self.values.reserve(bars.len());
        Ok(bars.iter().map(|&bar| self.apply(bar)).collect())
    }

    /// Full history, oldest first.
    pub fn values(&self) -> &[ImpulseValue] {
        &self.values
    }

    pub fn latest(&self) -> Option<ImpulseValue> {
        self.values.last().copied()
    }

    pub fn reset(&mut self) {
        log::debug!("Resetting impulse macd after {} bars", self.values.len());

        self.high.reset();
        self.low.reset();
        self.mid.reset();
        self.signal.reset();
        self.values.clear();
    }

    fn check(bar: &PriceBar) -> Result<(), Error> {
        if bar.is_valid() {
            Ok(())
        } else {
            log::warn!("Rejecting bar with out of range price: {:?}", bar);
            Err(Error::InvalidInput {
                high: bar.high,
                low: bar.low,
                close: bar.close,
            })
        }
    }

    fn apply(&mut self, bar: PriceBar) -> ImpulseValue {
        let hlc3 = bar.hlc3();
        let hi = self.high.run(bar.high);
        let lo = self.low.run(bar.low);
        let mi = self.mid.run(hlc3);

        let md = if mi > hi {
            mi - hi
        } else if mi < lo {
            mi - lo
        } else {
            0.0
        };
        let sb = self.signal.run(md);

        let value = ImpulseValue {
            md,
            sb,
            sh: md - sb,
            color: Color::classify(hlc3, mi, hi, lo),
        };

        log::trace!(
            "Running impulse macd: hlc3={}, hi={}, lo={}, mi={}, md={}, sb={}",
            hlc3,
            hi,
            lo,
            mi,
            md,
            sb
        );

        self.values.push(value);
        value
    }
}

impl Default for ImpulseMacd {
    fn default() -> Self {
        Self::new(DEFAULT_LENGTH_MA, DEFAULT_LENGTH_SIGNAL).expect("default lengths are positive")
    }
}
