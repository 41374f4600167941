mod ema;
mod impulse;
mod sma;
mod smma;
mod zlema;

pub use ema::Ema;
pub use impulse::{Color, ImpulseMacd, ImpulseValue, DEFAULT_LENGTH_MA, DEFAULT_LENGTH_SIGNAL};
pub use sma::Sma;
pub use smma::Smma;
pub use zlema::Zlema;
