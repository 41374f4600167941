pub mod bar;
pub mod config;
pub mod feeds;
pub mod indicators;
mod error;

pub use bar::{PriceBar, MAX_PRICE};
pub use config::Config;
pub use error::Error;
pub use indicators::{Color, ImpulseMacd, ImpulseValue};

pub type Number = f64;
