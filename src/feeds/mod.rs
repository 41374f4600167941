mod historical;

pub use historical::Historical;

use crate::{Error, ImpulseMacd, ImpulseValue};
use async_trait::async_trait;

/// A source of price bars that drives an indicator.
#[async_trait]
pub trait Feed: Send + 'static {
    async fn run(self, impulse: &mut ImpulseMacd) -> Result<Vec<ImpulseValue>, Error>;
}
