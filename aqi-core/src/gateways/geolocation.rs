use async_trait::async_trait;

use crate::{geo::Coordinates, Result};

#[async_trait(?Send)]
pub trait Geolocation {
    /// Requests the current position once, without retries.
    async fn current_position(&self) -> Result<Coordinates>;
}
