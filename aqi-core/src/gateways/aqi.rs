use async_trait::async_trait;

use crate::{geo::Coordinates, Result};

#[async_trait(?Send)]
pub trait AqiGateway {
    /// Returns the response body of the current-AQI endpoint as is.
    async fn current_aqi(&self, pos: Coordinates) -> Result<String>;
}
