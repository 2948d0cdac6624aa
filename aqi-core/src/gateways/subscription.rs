use async_trait::async_trait;

use aqi_boundary::{SubscribeRequest, UnsubscribeRequest};

use crate::Result;

/// Subscription endpoints of the backend.
#[async_trait(?Send)]
pub trait SubscriptionGateway {
    async fn public_key(&self) -> Result<Vec<u8>>;
    async fn subscribe(&self, req: &SubscribeRequest) -> Result<()>;
    async fn unsubscribe(&self, req: &UnsubscribeRequest) -> Result<()>;
}
