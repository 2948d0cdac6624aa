use async_trait::async_trait;

use aqi_boundary::PushSubscription;

use crate::Result;

/// Options for requesting a new push subscription.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionOptions {
    pub user_visible_only: bool,
    /// Raw bytes of the server's VAPID public key.
    pub application_server_key: Vec<u8>,
}

/// Service worker and push manager of the browser.
#[async_trait(?Send)]
pub trait PushService {
    /// The browser owned subscription object.
    type Subscription;

    fn is_supported(&self) -> bool;
    async fn register_worker(&self, script_url: &str) -> Result<()>;
    /// Resolves as soon as a service worker is active.
    async fn ready(&self) -> Result<()>;
    async fn current_subscription(&self) -> Result<Option<Self::Subscription>>;
    async fn subscribe(&self, options: &SubscriptionOptions) -> Result<Self::Subscription>;
    async fn unsubscribe(&self, subscription: Self::Subscription) -> Result<()>;
    fn to_json(&self, subscription: &Self::Subscription) -> Result<PushSubscription>;
}
