use super::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unsubscribed {
    /// The subscription was removed from the backend and the browser.
    Removed,
    /// There was no subscription, nothing has been sent.
    NotSubscribed,
}

/// Stops AQI notifications.
///
/// The browser subscription is only dropped after the backend
/// has accepted the removal.
pub async fn unsubscribe<P, S, D>(push: &P, gateway: &S, dialog: &D) -> Result<Unsubscribed>
where
    P: PushService,
    S: SubscriptionGateway,
    D: SubscribeDialog,
{
    if !push.is_supported() {
        return Err(Error::PushUnsupported);
    }
    push.ready().await?;
    let outcome = match push.current_subscription().await? {
        Some(subscription) => {
            let req = UnsubscribeRequest {
                subscription: push.to_json(&subscription)?,
            };
            gateway.unsubscribe(&req).await?;
            push.unsubscribe(subscription).await?;
            Unsubscribed::Removed
        }
        None => {
            log::warn!("Unable to unsubscribe: there is no active push subscription");
            Unsubscribed::NotSubscribed
        }
    };
    dialog.show_stop_notifications(false);
    dialog.set_open(false);
    Ok(outcome)
}
