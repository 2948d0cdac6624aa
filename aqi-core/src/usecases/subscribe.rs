use super::prelude::*;
use crate::threshold::parse_threshold;

/// Subscribes to AQI notifications for the current position.
///
/// An existing push subscription is reused. Delivering the subscription
/// to the backend is fire-and-forget: a failure is logged and the
/// dialog is closed anyway.
pub async fn subscribe<P, S, G, D>(
    push: &P,
    gateway: &S,
    geolocation: &G,
    dialog: &D,
) -> Result<()>
where
    P: PushService,
    S: SubscriptionGateway,
    G: Geolocation,
    D: SubscribeDialog,
{
    let threshold = parse_threshold(&dialog.threshold_input())?;
    if !push.is_supported() {
        return Err(Error::PushUnsupported);
    }
    push.ready().await?;
    let subscription = if let Some(existing) = push.current_subscription().await? {
        log::debug!("Reuse existing push subscription");
        existing
    } else {
        let application_server_key = gateway.public_key().await?;
        let options = SubscriptionOptions {
            user_visible_only: true,
            application_server_key,
        };
        push.subscribe(&options).await?
    };
    let subscription = push.to_json(&subscription)?;
    let Coordinates { lat, lng } = geolocation.current_position().await?;
    let req = SubscribeRequest {
        subscription,
        latitude: lat,
        longitude: lng,
        threshold,
    };
    if let Err(err) = gateway.subscribe(&req).await {
        log::error!("Unable to subscribe: {err}");
    }
    dialog.set_open(false);
    Ok(())
}
