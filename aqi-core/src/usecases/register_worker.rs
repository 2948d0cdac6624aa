use super::prelude::*;

/// Registers the service worker if the browser supports it.
///
/// Returns `false` if there is nothing to register with.
pub async fn register_worker<P>(push: &P, script_url: &str) -> Result<bool>
where
    P: PushService,
{
    if !push.is_supported() {
        log::info!("Service workers are not supported: push notifications are disabled");
        return Ok(false);
    }
    push.register_worker(script_url).await?;
    log::debug!("Registered service worker {script_url}");
    Ok(true)
}
