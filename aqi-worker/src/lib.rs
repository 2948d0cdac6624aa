//! Service worker that turns AQI push messages into notifications.
//!
//! Event listeners must exist after the first synchronous evaluation of
//! the worker script, so they are added by the JS loader and forward to
//! the handlers exported here once the module is instantiated.

use js_sys::Promise;
use wasm_bindgen::{prelude::*, JsCast};
use web_sys::{NotificationEvent, NotificationOptions, PushEvent, ServiceWorkerGlobalScope};

use aqi_core::notification::{NotificationContent, NOTIFICATION_CLICK_URL};

#[wasm_bindgen(start)]
pub fn start() {
    _ = console_log::init_with_level(log::Level::Info);
    console_error_panic_hook::set_once();
    log::info!("Service worker started");
}

fn scope() -> ServiceWorkerGlobalScope {
    js_sys::global().unchecked_into()
}

/// Shows the push payload as a notification.
///
/// The returned promise settles when the notification is shown.
#[wasm_bindgen]
pub fn on_push(event: PushEvent) -> Result<Promise, JsValue> {
    let payload = event.data().map(|data| data.text());
    let content = NotificationContent::from_push_payload(payload.as_deref());
    log::debug!("Show notification: {}", content.body);
    let options = NotificationOptions::new();
    options.set_body(&content.body);
    scope()
        .registration()
        .show_notification_with_options(&content.title, &options)
        .inspect_err(|err| log::error!("Unable to show notification: {err:?}"))
}

/// Closes the clicked notification and opens the app.
#[wasm_bindgen]
pub fn on_notification_click(event: NotificationEvent) -> Promise {
    event.notification().close();
    scope().clients().open_window(NOTIFICATION_CLICK_URL)
}
