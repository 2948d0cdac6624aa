use async_trait::async_trait;
use js_sys::{Uint8Array, JSON};
use leptos::window;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    PushManager, PushSubscription, PushSubscriptionOptionsInit, ServiceWorkerContainer,
    ServiceWorkerRegistration,
};

use aqi_core::{
    gateways::{PushService, SubscriptionOptions},
    Error, Result,
};

use super::{has_property, js_error_message};

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserPush;

fn push_error(err: JsValue) -> Error {
    Error::Push(js_error_message(&err))
}

impl BrowserPush {
    fn container() -> Result<ServiceWorkerContainer> {
        let navigator = window().navigator();
        if !has_property(&navigator, "serviceWorker") {
            return Err(Error::PushUnsupported);
        }
        Ok(navigator.service_worker())
    }

    async fn registration() -> Result<ServiceWorkerRegistration> {
        let ready = Self::container()?.ready().map_err(push_error)?;
        let registration = JsFuture::from(ready).await.map_err(push_error)?;
        Ok(registration.unchecked_into())
    }

    async fn push_manager() -> Result<PushManager> {
        Self::registration()
            .await?
            .push_manager()
            .map_err(push_error)
    }
}

#[async_trait(?Send)]
impl PushService for BrowserPush {
    type Subscription = PushSubscription;

    fn is_supported(&self) -> bool {
        let window = window();
        has_property(&window.navigator(), "serviceWorker") && has_property(&window, "PushManager")
    }

    async fn register_worker(&self, script_url: &str) -> Result<()> {
        let promise = Self::container()?.register(script_url);
        JsFuture::from(promise).await.map_err(push_error)?;
        Ok(())
    }

    async fn ready(&self) -> Result<()> {
        Self::registration().await?;
        Ok(())
    }

    async fn current_subscription(&self) -> Result<Option<PushSubscription>> {
        let promise = Self::push_manager()
            .await?
            .get_subscription()
            .map_err(push_error)?;
        let subscription = JsFuture::from(promise).await.map_err(push_error)?;
        if subscription.is_null() || subscription.is_undefined() {
            return Ok(None);
        }
        Ok(Some(subscription.unchecked_into()))
    }

    async fn subscribe(&self, options: &SubscriptionOptions) -> Result<PushSubscription> {
        let key: JsValue = Uint8Array::from(options.application_server_key.as_slice()).into();
        let init = PushSubscriptionOptionsInit::new();
        init.set_user_visible_only(options.user_visible_only);
        init.set_application_server_key(Some(&key));
        let promise = Self::push_manager()
            .await?
            .subscribe_with_options(&init)
            .map_err(push_error)?;
        let subscription = JsFuture::from(promise).await.map_err(push_error)?;
        Ok(subscription.unchecked_into())
    }

    async fn unsubscribe(&self, subscription: PushSubscription) -> Result<()> {
        let promise = subscription.unsubscribe().map_err(push_error)?;
        let unsubscribed = JsFuture::from(promise).await.map_err(push_error)?;
        if unsubscribed.as_bool() != Some(true) {
            log::warn!("The browser did not drop the push subscription");
        }
        Ok(())
    }

    fn to_json(&self, subscription: &PushSubscription) -> Result<aqi_boundary::PushSubscription> {
        let json = JSON::stringify(subscription).map_err(push_error)?;
        serde_json::from_str(&String::from(json)).map_err(|err| Error::Push(err.to_string()))
    }
}
