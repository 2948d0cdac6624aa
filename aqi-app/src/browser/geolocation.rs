use async_trait::async_trait;
use js_sys::Promise;
use leptos::window;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::GeolocationPosition;

use aqi_core::{gateways::Geolocation, geo::Coordinates, Error, Result};

use super::{has_property, js_error_message};

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserGeolocation;

#[async_trait(?Send)]
impl Geolocation for BrowserGeolocation {
    async fn current_position(&self) -> Result<Coordinates> {
        let navigator = window().navigator();
        if !has_property(&navigator, "geolocation") {
            return Err(Error::GeolocationUnsupported);
        }
        let geolocation = navigator
            .geolocation()
            .map_err(|err| Error::Geolocation(js_error_message(&err)))?;
        let promise = Promise::new(&mut |resolve, reject| {
            if let Err(err) =
                geolocation.get_current_position_with_error_callback(&resolve, Some(&reject))
            {
                _ = reject.call1(&JsValue::NULL, &err);
            }
        });
        let position: GeolocationPosition = JsFuture::from(promise)
            .await
            .map_err(|err| Error::Geolocation(js_error_message(&err)))?
            .unchecked_into();
        let coords = position.coords();
        Ok(Coordinates::new(coords.latitude(), coords.longitude()))
    }
}
