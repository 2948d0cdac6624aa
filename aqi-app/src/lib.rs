use leptos::*;
use wasm_bindgen::prelude::wasm_bindgen;

use aqi_core::{
    aqi::AqiReading,
    usecases::{self, Unsubscribed},
};
use aqi_frontend_api::AirAlertApi;

mod browser;
mod components;
mod ports;

use browser::{BrowserGeolocation, BrowserPush};
use components::*;
use ports::{DialogSignals, DisplaySignal};

const DEFAULT_API_URL: &str = "";
const WORKER_SCRIPT_URL: &str = "/worker.js";

#[component]
#[must_use]
pub fn App() -> impl IntoView {
    // -- signals -- //

    let reading = RwSignal::new(None::<AqiReading>);
    let dialog = DialogSignals {
        open: RwSignal::new(false),
        stop_visible: RwSignal::new(false),
        threshold: create_node_ref(),
    };
    let display = DisplaySignal(reading);

    // -- gateways -- //

    let api = AirAlertApi::new(DEFAULT_API_URL);
    let geolocation = BrowserGeolocation;
    let push = BrowserPush;

    // -- actions -- //

    let show_current_aqi = Action::new(move |()| async move {
        if let Err(err) = usecases::show_current_aqi(&geolocation, &api, &display).await {
            log::error!("Unable to show current AQI: {err}");
        }
    });

    let register_worker = Action::new(move |()| async move {
        if let Err(err) = usecases::register_worker(&push, WORKER_SCRIPT_URL).await {
            log::error!("Unable to register service worker: {err}");
        }
    });

    let toggle_dialog = Action::new(move |()| async move {
        let open = usecases::toggle_subscribe_dialog(&push, &dialog).await;
        log::debug!("Subscribe dialog is open: {open}");
    });

    let subscribe = Action::new(move |()| async move {
        match usecases::subscribe(&push, &api, &geolocation, &dialog).await {
            Ok(()) => {
                log::info!("Subscribed to AQI notifications");
            }
            Err(err) => {
                log::error!("Unable to subscribe: {err}");
            }
        }
    });

    let unsubscribe = Action::new(move |()| async move {
        match usecases::unsubscribe(&push, &api, &dialog).await {
            Ok(Unsubscribed::Removed) => {
                log::info!("Unsubscribed from AQI notifications");
            }
            Ok(Unsubscribed::NotSubscribed) => {
                log::debug!("Nothing to unsubscribe");
            }
            Err(err) => {
                log::error!("Unable to unsubscribe: {err}");
            }
        }
    });

    // -- callbacks -- //

    let on_toggle = move || {
        toggle_dialog.dispatch(());
    };

    let on_subscribe = move || {
        subscribe.dispatch(());
    };

    let on_unsubscribe = move || {
        unsubscribe.dispatch(());
    };

    // -- init -- //

    show_current_aqi.dispatch(());
    register_worker.dispatch(());

    view! {
      <main class="container">
        <AqiBox reading = reading.into() />
        <div class="has-text-centered">
          <button id="toggle-modal" class="button toggle-modal" on:click = move |_| on_toggle()>
            "Get notified"
          </button>
        </div>
        <SubscribeModal dialog on_toggle on_subscribe on_unsubscribe />
      </main>
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
    log::info!("Start web application");
    mount_to_body(|| view! { <App /> });
}
