use leptos::*;

use crate::ports::DialogSignals;

const DEFAULT_THRESHOLD: &str = "100";

#[component]
pub fn SubscribeModal<T, S, U>(
    dialog: DialogSignals,
    on_toggle: T,
    on_subscribe: S,
    on_unsubscribe: U,
) -> impl IntoView
where
    T: Fn() + 'static + Copy,
    S: Fn() + 'static + Copy,
    U: Fn() + 'static + Copy,
{
    let DialogSignals {
        open,
        stop_visible,
        threshold,
    } = dialog;

    view! {
      <div id="subscribe-modal" class="modal" class:active = move || open.get()>
        <div class="modal-background toggle-modal" on:click = move |_| on_toggle()></div>
        <div class="modal-card">
          <header class="modal-card-head">
            <p class="modal-card-title">"Air quality notifications"</p>
            <button
              class="delete toggle-modal"
              aria-label="close"
              on:click = move |_| on_toggle()
            ></button>
          </header>
          <section class="modal-card-body">
            <label class="label" for="threshold-preferences">
              "Notify me when the AQI rises above"
            </label>
            <input
              id="threshold-preferences"
              class="input"
              type="number"
              min="0"
              value=DEFAULT_THRESHOLD
              node_ref=threshold
            />
          </section>
          <footer class="modal-card-foot">
            <button id="subscribe-button" class="button is-success" on:click = move |_| on_subscribe()>
              "Subscribe"
            </button>
            <button
              id="stop-notifications"
              class="button is-danger"
              class:is-hidden = move || !stop_visible.get()
              on:click = move |_| on_unsubscribe()
            >
              "Stop notifications"
            </button>
          </footer>
        </div>
      </div>
    }
}
