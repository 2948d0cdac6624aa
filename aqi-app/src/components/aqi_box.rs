use leptos::*;

use aqi_core::aqi::AqiReading;

const PLACEHOLDER: &str = "--";

#[component]
pub fn AqiBox(reading: Signal<Option<AqiReading>>) -> impl IntoView {
    let text = move || {
        reading
            .get()
            .map_or_else(|| PLACEHOLDER.to_string(), |r| r.text)
    };
    let color = move || reading.get().map(|r| r.band().color());

    view! {
      <section id="aqi-box" class="aqi-box" style:background-color = color>
        <p class="aqi-label">"Current AQI"</p>
        <p id="aqi-value" class="aqi-value">{ text }</p>
      </section>
    }
}
