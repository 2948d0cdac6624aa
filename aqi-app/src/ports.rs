use leptos::*;

use aqi_core::{
    aqi::AqiReading,
    ports::{AqiDisplay, SubscribeDialog},
};

#[derive(Clone, Copy)]
pub struct DisplaySignal(pub RwSignal<Option<AqiReading>>);

impl AqiDisplay for DisplaySignal {
    fn show_aqi(&self, reading: &AqiReading) {
        self.0.set(Some(reading.clone()));
    }
}

#[derive(Clone, Copy)]
pub struct DialogSignals {
    pub open: RwSignal<bool>,
    pub stop_visible: RwSignal<bool>,
    pub threshold: NodeRef<html::Input>,
}

impl SubscribeDialog for DialogSignals {
    fn is_open(&self) -> bool {
        self.open.get_untracked()
    }

    fn set_open(&self, open: bool) {
        self.open.set(open);
    }

    fn show_stop_notifications(&self, visible: bool) {
        self.stop_visible.set(visible);
    }

    fn threshold_input(&self) -> String {
        self.threshold
            .get_untracked()
            .map(|input| input.value())
            .unwrap_or_default()
    }
}
