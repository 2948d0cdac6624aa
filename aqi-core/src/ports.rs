//! The parts of the page the use cases write to.

use crate::aqi::AqiReading;

pub trait AqiDisplay {
    fn show_aqi(&self, reading: &AqiReading);
}

pub trait SubscribeDialog {
    fn is_open(&self) -> bool;
    fn set_open(&self, open: bool);
    fn show_stop_notifications(&self, visible: bool);
    /// Raw value of the threshold input control.
    fn threshold_input(&self) -> String;
}
