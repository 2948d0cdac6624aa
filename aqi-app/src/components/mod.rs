mod aqi_box;
mod subscribe_modal;

pub use self::{aqi_box::*, subscribe_modal::*};
