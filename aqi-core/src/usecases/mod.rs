mod register_worker;
mod show_current_aqi;
mod subscribe;
mod toggle_subscribe_dialog;
mod unsubscribe;


pub use self::{
    register_worker::*, show_current_aqi::*, subscribe::*, toggle_subscribe_dialog::*,
    unsubscribe::*,
};

mod prelude {
    pub use crate::{aqi::*, gateways::*, geo::*, ports::*, Error, Result};
    pub use aqi_boundary::{SubscribeRequest, UnsubscribeRequest};
}
