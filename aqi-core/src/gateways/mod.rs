mod aqi;
mod geolocation;
mod push;
mod subscription;

pub use self::{aqi::*, geolocation::*, push::*, subscription::*};
