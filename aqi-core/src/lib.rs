//! Domain logic of the Air Alert web client.
//!
//! Everything that touches the browser or the network is reached through
//! the traits in [`gateways`] and [`ports`], so the use cases run unchanged
//! inside the WebAssembly app and against test doubles.

pub mod aqi;
pub mod gateways;
pub mod geo;
pub mod notification;
pub mod ports;
pub mod threshold;
pub mod usecases;

mod error;

pub use self::error::Error;

pub type Result<T> = std::result::Result<T, Error>;
