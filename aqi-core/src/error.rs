use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("geolocation not supported")]
    GeolocationUnsupported,
    #[error("Unable to determine the current position: {0}")]
    Geolocation(String),
    #[error("push notifications not supported")]
    PushUnsupported,
    #[error("Push manager failure: {0}")]
    Push(String),
    #[error("{0}")]
    Network(String),
    #[error("Invalid threshold: {0:?}")]
    InvalidThreshold(String),
}
