use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use thiserror::Error;

use aqi_boundary::{SubscribeRequest, UnsubscribeRequest};
use aqi_core::{
    gateways::{AqiGateway, SubscriptionGateway},
    geo::Coordinates,
};

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    #[error("{0}")]
    Fetch(String),

    #[error("HTTP {status}: {message}")]
    Api { status: u16, message: String },
}

impl From<gloo_net::Error> for Error {
    fn from(err: gloo_net::Error) -> Self {
        Self::Fetch(format!("{err}"))
    }
}

impl From<Error> for aqi_core::Error {
    fn from(err: Error) -> Self {
        Self::Network(err.to_string())
    }
}

/// Air Alert backend API
#[derive(Debug, Clone, Copy)]
pub struct AirAlertApi {
    url: &'static str,
}

impl AirAlertApi {
    #[must_use]
    pub const fn new(url: &'static str) -> Self {
        Self { url }
    }

    pub async fn current_aqi(&self, lat: f64, lng: f64) -> Result<String> {
        let url = current_aqi_url(self.url, lat, lng);
        let response = Request::get(&url).send().await?;
        Ok(ensure_ok(response).await?.text().await?)
    }

    pub async fn subscription_key(&self) -> Result<Vec<u8>> {
        let url = format!("{}/subscribe/key", self.url);
        let response = Request::get(&url).send().await?;
        Ok(ensure_ok(response).await?.binary().await?)
    }

    pub async fn subscribe(&self, req: &SubscribeRequest) -> Result<()> {
        let url = format!("{}/subscribe", self.url);
        let response = Request::post(&url).json(req)?.send().await?;
        ensure_ok(response).await?;
        Ok(())
    }

    pub async fn unsubscribe(&self, req: &UnsubscribeRequest) -> Result<()> {
        let url = format!("{}/unsubscribe", self.url);
        let response = Request::delete(&url).json(req)?.send().await?;
        ensure_ok(response).await?;
        Ok(())
    }
}

fn current_aqi_url(base: &str, lat: f64, lng: f64) -> String {
    format!("{base}/aqi/current?lat={lat}&long={lng}")
}

// ensure we've got 2xx status
async fn ensure_ok(response: Response) -> Result<Response> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let message = response.text().await.unwrap_or_default();
    Err(Error::Api { status, message })
}

#[async_trait(?Send)]
impl AqiGateway for AirAlertApi {
    async fn current_aqi(&self, pos: Coordinates) -> aqi_core::Result<String> {
        Ok(AirAlertApi::current_aqi(self, pos.lat, pos.lng).await?)
    }
}

#[async_trait(?Send)]
impl SubscriptionGateway for AirAlertApi {
    async fn public_key(&self) -> aqi_core::Result<Vec<u8>> {
        let key = self.subscription_key().await?;
        log::debug!("Received public key ({} bytes)", key.len());
        Ok(key)
    }

    async fn subscribe(&self, req: &SubscribeRequest) -> aqi_core::Result<()> {
        Ok(AirAlertApi::subscribe(self, req).await?)
    }

    async fn unsubscribe(&self, req: &UnsubscribeRequest) -> aqi_core::Result<()> {
        Ok(AirAlertApi::unsubscribe(self, req).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aqi_url_with_position() {
        assert_eq!(
            current_aqi_url("", 40.5, -73.25),
            "/aqi/current?lat=40.5&long=-73.25"
        );
        assert_eq!(
            current_aqi_url("/api", 52.0, 13.0),
            "/api/aqi/current?lat=52&long=13"
        );
    }

    #[test]
    fn api_errors_become_network_errors() {
        let err = Error::Api {
            status: 400,
            message: "invalid or missing latitude parameter".to_string(),
        };
        let core_err = aqi_core::Error::from(err);
        assert_eq!(
            core_err.to_string(),
            "HTTP 400: invalid or missing latitude parameter"
        );
    }
}
