use std::time::Duration;

use reqwest::blocking::Client;
use serde_json::Value;
use tracing::debug;

use super::envelope::Envelope;
use crate::config::ClientConfig;
use crate::error::ApiError;

/// Issues a JSON POST against the backend and hands back the parsed body.
pub trait RequestClient {
    fn post(&self, path: &str, body: &Value) -> Result<Value, ApiError>;
}

pub struct HTTPClient {
    pub config: ClientConfig,
    client: Client,
}

impl HTTPClient {
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(None::<Duration>)
            .build()
            .map_err(|err| ApiError::transport(None, err.to_string()))?;
        Ok(Self { config, client })
    }
}

impl RequestClient for HTTPClient {
    fn post(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        let url = self.config.endpoint(path);
        debug!(%url, "POST");

        let resp = self
            .client
            .post(url.as_str())
            .json(body)
            .send()
            .map_err(|err| ApiError::transport(None, err.to_string()))?;

        let status = resp.status();
        let text = resp
            .text()
            .map_err(|err| ApiError::transport(Some(status.as_u16()), err.to_string()))?;

        if !status.is_success() {
            return Err(ApiError::transport(Some(status.as_u16()), failure_message(&text)));
        }

        serde_json::from_str::<Value>(&text).map_err(ApiError::from)
    }
}

// Error replies usually still carry the `{status, error}` envelope; prefer its message.
fn failure_message(body: &str) -> String {
    match serde_json::from_str::<Envelope>(body) {
        Ok(Envelope {
            error: Some(error), ..
        }) if !error.trim().is_empty() => error,
        _ => body.trim().to_string(),
    }
}
