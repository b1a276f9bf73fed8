use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ApiError;

pub const STATUS_OK: &str = "OK";

/// The one response shape the rest of the crate deals with.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub status: String,
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub error: Option<String>,
}

impl Envelope {
    pub fn ok(data: Value) -> Self {
        Self {
            status: STATUS_OK.to_string(),
            data: Some(data),
            error: None,
        }
    }

    /// Adapts whatever an endpoint returned into an envelope. Older status
    /// endpoints answer with a bare array, which is treated as a success.
    pub fn from_value(value: Value) -> Result<Self, ApiError> {
        if value.is_array() {
            return Ok(Self::ok(value));
        }
        match value.as_object() {
            Some(map) if map.contains_key("status") => {}
            Some(_) => return Err(ApiError::malformed("response has no status field")),
            None => {
                return Err(ApiError::malformed(format!(
                    "expected an object or array, got {}",
                    kind_of(&value)
                )))
            }
        }
        serde_json::from_value(value).map_err(ApiError::from)
    }

    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }

    /// Fails unless the status is `"OK"`.
    pub fn check(self) -> Result<Self, ApiError> {
        if self.is_ok() {
            return Ok(self);
        }
        let message = match self.error {
            Some(err) if !err.trim().is_empty() => err,
            _ => format!("status {}", self.status),
        };
        Err(ApiError::application(message))
    }

    pub fn into_data<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        let data = self
            .check()?
            .data
            .filter(|data| !data.is_null())
            .ok_or_else(|| ApiError::malformed("envelope has no data"))?;
        serde_json::from_value(data).map_err(ApiError::from)
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
