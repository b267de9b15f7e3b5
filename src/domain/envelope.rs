//! The `{status_code, body}` pair every operation returns.
//!
//! On the wire the envelope takes the API Gateway proxy-integration shape:
//! `{"statusCode": 200, "body": "<json text>"}`. The body stays typed until
//! serialization so callers and tests can inspect it without reparsing.

use crate::domain::errors::DispatchError;
use serde::ser::{Error as _, SerializeStruct};
use serde::{Deserialize, Serialize, Serializer};

pub const STATUS_OK: u16 = 200;
pub const STATUS_BAD_REQUEST: u16 = 400;

#[derive(Debug, Clone)]
pub struct Envelope<B> {
    pub status_code: u16,
    pub body: B,
}

impl<B> Envelope<B> {
    pub fn ok(body: B) -> Self {
        Self {
            status_code: STATUS_OK,
            body,
        }
    }

    pub fn bad_request(body: B) -> Self {
        Self {
            status_code: STATUS_BAD_REQUEST,
            body,
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}

impl<B: Serialize> Envelope<B> {
    /// Body as a JSON value, for adapters that want to embed it directly.
    pub fn body_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(&self.body)
    }
}

impl<B: Serialize> Serialize for Envelope<B> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let body = serde_json::to_string(&self.body).map_err(S::Error::custom)?;

        let mut state = serializer.serialize_struct("Envelope", 2)?;
        state.serialize_field("statusCode", &self.status_code)?;
        state.serialize_field("body", &body)?;
        state.end()
    }
}

/// Body of every non-2xx envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl From<&DispatchError> for ErrorBody {
    fn from(err: &DispatchError) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}
