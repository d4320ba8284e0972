//! Thin authenticated HTTP wrapper over the backend API.
//!
//! Every request is bounded by a fixed timeout and every failure is
//! normalized into one of three kinds: the network never answered, the
//! server answered with a rejection, or the server answered 2xx with a
//! body that does not have the required shape.

use futures::future::{Either, select};
use futures::pin_mut;
use gloo_net::http::{Request, RequestBuilder};
use gloo_timers::future::TimeoutFuture;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::config;

/// Upper bound on how long the client waits for any response.
pub const REQUEST_TIMEOUT_MS: u32 = 10_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// Timeout or transport failure; no server verdict was received.
    Network,
    /// Non-2xx response, explained by the server where possible.
    Rejected,
    /// 2xx response whose body is missing required fields.
    ProtocolShape,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
}

impl ApiError {
    pub fn network(message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Network,
            message: message.into(),
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Rejected,
            message: message.into(),
        }
    }

    pub fn shape(message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::ProtocolShape,
            message: message.into(),
        }
    }
}

/// Convert a successful body into its expected typed shape. A parse
/// failure here means the call "succeeded" but the contract was not met.
pub fn decode<T: DeserializeOwned>(body: Value) -> Result<T, ApiError> {
    serde_json::from_value(body)
        .map_err(|err| ApiError::shape(format!("unexpected response shape: {err}")))
}

fn rejection_message(body: Option<&Value>, status: u16, status_text: &str) -> String {
    body.and_then(|b| b.get("detail"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| {
            if status_text.is_empty() {
                format!("request failed with status {status}")
            } else {
                status_text.to_string()
            }
        })
}

/// One client per call site; holds the base URL and, when authenticated,
/// the bearer token. Never touches the session store itself.
pub struct ApiClient {
    base: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base: config::api_base_url(),
            token: None,
        }
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            base: config::api_base_url(),
            token: Some(token.into()),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
            None => builder,
        }
    }

    pub async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        let request = self
            .authorize(Request::get(&self.url(path)))
            .build()
            .map_err(|err| ApiError::network(err.to_string()))?;
        self.dispatch(request).await
    }

    pub async fn post_json(&self, path: &str, body: &impl Serialize) -> Result<Value, ApiError> {
        let request = self
            .authorize(Request::post(&self.url(path)))
            .json(body)
            .map_err(|err| ApiError::network(err.to_string()))?;
        self.dispatch(request).await
    }

    async fn dispatch(&self, request: Request) -> Result<Value, ApiError> {
        let send = request.send();
        pin_mut!(send);
        let deadline = TimeoutFuture::new(REQUEST_TIMEOUT_MS);
        pin_mut!(deadline);

        let response = match select(send, deadline).await {
            Either::Left((sent, _)) => {
                sent.map_err(|err| ApiError::network(err.to_string()))?
            }
            Either::Right(((), _)) => return Err(ApiError::network("request timed out")),
        };

        if !response.ok() {
            let body = response.json::<Value>().await.ok();
            return Err(ApiError::rejected(rejection_message(
                body.as_ref(),
                response.status(),
                &response.status_text(),
            )));
        }

        response
            .json::<Value>()
            .await
            .map_err(|err| ApiError::shape(format!("unreadable response body: {err}")))
    }
}
