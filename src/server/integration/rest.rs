//! JSON REST client.
//!
//! Requests default to `POST` with JSON `Accept` and `Content-Type` headers. Every
//! completed exchange is recorded into the request's [`TraceContext`] when REST
//! tracing is enabled.

use reqwest::{
    header::{ACCEPT, CONTENT_TYPE},
    Method,
};
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    model::api::RestTracer,
    server::{error::transport::TransportError, middleware::trace::TraceContext},
};

const APPLICATION_JSON: &str = "application/json";

#[derive(Clone)]
pub struct RestRepository {
    client: reqwest::Client,
    trace: TraceContext,
}

impl RestRepository {
    pub fn new(client: reqwest::Client) -> Self {
        Self {
            client,
            trace: TraceContext::disabled(),
        }
    }

    /// Records completed exchanges into `trace`.
    pub fn traced(mut self, trace: TraceContext) -> Self {
        self.trace = trace;
        self
    }

    /// Sends a JSON request and decodes the JSON response.
    ///
    /// # Arguments
    /// - `url` - Target URL
    /// - `method` - HTTP method, `POST` when `None`
    /// - `body` - Request body serialized as JSON, omitted when `None`
    ///
    /// # Returns
    /// - `Ok(Res)` - Decoded response body
    /// - `Err(TransportError::Request)` - Request could not be sent or read
    /// - `Err(TransportError::Status)` - Remote side answered with a non-success status
    /// - `Err(TransportError::Decode)` - Response body is not the expected JSON
    pub async fn api<Req, Res>(
        &self,
        url: &str,
        method: Option<Method>,
        body: Option<&Req>,
    ) -> Result<Res, TransportError>
    where
        Req: Serialize + ?Sized,
        Res: DeserializeOwned,
    {
        let mut request = self
            .client
            .request(method.unwrap_or(Method::POST), url)
            .header(ACCEPT, APPLICATION_JSON)
            .header(CONTENT_TYPE, APPLICATION_JSON);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;
        let payload: Option<serde_json::Value> = if bytes.is_empty() {
            None
        } else {
            serde_json::from_slice(&bytes).ok()
        };

        if self.trace.rest_enabled() {
            self.trace.record_rest(RestTracer {
                url: url.to_string(),
                request: body.and_then(|body| serde_json::to_value(body).ok()),
                response: payload.clone(),
            });
        }

        if !status.is_success() {
            return Err(TransportError::Status {
                url: url.to_string(),
                status,
            });
        }

        Ok(serde_json::from_value(
            payload.unwrap_or(serde_json::Value::Null),
        )?)
    }
}
