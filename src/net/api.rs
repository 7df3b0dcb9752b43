//! REST calls against the chat endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Native builds only see the `ChatTransport` seam, which tests fake.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is an `ApiError` value; callers decide whether to log it or
//! surface it. Send replies with a non-2xx status are still decoded when the
//! body is JSON, because the server reports rejections that way.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::future::Future;

use super::types::{ChatMessage, SendRequest, SendResponse};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("unexpected status: {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("could not encode request: {0}")]
    Encode(String),
}

/// Transport for the two chat endpoints.
pub trait ChatTransport {
    /// Fetch the full ordered message list for `team_id`.
    fn fetch_messages(&self, team_id: &str) -> impl Future<Output = Result<Vec<ChatMessage>, ApiError>>;

    /// Post a new message. `csrf` is sent as `X-CSRFToken` when present.
    fn send_message(
        &self,
        request: &SendRequest,
        csrf: Option<&str>,
    ) -> impl Future<Output = Result<SendResponse, ApiError>>;
}

#[cfg(any(test, feature = "hydrate"))]
fn messages_endpoint(prefix: &str, team_id: &str) -> String {
    format!("{}/{team_id}/", prefix.trim_end_matches('/'))
}

#[cfg(any(test, feature = "hydrate"))]
fn status_failure(status: u16, ok: bool, decoded: Result<SendResponse, ApiError>) -> Result<SendResponse, ApiError> {
    match decoded {
        Ok(body) => Ok(body),
        Err(_) if !ok => Err(ApiError::Status(status)),
        Err(err) => Err(err),
    }
}

/// `ChatTransport` backed by `gloo-net` fetch calls.
#[cfg(feature = "hydrate")]
#[derive(Clone, Debug)]
pub struct HttpChatTransport {
    messages_prefix: String,
    send_endpoint: String,
}

#[cfg(feature = "hydrate")]
impl HttpChatTransport {
    pub fn new(config: &crate::config::PageConfig) -> Self {
        Self {
            messages_prefix: config.messages_endpoint_prefix.clone(),
            send_endpoint: config.send_endpoint.clone(),
        }
    }
}

#[cfg(feature = "hydrate")]
impl ChatTransport for HttpChatTransport {
    async fn fetch_messages(&self, team_id: &str) -> Result<Vec<ChatMessage>, ApiError> {
        let url = messages_endpoint(&self.messages_prefix, team_id);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        let body: super::types::MessagesResponse = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(body.messages)
    }

    async fn send_message(&self, request: &SendRequest, csrf: Option<&str>) -> Result<SendResponse, ApiError> {
        let mut builder =
            gloo_net::http::Request::post(&self.send_endpoint).header("Content-Type", "application/json");
        if let Some(token) = csrf {
            builder = builder.header("X-CSRFToken", token);
        }
        let resp = builder
            .json(request)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let decoded = resp
            .json::<SendResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()));
        status_failure(resp.status(), resp.ok(), decoded)
    }
}
