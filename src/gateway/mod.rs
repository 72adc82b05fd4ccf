//! HTTP gateway to the remote assistant backend.

use std::time::Duration;

use serde::Serialize;
use tracing::debug;

use crate::error::{IvyError, Result};
use crate::types::Message;

/// JSON body POSTed for each exchange.
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    prompt: &'a str,
    history: &'a [Message],
}

/// Reply fields tried in order on a successful response.
const REPLY_FIELDS: [&str; 3] = ["reply", "output", "text"];

/// Client for the assistant backend. Stateless between calls: it never
/// touches the conversation or the tool session.
pub struct AssistantGateway {
    client: reqwest::Client,
    endpoint: String,
}

impl AssistantGateway {
    /// Build a gateway for `endpoint` with a per-request `timeout`.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send one exchange: the new prompt plus the prior history, oldest
    /// first. Returns the resolved reply text.
    ///
    /// Callers guarantee a trimmed, non-empty prompt; blank input is
    /// filtered out before it ever reaches the gateway.
    pub async fn send(&self, prompt: &str, history: &[Message]) -> Result<String> {
        let body = ChatRequest { prompt, history };

        debug!(endpoint = %self.endpoint, history_len = history.len(), "sending prompt");

        let resp = self.client.post(&self.endpoint).json(&body).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(IvyError::Backend {
                status: status.as_u16(),
            });
        }

        let text = resp.text().await?;
        let value: serde_json::Value = serde_json::from_str(&text)?;
        let reply = extract_reply(&value);

        debug!(chars = reply.len(), "reply resolved");
        Ok(reply)
    }
}

/// Resolve the reply text from a response body. Fields are tried in
/// order; one that is absent or null falls through to the next. String
/// values are used as-is, any other JSON value is stringified, and when
/// no field matches the whole body is stringified.
fn extract_reply(body: &serde_json::Value) -> String {
    for field in REPLY_FIELDS {
        match body.get(field) {
            None | Some(serde_json::Value::Null) => continue,
            Some(serde_json::Value::String(text)) => return text.clone(),
            Some(other) => return other.to_string(),
        }
    }
    body.to_string()
}
