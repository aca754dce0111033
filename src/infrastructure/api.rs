#[cfg(test)]
#[path = "api_test.rs"]
mod tests;

use std::time::Duration;

use serde_derive::Deserialize;
use serde_derive::Serialize;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::ChatReply;
use crate::domain::models::Message;
use crate::domain::models::Visuals;

pub const FALLBACK_ANSWER: &str = "I apologize, but I didn't receive a proper response.";

const DEFAULT_TIMEOUT_SECONDS: u64 = 600;

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct HistoryEntry {
    role: String,
    content: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct ConversationRequest {
    history: Vec<HistoryEntry>,
    query: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct ConversationResponse {
    answer: Option<String>,
    #[serde(flatten)]
    visuals: Visuals,
}

fn build_history(messages: &[Message]) -> Vec<HistoryEntry> {
    return messages
        .iter()
        .map(|msg| {
            // Diagram metadata stays local; the service only replays text.
            return HistoryEntry {
                role: msg.api_role().to_string(),
                content: msg.text.to_string(),
            };
        })
        .collect();
}

#[derive(Clone)]
pub struct ChatClient {
    url: String,
    timeout: String,
}

impl Default for ChatClient {
    fn default() -> ChatClient {
        return ChatClient {
            url: Config::get(ConfigKey::ChatEndpoint),
            timeout: Config::get(ConfigKey::RequestTimeout),
        };
    }
}

impl ChatClient {
    /// Sends the conversation so far plus the new query, and always comes
    /// back with a reply. Parse failures, server errors, and transport
    /// errors are folded into error replies so callers have a single path.
    pub async fn send_query(&self, history: &[Message], query: &str) -> ChatReply {
        let req = ConversationRequest {
            history: build_history(history),
            query: query.to_string(),
        };

        let timeout_seconds = self
            .timeout
            .parse::<u64>()
            .unwrap_or(DEFAULT_TIMEOUT_SECONDS);

        let res = reqwest::Client::new()
            .post(&self.url)
            .json(&req)
            .timeout(Duration::from_secs(timeout_seconds))
            .send()
            .await;

        let res = match res {
            Ok(res) => res,
            Err(err) => {
                tracing::error!(error = ?err, "conversation request failed in transit");
                return ChatReply::error(format!("Connection error: {err}"));
            }
        };

        let status = res.status().as_u16();
        let body = match res.text().await {
            Ok(body) => body,
            Err(err) => {
                tracing::error!(error = ?err, "failed reading conversation response body");
                return ChatReply::error(format!("An unexpected error occurred: {err}"));
            }
        };

        if status != 200 {
            tracing::error!(status = status, "conversation request was rejected");
            return ChatReply::error(format!(
                "Error: unable to connect to the server (status: {status})\nResponse: {body}"
            ));
        }

        match serde_json::from_str::<ConversationResponse>(&body) {
            Ok(parsed) => {
                tracing::debug!(body = ?parsed, "conversation response");
                let answer = parsed.answer.unwrap_or_else(|| {
                    return FALLBACK_ANSWER.to_string();
                });

                return ChatReply::new(answer, parsed.visuals);
            }
            Err(err) => {
                tracing::error!(error = ?err, "conversation response was not valid JSON");
                return ChatReply::error(format!(
                    "Error: invalid JSON response from server. {err}"
                ));
            }
        }
    }
}
