//! Chatbot service wire types and the conversation transcript.

use serde::{Deserialize, Serialize};
use tracing::{error, warn};

/// Bot reply when the service answered but reported no usable response.
pub const FALLBACK_REPLY: &str = "Sorry, something went wrong.";
/// Bot reply when the service could not be reached.
pub const SERVER_ERROR_REPLY: &str = "Server error. Please try again later.";

/// Body of `POST /api/chat`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatResponse {
    pub response: Option<String>,
    pub success: bool,
    pub error: Option<String>,
}

impl ChatResponse {
    /// Text shown as the bot message.
    pub fn reply_text(&self) -> String {
        match &self.response {
            Some(response) if self.success && !response.is_empty() => response.clone(),
            _ => {
                warn!(error = ?self.error, "chat service returned no response");
                FALLBACK_REPLY.to_string()
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatSender {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: u64,
    pub from: ChatSender,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChatTranscript {
    messages: Vec<ChatMessage>,
    next_id: u64,
}

impl ChatTranscript {
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn push(&mut self, from: ChatSender, text: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(ChatMessage { id, from, text: text.into() });
        id
    }

    /// Appends the bot message for the outcome of a chat call.
    pub fn push_reply(&mut self, outcome: Result<ChatResponse, String>) -> u64 {
        let text = match outcome {
            Ok(response) => response.reply_text(),
            Err(e) => {
                error!("chat call failed: {e}");
                SERVER_ERROR_REPLY.to_string()
            }
        };
        self.push(ChatSender::Bot, text)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn texts(transcript: &ChatTranscript) -> Vec<(ChatSender, &str)> {
        transcript.messages().iter().map(|m| (m.from, m.text.as_str())).collect()
    }

    #[test]
    fn reply_follows_the_question() {
        let mut transcript = ChatTranscript::default();
        let asked = transcript.push(ChatSender::User, "list datasets");
        let response: ChatResponse = serde_json::from_str(r#"{"response":"**Datasets**","success":true}"#).unwrap();
        let answered = transcript.push_reply(Ok(response));
        assert!(answered > asked);
        assert_eq!(texts(&transcript), vec![(ChatSender::User, "list datasets"), (ChatSender::Bot, "**Datasets**")]);
    }

    #[test]
    fn unsuccessful_response_gets_fallback() {
        let mut transcript = ChatTranscript::default();
        let failed: ChatResponse = serde_json::from_str(r#"{"error":"agent crashed","success":false}"#).unwrap();
        transcript.push_reply(Ok(failed));
        transcript.push_reply(Ok(ChatResponse { response: Some(String::new()), success: true, error: None }));
        assert_eq!(texts(&transcript), vec![(ChatSender::Bot, FALLBACK_REPLY), (ChatSender::Bot, FALLBACK_REPLY)]);
    }

    #[test]
    fn unreachable_service_gets_server_error() {
        let mut transcript = ChatTranscript::default();
        transcript.push_reply(Err("connection refused".to_string()));
        assert_eq!(texts(&transcript), vec![(ChatSender::Bot, SERVER_ERROR_REPLY)]);
    }

    #[test]
    fn sender_serializes_lowercase() {
        let message = ChatMessage { id: 0, from: ChatSender::Bot, text: "hi".to_string() };
        assert_eq!(serde_json::to_string(&message).unwrap(), r#"{"id":0,"from":"bot","text":"hi"}"#);
    }
}
