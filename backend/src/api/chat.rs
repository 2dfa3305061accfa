//! Chatbot service endpoint.

use common::chat::{ChatRequest, ChatResponse};

use crate::catalog_utils::http_client::{CatalogClient, get_chat_client};

pub const CHAT_PATH: &str = "api/chat";

pub async fn ask_chatbot(message: String) -> anyhow::Result<ChatResponse> {
    send_chat_message(&get_chat_client()?, &message).await
}

pub async fn send_chat_message(client: &CatalogClient, message: &str) -> anyhow::Result<ChatResponse> {
    anyhow::ensure!(!message.trim().is_empty(), "No message provided");
    client.post_json(CHAT_PATH, &ChatRequest { message: message.to_string() }).await
}
