//! Client API call for the chatbot service.

use common::chat::ChatResponse;
use dioxus::prelude::*;

#[server]
pub async fn ask_chatbot(message: String) -> Result<ChatResponse, ServerFnError> {
    let x = backend::api::ask_chatbot(message).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}
