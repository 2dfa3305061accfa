//! Catalog and chatbot API calls used by the frontend server functions.

mod chat;
mod resources;
pub use chat::{CHAT_PATH, ask_chatbot, send_chat_message};
pub use resources::{fetch_all_tags, fetch_public_resources, list_all_tags, list_public_resources};
pub use resources::{PUBLIC_RESOURCES_PATH, PUBLIC_TAGS_PATH};
