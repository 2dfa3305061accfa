pub mod chat_api;
pub mod resources_api;
