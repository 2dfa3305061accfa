pub mod chatbot_page;
pub mod resources_page;
