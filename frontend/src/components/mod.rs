pub mod error_boundary;
pub mod formatted_message;
pub mod navbar;
pub mod resource_card;
pub mod resource_filters;
