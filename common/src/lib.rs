//! Common library exports shared between frontend and backend.

extern crate serde;


pub mod search_const;
pub mod resource;
pub mod filter_state;
pub mod url_query;
pub mod schedule;
pub mod filter_sync;
pub mod chat_format;
pub mod chat;
