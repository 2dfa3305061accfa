//! Server-side access to the research catalog REST API.

pub mod api;
pub mod catalog_utils;
pub mod config;
