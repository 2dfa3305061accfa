//! Client API calls for the resource catalog.

use common::{
    filter_state::ResourceListRequest,
    resource::{Resource, Tag},
};
use dioxus::prelude::*;

#[server]
pub async fn list_public_resources(request: ResourceListRequest) -> Result<Vec<Resource>, ServerFnError> {
    let x = backend::api::list_public_resources(request).await;
    x.map(|page| page.content)
        .map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn list_all_tags() -> Result<Vec<Tag>, ServerFnError> {
    let x = backend::api::list_all_tags().await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}
