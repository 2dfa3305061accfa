//! Public resource listing and tag endpoints.

use common::{
    filter_state::ResourceListRequest,
    resource::{ResourcePage, Tag},
};

use crate::catalog_utils::http_client::{CatalogClient, get_catalog_client};

pub const PUBLIC_RESOURCES_PATH: &str = "resources/public";
pub const PUBLIC_TAGS_PATH: &str = "resources/public/tags/all";

pub async fn list_public_resources(request: ResourceListRequest) -> anyhow::Result<ResourcePage> {
    fetch_public_resources(&get_catalog_client()?, &request).await
}

pub async fn list_all_tags() -> anyhow::Result<Vec<Tag>> {
    fetch_all_tags(&get_catalog_client()?).await
}

pub async fn fetch_public_resources(client: &CatalogClient, request: &ResourceListRequest) -> anyhow::Result<ResourcePage> {
    client.get_json(PUBLIC_RESOURCES_PATH, &request.query_pairs()).await
}

pub async fn fetch_all_tags(client: &CatalogClient) -> anyhow::Result<Vec<Tag>> {
    client.get_json(PUBLIC_TAGS_PATH, &[]).await
}
