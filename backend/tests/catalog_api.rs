//! Catalog client against an in-process fake catalog.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
    time::Duration,
};

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use backend::{
    api::{fetch_all_tags, fetch_public_resources},
    catalog_utils::http_client::CatalogClient,
    config::CatalogConfig,
};
use common::{filter_state::FilterState, resource::ResourceType};
use pretty_assertions::assert_eq;
use serde_json::json;

type SeenQueries = Arc<Mutex<Vec<HashMap<String, String>>>>;

async fn list_resources(State(seen): State<SeenQueries>, Query(params): Query<HashMap<String, String>>) -> impl IntoResponse {
    let name = params.get("nameSearch").cloned().unwrap_or_default();
    seen.lock().unwrap().push(params);
    Json(json!({
        "content": [
            {"id": "r1", "name": format!("match for {name}"), "type": "NOTEBOOK", "tags": [{"id": "t1", "value": "ml"}]}
        ],
        "totalElements": 1
    }))
}

async fn list_tags() -> impl IntoResponse {
    Json(json!([{"id": "t1", "value": "ml"}, {"id": "t2", "value": "climate"}]))
}

async fn mixed_types() -> impl IntoResponse {
    Json(json!({
        "content": [
            {"id": "n1", "name": "Notebook", "type": "NOTEBOOK"},
            {"id": "p1", "name": "Project", "type": "PROJECT"}
        ]
    }))
}

async fn broken() -> impl IntoResponse {
    (StatusCode::BAD_GATEWAY, "upstream unavailable")
}

async fn not_json() -> impl IntoResponse {
    "<html>login</html>"
}

/// Serves the fake catalog under `/api/v1` and returns a client pointed at it.
async fn spawn_catalog(app: Router) -> CatalogClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, Router::new().nest("/api/v1", app)).await.unwrap();
    });
    let config = CatalogConfig {
        api_url: format!("http://{address}/api/v1"),
        request_timeout: Duration::from_secs(5),
        chat_api_url: format!("http://{address}"),
    };
    CatalogClient::new(&config).unwrap()
}

#[tokio::test]
async fn listing_sends_filter_params() {
    let seen = SeenQueries::default();
    let app = Router::new()
        .route("/resources/public", get(list_resources))
        .with_state(seen.clone());
    let client = spawn_catalog(app).await;

    let request = FilterState::default()
        .toggle_resource_type(ResourceType::Dataset)
        .toggle_resource_type(ResourceType::Repository)
        .toggle_tag("ml")
        .toggle_tag("hpc")
        .with_search_text("graph nets")
        .to_list_request();
    let page = fetch_public_resources(&client, &request).await.unwrap();

    assert_eq!(page.content.len(), 1);
    assert_eq!(page.content[0].name, "match for graph nets");
    assert_eq!(page.content[0].known_type(), Some(ResourceType::Notebook));

    let seen = seen.lock().unwrap();
    let params = &seen[0];
    assert_eq!(params["type"], "REPOSITORY,DATASET");
    assert_eq!(params["tag"], "hpc,ml");
    assert_eq!(params["nameSearch"], "graph nets");
    assert_eq!(params["pageNumber"], "0");
    assert_eq!(params["pageSize"], "100");
}

#[tokio::test]
async fn empty_filters_send_empty_params() {
    let seen = SeenQueries::default();
    let app = Router::new()
        .route("/resources/public", get(list_resources))
        .with_state(seen.clone());
    let client = spawn_catalog(app).await;

    fetch_public_resources(&client, &FilterState::default().to_list_request()).await.unwrap();

    let seen = seen.lock().unwrap();
    assert_eq!(seen[0]["type"], "");
    assert_eq!(seen[0]["tag"], "");
    assert_eq!(seen[0]["nameSearch"], "");
}

#[tokio::test]
async fn unknown_resource_type_does_not_drop_the_page() {
    let client = spawn_catalog(Router::new().route("/resources/public", get(mixed_types))).await;
    let page = fetch_public_resources(&client, &FilterState::default().to_list_request())
        .await
        .unwrap();
    let ids = page.content.iter().map(|r| r.id.as_str()).collect::<Vec<_>>();
    assert_eq!(ids, vec!["n1", "p1"]);
    assert_eq!(page.content[1].known_type(), None);
}

#[tokio::test]
async fn tags_are_decoded() {
    let client = spawn_catalog(Router::new().route("/resources/public/tags/all", get(list_tags))).await;
    let tags = fetch_all_tags(&client).await.unwrap();
    let values = tags.into_iter().map(|t| t.value).collect::<Vec<_>>();
    assert_eq!(values, vec!["ml".to_string(), "climate".to_string()]);
}

#[tokio::test]
async fn error_status_carries_body() {
    let client = spawn_catalog(Router::new().route("/resources/public", get(broken))).await;
    let err = fetch_public_resources(&client, &FilterState::default().to_list_request())
        .await
        .unwrap_err();
    let message = err.to_string();
    assert!(message.contains("502"), "{message}");
    assert!(message.contains("upstream unavailable"), "{message}");
}

#[tokio::test]
async fn non_json_body_is_an_error() {
    let client = spawn_catalog(Router::new().route("/resources/public/tags/all", get(not_json))).await;
    let err = fetch_all_tags(&client).await.unwrap_err();
    assert!(format!("{err:#}").contains("decoding response from"), "{err:#}");
}

#[tokio::test]
async fn unreachable_catalog_is_an_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let address = listener.local_addr().unwrap();
    drop(listener);
    let client = CatalogClient::new(&CatalogConfig {
        api_url: format!("http://{address}/api/v1"),
        request_timeout: Duration::from_secs(2),
        chat_api_url: format!("http://{address}"),
    })
    .unwrap();
    assert!(fetch_all_tags(&client).await.is_err());
}
