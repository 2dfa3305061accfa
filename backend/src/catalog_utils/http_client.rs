use anyhow::Context;
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, info};

use crate::config::CatalogConfig;

/// JSON-over-HTTP access to the catalog API, or to the chatbot service when
/// built with [`CatalogClient::chat`].
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    api_url: String,
}

impl CatalogClient {
    pub fn new(config: &CatalogConfig) -> anyhow::Result<Self> {
        Self::with_api_url(config, &config.api_url)
    }

    pub fn chat(config: &CatalogConfig) -> anyhow::Result<Self> {
        Self::with_api_url(config, &config.chat_api_url)
    }

    fn with_api_url(config: &CatalogConfig, api_url: &str) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .context("building catalog HTTP client")?;
        Ok(Self { http, api_url: api_url.to_string() })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path.trim_start_matches('/'))
    }

    /// `GET {api_url}/{path}?{query}`, decoding the body as JSON.
    /// Error statuses are turned into errors carrying the response text.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> anyhow::Result<T> {
        let url = self.url_for(path);
        debug!("CATALOG GET {url} {query:?}");
        self.read_json(&url, self.http.get(&url).query(query)).await
    }

    /// `POST {api_url}/{path}` with a JSON body, decoding the reply as JSON.
    pub async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(&self, path: &str, body: &B) -> anyhow::Result<T> {
        let url = self.url_for(path);
        debug!("CATALOG POST {url}");
        let body = serde_json::to_string(body).context("encoding request body")?;
        let request = self
            .http
            .post(&url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body);
        self.read_json(&url, request).await
    }

    async fn read_json<T: DeserializeOwned>(&self, url: &str, request: reqwest::RequestBuilder) -> anyhow::Result<T> {
        let t0 = std::time::Instant::now();

        let response = request.send().await?;
        let status = response.status();
        let response_txt = response.text().await?;
        if status.is_client_error() || status.is_server_error() {
            anyhow::bail!("Error: {}: {}", status, response_txt);
        }
        let dt_ms = t0.elapsed().as_millis() as u32;
        info!("CATALOG RESPONSE: {url} len = {} ({}ms)", response_txt.len(), dt_ms);

        let value = serde_json::from_str(&response_txt).with_context(|| format!("decoding response from {url}"))?;
        Ok(value)
    }
}

pub fn get_catalog_client() -> anyhow::Result<CatalogClient> {
    CatalogClient::new(&CatalogConfig::from_env())
}

pub fn get_chat_client() -> anyhow::Result<CatalogClient> {
    CatalogClient::chat(&CatalogConfig::from_env())
}
