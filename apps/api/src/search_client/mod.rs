//! Search Client: Google Custom Search lookups for contextual links.
//!
//! Unconfigured search (missing key or engine id) is not an error: it returns
//! no links and never touches the network. Once a request is sent, any
//! failure is a hard failure. No retries.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::config::SearchSettings;
use crate::models::report::SearchLink;

const CUSTOM_SEARCH_URL: &str = "https://www.googleapis.com/customsearch/v1";
const SEARCH_TIMEOUT: Duration = Duration::from_secs(15);
/// The Custom Search API rejects `num` outside 1..=10.
const MAX_RESULTS_PER_REQUEST: usize = 10;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Search timed out after {}s", SEARCH_TIMEOUT.as_secs())]
    Timeout,
}

impl SearchError {
    fn from_transport(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            SearchError::Timeout
        } else {
            SearchError::Http(e)
        }
    }
}

#[async_trait]
pub trait SearchClient: Send + Sync {
    /// Returns at most `limit` links, in the order the service ranked them.
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<SearchLink>, SearchError>;
}

#[derive(Debug, Deserialize)]
struct CustomSearchResponse {
    #[serde(default)]
    items: Vec<CustomSearchItem>,
}

#[derive(Debug, Deserialize)]
struct CustomSearchItem {
    title: Option<String>,
    link: Option<String>,
}

impl From<CustomSearchItem> for SearchLink {
    fn from(item: CustomSearchItem) -> Self {
        SearchLink {
            title: item.title,
            link: item.link,
        }
    }
}

#[derive(Clone)]
struct Credentials {
    api_key: String,
    engine_id: String,
}

#[derive(Clone)]
pub struct GoogleSearchClient {
    client: Client,
    endpoint: String,
    credentials: Option<Credentials>,
}

impl GoogleSearchClient {
    pub fn new(settings: &SearchSettings) -> Result<Self, SearchError> {
        Self::with_endpoint(settings, CUSTOM_SEARCH_URL)
    }

    /// Points the client at another search endpoint. Used by tests.
    pub fn with_endpoint(
        settings: &SearchSettings,
        endpoint: impl Into<String>,
    ) -> Result<Self, SearchError> {
        let credentials = match (&settings.api_key, &settings.engine_id) {
            (Some(api_key), Some(engine_id)) => Some(Credentials {
                api_key: api_key.clone(),
                engine_id: engine_id.clone(),
            }),
            _ => None,
        };

        Ok(Self {
            client: Client::builder().timeout(SEARCH_TIMEOUT).build()?,
            endpoint: endpoint.into(),
            credentials,
        })
    }

    pub fn is_configured(&self) -> bool {
        self.credentials.is_some()
    }
}

#[async_trait]
impl SearchClient for GoogleSearchClient {
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<SearchLink>, SearchError> {
        let Some(credentials) = &self.credentials else {
            info!("Search is not configured, skipping contextual links");
            return Ok(Vec::new());
        };

        let num = limit.clamp(1, MAX_RESULTS_PER_REQUEST).to_string();
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("key", credentials.api_key.as_str()),
                ("cx", credentials.engine_id.as_str()),
                ("q", query),
                ("num", num.as_str()),
            ])
            .send()
            .await
            .map_err(SearchError::from_transport)?;

        let status = response.status();
        let body = response.text().await.map_err(SearchError::from_transport)?;

        if !status.is_success() {
            return Err(SearchError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let parsed: CustomSearchResponse = serde_json::from_str(&body)?;
        let links: Vec<SearchLink> = parsed
            .items
            .into_iter()
            .take(limit)
            .map(SearchLink::from)
            .collect();

        debug!("Search for {query:?} returned {} links", links.len());
        Ok(links)
    }
}
