//! HTTP list source implementation

use crate::error::{Error, Result};
use crate::source::ListSource;
use crate::types::Item;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

/// Wire payload: `{ "lists": [ ... ] }`
///
/// A missing `lists` field decodes as an empty collection.
#[derive(Deserialize)]
struct ListsPayload {
    #[serde(default)]
    lists: Vec<ListEntry>,
}

/// One entry of the wire payload
#[derive(Deserialize)]
struct ListEntry {
    id: u64,
    name: String,
    #[serde(default)]
    description: String,
    list_number: u32,
}

impl From<ListEntry> for Item {
    fn from(entry: ListEntry) -> Self {
        Self {
            id: entry.id,
            name: entry.name,
            description: entry.description,
            partition: entry.list_number,
        }
    }
}

/// List source reading a JSON endpoint over HTTP
#[derive(Debug)]
pub struct HttpListSource {
    client: Client,
    endpoint: String,
}

impl HttpListSource {
    /// Create a new HTTP source for the given endpoint
    ///
    /// The endpoint must be a valid absolute URL.
    pub fn new(endpoint: &str) -> Result<Self> {
        url::Url::parse(endpoint).map_err(|e| Error::InvalidEndpoint(format!("{endpoint}: {e}")))?;

        let client = Client::builder()
            .user_agent("listfold")
            .build()
            .map_err(|e| Error::Fetch(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
        })
    }
}

#[async_trait]
impl ListSource for HttpListSource {
    async fn fetch_lists(&self) -> Result<Vec<Item>> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| Error::Fetch(format!("request to {} failed: {e}", self.endpoint)))?;

        let status = response.status();
        if !status.is_success() {
            debug!(%status, endpoint = %self.endpoint, "list fetch returned non-success");
            return Err(Error::Fetch(format!(
                "{} returned status {status}",
                self.endpoint
            )));
        }

        let payload: ListsPayload = response
            .json()
            .await
            .map_err(|e| Error::Fetch(format!("failed to parse list payload: {e}")))?;

        debug!(count = payload.lists.len(), "fetched lists");
        Ok(payload.lists.into_iter().map(Item::from).collect())
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }
}
