// Search module - identifier lookup behind the nav bar's search box
//
// The node's dashboard API answers `GET /api/search/{query}` with whatever
// records carry that identifier. The first hit decides where the shell
// navigates; a miss lands on the explorer's not-found route.

use anyhow::{Context, Result};
use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub blocks: Vec<BlockHit>,
    #[serde(default)]
    pub address: Option<AddressHit>,
}

#[derive(Debug, Deserialize)]
pub struct BlockHit {
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub struct AddressHit {
    pub address: String,
}

/// Client for the node's search endpoint
#[derive(Clone)]
pub struct NodeSearch {
    client: reqwest::Client,
    api_url: String,
}

impl NodeSearch {
    pub fn new(api_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_url: api_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Look up an identifier and return the location to navigate to.
    ///
    /// Transport failures are errors; "nothing found" is a location.
    pub async fn search(&self, query: &str) -> Result<String> {
        let query = query.trim();
        let url = format!("{}/api/search/{}", self.api_url, urlencoding::encode(query));
        tracing::debug!("Searching node for {:?}", query);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Search request to {} failed", url))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(not_found_path(query));
        }

        let body: SearchResponse = response
            .error_for_status()
            .context("Search request rejected")?
            .json()
            .await
            .context("Malformed search response")?;

        Ok(route_for(query, &body))
    }
}

/// Location for a search result: block first, then address, else not-found
pub fn route_for(query: &str, result: &SearchResponse) -> String {
    if let Some(block) = result.blocks.first() {
        return format!("/explorer/block/{}", urlencoding::encode(&block.id));
    }
    if let Some(address) = &result.address {
        return format!("/explorer/address/{}", urlencoding::encode(&address.address));
    }
    not_found_path(query)
}

pub fn not_found_path(query: &str) -> String {
    format!("/explorer/404/{}", urlencoding::encode(query))
}

/// Whether a typed query is worth sending
pub fn is_submittable(query: &str) -> bool {
    !query.trim().is_empty()
}
