use crate::models::InternshipPosting;
use crate::services::catalog::{CatalogDocument, CatalogError};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;

const CATALOG_CACHE_KEY: &str = "catalog:all";

/// Catalog backed by a remote internships API
///
/// Fetches `GET {base_url}/internships` and keeps the parsed postings in an
/// in-memory cache until the TTL runs out.
pub struct RemoteCatalog {
    base_url: String,
    client: Client,
    cache: moka::future::Cache<String, Arc<Vec<InternshipPosting>>>,
}

impl RemoteCatalog {
    /// Create a new remote catalog client
    pub fn new(base_url: String, timeout: Duration, cache_ttl: Duration) -> Result<Self, CatalogError> {
        let client = Client::builder().timeout(timeout).build()?;

        let cache = moka::future::CacheBuilder::new(1)
            .time_to_live(cache_ttl)
            .build();

        Ok(Self {
            base_url,
            client,
            cache,
        })
    }

    /// All postings, served from cache when fresh
    pub async fn postings(&self) -> Result<Arc<Vec<InternshipPosting>>, CatalogError> {
        if let Some(postings) = self.cache.get(CATALOG_CACHE_KEY).await {
            tracing::trace!("Catalog cache hit");
            return Ok(postings);
        }

        let postings = Arc::new(self.fetch().await?);
        self.cache
            .insert(CATALOG_CACHE_KEY.to_string(), Arc::clone(&postings))
            .await;

        tracing::info!("Fetched {} postings from {}", postings.len(), self.base_url);
        Ok(postings)
    }

    /// Drop the cached catalog so the next read goes to the API
    pub async fn invalidate(&self) {
        self.cache.invalidate(CATALOG_CACHE_KEY).await;
    }

    async fn fetch(&self) -> Result<Vec<InternshipPosting>, CatalogError> {
        let url = format!("{}/internships", self.base_url.trim_end_matches('/'));

        tracing::debug!("Fetching catalog from: {}", url);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(CatalogError::ApiError(format!(
                "Failed to fetch internships: {}",
                response.status()
            )));
        }

        let document: CatalogDocument = response.json().await?;
        Ok(document.into_postings())
    }
}
