use crate::config::{CatalogSettings, CatalogSource};
use crate::models::InternshipPosting;
use crate::services::remote::RemoteCatalog;
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Postings bundled with the service
const BUILTIN_CATALOG: &str = include_str!("../../data/internships.json");

/// Errors that can occur while loading the catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON catalog: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid TOML catalog: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Catalog API returned error: {0}")]
    ApiError(String),

    #[error("Catalog misconfigured: {0}")]
    Misconfigured(String),
}

/// Accepted catalog document shapes
///
/// Either a bare array of postings or an object with an `internships` array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum CatalogDocument {
    List(Vec<InternshipPosting>),
    Wrapped { internships: Vec<InternshipPosting> },
}

impl CatalogDocument {
    pub(crate) fn into_postings(self) -> Vec<InternshipPosting> {
        match self {
            CatalogDocument::List(postings) => postings,
            CatalogDocument::Wrapped { internships } => internships,
        }
    }
}

/// In-memory catalog, fixed for the lifetime of the process
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    postings: Arc<Vec<InternshipPosting>>,
}

impl StaticCatalog {
    pub fn new(postings: Vec<InternshipPosting>) -> Self {
        Self {
            postings: Arc::new(postings),
        }
    }

    /// The bundled dataset
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        Ok(Self::new(document.into_postings()))
    }

    /// Parse a TOML document made of `[[internships]]` tables
    pub fn from_toml(text: &str) -> Result<Self, CatalogError> {
        #[derive(Deserialize)]
        struct TomlCatalog {
            #[serde(default)]
            internships: Vec<InternshipPosting>,
        }

        let document: TomlCatalog = toml::from_str(text)?;
        Ok(Self::new(document.internships))
    }

    /// Load a catalog file; the format follows the extension (`.json` or `.toml`)
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json(&text),
            Some("toml") => Self::from_toml(&text),
            other => Err(CatalogError::Misconfigured(format!(
                "unsupported catalog file extension {:?} for {}",
                other,
                path.display()
            ))),
        }
    }

    pub fn postings(&self) -> Arc<Vec<InternshipPosting>> {
        Arc::clone(&self.postings)
    }
}

/// Source of internship postings for the matching engine
pub enum CatalogProvider {
    Static(StaticCatalog),
    Remote(RemoteCatalog),
}

impl CatalogProvider {
    /// Build the provider described by the catalog settings
    pub fn from_settings(settings: &CatalogSettings) -> Result<Self, CatalogError> {
        match settings.source {
            CatalogSource::Static => Ok(CatalogProvider::Static(StaticCatalog::builtin()?)),
            CatalogSource::File => {
                let path = settings.path.as_deref().ok_or_else(|| {
                    CatalogError::Misconfigured("catalog.path is required for the file source".into())
                })?;
                Ok(CatalogProvider::Static(StaticCatalog::from_path(path)?))
            }
            CatalogSource::Remote => {
                let url = settings.remote_url.clone().ok_or_else(|| {
                    CatalogError::Misconfigured("catalog.remote_url is required for the remote source".into())
                })?;
                Ok(CatalogProvider::Remote(RemoteCatalog::new(
                    url,
                    Duration::from_secs(settings.timeout_secs),
                    Duration::from_secs(settings.cache_ttl_secs),
                )?))
            }
        }
    }

    /// All postings, in catalog order
    pub async fn postings(&self) -> Result<Arc<Vec<InternshipPosting>>, CatalogError> {
        match self {
            CatalogProvider::Static(catalog) => Ok(catalog.postings()),
            CatalogProvider::Remote(client) => client.postings().await,
        }
    }

    /// Look up a single posting by id
    pub async fn find(&self, id: &str) -> Result<Option<InternshipPosting>, CatalogError> {
        let postings = self.postings().await?;
        Ok(postings.iter().find(|posting| posting.id == id).cloned())
    }

    pub fn source_name(&self) -> &'static str {
        match self {
            CatalogProvider::Static(_) => "static",
            CatalogProvider::Remote(_) => "remote",
        }
    }
}
