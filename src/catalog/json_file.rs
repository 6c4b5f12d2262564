use crate::catalog::traits::CatalogSource;
use crate::models::{validate_catalog, PropertyRecord};
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Catalog stored as a JSON array of property records
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CatalogSource for JsonFileCatalog {
    async fn load(&self) -> Result<Vec<PropertyRecord>> {
        debug!("Reading catalog from {}", self.path.display());

        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read catalog file {}", self.path.display()))?;

        let catalog: Vec<PropertyRecord> = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse catalog file {}", self.path.display()))?;

        validate_catalog(&catalog)
            .with_context(|| format!("Catalog file {} is invalid", self.path.display()))?;

        info!("Loaded {} listings from {}", catalog.len(), self.path.display());
        Ok(catalog)
    }

    fn source_name(&self) -> &'static str {
        "json-file"
    }
}
