use crate::models::PropertyRecord;
use anyhow::Result;
use async_trait::async_trait;

/// Common trait for everything that can supply a catalog snapshot
/// The query engine only ever sees the loaded records, never the source
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Load the full set of listings
    async fn load(&self) -> Result<Vec<PropertyRecord>>;

    /// Get the name of the catalog source
    fn source_name(&self) -> &'static str;
}
