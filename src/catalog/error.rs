use thiserror::Error;

/// Problems with a catalog snapshot supplied by a source
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Invalid property record '{id}': {reason}")]
    InvalidRecord { id: String, reason: String },

    #[error("Duplicate property id '{0}' in catalog")]
    DuplicateId(String),
}
