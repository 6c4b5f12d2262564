use thiserror::Error;

/// Structurally impossible query input, rejected before the engine runs
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Unknown sort key '{0}'")]
    UnknownSortKey(String),

    #[error("Unknown listing kind '{0}'")]
    UnknownListingKind(String),

    #[error("Unknown property category '{0}'")]
    UnknownCategory(String),

    #[error("Unknown price preset '{0}'")]
    UnknownPricePreset(String),

    #[error("Unknown search profile '{0}'")]
    UnknownProfile(String),

    #[error("Page size must be positive, got {0}")]
    InvalidPageSize(usize),
}
