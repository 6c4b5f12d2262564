pub mod engine;
pub mod error;
pub mod favorites;
pub mod types;

pub use engine::{execute, matches, QueryResult};
pub use error::QueryError;
pub use favorites::Favorites;
pub use types::{
    parse_filter, PricePreset, QuerySpec, SearchProfile, SortKey, DEFAULT_PAGE_SIZE, PRICE_PRESETS,
};
