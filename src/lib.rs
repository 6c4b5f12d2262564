//! Listing search for the brokerage site: a catalog of property records, a
//! pure filter/sort/paginate query engine over it, and the sources that load
//! catalogs.

pub mod catalog;
pub mod models;
pub mod query;
pub mod report;

pub use catalog::{CatalogError, CatalogSource, JsonFileCatalog, MockCatalog};
pub use models::{ListingKind, Location, PropertyCategory, PropertyRecord};
pub use query::{execute, QueryError, QueryResult, QuerySpec, SearchProfile, SortKey};
