pub mod error;
pub mod json_file;
pub mod mock;
pub mod traits;

pub use error::CatalogError;
pub use json_file::JsonFileCatalog;
pub use mock::{seed_catalog, MockCatalog};
pub use traits::CatalogSource;

use crate::models::PropertyRecord;

/// Look up a listing for the detail view; the first match wins on duplicate ids
pub fn find_by_id<'a>(catalog: &'a [PropertyRecord], id: &str) -> Option<&'a PropertyRecord> {
    catalog.iter().find(|record| record.id == id)
}

/// Distinct cities in first-appearance order, for the city filter
pub fn cities(catalog: &[PropertyRecord]) -> Vec<&str> {
    let mut cities: Vec<&str> = Vec::new();
    for record in catalog {
        let city = record.location.city.as_str();
        if !cities.contains(&city) {
            cities.push(city);
        }
    }
    cities
}
