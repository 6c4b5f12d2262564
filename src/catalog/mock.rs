use crate::catalog::traits::CatalogSource;
use crate::models::{validate_catalog, ListingKind, Location, PropertyCategory, PropertyRecord};
use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, info};

/// In-memory demo catalog, optionally delayed to mimic a remote API
#[derive(Debug, Clone, Default)]
pub struct MockCatalog {
    latency: Option<Duration>,
}

impl MockCatalog {
    /// Create a mock source that answers immediately
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock source that waits `latency` before answering
    pub fn with_latency(latency: Duration) -> Self {
        Self {
            latency: Some(latency),
        }
    }
}

#[async_trait]
impl CatalogSource for MockCatalog {
    async fn load(&self) -> Result<Vec<PropertyRecord>> {
        if let Some(latency) = self.latency {
            debug!("Simulating {}ms catalog latency", latency.as_millis());
            tokio::time::sleep(latency).await;
        }

        let catalog = seed_catalog();
        validate_catalog(&catalog)?;

        info!("Loaded {} demo listings", catalog.len());
        Ok(catalog)
    }

    fn source_name(&self) -> &'static str {
        "mock"
    }
}

fn location(address: &str, city: &str) -> Location {
    Location {
        address: address.to_string(),
        city: city.to_string(),
    }
}

/// The brokerage's demo listings
pub fn seed_catalog() -> Vec<PropertyRecord> {
    vec![
        PropertyRecord {
            id: "prop1".to_string(),
            title: "Modern Luxury Villa".to_string(),
            price: 1_250_000,
            listing_kind: ListingKind::ForSale,
            category: PropertyCategory::Villa,
            location: location("123 Skyline Drive", "Beverly Hills"),
            bedrooms: 5,
            bathrooms: 4.0,
            area_sqft: 3200,
            year_built: 2020,
            featured: true,
            description: "Stunning modern villa with panoramic views, infinity pool, and smart home technology."
                .to_string(),
            features: vec![
                "Infinity Pool".to_string(),
                "Smart Home Technology".to_string(),
                "Home Office".to_string(),
            ],
        },
        PropertyRecord {
            id: "prop2".to_string(),
            title: "Downtown Penthouse".to_string(),
            price: 890_000,
            listing_kind: ListingKind::ForSale,
            category: PropertyCategory::Apartment,
            location: location("456 Urban Avenue", "Los Angeles"),
            bedrooms: 3,
            bathrooms: 2.0,
            area_sqft: 1800,
            year_built: 2018,
            featured: true,
            description: "Luxurious penthouse in the heart of downtown with floor-to-ceiling windows and private terrace."
                .to_string(),
            features: vec!["Private Terrace".to_string()],
        },
        PropertyRecord {
            id: "prop3".to_string(),
            title: "Waterfront Apartment".to_string(),
            price: 4_500,
            listing_kind: ListingKind::ForRent,
            category: PropertyCategory::Apartment,
            location: location("789 Harbor View", "Miami"),
            bedrooms: 2,
            bathrooms: 2.0,
            area_sqft: 1200,
            year_built: 2019,
            featured: true,
            description: "Beautiful apartment with direct water views, modern amenities, and access to building facilities."
                .to_string(),
            features: vec![],
        },
        PropertyRecord {
            id: "prop4".to_string(),
            title: "Suburban Family Home".to_string(),
            price: 750_000,
            listing_kind: ListingKind::ForSale,
            category: PropertyCategory::House,
            location: location("321 Maple Street", "Chicago"),
            bedrooms: 4,
            bathrooms: 3.0,
            area_sqft: 2400,
            year_built: 2015,
            featured: true,
            description: "Spacious family home in a quiet neighborhood with large backyard and renovated kitchen."
                .to_string(),
            features: vec!["Large Backyard".to_string()],
        },
        PropertyRecord {
            id: "prop5".to_string(),
            title: "Commercial Office Space".to_string(),
            price: 1_200_000,
            listing_kind: ListingKind::ForSale,
            category: PropertyCategory::Commercial,
            location: location("555 Business Blvd", "New York"),
            bedrooms: 0,
            bathrooms: 2.0,
            area_sqft: 3000,
            year_built: 2008,
            featured: false,
            description: "Prime commercial property in bustling business district with modern facilities and parking."
                .to_string(),
            features: vec!["Parking".to_string()],
        },
        PropertyRecord {
            id: "prop6".to_string(),
            title: "Cozy Studio Apartment".to_string(),
            price: 1_800,
            listing_kind: ListingKind::ForRent,
            category: PropertyCategory::Apartment,
            location: location("777 College Ave", "Boston"),
            bedrooms: 1,
            bathrooms: 1.0,
            area_sqft: 600,
            year_built: 1998,
            featured: false,
            description: "Cozy studio apartment near university campus with updated appliances and great amenities."
                .to_string(),
            features: vec![],
        },
        PropertyRecord {
            id: "prop7".to_string(),
            title: "Lakefront Condo".to_string(),
            price: 420_000,
            listing_kind: ListingKind::ForSale,
            category: PropertyCategory::Condo,
            location: location("222 Shoreline Dr", "Seattle"),
            bedrooms: 2,
            bathrooms: 2.0,
            area_sqft: 1100,
            year_built: 2012,
            featured: false,
            description: "Modern condo with beautiful lake views, close to shopping and dining options."
                .to_string(),
            features: vec![],
        },
        PropertyRecord {
            id: "prop8".to_string(),
            title: "Historic Townhouse".to_string(),
            price: 950_000,
            listing_kind: ListingKind::ForSale,
            category: PropertyCategory::House,
            location: location("123 Heritage Lane", "Philadelphia"),
            bedrooms: 3,
            bathrooms: 2.5,
            area_sqft: 1850,
            year_built: 1905,
            featured: false,
            description: "Beautifully restored historic townhouse with original features and modern updates."
                .to_string(),
            features: vec!["Hardwood Floors".to_string()],
        },
        PropertyRecord {
            id: "prop9".to_string(),
            title: "Mountain View Cabin".to_string(),
            price: 450_000,
            listing_kind: ListingKind::ForSale,
            category: PropertyCategory::House,
            location: location("555 Pine Road", "Aspen"),
            bedrooms: 3,
            bathrooms: 2.0,
            area_sqft: 1600,
            year_built: 2010,
            featured: false,
            description: "Cozy cabin with breathtaking mountain views.".to_string(),
            features: vec!["Fire Pit".to_string()],
        },
        PropertyRecord {
            id: "prop10".to_string(),
            title: "Studio Apartment".to_string(),
            price: 2_200,
            listing_kind: ListingKind::ForRent,
            category: PropertyCategory::Apartment,
            location: location("888 College Blvd", "Boston"),
            bedrooms: 1,
            bathrooms: 1.0,
            area_sqft: 650,
            year_built: 2017,
            featured: false,
            description: "Modern studio apartment, perfect for students or young professionals."
                .to_string(),
            features: vec![],
        },
    ]
}
