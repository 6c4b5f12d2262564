use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::catalog::CatalogError;
use crate::query::QueryError;

/// Whether a listing is offered for sale or for rent
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ListingKind {
    ForSale,
    ForRent,
}

impl ListingKind {
    /// Suffix appended to a displayed price ("/mo" for rentals)
    pub fn price_suffix(&self) -> &'static str {
        match self {
            ListingKind::ForSale => "",
            ListingKind::ForRent => "/mo",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ListingKind::ForSale => "for-sale",
            ListingKind::ForRent => "for-rent",
        }
    }
}

impl fmt::Display for ListingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListingKind::ForSale => write!(f, "For Sale"),
            ListingKind::ForRent => write!(f, "For Rent"),
        }
    }
}

impl FromStr for ListingKind {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "forsale" | "sale" => Ok(ListingKind::ForSale),
            "forrent" | "rent" => Ok(ListingKind::ForRent),
            _ => Err(QueryError::UnknownListingKind(s.to_string())),
        }
    }
}

/// Kind of building being listed
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum PropertyCategory {
    House,
    Apartment,
    Condo,
    Villa,
    Commercial,
}

impl PropertyCategory {
    pub const ALL: [PropertyCategory; 5] = [
        PropertyCategory::House,
        PropertyCategory::Apartment,
        PropertyCategory::Condo,
        PropertyCategory::Villa,
        PropertyCategory::Commercial,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyCategory::House => "house",
            PropertyCategory::Apartment => "apartment",
            PropertyCategory::Condo => "condo",
            PropertyCategory::Villa => "villa",
            PropertyCategory::Commercial => "commercial",
        }
    }
}

impl fmt::Display for PropertyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PropertyCategory::House => "House",
            PropertyCategory::Apartment => "Apartment",
            PropertyCategory::Condo => "Condo",
            PropertyCategory::Villa => "Villa",
            PropertyCategory::Commercial => "Commercial",
        };
        write!(f, "{}", label)
    }
}

impl FromStr for PropertyCategory {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = normalize_token(s);
        PropertyCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == token)
            .ok_or_else(|| QueryError::UnknownCategory(s.to_string()))
    }
}

/// Street address and city of a property
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Location {
    pub address: String,
    pub city: String,
}

impl Location {
    /// Single-line location text, searched as one string
    pub fn text(&self) -> String {
        format!("{}, {}", self.address, self.city)
    }
}

/// Core property data model
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PropertyRecord {
    pub id: String,
    pub title: String,
    /// Whole US dollars; monthly rent for rentals
    pub price: u64,
    pub listing_kind: ListingKind,
    pub category: PropertyCategory,
    pub location: Location,
    pub bedrooms: u32,
    pub bathrooms: f32,
    pub area_sqft: u32,
    pub year_built: u16,
    pub featured: bool,
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
}

impl PropertyRecord {
    /// Price as shown on listing cards, e.g. `$4,500/mo`
    pub fn display_price(&self) -> String {
        format_price(self.price, self.listing_kind)
    }

    /// Check the per-record invariants
    pub fn validate(&self) -> Result<(), CatalogError> {
        let invalid = |reason: &str| CatalogError::InvalidRecord {
            id: self.id.clone(),
            reason: reason.to_string(),
        };

        if self.id.trim().is_empty() {
            return Err(invalid("id is empty"));
        }
        if self.title.trim().is_empty() {
            return Err(invalid("title is empty"));
        }
        if self.area_sqft == 0 {
            return Err(invalid("area must be positive"));
        }
        if self.year_built == 0 {
            return Err(invalid("year built must be positive"));
        }
        if !self.bathrooms.is_finite() || self.bathrooms < 0.0 {
            return Err(invalid("bathroom count must be a non-negative number"));
        }

        Ok(())
    }
}

/// Validate every record and reject duplicate ids within one snapshot
pub fn validate_catalog(catalog: &[PropertyRecord]) -> Result<(), CatalogError> {
    let mut seen = HashSet::with_capacity(catalog.len());

    for record in catalog {
        record.validate()?;
        if !seen.insert(record.id.as_str()) {
            return Err(CatalogError::DuplicateId(record.id.clone()));
        }
    }

    Ok(())
}

/// Format a whole-dollar amount as USD with thousands separators
pub fn format_price(price: u64, kind: ListingKind) -> String {
    let digits = price.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("${}{}", grouped, kind.price_suffix())
}

/// Lowercase and drop separators so "For Sale", "for-sale" and "forSale" agree
pub(crate) fn normalize_token(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}
