use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

use crate::models::{normalize_token, ListingKind, PropertyCategory};
use crate::query::QueryError;

/// Listings shown per page across the site
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(6) {
    Some(size) => size,
    None => unreachable!(),
};

/// Result ordering
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Featured listings first, otherwise catalog order
    Featured,
    PriceAscending,
    PriceDescending,
    /// Most recently built first
    Newest,
    Oldest,
    AreaAscending,
    AreaDescending,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SortKey::Featured => "featured",
            SortKey::PriceAscending => "price-ascending",
            SortKey::PriceDescending => "price-descending",
            SortKey::Newest => "newest",
            SortKey::Oldest => "oldest",
            SortKey::AreaAscending => "area-ascending",
            SortKey::AreaDescending => "area-descending",
        };
        write!(f, "{}", label)
    }
}

impl FromStr for SortKey {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Short names are the ones the listing and search pages submitted
        match normalize_token(s).as_str() {
            "featured" => Ok(SortKey::Featured),
            "priceascending" | "priceasc" => Ok(SortKey::PriceAscending),
            "pricedescending" | "pricedesc" => Ok(SortKey::PriceDescending),
            "newest" => Ok(SortKey::Newest),
            "oldest" => Ok(SortKey::Oldest),
            "areaascending" | "areaasc" | "sizeasc" => Ok(SortKey::AreaAscending),
            "areadescending" | "areadesc" | "sizedesc" => Ok(SortKey::AreaDescending),
            _ => Err(QueryError::UnknownSortKey(s.to_string())),
        }
    }
}

/// Which page a query originates from; decides the defaults
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SearchProfile {
    /// Property listings page, featured first
    #[default]
    Listings,
    /// Search page, newest first
    Search,
}

impl SearchProfile {
    pub fn default_sort(&self) -> SortKey {
        match self {
            SearchProfile::Listings => SortKey::Featured,
            SearchProfile::Search => SortKey::Newest,
        }
    }
}

impl FromStr for SearchProfile {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "listings" | "properties" => Ok(SearchProfile::Listings),
            "search" => Ok(SearchProfile::Search),
            _ => Err(QueryError::UnknownProfile(s.to_string())),
        }
    }
}

/// A canned price range offered by the listings page filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricePreset {
    pub slug: &'static str,
    pub label: &'static str,
    pub min: u64,
    pub max: u64,
}

const fn preset(slug: &'static str, label: &'static str, min: u64, max: u64) -> PricePreset {
    PricePreset {
        slug,
        label,
        min,
        max,
    }
}

pub const PRICE_PRESETS: [PricePreset; 8] = [
    preset("any", "Any Price", 0, 10_000_000),
    preset("under-500k", "Under $500,000", 0, 500_000),
    preset("500k-750k", "$500,000 - $750,000", 500_000, 750_000),
    preset("750k-1m", "$750,000 - $1,000,000", 750_000, 1_000_000),
    preset("over-1m", "Over $1,000,000", 1_000_000, 10_000_000),
    preset("rent-under-2k", "Under $2,000/mo", 0, 2_000),
    preset("rent-2k-5k", "$2,000 - $5,000/mo", 2_000, 5_000),
    preset("rent-over-5k", "Over $5,000/mo", 5_000, 50_000),
];

impl PricePreset {
    pub fn from_slug(slug: &str) -> Result<&'static PricePreset, QueryError> {
        PRICE_PRESETS
            .iter()
            .find(|preset| preset.slug.eq_ignore_ascii_case(slug.trim()))
            .ok_or_else(|| QueryError::UnknownPricePreset(slug.to_string()))
    }
}

/// Parse a filter value where "any"/"all" (or an "All ..." label) means no constraint
pub fn parse_filter<T>(s: &str) -> Result<Option<T>, T::Err>
where
    T: FromStr,
{
    let token = normalize_token(s);
    if token.is_empty() || token == "any" || token.starts_with("all") {
        return Ok(None);
    }
    s.parse().map(Some)
}

/// Filter, sort and pagination parameters for one query
///
/// Specs are values: every `with_*` method consumes the spec and returns a new
/// one. Any change other than [`QuerySpec::with_page`] sends the query back to
/// page 1 so a stale page number never outlives the result set it came from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "RawQuerySpec")]
pub struct QuerySpec {
    profile: SearchProfile,
    search_text: String,
    listing_kind: Option<ListingKind>,
    category: Option<PropertyCategory>,
    city: Option<String>,
    min_price: u64,
    max_price: Option<u64>,
    min_bedrooms: u32,
    min_bathrooms: f32,
    min_area_sqft: u32,
    sort: SortKey,
    page: usize,
    page_size: NonZeroUsize,
}

/// Deserialized form of a [`QuerySpec`], normalized through the `with_*` setters
#[derive(Deserialize)]
struct RawQuerySpec {
    #[serde(default)]
    profile: SearchProfile,
    #[serde(default)]
    search_text: String,
    #[serde(default)]
    listing_kind: Option<ListingKind>,
    #[serde(default)]
    category: Option<PropertyCategory>,
    #[serde(default)]
    city: Option<String>,
    #[serde(default)]
    min_price: u64,
    #[serde(default)]
    max_price: Option<u64>,
    #[serde(default)]
    min_bedrooms: u32,
    #[serde(default)]
    min_bathrooms: f32,
    #[serde(default)]
    min_area_sqft: u32,
    sort: Option<SortKey>,
    page: Option<usize>,
    page_size: Option<usize>,
}

impl TryFrom<RawQuerySpec> for QuerySpec {
    type Error = QueryError;

    fn try_from(raw: RawQuerySpec) -> Result<Self, Self::Error> {
        let spec = QuerySpec::for_profile(raw.profile)
            .with_page_size(raw.page_size.unwrap_or(DEFAULT_PAGE_SIZE.get()))?
            .with_search_text(raw.search_text)
            .with_listing_kind(raw.listing_kind)
            .with_category(raw.category)
            .with_city(raw.city)
            .with_price_range(raw.min_price, raw.max_price)
            .with_min_bedrooms(raw.min_bedrooms)
            .with_min_bathrooms(raw.min_bathrooms)
            .with_min_area(raw.min_area_sqft);

        let spec = match raw.sort {
            Some(sort) => spec.with_sort(sort),
            None => spec,
        };

        Ok(spec.with_page(raw.page.unwrap_or(1)))
    }
}

impl Default for QuerySpec {
    fn default() -> Self {
        Self::for_profile(SearchProfile::default())
    }
}

impl QuerySpec {
    /// Unfiltered first page with the profile's default ordering
    pub fn for_profile(profile: SearchProfile) -> Self {
        Self {
            profile,
            search_text: String::new(),
            listing_kind: None,
            category: None,
            city: None,
            min_price: 0,
            max_price: None,
            min_bedrooms: 0,
            min_bathrooms: 0.0,
            min_area_sqft: 0,
            sort: profile.default_sort(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Clear every filter back to the profile defaults, keeping the page size
    pub fn reset(&self) -> Self {
        Self {
            page_size: self.page_size,
            ..Self::for_profile(self.profile)
        }
    }

    /// Matched as-is (case-insensitively), so surrounding spaces are significant
    pub fn with_search_text(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self.first_page()
    }

    pub fn with_listing_kind(mut self, kind: Option<ListingKind>) -> Self {
        self.listing_kind = kind;
        self.first_page()
    }

    pub fn with_category(mut self, category: Option<PropertyCategory>) -> Self {
        self.category = category;
        self.first_page()
    }

    pub fn with_city(mut self, city: Option<String>) -> Self {
        self.city = city.map(|c| c.trim().to_string()).filter(|c| !c.is_empty());
        self.first_page()
    }

    /// Inclusive bounds; `None` leaves the top open. An inverted range is kept
    /// as given and simply matches nothing.
    pub fn with_price_range(mut self, min: u64, max: Option<u64>) -> Self {
        self.min_price = min;
        self.max_price = max;
        self.first_page()
    }

    pub fn with_price_preset(self, preset: &PricePreset) -> Self {
        self.with_price_range(preset.min, Some(preset.max))
    }

    pub fn with_min_bedrooms(mut self, bedrooms: u32) -> Self {
        self.min_bedrooms = bedrooms;
        self.first_page()
    }

    pub fn with_min_bathrooms(mut self, bathrooms: f32) -> Self {
        self.min_bathrooms = if bathrooms.is_finite() { bathrooms.max(0.0) } else { 0.0 };
        self.first_page()
    }

    pub fn with_min_area(mut self, area_sqft: u32) -> Self {
        self.min_area_sqft = area_sqft;
        self.first_page()
    }

    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self.first_page()
    }

    pub fn with_page_size(mut self, page_size: usize) -> Result<Self, QueryError> {
        self.page_size =
            NonZeroUsize::new(page_size).ok_or(QueryError::InvalidPageSize(page_size))?;
        Ok(self.first_page())
    }

    /// Request a page; out-of-range values are clamped when the query runs
    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    fn first_page(mut self) -> Self {
        self.page = 1;
        self
    }

    pub fn profile(&self) -> SearchProfile {
        self.profile
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn listing_kind(&self) -> Option<ListingKind> {
        self.listing_kind
    }

    pub fn category(&self) -> Option<PropertyCategory> {
        self.category
    }

    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    pub fn min_price(&self) -> u64 {
        self.min_price
    }

    pub fn max_price(&self) -> Option<u64> {
        self.max_price
    }

    pub fn min_bedrooms(&self) -> u32 {
        self.min_bedrooms
    }

    pub fn min_bathrooms(&self) -> f32 {
        self.min_bathrooms
    }

    pub fn min_area_sqft(&self) -> u32 {
        self.min_area_sqft
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }
}
