use serde::Serialize;
use std::cmp::Reverse;
use std::ops::RangeInclusive;
use tracing::debug;

use crate::models::PropertyRecord;
use crate::query::types::{QuerySpec, SortKey};

/// One page of matching listings plus the totals needed to render pagination
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct QueryResult<'a> {
    pub items: Vec<&'a PropertyRecord>,
    /// Records passing every filter, before pagination
    pub total_matched: usize,
    /// Never less than 1, even with no matches
    pub total_pages: usize,
    /// Requested page after clamping into `1..=total_pages`
    pub current_page: usize,
}

impl QueryResult<'_> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Page numbers for the pagination control
    pub fn page_numbers(&self) -> RangeInclusive<usize> {
        1..=self.total_pages
    }
}

/// Lowercased filter values, computed once per query
struct Matcher<'s> {
    spec: &'s QuerySpec,
    needle: String,
    city: Option<String>,
}

impl<'s> Matcher<'s> {
    fn new(spec: &'s QuerySpec) -> Self {
        Self {
            spec,
            needle: spec.search_text().to_lowercase(),
            city: spec.city().map(str::to_lowercase),
        }
    }

    fn matches(&self, record: &PropertyRecord) -> bool {
        let spec = self.spec;

        let matches_search = self.needle.is_empty()
            || record.title.to_lowercase().contains(&self.needle)
            || record.location.text().to_lowercase().contains(&self.needle)
            || record.description.to_lowercase().contains(&self.needle);

        let matches_kind = spec
            .listing_kind()
            .map_or(true, |kind| kind == record.listing_kind);
        let matches_category = spec
            .category()
            .map_or(true, |category| category == record.category);
        let matches_city = self
            .city
            .as_deref()
            .map_or(true, |city| record.location.city.to_lowercase() == city);

        let matches_price = record.price >= spec.min_price()
            && spec.max_price().map_or(true, |max| record.price <= max);

        // Zero-bedroom listings only survive a zero minimum
        let matches_rooms = record.bedrooms >= spec.min_bedrooms()
            && record.bathrooms >= spec.min_bathrooms();
        let matches_area = record.area_sqft >= spec.min_area_sqft();

        matches_search
            && matches_kind
            && matches_category
            && matches_city
            && matches_price
            && matches_rooms
            && matches_area
    }
}

/// Whether `record` passes every filter in `spec`
pub fn matches(spec: &QuerySpec, record: &PropertyRecord) -> bool {
    Matcher::new(spec).matches(record)
}

/// Stable sort: records with equal keys keep their incoming order
fn sort_records(records: &mut [&PropertyRecord], sort: SortKey) {
    match sort {
        SortKey::Featured => records.sort_by_key(|r| Reverse(r.featured)),
        SortKey::PriceAscending => records.sort_by_key(|r| r.price),
        SortKey::PriceDescending => records.sort_by_key(|r| Reverse(r.price)),
        SortKey::Newest => records.sort_by_key(|r| Reverse(r.year_built)),
        SortKey::Oldest => records.sort_by_key(|r| r.year_built),
        SortKey::AreaAscending => records.sort_by_key(|r| r.area_sqft),
        SortKey::AreaDescending => records.sort_by_key(|r| Reverse(r.area_sqft)),
    }
}

/// Run a query against a catalog snapshot
///
/// Filters with the conjunction of every predicate in `spec`, sorts stably by
/// the spec's sort key, then cuts out the requested page. A page outside
/// `1..=total_pages` is clamped rather than rejected, and an empty catalog
/// yields one empty page. Neither input is modified.
pub fn execute<'a>(catalog: &'a [PropertyRecord], spec: &QuerySpec) -> QueryResult<'a> {
    let matcher = Matcher::new(spec);
    let mut matched: Vec<&PropertyRecord> =
        catalog.iter().filter(|r| matcher.matches(r)).collect();

    sort_records(&mut matched, spec.sort());

    let page_size = spec.page_size().get();
    let total_matched = matched.len();
    let total_pages = total_matched.div_ceil(page_size).max(1);
    let current_page = spec.page().clamp(1, total_pages);

    let start = ((current_page - 1) * page_size).min(total_matched);
    let end = start.saturating_add(page_size).min(total_matched);
    let items = matched[start..end].to_vec();

    debug!(
        catalog = catalog.len(),
        matched = total_matched,
        page = current_page,
        pages = total_pages,
        sort = %spec.sort(),
        "Executed property query"
    );

    QueryResult {
        items,
        total_matched,
        total_pages,
        current_page,
    }
}
