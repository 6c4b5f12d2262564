use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt::Write;

use crate::models::PropertyRecord;
use crate::query::{Favorites, QueryResult, QuerySpec};

/// A query and its result page, as saved to disk
#[derive(Debug, Serialize)]
pub struct QuerySnapshot<'a> {
    pub generated_at: DateTime<Utc>,
    pub source: &'a str,
    pub spec: &'a QuerySpec,
    pub result: &'a QueryResult<'a>,
}

impl<'a> QuerySnapshot<'a> {
    pub fn new(source: &'a str, spec: &'a QuerySpec, result: &'a QueryResult<'a>) -> Self {
        Self {
            generated_at: Utc::now(),
            source,
            spec,
            result,
        }
    }
}

/// "Showing X of Y properties" line under the filters
pub fn summary_line(result: &QueryResult<'_>) -> String {
    format!(
        "Showing {} of {} properties (page {} of {})",
        result.items.len(),
        result.total_matched,
        result.current_page,
        result.total_pages
    )
}

fn render_card(out: &mut String, rank: usize, property: &PropertyRecord, favorite: bool) {
    let marker = if favorite { " ★" } else { "" };
    let _ = writeln!(
        out,
        "{}. {} ({}){}",
        rank, property.title, property.display_price(), marker
    );
    let _ = writeln!(out, "   {}", property.location.text());
    let _ = writeln!(
        out,
        "   {} · {} · {} bd, {} ba, {} sqft, built {}",
        property.listing_kind,
        property.category,
        property.bedrooms,
        property.bathrooms,
        property.area_sqft,
        property.year_built
    );
    if !property.features.is_empty() {
        let _ = writeln!(out, "   Features: {}", property.features.join(", "));
    }
    let _ = writeln!(out, "   ID: {}", property.id);
}

/// Plain-text rendering of one result page, numbered from the page offset
pub fn render_page(result: &QueryResult<'_>, page_size: usize, favorites: &Favorites) -> String {
    let mut out = String::new();

    if result.is_empty() {
        out.push_str("No properties match your filters.\n");
    } else {
        let offset = (result.current_page - 1) * page_size;
        for (i, property) in result.items.iter().enumerate() {
            render_card(&mut out, offset + i + 1, property, favorites.contains(&property.id));
            out.push('\n');
        }
    }

    out.push_str(&summary_line(result));
    out.push('\n');
    out
}
