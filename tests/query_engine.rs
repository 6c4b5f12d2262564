use property_finder::query::{execute, matches, QueryResult, QuerySpec, SearchProfile, SortKey};
use property_finder::{ListingKind, Location, PropertyCategory, PropertyRecord};
use std::collections::HashSet;

struct Listing {
    id: &'static str,
    title: &'static str,
    category: PropertyCategory,
    kind: ListingKind,
    price: u64,
    bedrooms: u32,
    bathrooms: f32,
    area_sqft: u32,
    year_built: u16,
    featured: bool,
    city: &'static str,
    description: &'static str,
}

impl From<Listing> for PropertyRecord {
    fn from(l: Listing) -> Self {
        PropertyRecord {
            id: l.id.to_string(),
            title: l.title.to_string(),
            price: l.price,
            listing_kind: l.kind,
            category: l.category,
            location: Location {
                address: format!("{} Main Street", l.id.len() * 100),
                city: l.city.to_string(),
            },
            bedrooms: l.bedrooms,
            bathrooms: l.bathrooms,
            area_sqft: l.area_sqft,
            year_built: l.year_built,
            featured: l.featured,
            description: l.description.to_string(),
            features: vec![],
        }
    }
}

/// Eight listings, five for sale and three for rent; a4 and a8 share a price
fn catalog() -> Vec<PropertyRecord> {
    use ListingKind::*;
    use PropertyCategory::*;

    vec![
        Listing {
            id: "a1",
            title: "Modern Luxury Villa",
            category: Villa,
            kind: ForSale,
            price: 1_250_000,
            bedrooms: 5,
            bathrooms: 4.0,
            area_sqft: 3200,
            year_built: 2020,
            featured: true,
            city: "Beverly Hills",
            description: "Panoramic views and an infinity pool.",
        },
        Listing {
            id: "a2",
            title: "Downtown Penthouse",
            category: Apartment,
            kind: ForSale,
            price: 890_000,
            bedrooms: 3,
            bathrooms: 2.0,
            area_sqft: 1800,
            year_built: 2018,
            featured: true,
            city: "Los Angeles",
            description: "Floor-to-ceiling windows with a private terrace.",
        },
        Listing {
            id: "a3",
            title: "Waterfront Apartment",
            category: Apartment,
            kind: ForRent,
            price: 4_500,
            bedrooms: 2,
            bathrooms: 2.0,
            area_sqft: 1200,
            year_built: 2019,
            featured: true,
            city: "Miami",
            description: "Direct water views and building amenities.",
        },
        Listing {
            id: "a4",
            title: "Suburban Family Home",
            category: House,
            kind: ForSale,
            price: 750_000,
            bedrooms: 4,
            bathrooms: 3.0,
            area_sqft: 2400,
            year_built: 2015,
            featured: false,
            city: "Chicago",
            description: "Large backyard and a renovated kitchen.",
        },
        Listing {
            id: "a5",
            title: "Commercial Office Space",
            category: Commercial,
            kind: ForSale,
            price: 1_200_000,
            bedrooms: 0,
            bathrooms: 2.0,
            area_sqft: 3000,
            year_built: 2008,
            featured: false,
            city: "New York",
            description: "Prime business district with parking.",
        },
        Listing {
            id: "a6",
            title: "Cozy Studio Apartment",
            category: Apartment,
            kind: ForRent,
            price: 1_800,
            bedrooms: 1,
            bathrooms: 1.0,
            area_sqft: 600,
            year_built: 1998,
            featured: false,
            city: "Boston",
            description: "Near the university campus, updated appliances.",
        },
        Listing {
            id: "a7",
            title: "Lakefront Condo",
            category: Condo,
            kind: ForRent,
            price: 2_600,
            bedrooms: 2,
            bathrooms: 2.0,
            area_sqft: 1100,
            year_built: 2012,
            featured: false,
            city: "Seattle",
            description: "Close to shopping and dining.",
        },
        Listing {
            id: "a8",
            title: "Historic Townhouse",
            category: House,
            kind: ForSale,
            price: 750_000,
            bedrooms: 3,
            bathrooms: 2.5,
            area_sqft: 1850,
            year_built: 1905,
            featured: false,
            city: "Philadelphia",
            description: "Restored with original features.",
        },
    ]
    .into_iter()
    .map(PropertyRecord::from)
    .collect()
}

/// Field-by-field check of one record against a spec, written out longhand
fn satisfies(spec: &QuerySpec, record: &PropertyRecord) -> bool {
    let needle = spec.search_text().to_lowercase();
    let location = format!("{}, {}", record.location.address, record.location.city);
    let text_hit = needle.is_empty()
        || record.title.to_lowercase().contains(&needle)
        || location.to_lowercase().contains(&needle)
        || record.description.to_lowercase().contains(&needle);

    let kind_ok = match spec.listing_kind() {
        Some(kind) => record.listing_kind == kind,
        None => true,
    };
    let category_ok = match spec.category() {
        Some(category) => record.category == category,
        None => true,
    };
    let city_ok = match spec.city() {
        Some(city) => record.location.city.eq_ignore_ascii_case(city),
        None => true,
    };
    let max_ok = match spec.max_price() {
        Some(max) => record.price <= max,
        None => true,
    };

    text_hit
        && kind_ok
        && category_ok
        && city_ok
        && record.price >= spec.min_price()
        && max_ok
        && record.bedrooms >= spec.min_bedrooms()
        && record.bathrooms >= spec.min_bathrooms()
        && record.area_sqft >= spec.min_area_sqft()
}

fn ids(result: &QueryResult<'_>) -> Vec<String> {
    result.items.iter().map(|r| r.id.clone()).collect()
}

fn sample_specs() -> Vec<QuerySpec> {
    let base = QuerySpec::default();
    vec![
        base.clone(),
        base.clone().with_listing_kind(Some(ListingKind::ForSale)),
        base.clone().with_category(Some(PropertyCategory::Apartment)),
        base.clone().with_search_text("APARTMENT"),
        base.clone().with_price_range(2_000, Some(900_000)),
        base.clone().with_min_bedrooms(1).with_min_bathrooms(2.0),
        base.clone().with_min_area(1500).with_sort(SortKey::AreaAscending),
        base.clone().with_city(Some("miami".to_string())),
        base.with_min_bedrooms(3).with_listing_kind(Some(ListingKind::ForRent)),
    ]
}

#[test]
fn test_for_sale_filter() {
    let catalog = catalog();
    let spec = QuerySpec::default().with_listing_kind(Some(ListingKind::ForSale));
    let result = execute(&catalog, &spec);

    assert_eq!(result.total_matched, 5);
    assert_eq!(result.total_pages, 1);
    assert_eq!(result.items.len(), 5);
    assert!(result.items.iter().all(|r| r.listing_kind == ListingKind::ForSale));
}

#[test]
fn test_search_text_case_insensitive() {
    let catalog = catalog();
    let result = execute(&catalog, &QuerySpec::default().with_search_text("villa"));

    assert_eq!(result.items.len(), 1);
    assert_eq!(result.items[0].category, PropertyCategory::Villa);
}

#[test]
fn test_price_descending_second_page() {
    let catalog = catalog();
    let spec = QuerySpec::default().with_sort(SortKey::PriceDescending).with_page(2);
    let result = execute(&catalog, &spec);

    assert_eq!(result.total_pages, 2);
    assert_eq!(result.current_page, 2);
    assert_eq!(ids(&result), vec!["a7", "a6"]);
}

#[test]
fn test_unreachable_minimum_is_empty_not_error() {
    let catalog = catalog();
    let result = execute(&catalog, &QuerySpec::default().with_min_bedrooms(10));

    assert_eq!(result.total_matched, 0);
    assert_eq!(result.total_pages, 1);
    assert_eq!(result.current_page, 1);
    assert!(result.items.is_empty());
}

#[test]
fn test_page_past_end_clamps_to_last() {
    let catalog = catalog();
    let last = execute(&catalog, &QuerySpec::default().with_page(2));
    let beyond = execute(&catalog, &QuerySpec::default().with_page(99));

    assert_eq!(beyond.current_page, 2);
    assert_eq!(beyond, last);
}

#[test]
fn test_page_zero_clamps_to_first() {
    let catalog = catalog();
    let first = execute(&catalog, &QuerySpec::default().with_page(1));
    let zero = execute(&catalog, &QuerySpec::default().with_page(0));

    assert_eq!(zero.current_page, 1);
    assert_eq!(zero, first);
}

#[test]
fn test_equal_prices_keep_catalog_order() {
    let catalog = catalog();
    let ascending = execute(
        &catalog,
        &QuerySpec::default().with_sort(SortKey::PriceAscending),
    );
    assert_eq!(ids(&ascending), vec!["a6", "a7", "a3", "a4", "a8", "a2"]);

    let descending = execute(
        &catalog,
        &QuerySpec::default().with_sort(SortKey::PriceDescending),
    );
    assert_eq!(ids(&descending), vec!["a1", "a5", "a2", "a4", "a8", "a3"]);
}

#[test]
fn test_featured_sort_is_stable() {
    let mut catalog = catalog();
    // Push a1 and a2 behind the unfeatured listings
    catalog.rotate_left(2);
    assert_eq!(catalog[0].id, "a3");

    let spec = QuerySpec::default().with_page_size(8).unwrap();
    let result = execute(&catalog, &spec);

    assert_eq!(ids(&result), vec!["a3", "a1", "a2", "a4", "a5", "a6", "a7", "a8"]);
}

#[test]
fn test_year_and_area_orderings() {
    let catalog = catalog();
    let spec = QuerySpec::for_profile(SearchProfile::Search).with_page_size(8).unwrap();

    let newest = execute(&catalog, &spec);
    assert_eq!(ids(&newest), vec!["a1", "a3", "a2", "a4", "a7", "a5", "a6", "a8"]);

    let oldest = execute(&catalog, &spec.clone().with_sort(SortKey::Oldest));
    assert_eq!(ids(&oldest), vec!["a8", "a6", "a5", "a7", "a4", "a2", "a3", "a1"]);

    let largest = execute(&catalog, &spec.clone().with_sort(SortKey::AreaDescending));
    assert_eq!(ids(&largest), vec!["a1", "a5", "a4", "a8", "a2", "a3", "a7", "a6"]);

    let smallest = execute(&catalog, &spec.with_sort(SortKey::AreaAscending));
    assert_eq!(ids(&smallest), vec!["a6", "a7", "a3", "a2", "a8", "a4", "a5", "a1"]);
}

#[test]
fn test_zero_bedroom_listings_need_zero_minimum() {
    let catalog = catalog();
    let commercial = QuerySpec::default().with_category(Some(PropertyCategory::Commercial));

    assert_eq!(execute(&catalog, &commercial).total_matched, 1);
    assert_eq!(execute(&catalog, &commercial.with_min_bedrooms(1)).total_matched, 0);
}

#[test]
fn test_execute_is_idempotent() {
    let catalog = catalog();
    let before = catalog.clone();

    for spec in sample_specs() {
        assert_eq!(execute(&catalog, &spec), execute(&catalog, &spec));
    }
    assert_eq!(catalog, before);
}

#[test]
fn test_results_satisfy_every_filter() {
    let catalog = catalog();

    for spec in sample_specs() {
        let all = spec.clone().with_page_size(catalog.len()).unwrap();
        let result = execute(&catalog, &all);
        let matched: HashSet<&str> = result.items.iter().map(|r| r.id.as_str()).collect();

        for record in &catalog {
            let expected = satisfies(&spec, record);
            assert_eq!(
                matched.contains(record.id.as_str()),
                expected,
                "record {} with spec {:?}",
                record.id,
                spec
            );
            assert_eq!(matches(&spec, record), expected);
        }
        assert_eq!(
            result.total_matched,
            catalog.iter().filter(|r| satisfies(&spec, r)).count()
        );
    }
}

#[test]
fn test_totals_independent_of_page() {
    let catalog = catalog();

    for spec in sample_specs() {
        for page_size in 1..=9 {
            let sized = spec.clone().with_page_size(page_size).unwrap();
            let first = execute(&catalog, &sized);
            let later = execute(&catalog, &sized.clone().with_page(3));

            assert_eq!(first.total_matched, later.total_matched);
            let expected_pages = first.total_matched.div_ceil(page_size).max(1);
            assert_eq!(first.total_pages, expected_pages);
            assert!(first.items.len() <= page_size);
        }
    }
}

#[test]
fn test_pages_cover_matches_exactly_once() {
    let catalog = catalog();

    for spec in sample_specs() {
        for page_size in [1, 3, 6] {
            let sized = spec.clone().with_page_size(page_size).unwrap();
            let total_pages = execute(&catalog, &sized).total_pages;

            let mut seen = Vec::new();
            for page in 1..=total_pages {
                let result = execute(&catalog, &sized.clone().with_page(page));
                seen.extend(result.items.iter().map(|r| r.id.clone()));
            }

            let unique: HashSet<&String> = seen.iter().collect();
            assert_eq!(unique.len(), seen.len(), "duplicate ids across pages");

            let expected: HashSet<String> = catalog
                .iter()
                .filter(|r| satisfies(&spec, r))
                .map(|r| r.id.clone())
                .collect();
            assert_eq!(unique, expected.iter().collect::<HashSet<_>>());
        }
    }
}

#[test]
fn test_lower_bounds_are_inclusive() {
    let catalog = catalog();

    // a8 sits exactly on 1850 sqft
    let area = execute(&catalog, &QuerySpec::default().with_min_area(1850));
    assert_eq!(ids(&area), vec!["a1", "a4", "a5", "a8"]);

    // a4 has exactly four bedrooms
    let beds = execute(&catalog, &QuerySpec::default().with_min_bedrooms(4));
    assert_eq!(ids(&beds), vec!["a1", "a4"]);

    let baths = execute(&catalog, &QuerySpec::default().with_min_bathrooms(2.5));
    assert_eq!(ids(&baths), vec!["a1", "a4", "a8"]);
}

#[test]
fn test_price_bounds_are_inclusive() {
    let catalog = catalog();
    let spec = QuerySpec::default().with_price_range(4_500, Some(750_000));
    assert_eq!(ids(&execute(&catalog, &spec)), vec!["a3", "a4", "a8"]);
}

#[test]
fn test_search_hits_description_only() {
    let catalog = catalog();
    let result = execute(&catalog, &QuerySpec::default().with_search_text("Kitchen"));

    assert_eq!(ids(&result), vec!["a4"]);
    assert!(!result.items[0].title.to_lowercase().contains("kitchen"));
}

#[test]
fn test_search_hits_location_only() {
    let catalog = catalog();
    let result = execute(&catalog, &QuerySpec::default().with_search_text("philadelphia"));
    assert_eq!(ids(&result), vec!["a8"]);
}
